use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    state::OAuth2Client,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session store in the application database and its tables.
///
/// Sessions expire after seven days of inactivity and the session cookie is only sent
/// over HTTPS when `secure` is set.
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Session layer backed by the Sqlite store
/// - `Err(AppError::DbErr)` - Failed to create the session table
pub async fn connect_to_session(
    db: &sea_orm::DatabaseConnection,
    secure: bool,
) -> Result<
    tower_sessions::SessionManagerLayer<tower_sessions_sqlx_store::SqliteStore>,
    AppError,
> {
    use time::Duration;
    use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
    use tower_sessions_sqlx_store::SqliteStore;

    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store
        .migrate()
        .await
        .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(secure)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(session_layer)
}

/// Builds the HTTP client used for Discord API calls with a user's access token.
///
/// Redirects are disabled so a token is never forwarded to another host.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Builds the OAuth2 client for the Discord login flow.
///
/// # Returns
/// - `Ok(OAuth2Client)` - Client with auth, token and redirect URLs set
/// - `Err(AppError::ConfigErr(InvalidEnvVar))` - One of the configured URLs is malformed
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};

    let invalid = |name: &str| {
        let name = name.to_string();
        move |e: url::ParseError| ConfigError::InvalidEnvVar {
            name,
            reason: e.to_string(),
        }
    };

    let client = BasicClient::new(ClientId::new(config.discord_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.discord_client_secret.clone()))
        .set_auth_uri(
            AuthUrl::new(config.discord_auth_url.clone()).map_err(invalid("DISCORD_AUTH_URL"))?,
        )
        .set_token_uri(
            TokenUrl::new(config.discord_token_url.clone()).map_err(invalid("DISCORD_TOKEN_URL"))?,
        )
        .set_redirect_uri(
            RedirectUrl::new(config.discord_redirect_url.clone())
                .map_err(invalid("DISCORD_REDIRECT_URL"))?,
        );

    Ok(client)
}
