mod model;
mod server;

use std::sync::Arc;

use serenity::http::Http;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{
    config::Config,
    error::AppError,
    service::discord::{DiscordAuditLog, GuildMemberDirectory},
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(
        &db,
        config.discord_redirect_url.starts_with("https://"),
    )
    .await?;
    let http_client = startup::setup_reqwest_client()?;
    let oauth_client = startup::setup_oauth_client(&config)?;

    let discord_http = Arc::new(Http::new(&config.discord_bot_token));
    if config.discord_audit_channel_id.is_none() {
        tracing::warn!("DISCORD_AUDIT_CHANNEL_ID not set, audit entries are only logged locally");
    }

    let state = AppState::new(
        db,
        http_client,
        oauth_client,
        Arc::new(GuildMemberDirectory::new(
            discord_http.clone(),
            config.discord_guild_id,
        )),
        Arc::new(DiscordAuditLog::new(
            discord_http,
            config.discord_audit_channel_id,
        )),
    );

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = server::router::router()
        .with_state(state)
        .layer(session)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.server_addr)
        .await
        .map_err(|e| AppError::InternalError(format!("failed to bind {}: {}", config.server_addr, e)))?;

    tracing::info!("Listening on {}", config.server_addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::InternalError(format!("server error: {}", e)))?;

    Ok(())
}
