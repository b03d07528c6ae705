//! OAuth2 login with Discord.
//!
//! An employee signs in with the Discord account linked to their record; there is no
//! separate user table.

use sea_orm::DatabaseConnection;

use crate::server::state::OAuth2Client;

pub mod callback;
pub mod login;

/// Discord user endpoint queried with the user's access token.
const DISCORD_USER_URL: &str = "https://discord.com/api/users/@me";

pub struct DiscordAuthService<'a> {
    pub db: &'a DatabaseConnection,
    pub http_client: &'a reqwest::Client,
    pub oauth_client: &'a OAuth2Client,
}

impl<'a> DiscordAuthService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
        }
    }
}
