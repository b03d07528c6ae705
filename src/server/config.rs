use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DISCORD_AUTH_URL: &str = "https://discord.com/oauth2/authorize";
const DISCORD_TOKEN_URL: &str = "https://discord.com/api/oauth2/token";

const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub server_addr: SocketAddr,

    pub discord_bot_token: String,
    pub discord_guild_id: u64,
    /// Channel receiving audit messages; audit entries are only logged locally when unset.
    pub discord_audit_channel_id: Option<u64>,

    pub discord_client_id: String,
    pub discord_client_secret: String,
    pub discord_redirect_url: String,

    pub discord_auth_url: String,
    pub discord_token_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from any variable source.
    ///
    /// # Returns
    /// - `Ok(Config)` - Every required variable present and well-formed
    /// - `Err(AppError::ConfigErr(MissingEnvVar))` - A required variable is unset or empty
    /// - `Err(AppError::ConfigErr(InvalidEnvVar))` - A variable could not be parsed
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let required = |name: &str| -> Result<String, ConfigError> {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };
        let optional = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let server_addr = optional("SERVER_ADDR").unwrap_or_else(|| DEFAULT_SERVER_ADDR.to_string());

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            server_addr: parse_var("SERVER_ADDR", &server_addr)?,
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            discord_guild_id: parse_var("DISCORD_GUILD_ID", &required("DISCORD_GUILD_ID")?)?,
            discord_audit_channel_id: optional("DISCORD_AUDIT_CHANNEL_ID")
                .map(|value| parse_var("DISCORD_AUDIT_CHANNEL_ID", &value))
                .transpose()?,
            discord_client_id: required("DISCORD_CLIENT_ID")?,
            discord_client_secret: required("DISCORD_CLIENT_SECRET")?,
            discord_redirect_url: required("DISCORD_REDIRECT_URL")?,
            discord_auth_url: DISCORD_AUTH_URL.to_string(),
            discord_token_url: DISCORD_TOKEN_URL.to_string(),
        })
    }
}

fn parse_var<T>(name: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e: T::Err| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: e.to_string(),
        })
}
