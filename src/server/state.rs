//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. It holds:
//! - Database connection pool for data persistence
//! - HTTP client and OAuth2 client for the Discord login
//! - Discord directory and audit log used by the employee workflows

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::service::discord::{AuditLog, DiscordDirectory};

/// Type alias for the OAuth2 client configured for Discord authentication.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: the connection pool and `reqwest::Client` share their
/// internals and the Discord collaborators sit behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// HTTP client for Discord API requests made with a user's access token.
    ///
    /// Configured without redirects to prevent SSRF.
    pub http_client: reqwest::Client,

    /// OAuth2 client for the Discord login flow.
    pub oauth_client: OAuth2Client,

    /// Resolves Discord usernames to guild members.
    pub discord_directory: Arc<dyn DiscordDirectory>,

    /// Receives audit entries for sensitive employee changes.
    pub audit_log: Arc<dyn AuditLog>,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        discord_directory: Arc<dyn DiscordDirectory>,
        audit_log: Arc<dyn AuditLog>,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            discord_directory,
            audit_log,
        }
    }
}
