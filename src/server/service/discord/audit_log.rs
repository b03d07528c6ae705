use serenity::{
    all::{ChannelId, CreateMessage},
    async_trait,
    http::Http,
};
use std::sync::Arc;

use crate::server::{error::AppError, model::discord::AuditLogEntry};

/// Sink for audit entries describing sensitive employee changes.
#[async_trait]
pub trait AuditLog: Send + Sync {
    async fn log(&self, entry: AuditLogEntry) -> Result<(), AppError>;
}

/// Posts audit entries to a Discord channel.
///
/// Without a configured channel, entries are only written to the application log.
pub struct DiscordAuditLog {
    http: Arc<Http>,
    channel_id: Option<ChannelId>,
}

impl DiscordAuditLog {
    pub fn new(http: Arc<Http>, channel_id: Option<u64>) -> Self {
        Self {
            http,
            channel_id: channel_id.map(ChannelId::new),
        }
    }
}

#[async_trait]
impl AuditLog for DiscordAuditLog {
    async fn log(&self, entry: AuditLogEntry) -> Result<(), AppError> {
        let content = entry.render();

        let Some(channel_id) = self.channel_id else {
            tracing::info!("Audit log: {}", content);
            return Ok(());
        };

        channel_id
            .send_message(&self.http, CreateMessage::new().content(content))
            .await?;

        Ok(())
    }
}

/// Records an audit entry, logging and discarding any failure.
///
/// Audit logging runs after the change it describes has been committed, so a failure
/// here must not turn a successful request into an error.
pub async fn log_best_effort(audit_log: &dyn AuditLog, entry: AuditLogEntry) {
    let log_type = entry.log_type.clone();

    if let Err(e) = audit_log.log(entry).await {
        tracing::error!("Failed to write audit log entry {}: {}", log_type, e);
    }
}
