//! In-memory Discord collaborators for service and controller tests.

use serenity::async_trait;
use std::{collections::HashMap, sync::Mutex};

use crate::server::{
    error::AppError,
    model::discord::{AuditLogEntry, DiscordMember},
    service::discord::{AuditLog, DiscordDirectory},
};

/// Directory answering from a fixed username to member map.
#[derive(Default)]
pub struct FakeDirectory {
    members: HashMap<String, DiscordMember>,
    fail: bool,
}

impl FakeDirectory {
    pub fn with_member(mut self, username: &str, discord_id: &str) -> Self {
        self.members.insert(
            username.to_string(),
            DiscordMember {
                discord_id: discord_id.to_string(),
                username: username.to_string(),
            },
        );
        self
    }

    /// Directory whose every lookup fails.
    pub fn failing() -> Self {
        Self {
            members: HashMap::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl DiscordDirectory for FakeDirectory {
    async fn member_by_username(&self, username: &str) -> Result<Option<DiscordMember>, AppError> {
        if self.fail {
            return Err(AppError::InternalError("discord unavailable".to_string()));
        }
        Ok(self.members.get(username).cloned())
    }
}

/// Audit log keeping entries in memory.
#[derive(Default)]
pub struct RecordingAuditLog {
    entries: Mutex<Vec<AuditLogEntry>>,
    fail: bool,
}

impl RecordingAuditLog {
    pub fn failing() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn entries(&self) -> Vec<AuditLogEntry> {
        self.entries.lock().map(|e| e.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl AuditLog for RecordingAuditLog {
    async fn log(&self, entry: AuditLogEntry) -> Result<(), AppError> {
        if self.fail {
            return Err(AppError::InternalError("audit channel unavailable".to_string()));
        }
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(entry);
        }
        Ok(())
    }
}
