//! Discord account factory for creating linked Discord identities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test Discord accounts.
///
/// Defaults to a numeric Discord id of `"{id}"` and username `"user{id}"`.
pub struct DiscordAccountFactory<'a> {
    db: &'a DatabaseConnection,
    discord_id: String,
    username: String,
}

impl<'a> DiscordAccountFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            discord_id: (100_000_000_000_000_000 + id).to_string(),
            username: format!("user{}", id),
        }
    }

    pub fn discord_id(mut self, discord_id: impl Into<String>) -> Self {
        self.discord_id = discord_id.into();
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Builds and inserts the Discord account into the database.
    ///
    /// # Returns
    /// - `Ok(entity::discord_account::Model)` - Created Discord account
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::discord_account::Model, DbErr> {
        let now = Utc::now();
        entity::discord_account::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            discord_id: ActiveValue::Set(self.discord_id),
            username: ActiveValue::Set(self.username),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a Discord account with default values.
pub async fn create_discord_account(
    db: &DatabaseConnection,
) -> Result<entity::discord_account::Model, DbErr> {
    DiscordAccountFactory::new(db).build().await
}
