use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ConnectionTrait, DbErr, EntityTrait};
use uuid::Uuid;

use crate::server::model::discord::DiscordAccount;

pub struct DiscordAccountRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DiscordAccountRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<DiscordAccount>, DbErr> {
        let entity = entity::prelude::DiscordAccount::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(DiscordAccount::from_entity))
    }

    /// Inserts a Discord account or updates the username of the existing row with the
    /// same Discord id.
    ///
    /// # Returns
    /// - `Ok(DiscordAccount)` - Created or updated account, with the stored row id
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn upsert(&self, discord_id: &str, username: &str) -> Result<DiscordAccount, DbErr> {
        let now = Utc::now();
        let entity = entity::prelude::DiscordAccount::insert(entity::discord_account::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            discord_id: ActiveValue::Set(discord_id.to_string()),
            username: ActiveValue::Set(username.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        })
        .on_conflict(
            OnConflict::column(entity::discord_account::Column::DiscordId)
                .update_columns([
                    entity::discord_account::Column::Username,
                    entity::discord_account::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(DiscordAccount::from_entity(entity))
    }
}
