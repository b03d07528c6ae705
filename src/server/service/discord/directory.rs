use serenity::{all::GuildId, async_trait, http::Http};
use std::sync::Arc;

use crate::server::{error::AppError, model::discord::DiscordMember};

/// Number of search results requested from Discord per lookup.
const SEARCH_LIMIT: u64 = 10;

/// Resolves Discord usernames to guild members.
#[async_trait]
pub trait DiscordDirectory: Send + Sync {
    /// Looks up a guild member by exact username.
    ///
    /// # Returns
    /// - `Ok(Some(DiscordMember))` - A guild member with exactly this username
    /// - `Ok(None)` - No such member in the guild
    /// - `Err(AppError)` - The lookup itself failed
    async fn member_by_username(&self, username: &str) -> Result<Option<DiscordMember>, AppError>;
}

/// Directory backed by the guild member search endpoint.
pub struct GuildMemberDirectory {
    http: Arc<Http>,
    guild_id: GuildId,
}

impl GuildMemberDirectory {
    pub fn new(http: Arc<Http>, guild_id: u64) -> Self {
        Self {
            http,
            guild_id: GuildId::new(guild_id),
        }
    }
}

#[async_trait]
impl DiscordDirectory for GuildMemberDirectory {
    async fn member_by_username(&self, username: &str) -> Result<Option<DiscordMember>, AppError> {
        // Search matches prefixes of usernames and nicknames
        let members = self
            .http
            .search_guild_members(self.guild_id, username, Some(SEARCH_LIMIT))
            .await?;

        let member = members
            .iter()
            .find(|member| member.user.name == username)
            .map(DiscordMember::from_member);

        if member.is_none() {
            tracing::debug!(
                "No member named {} among {} results in guild {}",
                username,
                members.len(),
                self.guild_id
            );
        }

        Ok(member)
    }
}
