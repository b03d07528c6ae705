//! Test factory for creating Serenity Member objects.
//!
//! Members are built by deserializing JSON shaped like the guild member search
//! response, so the result matches what the HTTP client would hand back.

use serenity::all::Member;

/// Creates a test Serenity guild Member.
///
/// # Arguments
/// - `guild_id` - Guild the member belongs to
/// - `user_id` - Discord user ID (snowflake)
/// - `username` - Discord username
///
/// # Returns
/// - `Member` - A valid Serenity Member struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Member (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// let member = create_test_member(1, 123456789, "alice");
/// assert_eq!(member.user.name, "alice");
/// ```
pub fn create_test_member(guild_id: u64, user_id: u64, username: &str) -> Member {
    serde_json::from_value(serde_json::json!({
        "guild_id": guild_id.to_string(),
        "user": {
            "id": user_id.to_string(),
            "username": username,
            "discriminator": "0",
            "global_name": null,
            "avatar": null,
            "bot": false,
            "public_flags": 0,
        },
        "nick": null,
        "avatar": null,
        "roles": [],
        "joined_at": "2024-01-01T00:00:00.000000+00:00",
        "premium_since": null,
        "deaf": false,
        "mute": false,
        "flags": 0,
        "pending": false,
        "communication_disabled_until": null,
    }))
    .expect("Failed to create test member - invalid JSON structure")
}
