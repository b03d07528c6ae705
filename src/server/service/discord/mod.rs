//! Discord collaborators used by the employee workflows.
//!
//! Both talk to Discord through serenity's HTTP client and sit behind traits so the
//! service layer can be exercised with in-memory replacements.

pub mod audit_log;
pub mod directory;

#[cfg(test)]
pub mod fake;

pub use audit_log::{AuditLog, DiscordAuditLog};
pub use directory::{DiscordDirectory, GuildMemberDirectory};
