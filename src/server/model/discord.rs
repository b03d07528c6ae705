//! Discord guild member as seen by the employee workflows.

use serenity::all::Member;
use uuid::Uuid;

use crate::model::employee::DiscordAccountDto;

/// Guild member resolved from a username lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscordMember {
    /// Discord user id (snowflake) as a string, as stored on the Discord account row.
    pub discord_id: String,
    /// Discord username.
    pub username: String,
}

impl DiscordMember {
    /// Converts a serenity guild member at the Discord client boundary.
    pub fn from_member(member: &Member) -> Self {
        Self {
            discord_id: member.user.id.get().to_string(),
            username: member.user.name.clone(),
        }
    }
}

/// Discord account row linked to an employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscordAccount {
    pub id: Uuid,
    pub discord_id: String,
    pub username: String,
}

impl DiscordAccount {
    pub fn from_entity(entity: entity::discord_account::Model) -> Self {
        Self {
            id: entity.id,
            discord_id: entity.discord_id,
            username: entity.username,
        }
    }

    pub fn into_dto(self) -> DiscordAccountDto {
        DiscordAccountDto {
            id: self.id,
            discord_id: self.discord_id,
            username: self.username,
        }
    }
}

/// An audit entry destined for the audit channel.
///
/// `log_type` selects the message template; `fields` are rendered in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditLogEntry {
    pub log_type: String,
    pub fields: Vec<(String, String)>,
}

impl AuditLogEntry {
    pub fn new(log_type: impl Into<String>) -> Self {
        Self {
            log_type: log_type.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((key.into(), value.into()));
        self
    }

    fn get(&self, key: &str) -> &str {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }

    /// Renders the message posted to the audit channel.
    ///
    /// Known log types use a sentence template; anything else lists its fields.
    pub fn render(&self) -> String {
        match self.log_type.as_str() {
            AUDIT_UPDATE_WORKING_STATUS => format!(
                "Employee `{}` updated working status of employee `{}` to **{}**",
                self.get("employee_id"),
                self.get("updated_employee_id"),
                self.get("working_status"),
            ),
            AUDIT_UPDATE_BASE_SALARY => format!(
                "Employee `{}` updated base salary of employee `{}` to **{}**",
                self.get("employee_id"),
                self.get("updated_employee_id"),
                self.get("new_salary"),
            ),
            other => {
                let fields = self
                    .fields
                    .iter()
                    .map(|(k, v)| format!("{}={}", k, v))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("[{}] {}", other, fields)
            }
        }
    }
}

pub const AUDIT_UPDATE_WORKING_STATUS: &str = "employee_update_working_status";
pub const AUDIT_UPDATE_BASE_SALARY: &str = "employee_update_base_salary";
