//! Per-provider social accounts.

use uuid::Uuid;

use crate::model::employee::SocialAccountDto;

/// Providers the general-info update keeps in sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialAccountType {
    GitHub,
    Notion,
    LinkedIn,
}

impl SocialAccountType {
    /// Tag stored in `social_account.account_type`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GitHub => "github",
            Self::Notion => "notion",
            Self::LinkedIn => "linkedin",
        }
    }
}

/// Values submitted for one provider in a general-info update.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SocialAccountInput {
    pub account_id: String,
    pub name: String,
    pub email: String,
}

/// Column changes applied to an existing social account row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialAccountChanges {
    /// `None` leaves the stored account id as it is.
    pub account_id: Option<String>,
    pub name: String,
    /// `None` leaves the stored email as it is.
    pub email: Option<String>,
}

impl SocialAccountChanges {
    /// Changes applied to an existing row of `account_type`.
    ///
    /// GitHub and LinkedIn rows take the account id and name. Notion rows take the
    /// name and email but keep their account id.
    pub fn for_existing(account_type: SocialAccountType, input: &SocialAccountInput) -> Self {
        match account_type {
            SocialAccountType::GitHub | SocialAccountType::LinkedIn => Self {
                account_id: Some(input.account_id.clone()),
                name: input.name.clone(),
                email: None,
            },
            SocialAccountType::Notion => Self {
                account_id: None,
                name: input.name.clone(),
                email: Some(input.email.clone()),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialAccount {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub account_type: String,
    pub account_id: String,
    pub name: String,
    pub email: String,
}

impl SocialAccount {
    pub fn from_entity(entity: entity::social_account::Model) -> Self {
        Self {
            id: entity.id,
            employee_id: entity.employee_id,
            account_type: entity.account_type,
            account_id: entity.account_id,
            name: entity.name,
            email: entity.email,
        }
    }

    pub fn into_dto(self) -> SocialAccountDto {
        SocialAccountDto {
            id: self.id,
            account_type: self.account_type,
            account_id: self.account_id,
            name: self.name,
            email: self.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notion_rows_keep_account_id() {
        let input = SocialAccountInput {
            account_id: "notion-id".to_string(),
            name: "Notion Name".to_string(),
            email: "n@example.com".to_string(),
        };

        let changes = SocialAccountChanges::for_existing(SocialAccountType::Notion, &input);

        assert_eq!(changes.account_id, None);
        assert_eq!(changes.name, "Notion Name");
        assert_eq!(changes.email.as_deref(), Some("n@example.com"));
    }

    #[test]
    fn github_rows_take_account_id_and_name() {
        let input = SocialAccountInput {
            account_id: "octocat".to_string(),
            name: "octocat".to_string(),
            email: String::new(),
        };

        let changes = SocialAccountChanges::for_existing(SocialAccountType::GitHub, &input);

        assert_eq!(changes.account_id.as_deref(), Some("octocat"));
        assert_eq!(changes.email, None);
    }
}
