//! Employee fixtures for creating in-memory test data.
//!
//! Provides fixture functions for creating employee entity models without database insertion.
//! These are useful for unit testing domain conversions and DTO mapping.

use chrono::{NaiveDate, TimeZone, Utc};
use entity::employee;
use uuid::Uuid;

/// Default test employee name.
pub const DEFAULT_FULL_NAME: &str = "Test Employee";

/// Default test team email.
pub const DEFAULT_TEAM_EMAIL: &str = "test@d.foundation";

/// Default working status.
pub const DEFAULT_WORKING_STATUS: &str = "full-time";

/// Creates an employee entity model with default values.
///
/// # Default Values
/// - id: nil UUID
/// - full_name / display_name: `"Test Employee"`
/// - team_email: `"test@d.foundation"`
/// - working_status: `"full-time"`
/// - joined_date: `2023-01-01`
/// - timestamps: `2024-01-01T00:00:00Z`
///
/// # Example
///
/// ```rust,ignore
/// let employee = fixture::employee::entity();
/// assert_eq!(employee.team_email, "test@d.foundation");
/// ```
pub fn entity() -> employee::Model {
    entity_builder().build()
}

/// Creates an employee entity builder for customization.
pub fn entity_builder() -> EmployeeEntityBuilder {
    EmployeeEntityBuilder::default()
}

/// Builder for creating customized employee entity models.
pub struct EmployeeEntityBuilder {
    id: Uuid,
    full_name: String,
    team_email: String,
    working_status: String,
    joined_date: Option<NaiveDate>,
    left_date: Option<NaiveDate>,
    line_manager_id: Option<Uuid>,
}

impl Default for EmployeeEntityBuilder {
    fn default() -> Self {
        Self {
            id: Uuid::nil(),
            full_name: DEFAULT_FULL_NAME.to_string(),
            team_email: DEFAULT_TEAM_EMAIL.to_string(),
            working_status: DEFAULT_WORKING_STATUS.to_string(),
            joined_date: NaiveDate::from_ymd_opt(2023, 1, 1),
            left_date: None,
            line_manager_id: None,
        }
    }
}

impl EmployeeEntityBuilder {
    pub fn id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = full_name.into();
        self
    }

    pub fn team_email(mut self, team_email: impl Into<String>) -> Self {
        self.team_email = team_email.into();
        self
    }

    pub fn working_status(mut self, working_status: impl Into<String>) -> Self {
        self.working_status = working_status.into();
        self
    }

    pub fn joined_date(mut self, joined_date: Option<NaiveDate>) -> Self {
        self.joined_date = joined_date;
        self
    }

    pub fn left_date(mut self, left_date: Option<NaiveDate>) -> Self {
        self.left_date = left_date;
        self
    }

    pub fn line_manager_id(mut self, line_manager_id: Option<Uuid>) -> Self {
        self.line_manager_id = line_manager_id;
        self
    }

    /// Builds the employee entity model.
    pub fn build(self) -> employee::Model {
        let timestamp = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        employee::Model {
            id: self.id,
            full_name: self.full_name.clone(),
            display_name: self.full_name,
            team_email: self.team_email,
            personal_email: String::new(),
            phone_number: String::new(),
            avatar: String::new(),
            gender: String::new(),
            address: String::new(),
            place_of_residence: String::new(),
            date_of_birth: None,
            country: String::new(),
            city: String::new(),
            working_status: self.working_status,
            joined_date: self.joined_date,
            left_date: self.left_date,
            line_manager_id: self.line_manager_id,
            referred_by: None,
            seniority_id: None,
            discord_account_id: None,
            wise_recipient_id: String::new(),
            wise_account_number: String::new(),
            wise_recipient_email: String::new(),
            wise_recipient_name: String::new(),
            wise_currency: String::new(),
            created_at: timestamp,
            updated_at: timestamp,
        }
    }
}
