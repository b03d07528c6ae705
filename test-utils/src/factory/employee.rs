//! Employee factory for creating test employee entities.
//!
//! This module provides factory methods for creating employee entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test employees with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::employee::EmployeeFactory;
///
/// let employee = EmployeeFactory::new(&db)
///     .full_name("Jane Doe")
///     .team_email("jane@d.foundation")
///     .working_status("probation")
///     .build()
///     .await?;
/// ```
pub struct EmployeeFactory<'a> {
    db: &'a DatabaseConnection,
    full_name: String,
    display_name: String,
    team_email: String,
    personal_email: String,
    phone_number: String,
    avatar: String,
    country: String,
    city: String,
    working_status: String,
    joined_date: Option<NaiveDate>,
    left_date: Option<NaiveDate>,
    line_manager_id: Option<Uuid>,
    referred_by: Option<Uuid>,
    seniority_id: Option<Uuid>,
    discord_account_id: Option<Uuid>,
}

impl<'a> EmployeeFactory<'a> {
    /// Creates a new EmployeeFactory with default values.
    ///
    /// Defaults:
    /// - full_name / display_name: `"Employee {id}"`
    /// - team_email: `"employee{id}@d.foundation"`
    /// - personal_email: `"employee{id}@example.com"`
    /// - working_status: `"full-time"`
    /// - joined_date: `2023-01-01`
    /// - every reference: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `EmployeeFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            full_name: format!("Employee {}", id),
            display_name: format!("Employee {}", id),
            team_email: format!("employee{}@d.foundation", id),
            personal_email: format!("employee{}@example.com", id),
            phone_number: String::new(),
            avatar: String::new(),
            country: String::new(),
            city: String::new(),
            working_status: "full-time".to_string(),
            joined_date: NaiveDate::from_ymd_opt(2023, 1, 1),
            left_date: None,
            line_manager_id: None,
            referred_by: None,
            seniority_id: None,
            discord_account_id: None,
        }
    }

    pub fn full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = full_name.into();
        self
    }

    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    pub fn team_email(mut self, team_email: impl Into<String>) -> Self {
        self.team_email = team_email.into();
        self
    }

    pub fn personal_email(mut self, personal_email: impl Into<String>) -> Self {
        self.personal_email = personal_email.into();
        self
    }

    pub fn phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = phone_number.into();
        self
    }

    pub fn avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = avatar.into();
        self
    }

    /// Sets the country and city names stored on the employee.
    pub fn location(mut self, country: impl Into<String>, city: impl Into<String>) -> Self {
        self.country = country.into();
        self.city = city.into();
        self
    }

    /// Sets the working status (`on-boarding`, `probation`, `full-time`, `contractor`, `left`).
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

    pub fn referred_by(mut self, referred_by: Option<Uuid>) -> Self {
        self.referred_by = referred_by;
        self
    }

    pub fn seniority_id(mut self, seniority_id: Option<Uuid>) -> Self {
        self.seniority_id = seniority_id;
        self
    }

    pub fn discord_account_id(mut self, discord_account_id: Option<Uuid>) -> Self {
        self.discord_account_id = discord_account_id;
        self
    }

    /// Builds and inserts the employee entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::employee::Model)` - Created employee entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::employee::Model, DbErr> {
        let now = Utc::now();
        entity::employee::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            full_name: ActiveValue::Set(self.full_name),
            display_name: ActiveValue::Set(self.display_name),
            team_email: ActiveValue::Set(self.team_email),
            personal_email: ActiveValue::Set(self.personal_email),
            phone_number: ActiveValue::Set(self.phone_number),
            avatar: ActiveValue::Set(self.avatar),
            gender: ActiveValue::Set(String::new()),
            address: ActiveValue::Set(String::new()),
            place_of_residence: ActiveValue::Set(String::new()),
            date_of_birth: ActiveValue::Set(None),
            country: ActiveValue::Set(self.country),
            city: ActiveValue::Set(self.city),
            working_status: ActiveValue::Set(self.working_status),
            joined_date: ActiveValue::Set(self.joined_date),
            left_date: ActiveValue::Set(self.left_date),
            line_manager_id: ActiveValue::Set(self.line_manager_id),
            referred_by: ActiveValue::Set(self.referred_by),
            seniority_id: ActiveValue::Set(self.seniority_id),
            discord_account_id: ActiveValue::Set(self.discord_account_id),
            wise_recipient_id: ActiveValue::Set(String::new()),
            wise_account_number: ActiveValue::Set(String::new()),
            wise_recipient_email: ActiveValue::Set(String::new()),
            wise_recipient_name: ActiveValue::Set(String::new()),
            wise_currency: ActiveValue::Set(String::new()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an employee with default values.
///
/// Shorthand for `EmployeeFactory::new(db).build().await`.
///
/// # Example
///
/// ```rust,ignore
/// let employee = create_employee(&db).await?;
/// ```
pub async fn create_employee(db: &DatabaseConnection) -> Result<entity::employee::Model, DbErr> {
    EmployeeFactory::new(db).build().await
}

/// Creates an employee holding a specific team email.
///
/// # Arguments
/// - `db` - Database connection
/// - `team_email` - Team email for the employee
///
/// # Returns
/// - `Ok(entity::employee::Model)` - Created employee entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_employee_with_email(
    db: &DatabaseConnection,
    team_email: impl Into<String>,
) -> Result<entity::employee::Model, DbErr> {
    EmployeeFactory::new(db).team_email(team_email).build().await
}
