//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Unique columns (team emails, codes, Discord ids) are
//! derived from a shared counter so factories never collide within a test.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let employee = factory::create_employee(&db).await?;
//!     let organization = factory::create_organization(&db).await?;
//!
//!     // Create with dependencies
//!     let (manager, report) = factory::helpers::create_employee_with_line_manager(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let employee = factory::employee::EmployeeFactory::new(&db)
//!     .team_email("x@d.foundation")
//!     .working_status("left")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `employee` - Create employee entities
//! - `discord_account` - Create Discord account entities
//! - `social_account` - Create per-provider social accounts
//! - `organization` - Create organizations and memberships
//! - `location` - Create countries and cities
//! - `catalog` - Create seniorities, positions, stacks, chapters, roles and their links
//! - `base_salary` - Create base salaries
//! - `dashboard` - Create projects and dashboard snapshots
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod base_salary;
pub mod catalog;
pub mod dashboard;
pub mod discord_account;
pub mod employee;
pub mod helpers;
pub mod location;
pub mod organization;
pub mod social_account;

// Re-export commonly used factory functions for concise usage
pub use base_salary::create_base_salary;
pub use catalog::{
    assign_chapter, assign_position, assign_role, assign_stack, create_chapter, create_position,
    create_role, create_role_with_code, create_seniority, create_stack,
};
pub use dashboard::{
    create_action_item, create_audit_score, create_engineering_health, create_project,
    create_work_survey,
};
pub use discord_account::create_discord_account;
pub use employee::{create_employee, create_employee_with_email};
pub use location::{create_city, create_country};
pub use organization::{add_employee_to_organization, create_organization};
pub use social_account::create_social_account;
