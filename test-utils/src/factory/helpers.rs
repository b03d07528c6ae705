//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including unique value generation and convenience methods for creating
//! employees together with the rows that hang off them.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
///
/// This atomic counter ensures each factory-created entity gets unique codes,
/// emails and Discord ids so unique constraints never collide between rows.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an employee that reports to a freshly created line manager.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((line_manager, employee))` - Both created employees
/// - `Err(DbErr)` - Database error during creation
pub async fn create_employee_with_line_manager(
    db: &DatabaseConnection,
) -> Result<(entity::employee::Model, entity::employee::Model), DbErr> {
    let line_manager = crate::factory::employee::create_employee(db).await?;
    let employee = crate::factory::employee::EmployeeFactory::new(db)
        .line_manager_id(Some(line_manager.id))
        .build()
        .await?;

    Ok((line_manager, employee))
}

/// Creates an employee linked to a Discord account.
///
/// # Arguments
/// - `db` - Database connection
/// - `discord_id` - Guild member id stored on the Discord account
/// - `username` - Discord username stored on the Discord account
///
/// # Returns
/// - `Ok((discord_account, employee))` - Created Discord account and employee
/// - `Err(DbErr)` - Database error during creation
pub async fn create_employee_with_discord(
    db: &DatabaseConnection,
    discord_id: impl Into<String>,
    username: impl Into<String>,
) -> Result<(entity::discord_account::Model, entity::employee::Model), DbErr> {
    let account = crate::factory::discord_account::DiscordAccountFactory::new(db)
        .discord_id(discord_id)
        .username(username)
        .build()
        .await?;
    let employee = crate::factory::employee::EmployeeFactory::new(db)
        .discord_account_id(Some(account.id))
        .build()
        .await?;

    Ok((account, employee))
}
