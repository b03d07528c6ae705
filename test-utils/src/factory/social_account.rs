//! Social account factory for per-provider employee identities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Creates a social account row for an employee.
///
/// # Arguments
/// - `db` - Database connection
/// - `employee_id` - Owning employee
/// - `account_type` - Provider tag such as `"github"`, `"notion"` or `"linkedin"`
/// - `account_id` - Provider-side account id
/// - `name` - Provider-side account name
///
/// # Returns
/// - `Ok(entity::social_account::Model)` - Created social account
/// - `Err(DbErr)` - Database error during insert
pub async fn create_social_account(
    db: &DatabaseConnection,
    employee_id: Uuid,
    account_type: &str,
    account_id: &str,
    name: &str,
) -> Result<entity::social_account::Model, DbErr> {
    let now = Utc::now();
    entity::social_account::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        employee_id: ActiveValue::Set(employee_id),
        account_type: ActiveValue::Set(account_type.to_string()),
        account_id: ActiveValue::Set(account_id.to_string()),
        name: ActiveValue::Set(name.to_string()),
        email: ActiveValue::Set(String::new()),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    }
    .insert(db)
    .await
}
