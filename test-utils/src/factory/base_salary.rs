//! Base salary factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Creates a VND base salary paid on batch 1 for `employee_id`.
///
/// # Arguments
/// - `db` - Database connection
/// - `employee_id` - Salaried employee
/// - `contract_amount` - Contract amount, also used as the personal-account amount
///
/// # Returns
/// - `Ok(entity::base_salary::Model)` - Created base salary
/// - `Err(DbErr)` - Database error during insert
pub async fn create_base_salary(
    db: &DatabaseConnection,
    employee_id: Uuid,
    contract_amount: i64,
) -> Result<entity::base_salary::Model, DbErr> {
    let now = Utc::now();
    entity::base_salary::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        employee_id: ActiveValue::Set(employee_id),
        contract_amount: ActiveValue::Set(contract_amount),
        company_account_amount: ActiveValue::Set(0),
        personal_account_amount: ActiveValue::Set(contract_amount),
        currency_code: ActiveValue::Set("VND".to_string()),
        batch: ActiveValue::Set(1),
        effective_date: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    }
    .insert(db)
    .await
}
