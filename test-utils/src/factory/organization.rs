//! Organization factory and employee membership helpers.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Creates an organization with a unique code `"org-{id}"`.
///
/// # Returns
/// - `Ok(entity::organization::Model)` - Created organization
/// - `Err(DbErr)` - Database error during insert
pub async fn create_organization(
    db: &DatabaseConnection,
) -> Result<entity::organization::Model, DbErr> {
    let id = next_id();
    entity::organization::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        code: ActiveValue::Set(format!("org-{}", id)),
        name: ActiveValue::Set(format!("Organization {}", id)),
    }
    .insert(db)
    .await
}

/// Links an employee to an organization.
///
/// # Arguments
/// - `db` - Database connection
/// - `employee_id` - Member employee
/// - `organization_id` - Organization the employee belongs to
///
/// # Returns
/// - `Ok(entity::employee_organization::Model)` - Created membership row
/// - `Err(DbErr)` - Database error during insert
pub async fn add_employee_to_organization(
    db: &DatabaseConnection,
    employee_id: Uuid,
    organization_id: Uuid,
) -> Result<entity::employee_organization::Model, DbErr> {
    entity::employee_organization::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        employee_id: ActiveValue::Set(employee_id),
        organization_id: ActiveValue::Set(organization_id),
    }
    .insert(db)
    .await
}
