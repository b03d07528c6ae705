use sea_orm::TransactionTrait;
use uuid::Uuid;

use crate::server::{
    data::{catalog::CatalogRepository, employee::EmployeeRepository},
    error::{employee::EmployeeError, AppError},
    model::employee::{EmployeeDetails, UpdateRolesParams},
    service::employee::{all_found, dedup, load_details, EmployeeService},
};

impl<'a> EmployeeService<'a> {
    /// Replaces the roles of an employee.
    ///
    /// # Returns
    /// - `Ok(EmployeeDetails)` - Employee with the new roles
    /// - `Err(AppError::EmployeeErr(EmployeeNotFound))` - No employee with that id
    /// - `Err(AppError::EmployeeErr(RoleNotFound))` - A role does not exist
    pub async fn update_roles(
        &self,
        employee_id: Uuid,
        params: UpdateRolesParams,
    ) -> Result<EmployeeDetails, AppError> {
        let txn = self.db.begin().await?;
        let catalog_repo = CatalogRepository::new(&txn);

        let employee = EmployeeRepository::new(&txn)
            .find_by_id(employee_id)
            .await?
            .ok_or(EmployeeError::EmployeeNotFound)?;

        let roles = dedup(&params.roles);
        if !all_found(&roles, &catalog_repo.find_roles(&roles).await?) {
            return Err(EmployeeError::RoleNotFound.into());
        }

        catalog_repo.replace_roles(employee_id, &roles).await?;
        let details = load_details(&txn, employee).await?;

        txn.commit().await?;

        Ok(details)
    }
}
