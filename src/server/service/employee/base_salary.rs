use sea_orm::TransactionTrait;
use uuid::Uuid;

use crate::server::{
    data::{base_salary::BaseSalaryRepository, employee::EmployeeRepository},
    error::{employee::EmployeeError, AppError},
    model::employee::{EmployeeDetails, UpdateBaseSalaryParams},
    service::employee::{load_details, EmployeeService},
};

impl<'a> EmployeeService<'a> {
    /// Sets the base salary of an employee, creating it if none exists.
    ///
    /// # Returns
    /// - `Ok(EmployeeDetails)` - Employee with the new base salary
    /// - `Err(AppError::EmployeeErr(EmployeeNotFound))` - No employee with that id
    pub async fn update_base_salary(
        &self,
        employee_id: Uuid,
        params: UpdateBaseSalaryParams,
    ) -> Result<EmployeeDetails, AppError> {
        let txn = self.db.begin().await?;
        let employee = EmployeeRepository::new(&txn)
            .find_by_id(employee_id)
            .await?
            .ok_or(EmployeeError::EmployeeNotFound)?;

        BaseSalaryRepository::new(&txn)
            .upsert(employee_id, &params)
            .await?;
        let details = load_details(&txn, employee).await?;

        txn.commit().await?;

        Ok(details)
    }
}
