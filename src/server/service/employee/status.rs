use uuid::Uuid;

use crate::server::{
    data::employee::EmployeeRepository,
    error::{employee::EmployeeError, AppError},
    model::employee::{EmployeeDetails, WorkingStatus},
    service::employee::{load_details, EmployeeService},
};

impl<'a> EmployeeService<'a> {
    /// Sets an employee's working status.
    ///
    /// # Returns
    /// - `Ok(EmployeeDetails)` - Employee with the new status
    /// - `Err(AppError::EmployeeErr(EmployeeNotFound))` - No employee with that id
    pub async fn update_status(
        &self,
        employee_id: Uuid,
        status: WorkingStatus,
    ) -> Result<EmployeeDetails, AppError> {
        let employee_repo = EmployeeRepository::new(self.db);

        if !employee_repo.exists(employee_id).await? {
            return Err(EmployeeError::EmployeeNotFound.into());
        }

        let updated = employee_repo.update_status(employee_id, status).await?;

        Ok(load_details(self.db, updated).await?)
    }
}
