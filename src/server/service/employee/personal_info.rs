use sea_orm::TransactionTrait;
use uuid::Uuid;

use crate::server::{
    data::{employee::EmployeeRepository, location::LocationRepository},
    error::{employee::EmployeeError, AppError},
    model::employee::{EmployeeDetails, UpdatePersonalInfoParams},
    service::employee::{load_details, EmployeeService},
};

impl<'a> EmployeeService<'a> {
    /// Updates date of birth, gender, address, personal email and location.
    ///
    /// # Returns
    /// - `Ok(EmployeeDetails)` - Updated employee
    /// - `Err(AppError::EmployeeErr(EmployeeNotFound))` - No employee with that id
    /// - `Err(AppError::EmployeeErr(PersonalEmailExisted))` - Email held by another employee
    /// - `Err(AppError::EmployeeErr(CountryNotFound))` - Unknown country name
    /// - `Err(AppError::EmployeeErr(CityDoesNotBelongToCountry))` - City not in that country
    pub async fn update_personal_info(
        &self,
        employee_id: Uuid,
        params: UpdatePersonalInfoParams,
    ) -> Result<EmployeeDetails, AppError> {
        let txn = self.db.begin().await?;
        let employee_repo = EmployeeRepository::new(&txn);
        let location_repo = LocationRepository::new(&txn);

        if !employee_repo.exists(employee_id).await? {
            return Err(EmployeeError::EmployeeNotFound.into());
        }

        if let Some(holder) = employee_repo
            .find_by_personal_email(&params.personal_email)
            .await?
        {
            if holder.id != employee_id {
                return Err(EmployeeError::PersonalEmailExisted.into());
            }
        }

        let country_id = location_repo
            .find_country_id_by_name(&params.country)
            .await?
            .ok_or(EmployeeError::CountryNotFound)?;
        if !location_repo.city_in_country(country_id, &params.city).await? {
            return Err(EmployeeError::CityDoesNotBelongToCountry.into());
        }

        let updated = employee_repo
            .update_personal_info(employee_id, &params)
            .await?;
        let details = load_details(&txn, updated).await?;

        txn.commit().await?;

        Ok(details)
    }
}
