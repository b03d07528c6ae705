use sea_orm::TransactionTrait;

use crate::server::{
    data::{
        base_salary::BaseSalaryRepository, catalog::CatalogRepository,
        employee::EmployeeRepository,
    },
    error::{employee::EmployeeError, AppError},
    model::employee::{CreateEmployeeParams, EmployeeDetails, UpdateBaseSalaryParams},
    service::employee::{all_found, dedup, load_details, EmployeeService},
};

/// Currency of the base salary recorded at creation.
const DEFAULT_CURRENCY: &str = "VND";
const DEFAULT_BATCH: i32 = 1;

impl<'a> EmployeeService<'a> {
    /// Creates an employee together with positions, roles and a base salary.
    ///
    /// # Returns
    /// - `Ok(EmployeeDetails)` - The new employee
    /// - `Err(AppError::EmployeeErr(TeamEmailExisted | PersonalEmailExisted))` - Email taken
    /// - `Err(AppError::EmployeeErr(SeniorityNotFound | PositionNotFound | RoleNotFound |
    ///   ReferrerNotFound))` - A referenced row does not exist
    pub async fn create(&self, params: CreateEmployeeParams) -> Result<EmployeeDetails, AppError> {
        let txn = self.db.begin().await?;
        let employee_repo = EmployeeRepository::new(&txn);
        let catalog_repo = CatalogRepository::new(&txn);

        if employee_repo
            .find_by_team_email(&params.team_email)
            .await?
            .is_some()
        {
            return Err(EmployeeError::TeamEmailExisted.into());
        }
        if employee_repo
            .find_by_personal_email(&params.personal_email)
            .await?
            .is_some()
        {
            return Err(EmployeeError::PersonalEmailExisted.into());
        }

        if catalog_repo.find_seniority(params.seniority_id).await?.is_none() {
            return Err(EmployeeError::SeniorityNotFound.into());
        }

        let positions = dedup(&params.positions);
        if !all_found(&positions, &catalog_repo.find_positions(&positions).await?) {
            return Err(EmployeeError::PositionNotFound.into());
        }

        let roles = dedup(&params.roles);
        if !all_found(&roles, &catalog_repo.find_roles(&roles).await?) {
            return Err(EmployeeError::RoleNotFound.into());
        }

        if let Some(referrer_id) = params.referred_by {
            if !employee_repo.exists(referrer_id).await? {
                return Err(EmployeeError::ReferrerNotFound.into());
            }
        }

        let employee = employee_repo.create(&params).await?;
        catalog_repo.replace_positions(employee.id, &positions).await?;
        catalog_repo.replace_roles(employee.id, &roles).await?;

        BaseSalaryRepository::new(&txn)
            .upsert(
                employee.id,
                &UpdateBaseSalaryParams {
                    contract_amount: params.salary,
                    company_account_amount: 0,
                    personal_account_amount: params.salary,
                    currency_code: DEFAULT_CURRENCY.to_string(),
                    effective_date: Some(params.joined_date),
                    batch: DEFAULT_BATCH,
                },
            )
            .await?;

        let details = load_details(&txn, employee).await?;

        txn.commit().await?;

        tracing::info!(
            "Created employee {} ({})",
            details.employee.id,
            details.employee.team_email
        );

        Ok(details)
    }
}
