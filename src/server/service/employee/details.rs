use sea_orm::{ConnectionTrait, DbErr};
use uuid::Uuid;

use crate::server::{
    data::{
        base_salary::BaseSalaryRepository, catalog::CatalogRepository,
        discord_account::DiscordAccountRepository, employee::EmployeeRepository,
        organization::OrganizationRepository, social_account::SocialAccountRepository,
    },
    error::{employee::EmployeeError, AppError},
    model::employee::{Employee, EmployeeDetails},
    service::employee::EmployeeService,
};

/// Loads every association of an employee.
///
/// Runs on whatever connection it is given so mutating use cases can read their own
/// uncommitted writes.
pub async fn load_details<C: ConnectionTrait>(
    db: &C,
    employee: Employee,
) -> Result<EmployeeDetails, DbErr> {
    let employee_repo = EmployeeRepository::new(db);
    let catalog_repo = CatalogRepository::new(db);

    let line_manager = match employee.line_manager_id {
        Some(id) => employee_repo.find_by_id(id).await?,
        None => None,
    };
    let referrer = match employee.referred_by {
        Some(id) => employee_repo.find_by_id(id).await?,
        None => None,
    };
    let seniority = match employee.seniority_id {
        Some(id) => catalog_repo.find_seniority(id).await?,
        None => None,
    };
    let discord_account = match employee.discord_account_id {
        Some(id) => DiscordAccountRepository::new(db).find_by_id(id).await?,
        None => None,
    };

    Ok(EmployeeDetails {
        line_manager,
        referrer,
        seniority,
        positions: catalog_repo.positions_of(employee.id).await?,
        stacks: catalog_repo.stacks_of(employee.id).await?,
        chapters: catalog_repo.chapters_of(employee.id).await?,
        leading_chapters: catalog_repo.chapters_led_by(employee.id).await?,
        roles: catalog_repo.roles_of(employee.id).await?,
        organizations: OrganizationRepository::new(db)
            .find_by_employee(employee.id)
            .await?,
        social_accounts: SocialAccountRepository::new(db)
            .find_by_employee(employee.id)
            .await?,
        discord_account,
        base_salary: BaseSalaryRepository::new(db)
            .find_by_employee(employee.id)
            .await?,
        employee,
    })
}

impl<'a> EmployeeService<'a> {
    /// Gets an employee with all associations.
    ///
    /// # Returns
    /// - `Ok(EmployeeDetails)` - Employee found
    /// - `Err(AppError::EmployeeErr(EmployeeNotFound))` - No employee with that id
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_details(&self, employee_id: Uuid) -> Result<EmployeeDetails, AppError> {
        let employee = EmployeeRepository::new(self.db)
            .find_by_id(employee_id)
            .await?
            .ok_or(EmployeeError::EmployeeNotFound)?;

        Ok(load_details(self.db, employee).await?)
    }
}
