use uuid::Uuid;

use crate::server::{
    data::{
        catalog::CatalogRepository, employee::EmployeeRepository,
        organization::OrganizationRepository,
    },
    error::AppError,
    model::employee::{Employee, EmployeeListItem, PublicEmployee, SearchEmployeesParams},
    service::employee::EmployeeService,
};

impl<'a> EmployeeService<'a> {
    /// Searches employees and loads the associations shown in the result list.
    ///
    /// # Returns
    /// - `Ok((items, total))` - Page of employees and the total number of matches
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn search(
        &self,
        params: SearchEmployeesParams,
    ) -> Result<(Vec<EmployeeListItem>, u64), AppError> {
        let employee_repo = EmployeeRepository::new(self.db);
        let catalog_repo = CatalogRepository::new(self.db);
        let organization_repo = OrganizationRepository::new(self.db);

        let (employees, total) = employee_repo.search(&params).await?;

        let mut items = Vec::with_capacity(employees.len());
        for employee in employees {
            let line_manager = match employee.line_manager_id {
                Some(id) => employee_repo.find_by_id(id).await?,
                None => None,
            };
            let seniority = match employee.seniority_id {
                Some(id) => catalog_repo.find_seniority(id).await?,
                None => None,
            };

            items.push(EmployeeListItem {
                line_manager,
                seniority,
                positions: catalog_repo.positions_of(employee.id).await?,
                stacks: catalog_repo.stacks_of(employee.id).await?,
                chapters: catalog_repo.chapters_of(employee.id).await?,
                organizations: organization_repo.find_by_employee(employee.id).await?,
                employee,
            });
        }

        Ok((items, total))
    }

    /// Gets employees acting as line manager for at least one current employee.
    pub async fn line_managers(&self) -> Result<Vec<Employee>, AppError> {
        Ok(EmployeeRepository::new(self.db).line_managers().await?)
    }

    /// Gets the public card of every current employee.
    pub async fn public_list(&self) -> Result<Vec<PublicEmployee>, AppError> {
        let catalog_repo = CatalogRepository::new(self.db);
        let employees = EmployeeRepository::new(self.db).current_employees().await?;

        let mut cards = Vec::with_capacity(employees.len());
        for employee in employees {
            cards.push(PublicEmployee {
                chapters: catalog_repo.chapters_of(employee.id).await?,
                positions: catalog_repo.positions_of(employee.id).await?,
                employee,
            });
        }

        Ok(cards)
    }

    /// Checks whether the employee holds the role with the given code.
    pub async fn has_role(&self, employee_id: Uuid, role_code: &str) -> Result<bool, AppError> {
        Ok(CatalogRepository::new(self.db)
            .has_role_code(employee_id, role_code)
            .await?)
    }
}
