use sea_orm::TransactionTrait;
use uuid::Uuid;

use crate::server::{
    data::{catalog::CatalogRepository, employee::EmployeeRepository},
    error::{employee::EmployeeError, AppError},
    model::employee::{EmployeeDetails, UpdateSkillsParams},
    service::employee::{all_found, dedup, load_details, EmployeeService},
};

impl<'a> EmployeeService<'a> {
    /// Replaces positions, chapters, stacks and seniority, and sets chapter leadership.
    ///
    /// # Returns
    /// - `Ok(EmployeeDetails)` - Updated employee
    /// - `Err(AppError::EmployeeErr(EmployeeNotFound))` - No employee with that id
    /// - `Err(AppError::EmployeeErr(PositionNotFound | ChapterNotFound | SeniorityNotFound |
    ///   StackNotFound))` - A referenced row does not exist
    pub async fn update_skills(
        &self,
        employee_id: Uuid,
        params: UpdateSkillsParams,
    ) -> Result<EmployeeDetails, AppError> {
        let txn = self.db.begin().await?;
        let employee_repo = EmployeeRepository::new(&txn);
        let catalog_repo = CatalogRepository::new(&txn);

        if !employee_repo.exists(employee_id).await? {
            return Err(EmployeeError::EmployeeNotFound.into());
        }

        let positions = dedup(&params.positions);
        if !all_found(&positions, &catalog_repo.find_positions(&positions).await?) {
            return Err(EmployeeError::PositionNotFound.into());
        }

        let chapters = dedup(&params.chapters);
        let leading_chapters = dedup(&params.leading_chapters);
        let all_chapters = dedup(&[chapters.clone(), leading_chapters.clone()].concat());
        if !all_found(&all_chapters, &catalog_repo.find_chapters(&all_chapters).await?) {
            return Err(EmployeeError::ChapterNotFound.into());
        }

        if catalog_repo.find_seniority(params.seniority).await?.is_none() {
            return Err(EmployeeError::SeniorityNotFound.into());
        }

        let stacks = dedup(&params.stacks);
        if !all_found(&stacks, &catalog_repo.find_stacks(&stacks).await?) {
            return Err(EmployeeError::StackNotFound.into());
        }

        catalog_repo.replace_positions(employee_id, &positions).await?;
        catalog_repo.replace_chapters(employee_id, &chapters).await?;
        catalog_repo.replace_stacks(employee_id, &stacks).await?;
        catalog_repo
            .set_leading_chapters(employee_id, &leading_chapters)
            .await?;
        let updated = employee_repo
            .update_seniority(employee_id, params.seniority)
            .await?;

        let details = load_details(&txn, updated).await?;

        txn.commit().await?;

        Ok(details)
    }
}
