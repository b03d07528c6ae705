use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use uuid::Uuid;

use crate::server::model::employee::{BaseSalary, UpdateBaseSalaryParams};

pub struct BaseSalaryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BaseSalaryRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_employee(&self, employee_id: Uuid) -> Result<Option<BaseSalary>, DbErr> {
        let entity = entity::prelude::BaseSalary::find()
            .filter(entity::base_salary::Column::EmployeeId.eq(employee_id))
            .one(self.db)
            .await?;

        Ok(entity.map(BaseSalary::from_entity))
    }

    /// Inserts or replaces the base salary of an employee.
    ///
    /// One row exists per employee; on conflict every amount, the currency, batch and
    /// effective date are overwritten.
    pub async fn upsert(
        &self,
        employee_id: Uuid,
        params: &UpdateBaseSalaryParams,
    ) -> Result<BaseSalary, DbErr> {
        let now = Utc::now();
        let entity = entity::prelude::BaseSalary::insert(entity::base_salary::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            employee_id: ActiveValue::Set(employee_id),
            contract_amount: ActiveValue::Set(params.contract_amount),
            company_account_amount: ActiveValue::Set(params.company_account_amount),
            personal_account_amount: ActiveValue::Set(params.personal_account_amount),
            currency_code: ActiveValue::Set(params.currency_code.clone()),
            batch: ActiveValue::Set(params.batch),
            effective_date: ActiveValue::Set(params.effective_date),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        })
        .on_conflict(
            OnConflict::column(entity::base_salary::Column::EmployeeId)
                .update_columns([
                    entity::base_salary::Column::ContractAmount,
                    entity::base_salary::Column::CompanyAccountAmount,
                    entity::base_salary::Column::PersonalAccountAmount,
                    entity::base_salary::Column::CurrencyCode,
                    entity::base_salary::Column::Batch,
                    entity::base_salary::Column::EffectiveDate,
                    entity::base_salary::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(BaseSalary::from_entity(entity))
    }
}
