use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

use crate::server::model::social_account::{
    SocialAccount, SocialAccountChanges, SocialAccountInput, SocialAccountType,
};

pub struct SocialAccountRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SocialAccountRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every social account of an employee, including providers the employee
    /// workflows do not manage.
    pub async fn find_by_employee(&self, employee_id: Uuid) -> Result<Vec<SocialAccount>, DbErr> {
        let entities = entity::prelude::SocialAccount::find()
            .filter(entity::social_account::Column::EmployeeId.eq(employee_id))
            .order_by_asc(entity::social_account::Column::AccountType)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(SocialAccount::from_entity).collect())
    }

    pub async fn create(
        &self,
        employee_id: Uuid,
        account_type: SocialAccountType,
        input: &SocialAccountInput,
    ) -> Result<SocialAccount, DbErr> {
        let now = Utc::now();
        let entity = entity::social_account::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            employee_id: ActiveValue::Set(employee_id),
            account_type: ActiveValue::Set(account_type.as_str().to_string()),
            account_id: ActiveValue::Set(input.account_id.clone()),
            name: ActiveValue::Set(input.name.clone()),
            email: ActiveValue::Set(input.email.clone()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(SocialAccount::from_entity(entity))
    }

    /// Applies column changes to an existing social account.
    ///
    /// Columns left as `None` in `changes` are not part of the update statement.
    pub async fn update(
        &self,
        id: Uuid,
        changes: SocialAccountChanges,
    ) -> Result<SocialAccount, DbErr> {
        let mut model = entity::social_account::ActiveModel {
            id: ActiveValue::Unchanged(id),
            name: ActiveValue::Set(changes.name),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        };
        if let Some(account_id) = changes.account_id {
            model.account_id = ActiveValue::Set(account_id);
        }
        if let Some(email) = changes.email {
            model.email = ActiveValue::Set(email);
        }

        let entity = model.update(self.db).await?;

        Ok(SocialAccount::from_entity(entity))
    }
}
