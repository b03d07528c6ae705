//! Employee data repository for database operations.
//!
//! This module provides the `EmployeeRepository` for reading and writing employee rows.
//! Every method takes the connection it was built with, so the same repository works
//! against the pool or inside a transaction opened by the service layer.

use std::collections::HashSet;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::server::model::employee::{
    CreateEmployeeParams, Employee, GeneralInfoChanges, SearchEmployeesParams,
    UpdatePersonalInfoParams, WorkingStatus,
};

/// Repository providing database operations for employee records.
pub struct EmployeeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EmployeeRepository<'a, C> {
    /// Creates a new EmployeeRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `EmployeeRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Checks whether an employee with the given id exists.
    ///
    /// # Returns
    /// - `Ok(true)` - Employee exists
    /// - `Ok(false)` - No employee with that id
    /// - `Err(DbErr)` - Database error during count query
    pub async fn exists(&self, id: Uuid) -> Result<bool, DbErr> {
        let count = entity::prelude::Employee::find()
            .filter(entity::employee::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Employee>, DbErr> {
        let entity = entity::prelude::Employee::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Employee::from_entity))
    }

    /// Finds employees by id, ordered by full name. Unknown ids are skipped.
    pub async fn find_by_ids(&self, ids: Vec<Uuid>) -> Result<Vec<Employee>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Employee::find()
            .filter(entity::employee::Column::Id.is_in(ids))
            .order_by_asc(entity::employee::Column::FullName)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Employee::from_entity).collect())
    }

    pub async fn find_by_team_email(&self, team_email: &str) -> Result<Option<Employee>, DbErr> {
        let entity = entity::prelude::Employee::find()
            .filter(entity::employee::Column::TeamEmail.eq(team_email))
            .one(self.db)
            .await?;

        Ok(entity.map(Employee::from_entity))
    }

    pub async fn find_by_personal_email(
        &self,
        personal_email: &str,
    ) -> Result<Option<Employee>, DbErr> {
        let entity = entity::prelude::Employee::find()
            .filter(entity::employee::Column::PersonalEmail.eq(personal_email))
            .one(self.db)
            .await?;

        Ok(entity.map(Employee::from_entity))
    }

    /// Finds the employee linked to the Discord account holding `discord_id`.
    ///
    /// # Arguments
    /// - `discord_id` - Discord user id (snowflake) as a string
    ///
    /// # Returns
    /// - `Ok(Some(Employee))` - Employee linked to that Discord user
    /// - `Ok(None)` - No Discord account with that id, or no employee linked to it
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_discord_id(&self, discord_id: &str) -> Result<Option<Employee>, DbErr> {
        let Some(account) = entity::prelude::DiscordAccount::find()
            .filter(entity::discord_account::Column::DiscordId.eq(discord_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let entity = entity::prelude::Employee::find()
            .filter(entity::employee::Column::DiscordAccountId.eq(account.id))
            .one(self.db)
            .await?;

        Ok(entity.map(Employee::from_entity))
    }

    /// Inserts a new employee from create parameters.
    ///
    /// Only the columns known at creation are set; the rest start empty.
    pub async fn create(&self, params: &CreateEmployeeParams) -> Result<Employee, DbErr> {
        let now = Utc::now();
        let entity = entity::employee::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            full_name: ActiveValue::Set(params.full_name.clone()),
            display_name: ActiveValue::Set(params.display_name.clone()),
            team_email: ActiveValue::Set(params.team_email.clone()),
            personal_email: ActiveValue::Set(params.personal_email.clone()),
            phone_number: ActiveValue::Set(String::new()),
            avatar: ActiveValue::Set(String::new()),
            gender: ActiveValue::Set(String::new()),
            address: ActiveValue::Set(String::new()),
            place_of_residence: ActiveValue::Set(String::new()),
            date_of_birth: ActiveValue::Set(None),
            country: ActiveValue::Set(String::new()),
            city: ActiveValue::Set(String::new()),
            working_status: ActiveValue::Set(params.status.as_str().to_string()),
            joined_date: ActiveValue::Set(Some(params.joined_date)),
            left_date: ActiveValue::Set(None),
            line_manager_id: ActiveValue::Set(None),
            referred_by: ActiveValue::Set(params.referred_by),
            seniority_id: ActiveValue::Set(Some(params.seniority_id)),
            discord_account_id: ActiveValue::Set(None),
            wise_recipient_id: ActiveValue::Set(String::new()),
            wise_account_number: ActiveValue::Set(String::new()),
            wise_recipient_email: ActiveValue::Set(String::new()),
            wise_recipient_name: ActiveValue::Set(String::new()),
            wise_currency: ActiveValue::Set(String::new()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(Employee::from_entity(entity))
    }

    /// Writes the general-info columns of an employee.
    ///
    /// Only the allow-listed columns and `updated_at` are part of the statement; every
    /// other column keeps its stored value.
    ///
    /// # Returns
    /// - `Ok(Employee)` - Updated employee
    /// - `Err(DbErr::RecordNotUpdated)` - No employee with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_general_info(
        &self,
        id: Uuid,
        changes: GeneralInfoChanges,
    ) -> Result<Employee, DbErr> {
        let entity = entity::employee::ActiveModel {
            id: ActiveValue::Unchanged(id),
            full_name: ActiveValue::Set(changes.full_name),
            team_email: ActiveValue::Set(changes.team_email),
            phone_number: ActiveValue::Set(changes.phone_number),
            line_manager_id: ActiveValue::Set(changes.line_manager_id),
            display_name: ActiveValue::Set(changes.display_name),
            joined_date: ActiveValue::Set(changes.joined_date),
            left_date: ActiveValue::Set(changes.left_date),
            referred_by: ActiveValue::Set(changes.referred_by),
            wise_recipient_id: ActiveValue::Set(changes.wise_recipient_id),
            wise_account_number: ActiveValue::Set(changes.wise_account_number),
            wise_recipient_email: ActiveValue::Set(changes.wise_recipient_email),
            wise_recipient_name: ActiveValue::Set(changes.wise_recipient_name),
            wise_currency: ActiveValue::Set(changes.wise_currency),
            discord_account_id: ActiveValue::Set(changes.discord_account_id),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(Employee::from_entity(entity))
    }

    pub async fn update_personal_info(
        &self,
        id: Uuid,
        params: &UpdatePersonalInfoParams,
    ) -> Result<Employee, DbErr> {
        let entity = entity::employee::ActiveModel {
            id: ActiveValue::Unchanged(id),
            date_of_birth: ActiveValue::Set(Some(params.date_of_birth)),
            gender: ActiveValue::Set(params.gender.clone()),
            place_of_residence: ActiveValue::Set(params.place_of_residence.clone()),
            address: ActiveValue::Set(params.address.clone()),
            personal_email: ActiveValue::Set(params.personal_email.clone()),
            country: ActiveValue::Set(params.country.clone()),
            city: ActiveValue::Set(params.city.clone()),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(Employee::from_entity(entity))
    }

    pub async fn update_status(&self, id: Uuid, status: WorkingStatus) -> Result<Employee, DbErr> {
        let entity = entity::employee::ActiveModel {
            id: ActiveValue::Unchanged(id),
            working_status: ActiveValue::Set(status.as_str().to_string()),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(Employee::from_entity(entity))
    }

    pub async fn update_seniority(&self, id: Uuid, seniority_id: Uuid) -> Result<Employee, DbErr> {
        let entity = entity::employee::ActiveModel {
            id: ActiveValue::Unchanged(id),
            seniority_id: ActiveValue::Set(Some(seniority_id)),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(Employee::from_entity(entity))
    }

    /// Searches employees with filters and pagination.
    ///
    /// Code filters are resolved to employee ids through the link tables first; all
    /// filters are combined with AND. Without a working status filter, employees who
    /// have left are excluded.
    ///
    /// # Arguments
    /// - `params` - Validated search parameters, `page` is zero-indexed
    ///
    /// # Returns
    /// - `Ok((employees, total))` - Employees on the requested page ordered by full name,
    ///   and the total number of matching employees
    /// - `Err(DbErr)` - Database error during any query
    pub async fn search(&self, params: &SearchEmployeesParams) -> Result<(Vec<Employee>, u64), DbErr> {
        let mut query = entity::prelude::Employee::find();

        if params.working_statuses.is_empty() {
            query = query.filter(
                entity::employee::Column::WorkingStatus.ne(WorkingStatus::Left.as_str()),
            );
        } else {
            let statuses: Vec<&str> = params.working_statuses.iter().map(|s| s.as_str()).collect();
            query = query.filter(entity::employee::Column::WorkingStatus.is_in(statuses));
        }

        if !params.positions.is_empty() {
            let ids = self.employee_ids_with_positions(&params.positions).await?;
            query = query.filter(entity::employee::Column::Id.is_in(ids));
        }
        if !params.stacks.is_empty() {
            let ids = self.employee_ids_with_stacks(&params.stacks).await?;
            query = query.filter(entity::employee::Column::Id.is_in(ids));
        }
        if !params.chapters.is_empty() {
            let ids = self.employee_ids_with_chapters(&params.chapters).await?;
            query = query.filter(entity::employee::Column::Id.is_in(ids));
        }
        if !params.organizations.is_empty() {
            let ids = self
                .employee_ids_with_organizations(&params.organizations)
                .await?;
            query = query.filter(entity::employee::Column::Id.is_in(ids));
        }
        if !params.seniorities.is_empty() {
            let seniority_ids: Vec<Uuid> = entity::prelude::Seniority::find()
                .filter(entity::seniority::Column::Code.is_in(params.seniorities.clone()))
                .all(self.db)
                .await?
                .into_iter()
                .map(|s| s.id)
                .collect();
            query = query.filter(entity::employee::Column::SeniorityId.is_in(seniority_ids));
        }
        if !params.line_managers.is_empty() {
            query = query.filter(
                entity::employee::Column::LineManagerId.is_in(params.line_managers.clone()),
            );
        }
        if !params.keyword.is_empty() {
            query = query.filter(
                Condition::any()
                    .add(entity::employee::Column::FullName.contains(&params.keyword))
                    .add(entity::employee::Column::DisplayName.contains(&params.keyword))
                    .add(entity::employee::Column::TeamEmail.contains(&params.keyword)),
            );
        }

        let paginator = query
            .order_by_asc(entity::employee::Column::FullName)
            .paginate(self.db, params.size);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(params.page).await?;

        Ok((
            entities.into_iter().map(Employee::from_entity).collect(),
            total,
        ))
    }

    /// Gets every employee referenced as line manager by a current employee.
    ///
    /// # Returns
    /// - `Ok(Vec<Employee>)` - Line managers ordered by full name
    /// - `Err(DbErr)` - Database error during query
    pub async fn line_managers(&self) -> Result<Vec<Employee>, DbErr> {
        let manager_ids: HashSet<Uuid> = entity::prelude::Employee::find()
            .select_only()
            .column(entity::employee::Column::LineManagerId)
            .filter(entity::employee::Column::WorkingStatus.ne(WorkingStatus::Left.as_str()))
            .filter(entity::employee::Column::LineManagerId.is_not_null())
            .into_tuple::<Option<Uuid>>()
            .all(self.db)
            .await?
            .into_iter()
            .flatten()
            .collect();

        self.find_by_ids(manager_ids.into_iter().collect()).await
    }

    /// Gets all employees who have not left, ordered by full name.
    pub async fn current_employees(&self) -> Result<Vec<Employee>, DbErr> {
        let entities = entity::prelude::Employee::find()
            .filter(entity::employee::Column::WorkingStatus.ne(WorkingStatus::Left.as_str()))
            .order_by_asc(entity::employee::Column::FullName)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Employee::from_entity).collect())
    }

    async fn employee_ids_with_positions(&self, codes: &[String]) -> Result<Vec<Uuid>, DbErr> {
        entity::prelude::EmployeePosition::find()
            .select_only()
            .column(entity::employee_position::Column::EmployeeId)
            .inner_join(entity::prelude::Position)
            .filter(entity::position::Column::Code.is_in(codes.iter().cloned()))
            .into_tuple()
            .all(self.db)
            .await
    }

    async fn employee_ids_with_stacks(&self, codes: &[String]) -> Result<Vec<Uuid>, DbErr> {
        entity::prelude::EmployeeStack::find()
            .select_only()
            .column(entity::employee_stack::Column::EmployeeId)
            .inner_join(entity::prelude::Stack)
            .filter(entity::stack::Column::Code.is_in(codes.iter().cloned()))
            .into_tuple()
            .all(self.db)
            .await
    }

    async fn employee_ids_with_chapters(&self, codes: &[String]) -> Result<Vec<Uuid>, DbErr> {
        entity::prelude::EmployeeChapter::find()
            .select_only()
            .column(entity::employee_chapter::Column::EmployeeId)
            .inner_join(entity::prelude::Chapter)
            .filter(entity::chapter::Column::Code.is_in(codes.iter().cloned()))
            .into_tuple()
            .all(self.db)
            .await
    }

    async fn employee_ids_with_organizations(&self, codes: &[String]) -> Result<Vec<Uuid>, DbErr> {
        entity::prelude::EmployeeOrganization::find()
            .select_only()
            .column(entity::employee_organization::Column::EmployeeId)
            .inner_join(entity::prelude::Organization)
            .filter(entity::organization::Column::Code.is_in(codes.iter().cloned()))
            .into_tuple()
            .all(self.db)
            .await
    }
}
