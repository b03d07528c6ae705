//! Seniority, position, stack, chapter and role lookups plus the employee link tables.

use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

use crate::server::model::catalog::CatalogItem;

pub struct CatalogRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

fn sorted(mut items: Vec<CatalogItem>) -> Vec<CatalogItem> {
    items.sort_by(|a, b| a.name.cmp(&b.name));
    items
}

impl<'a, C: ConnectionTrait> CatalogRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_seniority(&self, id: Uuid) -> Result<Option<CatalogItem>, DbErr> {
        let entity = entity::prelude::Seniority::find_by_id(id).one(self.db).await?;

        Ok(entity.map(CatalogItem::from))
    }

    pub async fn find_positions(&self, ids: &[Uuid]) -> Result<Vec<CatalogItem>, DbErr> {
        let entities = entity::prelude::Position::find()
            .filter(entity::position::Column::Id.is_in(ids.to_vec()))
            .order_by_asc(entity::position::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(CatalogItem::from).collect())
    }

    pub async fn find_stacks(&self, ids: &[Uuid]) -> Result<Vec<CatalogItem>, DbErr> {
        let entities = entity::prelude::Stack::find()
            .filter(entity::stack::Column::Id.is_in(ids.to_vec()))
            .order_by_asc(entity::stack::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(CatalogItem::from).collect())
    }

    pub async fn find_chapters(&self, ids: &[Uuid]) -> Result<Vec<CatalogItem>, DbErr> {
        let entities = entity::prelude::Chapter::find()
            .filter(entity::chapter::Column::Id.is_in(ids.to_vec()))
            .order_by_asc(entity::chapter::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(CatalogItem::from).collect())
    }

    pub async fn find_roles(&self, ids: &[Uuid]) -> Result<Vec<CatalogItem>, DbErr> {
        let entities = entity::prelude::Role::find()
            .filter(entity::role::Column::Id.is_in(ids.to_vec()))
            .order_by_asc(entity::role::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(CatalogItem::from).collect())
    }

    pub async fn positions_of(&self, employee_id: Uuid) -> Result<Vec<CatalogItem>, DbErr> {
        let items = entity::prelude::EmployeePosition::find()
            .filter(entity::employee_position::Column::EmployeeId.eq(employee_id))
            .find_also_related(entity::prelude::Position)
            .all(self.db)
            .await?
            .into_iter()
            .filter_map(|(_, position)| position.map(CatalogItem::from))
            .collect();

        Ok(sorted(items))
    }

    pub async fn stacks_of(&self, employee_id: Uuid) -> Result<Vec<CatalogItem>, DbErr> {
        let items = entity::prelude::EmployeeStack::find()
            .filter(entity::employee_stack::Column::EmployeeId.eq(employee_id))
            .find_also_related(entity::prelude::Stack)
            .all(self.db)
            .await?
            .into_iter()
            .filter_map(|(_, stack)| stack.map(CatalogItem::from))
            .collect();

        Ok(sorted(items))
    }

    pub async fn chapters_of(&self, employee_id: Uuid) -> Result<Vec<CatalogItem>, DbErr> {
        let items = entity::prelude::EmployeeChapter::find()
            .filter(entity::employee_chapter::Column::EmployeeId.eq(employee_id))
            .find_also_related(entity::prelude::Chapter)
            .all(self.db)
            .await?
            .into_iter()
            .filter_map(|(_, chapter)| chapter.map(CatalogItem::from))
            .collect();

        Ok(sorted(items))
    }

    pub async fn roles_of(&self, employee_id: Uuid) -> Result<Vec<CatalogItem>, DbErr> {
        let items = entity::prelude::EmployeeRole::find()
            .filter(entity::employee_role::Column::EmployeeId.eq(employee_id))
            .find_also_related(entity::prelude::Role)
            .all(self.db)
            .await?
            .into_iter()
            .filter_map(|(_, role)| role.map(CatalogItem::from))
            .collect();

        Ok(sorted(items))
    }

    /// Gets the chapters whose lead is the given employee.
    pub async fn chapters_led_by(&self, employee_id: Uuid) -> Result<Vec<CatalogItem>, DbErr> {
        let entities = entity::prelude::Chapter::find()
            .filter(entity::chapter::Column::LeadId.eq(employee_id))
            .order_by_asc(entity::chapter::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(CatalogItem::from).collect())
    }

    pub async fn replace_positions(&self, employee_id: Uuid, ids: &[Uuid]) -> Result<(), DbErr> {
        entity::prelude::EmployeePosition::delete_many()
            .filter(entity::employee_position::Column::EmployeeId.eq(employee_id))
            .exec(self.db)
            .await?;

        if ids.is_empty() {
            return Ok(());
        }
        let links = ids.iter().map(|id| entity::employee_position::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            employee_id: ActiveValue::Set(employee_id),
            position_id: ActiveValue::Set(*id),
        });
        entity::prelude::EmployeePosition::insert_many(links)
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn replace_stacks(&self, employee_id: Uuid, ids: &[Uuid]) -> Result<(), DbErr> {
        entity::prelude::EmployeeStack::delete_many()
            .filter(entity::employee_stack::Column::EmployeeId.eq(employee_id))
            .exec(self.db)
            .await?;

        if ids.is_empty() {
            return Ok(());
        }
        let links = ids.iter().map(|id| entity::employee_stack::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            employee_id: ActiveValue::Set(employee_id),
            stack_id: ActiveValue::Set(*id),
        });
        entity::prelude::EmployeeStack::insert_many(links)
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn replace_chapters(&self, employee_id: Uuid, ids: &[Uuid]) -> Result<(), DbErr> {
        entity::prelude::EmployeeChapter::delete_many()
            .filter(entity::employee_chapter::Column::EmployeeId.eq(employee_id))
            .exec(self.db)
            .await?;

        if ids.is_empty() {
            return Ok(());
        }
        let links = ids.iter().map(|id| entity::employee_chapter::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            employee_id: ActiveValue::Set(employee_id),
            chapter_id: ActiveValue::Set(*id),
        });
        entity::prelude::EmployeeChapter::insert_many(links)
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn replace_roles(&self, employee_id: Uuid, ids: &[Uuid]) -> Result<(), DbErr> {
        entity::prelude::EmployeeRole::delete_many()
            .filter(entity::employee_role::Column::EmployeeId.eq(employee_id))
            .exec(self.db)
            .await?;

        if ids.is_empty() {
            return Ok(());
        }
        let links = ids.iter().map(|id| entity::employee_role::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            employee_id: ActiveValue::Set(employee_id),
            role_id: ActiveValue::Set(*id),
        });
        entity::prelude::EmployeeRole::insert_many(links)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Makes the employee lead of exactly the given chapters.
    ///
    /// Chapters the employee led before but that are not in `chapter_ids` lose their lead.
    pub async fn set_leading_chapters(
        &self,
        employee_id: Uuid,
        chapter_ids: &[Uuid],
    ) -> Result<(), DbErr> {
        entity::prelude::Chapter::update_many()
            .filter(entity::chapter::Column::LeadId.eq(employee_id))
            .col_expr(entity::chapter::Column::LeadId, Expr::value(Option::<Uuid>::None))
            .exec(self.db)
            .await?;

        if chapter_ids.is_empty() {
            return Ok(());
        }
        entity::prelude::Chapter::update_many()
            .filter(entity::chapter::Column::Id.is_in(chapter_ids.to_vec()))
            .col_expr(entity::chapter::Column::LeadId, Expr::value(employee_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Checks whether the employee holds a role with the given code.
    pub async fn has_role_code(&self, employee_id: Uuid, code: &str) -> Result<bool, DbErr> {
        let roles = self.roles_of(employee_id).await?;

        Ok(roles.iter().any(|role| role.code == code))
    }
}
