//! Read-only access to the project report tables behind the dashboards.

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use crate::server::model::dashboard::{Project, WorkSurvey};

pub struct DashboardRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DashboardRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_project(&self, id: Uuid) -> Result<Option<Project>, DbErr> {
        let entity = entity::prelude::Project::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Project::from_entity))
    }

    /// Gets a project's work surveys, newest first.
    pub async fn work_surveys(&self, project_id: Uuid) -> Result<Vec<WorkSurvey>, DbErr> {
        let entities = entity::prelude::WorkSurvey::find()
            .filter(entity::work_survey::Column::ProjectId.eq(project_id))
            .order_by_desc(entity::work_survey::Column::EndDate)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(WorkSurvey::from_entity).collect())
    }

    /// Gets a project's audit action items in no particular order.
    pub async fn action_items(
        &self,
        project_id: Uuid,
    ) -> Result<Vec<entity::audit_action_item::Model>, DbErr> {
        entity::prelude::AuditActionItem::find()
            .filter(entity::audit_action_item::Column::ProjectId.eq(project_id))
            .all(self.db)
            .await
    }

    /// Gets every engineering health score across projects.
    pub async fn engineering_health_scores(
        &self,
    ) -> Result<Vec<entity::engineering_health::Model>, DbErr> {
        entity::prelude::EngineeringHealth::find().all(self.db).await
    }

    /// Gets every audit score across projects.
    pub async fn audit_scores(&self) -> Result<Vec<entity::audit_score::Model>, DbErr> {
        entity::prelude::AuditScore::find().all(self.db).await
    }
}
