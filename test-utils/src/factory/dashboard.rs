//! Factories for projects and the periodic snapshots the dashboards aggregate.

use crate::factory::helpers::next_id;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Creates an active project with a unique code `"project-{id}"`.
pub async fn create_project(db: &DatabaseConnection) -> Result<entity::project::Model, DbErr> {
    let id = next_id();
    entity::project::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        code: ActiveValue::Set(format!("project-{}", id)),
        name: ActiveValue::Set(format!("Project {}", id)),
        status: ActiveValue::Set("active".to_string()),
    }
    .insert(db)
    .await
}

/// Creates a work survey snapshot ending on `end_date`.
pub async fn create_work_survey(
    db: &DatabaseConnection,
    project_id: Uuid,
    end_date: NaiveDate,
    workload: f64,
    deadline: f64,
    learning: f64,
) -> Result<entity::work_survey::Model, DbErr> {
    entity::work_survey::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        project_id: ActiveValue::Set(project_id),
        end_date: ActiveValue::Set(end_date),
        workload: ActiveValue::Set(workload),
        deadline: ActiveValue::Set(deadline),
        learning: ActiveValue::Set(learning),
    }
    .insert(db)
    .await
}

/// Creates an audit score for one area in a `YYYY/Q` quarter.
pub async fn create_audit_score(
    db: &DatabaseConnection,
    project_id: Uuid,
    quarter: &str,
    area: &str,
    score: f64,
) -> Result<entity::audit_score::Model, DbErr> {
    entity::audit_score::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        project_id: ActiveValue::Set(project_id),
        quarter: ActiveValue::Set(quarter.to_string()),
        area: ActiveValue::Set(area.to_string()),
        score: ActiveValue::Set(score),
    }
    .insert(db)
    .await
}

/// Creates an audit action item with the given priority (`high`, `medium` or `low`).
pub async fn create_action_item(
    db: &DatabaseConnection,
    project_id: Uuid,
    quarter: &str,
    priority: &str,
) -> Result<entity::audit_action_item::Model, DbErr> {
    entity::audit_action_item::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        project_id: ActiveValue::Set(project_id),
        quarter: ActiveValue::Set(quarter.to_string()),
        priority: ActiveValue::Set(priority.to_string()),
        title: ActiveValue::Set(format!("Action item {}", next_id())),
    }
    .insert(db)
    .await
}

/// Creates an engineering health score for one area in a `YYYY/Q` quarter.
pub async fn create_engineering_health(
    db: &DatabaseConnection,
    project_id: Uuid,
    quarter: &str,
    area: &str,
    score: f64,
) -> Result<entity::engineering_health::Model, DbErr> {
    entity::engineering_health::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        project_id: ActiveValue::Set(project_id),
        quarter: ActiveValue::Set(quarter.to_string()),
        area: ActiveValue::Set(area.to_string()),
        score: ActiveValue::Set(score),
    }
    .insert(db)
    .await
}
