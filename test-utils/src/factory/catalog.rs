//! Factories for the skill catalog (seniorities, positions, stacks, chapters, roles)
//! and the link rows attaching them to employees.
//!
//! Every catalog row gets a unique code derived from `next_id()`; pass the returned
//! model's `code` when a test needs to filter by it.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

pub async fn create_seniority(
    db: &DatabaseConnection,
    level: i32,
) -> Result<entity::seniority::Model, DbErr> {
    let id = next_id();
    entity::seniority::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        code: ActiveValue::Set(format!("seniority-{}", id)),
        name: ActiveValue::Set(format!("Seniority {}", id)),
        level: ActiveValue::Set(level),
    }
    .insert(db)
    .await
}

pub async fn create_position(db: &DatabaseConnection) -> Result<entity::position::Model, DbErr> {
    let id = next_id();
    entity::position::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        code: ActiveValue::Set(format!("position-{}", id)),
        name: ActiveValue::Set(format!("Position {}", id)),
    }
    .insert(db)
    .await
}

pub async fn create_stack(db: &DatabaseConnection) -> Result<entity::stack::Model, DbErr> {
    let id = next_id();
    entity::stack::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        code: ActiveValue::Set(format!("stack-{}", id)),
        name: ActiveValue::Set(format!("Stack {}", id)),
    }
    .insert(db)
    .await
}

pub async fn create_chapter(db: &DatabaseConnection) -> Result<entity::chapter::Model, DbErr> {
    let id = next_id();
    entity::chapter::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        code: ActiveValue::Set(format!("chapter-{}", id)),
        name: ActiveValue::Set(format!("Chapter {}", id)),
        lead_id: ActiveValue::Set(None),
    }
    .insert(db)
    .await
}

/// Creates a role with an explicit code, so tests can create the `admin` role.
pub async fn create_role_with_code(
    db: &DatabaseConnection,
    code: &str,
    level: i32,
) -> Result<entity::role::Model, DbErr> {
    entity::role::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        code: ActiveValue::Set(code.to_string()),
        name: ActiveValue::Set(code.to_string()),
        level: ActiveValue::Set(level),
    }
    .insert(db)
    .await
}

pub async fn create_role(db: &DatabaseConnection) -> Result<entity::role::Model, DbErr> {
    create_role_with_code(db, &format!("role-{}", next_id()), 1).await
}

pub async fn assign_position(
    db: &DatabaseConnection,
    employee_id: Uuid,
    position_id: Uuid,
) -> Result<entity::employee_position::Model, DbErr> {
    entity::employee_position::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        employee_id: ActiveValue::Set(employee_id),
        position_id: ActiveValue::Set(position_id),
    }
    .insert(db)
    .await
}

pub async fn assign_stack(
    db: &DatabaseConnection,
    employee_id: Uuid,
    stack_id: Uuid,
) -> Result<entity::employee_stack::Model, DbErr> {
    entity::employee_stack::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        employee_id: ActiveValue::Set(employee_id),
        stack_id: ActiveValue::Set(stack_id),
    }
    .insert(db)
    .await
}

pub async fn assign_chapter(
    db: &DatabaseConnection,
    employee_id: Uuid,
    chapter_id: Uuid,
) -> Result<entity::employee_chapter::Model, DbErr> {
    entity::employee_chapter::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        employee_id: ActiveValue::Set(employee_id),
        chapter_id: ActiveValue::Set(chapter_id),
    }
    .insert(db)
    .await
}

pub async fn assign_role(
    db: &DatabaseConnection,
    employee_id: Uuid,
    role_id: Uuid,
) -> Result<entity::employee_role::Model, DbErr> {
    entity::employee_role::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        employee_id: ActiveValue::Set(employee_id),
        role_id: ActiveValue::Set(role_id),
    }
    .insert(db)
    .await
}
