//! Country and city factories.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Creates a country with the given display name and a unique code.
pub async fn create_country(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entity::country::Model, DbErr> {
    entity::country::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        code: ActiveValue::Set(format!("c{}", next_id())),
        name: ActiveValue::Set(name.to_string()),
    }
    .insert(db)
    .await
}

/// Creates a city belonging to `country_id`.
pub async fn create_city(
    db: &DatabaseConnection,
    country_id: Uuid,
    name: &str,
) -> Result<entity::city::Model, DbErr> {
    entity::city::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        country_id: ActiveValue::Set(country_id),
        name: ActiveValue::Set(name.to_string()),
    }
    .insert(db)
    .await
}
