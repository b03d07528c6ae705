use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use uuid::Uuid;

/// Country and city lookups used to validate personal info.
pub struct LocationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LocationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a country id by its display name.
    pub async fn find_country_id_by_name(&self, name: &str) -> Result<Option<Uuid>, DbErr> {
        let country = entity::prelude::Country::find()
            .filter(entity::country::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(country.map(|c| c.id))
    }

    /// Checks whether the country has a city with the given name.
    pub async fn city_in_country(&self, country_id: Uuid, city: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::City::find()
            .filter(entity::city::Column::CountryId.eq(country_id))
            .filter(entity::city::Column::Name.eq(city))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
