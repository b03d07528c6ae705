use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::catalog::CatalogItem;

pub struct OrganizationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrganizationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn all(&self) -> Result<Vec<CatalogItem>, DbErr> {
        let entities = entity::prelude::Organization::find()
            .order_by_asc(entity::organization::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(CatalogItem::from).collect())
    }

    /// Gets the organizations an employee belongs to, ordered by name.
    pub async fn find_by_employee(&self, employee_id: Uuid) -> Result<Vec<CatalogItem>, DbErr> {
        let mut organizations: Vec<CatalogItem> = entity::prelude::EmployeeOrganization::find()
            .filter(entity::employee_organization::Column::EmployeeId.eq(employee_id))
            .find_also_related(entity::prelude::Organization)
            .all(self.db)
            .await?
            .into_iter()
            .filter_map(|(_, organization)| organization.map(CatalogItem::from))
            .collect();
        organizations.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(organizations)
    }

    /// Replaces all organization memberships of an employee.
    ///
    /// Existing links are deleted and one link per id is inserted.
    pub async fn replace_for_employee(
        &self,
        employee_id: Uuid,
        organization_ids: &[Uuid],
    ) -> Result<(), DbErr> {
        entity::prelude::EmployeeOrganization::delete_many()
            .filter(entity::employee_organization::Column::EmployeeId.eq(employee_id))
            .exec(self.db)
            .await?;

        if organization_ids.is_empty() {
            return Ok(());
        }

        let links = organization_ids
            .iter()
            .map(|organization_id| entity::employee_organization::ActiveModel {
                id: ActiveValue::Set(Uuid::new_v4()),
                employee_id: ActiveValue::Set(employee_id),
                organization_id: ActiveValue::Set(*organization_id),
            });
        entity::prelude::EmployeeOrganization::insert_many(links)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
