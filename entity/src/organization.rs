use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "organization")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub code: String,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::employee_organization::Entity")]
    EmployeeOrganization,
}

impl Related<super::employee_organization::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EmployeeOrganization.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
