use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "project")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub code: String,
    pub name: String,
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::work_survey::Entity")]
    WorkSurvey,
}

impl Related<super::work_survey::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WorkSurvey.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
