use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "employee")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub full_name: String,
    pub display_name: String,
    #[sea_orm(unique)]
    pub team_email: String,
    pub personal_email: String,
    pub phone_number: String,
    pub avatar: String,
    pub gender: String,
    pub address: String,
    pub place_of_residence: String,
    pub date_of_birth: Option<Date>,
    pub country: String,
    pub city: String,
    pub working_status: String,
    pub joined_date: Option<Date>,
    pub left_date: Option<Date>,
    pub line_manager_id: Option<Uuid>,
    pub referred_by: Option<Uuid>,
    pub seniority_id: Option<Uuid>,
    pub discord_account_id: Option<Uuid>,
    pub wise_recipient_id: String,
    pub wise_account_number: String,
    pub wise_recipient_email: String,
    pub wise_recipient_name: String,
    pub wise_currency: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::social_account::Entity")]
    SocialAccount,
    #[sea_orm(has_many = "super::employee_organization::Entity")]
    EmployeeOrganization,
    #[sea_orm(has_one = "super::base_salary::Entity")]
    BaseSalary,
}

impl Related<super::social_account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SocialAccount.def()
    }
}

impl Related<super::employee_organization::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EmployeeOrganization.def()
    }
}

impl Related<super::base_salary::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BaseSalary.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
