use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000001_create_reference_tables::{
    Chapter, Organization, Position, Role, Stack,
};
use super::m20250301_000002_create_employee_table::Employee;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SocialAccount::Table)
                    .if_not_exists()
                    .col(pk_uuid(SocialAccount::Id))
                    .col(uuid(SocialAccount::EmployeeId))
                    .col(string(SocialAccount::AccountType))
                    .col(string(SocialAccount::AccountId))
                    .col(string(SocialAccount::Name))
                    .col(string(SocialAccount::Email))
                    .col(timestamp_with_time_zone(SocialAccount::CreatedAt))
                    .col(timestamp_with_time_zone(SocialAccount::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_social_account_employee_id")
                            .from(SocialAccount::Table, SocialAccount::EmployeeId)
                            .to(Employee::Table, Employee::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_social_account_employee_type_unique")
                            .col(SocialAccount::EmployeeId)
                            .col(SocialAccount::AccountType),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(EmployeeOrganization::Table)
                    .if_not_exists()
                    .col(pk_uuid(EmployeeOrganization::Id))
                    .col(uuid(EmployeeOrganization::EmployeeId))
                    .col(uuid(EmployeeOrganization::OrganizationId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee_organization_employee_id")
                            .from(EmployeeOrganization::Table, EmployeeOrganization::EmployeeId)
                            .to(Employee::Table, Employee::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee_organization_organization_id")
                            .from(EmployeeOrganization::Table, EmployeeOrganization::OrganizationId)
                            .to(Organization::Table, Organization::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_employee_organization_unique")
                            .col(EmployeeOrganization::EmployeeId)
                            .col(EmployeeOrganization::OrganizationId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(EmployeePosition::Table)
                    .if_not_exists()
                    .col(pk_uuid(EmployeePosition::Id))
                    .col(uuid(EmployeePosition::EmployeeId))
                    .col(uuid(EmployeePosition::PositionId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee_position_employee_id")
                            .from(EmployeePosition::Table, EmployeePosition::EmployeeId)
                            .to(Employee::Table, Employee::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee_position_position_id")
                            .from(EmployeePosition::Table, EmployeePosition::PositionId)
                            .to(Position::Table, Position::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_employee_position_unique")
                            .col(EmployeePosition::EmployeeId)
                            .col(EmployeePosition::PositionId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(EmployeeStack::Table)
                    .if_not_exists()
                    .col(pk_uuid(EmployeeStack::Id))
                    .col(uuid(EmployeeStack::EmployeeId))
                    .col(uuid(EmployeeStack::StackId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee_stack_employee_id")
                            .from(EmployeeStack::Table, EmployeeStack::EmployeeId)
                            .to(Employee::Table, Employee::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee_stack_stack_id")
                            .from(EmployeeStack::Table, EmployeeStack::StackId)
                            .to(Stack::Table, Stack::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_employee_stack_unique")
                            .col(EmployeeStack::EmployeeId)
                            .col(EmployeeStack::StackId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(EmployeeChapter::Table)
                    .if_not_exists()
                    .col(pk_uuid(EmployeeChapter::Id))
                    .col(uuid(EmployeeChapter::EmployeeId))
                    .col(uuid(EmployeeChapter::ChapterId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee_chapter_employee_id")
                            .from(EmployeeChapter::Table, EmployeeChapter::EmployeeId)
                            .to(Employee::Table, Employee::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee_chapter_chapter_id")
                            .from(EmployeeChapter::Table, EmployeeChapter::ChapterId)
                            .to(Chapter::Table, Chapter::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_employee_chapter_unique")
                            .col(EmployeeChapter::EmployeeId)
                            .col(EmployeeChapter::ChapterId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(EmployeeRole::Table)
                    .if_not_exists()
                    .col(pk_uuid(EmployeeRole::Id))
                    .col(uuid(EmployeeRole::EmployeeId))
                    .col(uuid(EmployeeRole::RoleId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee_role_employee_id")
                            .from(EmployeeRole::Table, EmployeeRole::EmployeeId)
                            .to(Employee::Table, Employee::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee_role_role_id")
                            .from(EmployeeRole::Table, EmployeeRole::RoleId)
                            .to(Role::Table, Role::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_employee_role_unique")
                            .col(EmployeeRole::EmployeeId)
                            .col(EmployeeRole::RoleId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(BaseSalary::Table)
                    .if_not_exists()
                    .col(pk_uuid(BaseSalary::Id))
                    .col(uuid_uniq(BaseSalary::EmployeeId))
                    .col(big_integer(BaseSalary::ContractAmount))
                    .col(big_integer(BaseSalary::CompanyAccountAmount))
                    .col(big_integer(BaseSalary::PersonalAccountAmount))
                    .col(string(BaseSalary::CurrencyCode))
                    .col(integer(BaseSalary::Batch))
                    .col(date_null(BaseSalary::EffectiveDate))
                    .col(timestamp_with_time_zone(BaseSalary::CreatedAt))
                    .col(timestamp_with_time_zone(BaseSalary::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_base_salary_employee_id")
                            .from(BaseSalary::Table, BaseSalary::EmployeeId)
                            .to(Employee::Table, Employee::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BaseSalary::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(EmployeeRole::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(EmployeeChapter::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(EmployeeStack::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(EmployeePosition::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(EmployeeOrganization::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SocialAccount::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SocialAccount {
    Table,
    Id,
    EmployeeId,
    AccountType,
    AccountId,
    Name,
    Email,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum EmployeeOrganization {
    Table,
    Id,
    EmployeeId,
    OrganizationId,
}

#[derive(DeriveIden)]
pub enum EmployeePosition {
    Table,
    Id,
    EmployeeId,
    PositionId,
}

#[derive(DeriveIden)]
pub enum EmployeeStack {
    Table,
    Id,
    EmployeeId,
    StackId,
}

#[derive(DeriveIden)]
pub enum EmployeeChapter {
    Table,
    Id,
    EmployeeId,
    ChapterId,
}

#[derive(DeriveIden)]
pub enum EmployeeRole {
    Table,
    Id,
    EmployeeId,
    RoleId,
}

#[derive(DeriveIden)]
pub enum BaseSalary {
    Table,
    Id,
    EmployeeId,
    ContractAmount,
    CompanyAccountAmount,
    PersonalAccountAmount,
    CurrencyCode,
    Batch,
    EffectiveDate,
    CreatedAt,
    UpdatedAt,
}
