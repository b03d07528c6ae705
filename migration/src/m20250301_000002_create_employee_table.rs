use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DiscordAccount::Table)
                    .if_not_exists()
                    .col(pk_uuid(DiscordAccount::Id))
                    .col(string_uniq(DiscordAccount::DiscordId))
                    .col(string(DiscordAccount::Username))
                    .col(timestamp_with_time_zone(DiscordAccount::CreatedAt))
                    .col(timestamp_with_time_zone(DiscordAccount::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Employee::Table)
                    .if_not_exists()
                    .col(pk_uuid(Employee::Id))
                    .col(string(Employee::FullName))
                    .col(string(Employee::DisplayName))
                    .col(string_uniq(Employee::TeamEmail))
                    .col(string(Employee::PersonalEmail))
                    .col(string(Employee::PhoneNumber))
                    .col(string(Employee::Avatar))
                    .col(string(Employee::Gender))
                    .col(string(Employee::Address))
                    .col(string(Employee::PlaceOfResidence))
                    .col(date_null(Employee::DateOfBirth))
                    .col(string(Employee::Country))
                    .col(string(Employee::City))
                    .col(string(Employee::WorkingStatus))
                    .col(date_null(Employee::JoinedDate))
                    .col(date_null(Employee::LeftDate))
                    .col(uuid_null(Employee::LineManagerId))
                    .col(uuid_null(Employee::ReferredBy))
                    .col(uuid_null(Employee::SeniorityId))
                    .col(uuid_null(Employee::DiscordAccountId))
                    .col(string(Employee::WiseRecipientId))
                    .col(string(Employee::WiseAccountNumber))
                    .col(string(Employee::WiseRecipientEmail))
                    .col(string(Employee::WiseRecipientName))
                    .col(string(Employee::WiseCurrency))
                    .col(timestamp_with_time_zone(Employee::CreatedAt))
                    .col(timestamp_with_time_zone(Employee::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_employee_line_manager_id")
                    .table(Employee::Table)
                    .col(Employee::LineManagerId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Employee::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(DiscordAccount::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DiscordAccount {
    Table,
    Id,
    DiscordId,
    Username,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum Employee {
    Table,
    Id,
    FullName,
    DisplayName,
    TeamEmail,
    PersonalEmail,
    PhoneNumber,
    Avatar,
    Gender,
    Address,
    PlaceOfResidence,
    DateOfBirth,
    Country,
    City,
    WorkingStatus,
    JoinedDate,
    LeftDate,
    LineManagerId,
    ReferredBy,
    SeniorityId,
    DiscordAccountId,
    WiseRecipientId,
    WiseAccountNumber,
    WiseRecipientEmail,
    WiseRecipientName,
    WiseCurrency,
    CreatedAt,
    UpdatedAt,
}
