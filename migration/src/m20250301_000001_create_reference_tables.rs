use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Organization::Table)
                    .if_not_exists()
                    .col(pk_uuid(Organization::Id))
                    .col(string_uniq(Organization::Code))
                    .col(string(Organization::Name))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Country::Table)
                    .if_not_exists()
                    .col(pk_uuid(Country::Id))
                    .col(string_uniq(Country::Code))
                    .col(string(Country::Name))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(City::Table)
                    .if_not_exists()
                    .col(pk_uuid(City::Id))
                    .col(uuid(City::CountryId))
                    .col(string(City::Name))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_city_country_id")
                            .from(City::Table, City::CountryId)
                            .to(Country::Table, Country::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Seniority::Table)
                    .if_not_exists()
                    .col(pk_uuid(Seniority::Id))
                    .col(string_uniq(Seniority::Code))
                    .col(string(Seniority::Name))
                    .col(integer(Seniority::Level))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Position::Table)
                    .if_not_exists()
                    .col(pk_uuid(Position::Id))
                    .col(string_uniq(Position::Code))
                    .col(string(Position::Name))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Stack::Table)
                    .if_not_exists()
                    .col(pk_uuid(Stack::Id))
                    .col(string_uniq(Stack::Code))
                    .col(string(Stack::Name))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Chapter::Table)
                    .if_not_exists()
                    .col(pk_uuid(Chapter::Id))
                    .col(string_uniq(Chapter::Code))
                    .col(string(Chapter::Name))
                    .col(uuid_null(Chapter::LeadId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Role::Table)
                    .if_not_exists()
                    .col(pk_uuid(Role::Id))
                    .col(string_uniq(Role::Code))
                    .col(string(Role::Name))
                    .col(integer(Role::Level))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Role::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Chapter::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Stack::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Position::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Seniority::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(City::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Country::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Organization::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Organization {
    Table,
    Id,
    Code,
    Name,
}

#[derive(DeriveIden)]
pub enum Country {
    Table,
    Id,
    Code,
    Name,
}

#[derive(DeriveIden)]
pub enum City {
    Table,
    Id,
    CountryId,
    Name,
}

#[derive(DeriveIden)]
pub enum Seniority {
    Table,
    Id,
    Code,
    Name,
    Level,
}

#[derive(DeriveIden)]
pub enum Position {
    Table,
    Id,
    Code,
    Name,
}

#[derive(DeriveIden)]
pub enum Stack {
    Table,
    Id,
    Code,
    Name,
}

#[derive(DeriveIden)]
pub enum Chapter {
    Table,
    Id,
    Code,
    Name,
    LeadId,
}

#[derive(DeriveIden)]
pub enum Role {
    Table,
    Id,
    Code,
    Name,
    Level,
}
