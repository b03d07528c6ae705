use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Project::Table)
                    .if_not_exists()
                    .col(pk_uuid(Project::Id))
                    .col(string_uniq(Project::Code))
                    .col(string(Project::Name))
                    .col(string(Project::Status))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(WorkSurvey::Table)
                    .if_not_exists()
                    .col(pk_uuid(WorkSurvey::Id))
                    .col(uuid(WorkSurvey::ProjectId))
                    .col(date(WorkSurvey::EndDate))
                    .col(double(WorkSurvey::Workload))
                    .col(double(WorkSurvey::Deadline))
                    .col(double(WorkSurvey::Learning))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_work_survey_project_id")
                            .from(WorkSurvey::Table, WorkSurvey::ProjectId)
                            .to(Project::Table, Project::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AuditScore::Table)
                    .if_not_exists()
                    .col(pk_uuid(AuditScore::Id))
                    .col(uuid(AuditScore::ProjectId))
                    .col(string(AuditScore::Quarter))
                    .col(string(AuditScore::Area))
                    .col(double(AuditScore::Score))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_audit_score_project_id")
                            .from(AuditScore::Table, AuditScore::ProjectId)
                            .to(Project::Table, Project::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AuditActionItem::Table)
                    .if_not_exists()
                    .col(pk_uuid(AuditActionItem::Id))
                    .col(uuid(AuditActionItem::ProjectId))
                    .col(string(AuditActionItem::Quarter))
                    .col(string(AuditActionItem::Priority))
                    .col(string(AuditActionItem::Title))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_audit_action_item_project_id")
                            .from(AuditActionItem::Table, AuditActionItem::ProjectId)
                            .to(Project::Table, Project::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(EngineeringHealth::Table)
                    .if_not_exists()
                    .col(pk_uuid(EngineeringHealth::Id))
                    .col(uuid(EngineeringHealth::ProjectId))
                    .col(string(EngineeringHealth::Quarter))
                    .col(string(EngineeringHealth::Area))
                    .col(double(EngineeringHealth::Score))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_engineering_health_project_id")
                            .from(EngineeringHealth::Table, EngineeringHealth::ProjectId)
                            .to(Project::Table, Project::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EngineeringHealth::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AuditActionItem::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AuditScore::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(WorkSurvey::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Project::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Project {
    Table,
    Id,
    Code,
    Name,
    Status,
}

#[derive(DeriveIden)]
pub enum WorkSurvey {
    Table,
    Id,
    ProjectId,
    EndDate,
    Workload,
    Deadline,
    Learning,
}

#[derive(DeriveIden)]
pub enum AuditScore {
    Table,
    Id,
    ProjectId,
    Quarter,
    Area,
    Score,
}

#[derive(DeriveIden)]
pub enum AuditActionItem {
    Table,
    Id,
    ProjectId,
    Quarter,
    Priority,
    Title,
}

#[derive(DeriveIden)]
pub enum EngineeringHealth {
    Table,
    Id,
    ProjectId,
    Quarter,
    Area,
    Score,
}
