use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261019_000009_application::Application;

static IDX_EXPENDITURE_APPLICATION_ID_EXPENDITURE_TYPE: &str =
    "idx_expenditure_application_id_expenditure_type";
static FK_EXPENDITURE_APPLICATION_ID: &str = "fk_expenditure_application_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Expenditure::Table)
                    .if_not_exists()
                    .col(pk_auto(Expenditure::Id))
                    .col(text_null(Expenditure::Description))
                    .col(date_null(Expenditure::StartDate))
                    .col(date_null(Expenditure::EndDate))
                    .col(string(Expenditure::ExpenditureType))
                    .col(integer(Expenditure::ApplicationId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EXPENDITURE_APPLICATION_ID_EXPENDITURE_TYPE)
                    .table(Expenditure::Table)
                    .col(Expenditure::ApplicationId)
                    .col(Expenditure::ExpenditureType)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_EXPENDITURE_APPLICATION_ID)
                    .from_tbl(Expenditure::Table)
                    .from_col(Expenditure::ApplicationId)
                    .to_tbl(Application::Table)
                    .to_col(Application::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_EXPENDITURE_APPLICATION_ID)
                    .table(Expenditure::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_EXPENDITURE_APPLICATION_ID_EXPENDITURE_TYPE)
                    .table(Expenditure::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Expenditure::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Expenditure {
    Table,
    Id,
    Description,
    StartDate,
    EndDate,
    ExpenditureType,
    ApplicationId,
}
