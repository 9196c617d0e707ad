use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261019_000009_application::Application;

static IDX_BUDGET_APPLICATION_ID_YEAR: &str = "idx_budget_application_id_year";
static FK_BUDGET_APPLICATION_ID: &str = "fk_budget_application_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Budget::Table)
                    .if_not_exists()
                    .col(pk_auto(Budget::Id))
                    .col(double(Budget::Amount))
                    .col(integer(Budget::Year))
                    .col(string_len(Budget::Successor, 8))
                    .col(integer(Budget::ApplicationId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BUDGET_APPLICATION_ID_YEAR)
                    .table(Budget::Table)
                    .col(Budget::ApplicationId)
                    .col(Budget::Year)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BUDGET_APPLICATION_ID)
                    .from_tbl(Budget::Table)
                    .from_col(Budget::ApplicationId)
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
                    .name(FK_BUDGET_APPLICATION_ID)
                    .table(Budget::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BUDGET_APPLICATION_ID_YEAR)
                    .table(Budget::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Budget::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Budget {
    Table,
    Id,
    Amount,
    Year,
    Successor,
    ApplicationId,
}
