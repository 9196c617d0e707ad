use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261019_000004_line_of_business::LineOfBusiness;

static IDX_APPLICATION_LINE_OF_BUSINESS_ID: &str = "idx_application_line_of_business_id";
static FK_APPLICATION_LINE_OF_BUSINESS_ID: &str = "fk_application_line_of_business_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Application::Table)
                    .if_not_exists()
                    .col(pk_auto(Application::Id))
                    .col(string(Application::Name))
                    .col(text_null(Application::Description))
                    .col(string_len(Application::ApplicationType, 32))
                    .col(string_len(Application::Status, 32))
                    .col(date_null(Application::ImplementationDate))
                    .col(integer(Application::LineOfBusinessId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_APPLICATION_LINE_OF_BUSINESS_ID)
                    .table(Application::Table)
                    .col(Application::LineOfBusinessId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_APPLICATION_LINE_OF_BUSINESS_ID)
                    .from_tbl(Application::Table)
                    .from_col(Application::LineOfBusinessId)
                    .to_tbl(LineOfBusiness::Table)
                    .to_col(LineOfBusiness::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_APPLICATION_LINE_OF_BUSINESS_ID)
                    .table(Application::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_APPLICATION_LINE_OF_BUSINESS_ID)
                    .table(Application::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Application::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Application {
    Table,
    Id,
    Name,
    Description,
    ApplicationType,
    Status,
    ImplementationDate,
    LineOfBusinessId,
}
