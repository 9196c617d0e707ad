use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261019_000005_business_function::BusinessFunction;

static IDX_CAPABILITY_BUSINESS_FUNCTION_ID: &str = "idx_capability_business_function_id";
static FK_CAPABILITY_BUSINESS_FUNCTION_ID: &str = "fk_capability_business_function_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Capability::Table)
                    .if_not_exists()
                    .col(pk_auto(Capability::Id))
                    .col(text(Capability::Description))
                    .col(integer(Capability::BusinessFunctionId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CAPABILITY_BUSINESS_FUNCTION_ID)
                    .table(Capability::Table)
                    .col(Capability::BusinessFunctionId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CAPABILITY_BUSINESS_FUNCTION_ID)
                    .from_tbl(Capability::Table)
                    .from_col(Capability::BusinessFunctionId)
                    .to_tbl(BusinessFunction::Table)
                    .to_col(BusinessFunction::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CAPABILITY_BUSINESS_FUNCTION_ID)
                    .table(Capability::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CAPABILITY_BUSINESS_FUNCTION_ID)
                    .table(Capability::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Capability::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Capability {
    Table,
    Id,
    Description,
    BusinessFunctionId,
}
