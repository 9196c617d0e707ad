use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261019_000006_capability::Capability;

static IDX_BUSINESS_PROCESS_CAPABILITY_ID: &str = "idx_business_process_capability_id";
static FK_BUSINESS_PROCESS_CAPABILITY_ID: &str = "fk_business_process_capability_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BusinessProcess::Table)
                    .if_not_exists()
                    .col(pk_auto(BusinessProcess::Id))
                    .col(string(BusinessProcess::Name))
                    .col(date_null(BusinessProcess::StartDate))
                    .col(date_null(BusinessProcess::ExpectedEndDate))
                    .col(date_null(BusinessProcess::EndDate))
                    .col(string_len(BusinessProcess::Status, 32))
                    .col(integer(BusinessProcess::CapabilityId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BUSINESS_PROCESS_CAPABILITY_ID)
                    .table(BusinessProcess::Table)
                    .col(BusinessProcess::CapabilityId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BUSINESS_PROCESS_CAPABILITY_ID)
                    .from_tbl(BusinessProcess::Table)
                    .from_col(BusinessProcess::CapabilityId)
                    .to_tbl(Capability::Table)
                    .to_col(Capability::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_BUSINESS_PROCESS_CAPABILITY_ID)
                    .table(BusinessProcess::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BUSINESS_PROCESS_CAPABILITY_ID)
                    .table(BusinessProcess::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(BusinessProcess::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum BusinessProcess {
    Table,
    Id,
    Name,
    StartDate,
    ExpectedEndDate,
    EndDate,
    Status,
    CapabilityId,
}
