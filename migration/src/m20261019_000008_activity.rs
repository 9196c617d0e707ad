use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261019_000007_business_process::BusinessProcess;

static IDX_ACTIVITY_BUSINESS_PROCESS_ID: &str = "idx_activity_business_process_id";
static FK_ACTIVITY_BUSINESS_PROCESS_ID: &str = "fk_activity_business_process_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Activity::Table)
                    .if_not_exists()
                    .col(pk_auto(Activity::Id))
                    .col(string(Activity::Name))
                    .col(string_len(Activity::ResourcesRequired, 32))
                    .col(integer(Activity::BusinessProcessId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ACTIVITY_BUSINESS_PROCESS_ID)
                    .table(Activity::Table)
                    .col(Activity::BusinessProcessId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ACTIVITY_BUSINESS_PROCESS_ID)
                    .from_tbl(Activity::Table)
                    .from_col(Activity::BusinessProcessId)
                    .to_tbl(BusinessProcess::Table)
                    .to_col(BusinessProcess::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ACTIVITY_BUSINESS_PROCESS_ID)
                    .table(Activity::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ACTIVITY_BUSINESS_PROCESS_ID)
                    .table(Activity::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Activity::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Activity {
    Table,
    Id,
    Name,
    ResourcesRequired,
    BusinessProcessId,
}
