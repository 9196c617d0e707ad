use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20261019_000009_application::Application,
    m20261019_000010_technology_stack::TechnologyStack,
};

static IDX_TECHNOLOGY_APPLICATION_ID_TECHNOLOGY_STACK_ID: &str =
    "idx_technology_application_id_technology_stack_id";
static FK_TECHNOLOGY_APPLICATION_ID: &str = "fk_technology_application_id";
static FK_TECHNOLOGY_TECHNOLOGY_STACK_ID: &str = "fk_technology_technology_stack_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Technology::Table)
                    .if_not_exists()
                    .col(pk_auto(Technology::Id))
                    .col(integer(Technology::ApplicationId))
                    .col(integer(Technology::TechnologyStackId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TECHNOLOGY_APPLICATION_ID_TECHNOLOGY_STACK_ID)
                    .table(Technology::Table)
                    .col(Technology::ApplicationId)
                    .col(Technology::TechnologyStackId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TECHNOLOGY_APPLICATION_ID)
                    .from_tbl(Technology::Table)
                    .from_col(Technology::ApplicationId)
                    .to_tbl(Application::Table)
                    .to_col(Application::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TECHNOLOGY_TECHNOLOGY_STACK_ID)
                    .from_tbl(Technology::Table)
                    .from_col(Technology::TechnologyStackId)
                    .to_tbl(TechnologyStack::Table)
                    .to_col(TechnologyStack::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TECHNOLOGY_TECHNOLOGY_STACK_ID)
                    .table(Technology::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TECHNOLOGY_APPLICATION_ID)
                    .table(Technology::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TECHNOLOGY_APPLICATION_ID_TECHNOLOGY_STACK_ID)
                    .table(Technology::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Technology::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Technology {
    Table,
    Id,
    ApplicationId,
    TechnologyStackId,
}
