use sea_orm_migration::{prelude::*, schema::*};

static IDX_TECHNOLOGY_STACK_NAME_STACK_TYPE: &str = "idx_technology_stack_name_stack_type";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TechnologyStack::Table)
                    .if_not_exists()
                    .col(pk_auto(TechnologyStack::Id))
                    .col(string(TechnologyStack::Name))
                    .col(string(TechnologyStack::StackType))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TECHNOLOGY_STACK_NAME_STACK_TYPE)
                    .table(TechnologyStack::Table)
                    .col(TechnologyStack::Name)
                    .col(TechnologyStack::StackType)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TECHNOLOGY_STACK_NAME_STACK_TYPE)
                    .table(TechnologyStack::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TechnologyStack::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum TechnologyStack {
    Table,
    Id,
    Name,
    StackType,
}
