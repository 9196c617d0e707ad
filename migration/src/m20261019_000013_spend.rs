use sea_orm_migration::{prelude::*, schema::*};

static IDX_SPEND_TARGET_EXPENDITURE_TYPE: &str = "idx_spend_target_expenditure_type";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Spend::Table)
                    .if_not_exists()
                    .col(pk_auto(Spend::Id))
                    .col(double(Spend::Amount))
                    .col(string_len(Spend::Successor, 8))
                    .col(date(Spend::DateOfUpdate))
                    .col(string(Spend::ExpenditureType))
                    .col(string_len(Spend::TargetKind, 16))
                    .col(integer(Spend::TargetId))
                    .to_owned(),
            )
            .await?;

        // target_id is polymorphic over technology/expenditure, so only the
        // natural key is enforced here
        manager
            .create_index(
                Index::create()
                    .name(IDX_SPEND_TARGET_EXPENDITURE_TYPE)
                    .table(Spend::Table)
                    .col(Spend::TargetKind)
                    .col(Spend::TargetId)
                    .col(Spend::ExpenditureType)
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
                    .name(IDX_SPEND_TARGET_EXPENDITURE_TYPE)
                    .table(Spend::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Spend::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Spend {
    Table,
    Id,
    Amount,
    Successor,
    DateOfUpdate,
    ExpenditureType,
    TargetKind,
    TargetId,
}
