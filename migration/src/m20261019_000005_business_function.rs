use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20261019_000002_employee::Employee, m20261019_000004_line_of_business::LineOfBusiness,
};

static IDX_BUSINESS_FUNCTION_LINE_OF_BUSINESS_ID: &str =
    "idx_business_function_line_of_business_id";
static FK_BUSINESS_FUNCTION_LINE_OF_BUSINESS_ID: &str = "fk_business_function_line_of_business_id";
static FK_BUSINESS_FUNCTION_EMPLOYEE_ID: &str = "fk_business_function_employee_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BusinessFunction::Table)
                    .if_not_exists()
                    .col(pk_auto(BusinessFunction::Id))
                    .col(string(BusinessFunction::Name))
                    .col(string_len(BusinessFunction::FunctionType, 32))
                    .col(integer(BusinessFunction::LineOfBusinessId))
                    .col(integer_null(BusinessFunction::EmployeeId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BUSINESS_FUNCTION_LINE_OF_BUSINESS_ID)
                    .table(BusinessFunction::Table)
                    .col(BusinessFunction::LineOfBusinessId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BUSINESS_FUNCTION_LINE_OF_BUSINESS_ID)
                    .from_tbl(BusinessFunction::Table)
                    .from_col(BusinessFunction::LineOfBusinessId)
                    .to_tbl(LineOfBusiness::Table)
                    .to_col(LineOfBusiness::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BUSINESS_FUNCTION_EMPLOYEE_ID)
                    .from_tbl(BusinessFunction::Table)
                    .from_col(BusinessFunction::EmployeeId)
                    .to_tbl(Employee::Table)
                    .to_col(Employee::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_BUSINESS_FUNCTION_EMPLOYEE_ID)
                    .table(BusinessFunction::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_BUSINESS_FUNCTION_LINE_OF_BUSINESS_ID)
                    .table(BusinessFunction::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BUSINESS_FUNCTION_LINE_OF_BUSINESS_ID)
                    .table(BusinessFunction::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(BusinessFunction::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum BusinessFunction {
    Table,
    Id,
    Name,
    FunctionType,
    LineOfBusinessId,
    EmployeeId,
}
