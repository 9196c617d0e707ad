use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20261019_000002_employee::Employee,
    m20261019_000003_organizational_unit::OrganizationalUnit,
};

static IDX_LINE_OF_BUSINESS_ORGANIZATIONAL_UNIT_ID: &str =
    "idx_line_of_business_organizational_unit_id";
static FK_LINE_OF_BUSINESS_ORGANIZATIONAL_UNIT_ID: &str =
    "fk_line_of_business_organizational_unit_id";
static FK_LINE_OF_BUSINESS_EMPLOYEE_ID: &str = "fk_line_of_business_employee_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LineOfBusiness::Table)
                    .if_not_exists()
                    .col(pk_auto(LineOfBusiness::Id))
                    .col(string(LineOfBusiness::Name))
                    .col(integer(LineOfBusiness::OrganizationalUnitId))
                    .col(integer_null(LineOfBusiness::EmployeeId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_LINE_OF_BUSINESS_ORGANIZATIONAL_UNIT_ID)
                    .table(LineOfBusiness::Table)
                    .col(LineOfBusiness::OrganizationalUnitId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_LINE_OF_BUSINESS_ORGANIZATIONAL_UNIT_ID)
                    .from_tbl(LineOfBusiness::Table)
                    .from_col(LineOfBusiness::OrganizationalUnitId)
                    .to_tbl(OrganizationalUnit::Table)
                    .to_col(OrganizationalUnit::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_LINE_OF_BUSINESS_EMPLOYEE_ID)
                    .from_tbl(LineOfBusiness::Table)
                    .from_col(LineOfBusiness::EmployeeId)
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
                    .name(FK_LINE_OF_BUSINESS_EMPLOYEE_ID)
                    .table(LineOfBusiness::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_LINE_OF_BUSINESS_ORGANIZATIONAL_UNIT_ID)
                    .table(LineOfBusiness::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_LINE_OF_BUSINESS_ORGANIZATIONAL_UNIT_ID)
                    .table(LineOfBusiness::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(LineOfBusiness::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum LineOfBusiness {
    Table,
    Id,
    Name,
    OrganizationalUnitId,
    EmployeeId,
}
