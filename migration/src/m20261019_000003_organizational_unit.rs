use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20261019_000001_company::Company, m20261019_000002_employee::Employee};

static IDX_ORGANIZATIONAL_UNIT_COMPANY_ID: &str = "idx_organizational_unit_company_id";
static FK_ORGANIZATIONAL_UNIT_COMPANY_ID: &str = "fk_organizational_unit_company_id";
static FK_ORGANIZATIONAL_UNIT_EMPLOYEE_ID: &str = "fk_organizational_unit_employee_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrganizationalUnit::Table)
                    .if_not_exists()
                    .col(pk_auto(OrganizationalUnit::Id))
                    .col(string(OrganizationalUnit::Name))
                    .col(integer(OrganizationalUnit::CompanyId))
                    .col(integer_null(OrganizationalUnit::EmployeeId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ORGANIZATIONAL_UNIT_COMPANY_ID)
                    .table(OrganizationalUnit::Table)
                    .col(OrganizationalUnit::CompanyId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ORGANIZATIONAL_UNIT_COMPANY_ID)
                    .from_tbl(OrganizationalUnit::Table)
                    .from_col(OrganizationalUnit::CompanyId)
                    .to_tbl(Company::Table)
                    .to_col(Company::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ORGANIZATIONAL_UNIT_EMPLOYEE_ID)
                    .from_tbl(OrganizationalUnit::Table)
                    .from_col(OrganizationalUnit::EmployeeId)
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
                    .name(FK_ORGANIZATIONAL_UNIT_EMPLOYEE_ID)
                    .table(OrganizationalUnit::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ORGANIZATIONAL_UNIT_COMPANY_ID)
                    .table(OrganizationalUnit::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ORGANIZATIONAL_UNIT_COMPANY_ID)
                    .table(OrganizationalUnit::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(OrganizationalUnit::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum OrganizationalUnit {
    Table,
    Id,
    Name,
    CompanyId,
    EmployeeId,
}
