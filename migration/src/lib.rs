pub use sea_orm_migration::prelude::*;

mod m20261019_000001_company;
mod m20261019_000002_employee;
mod m20261019_000003_organizational_unit;
mod m20261019_000004_line_of_business;
mod m20261019_000005_business_function;
mod m20261019_000006_capability;
mod m20261019_000007_business_process;
mod m20261019_000008_activity;
mod m20261019_000009_application;
mod m20261019_000010_technology_stack;
mod m20261019_000011_technology;
mod m20261019_000012_expenditure;
mod m20261019_000013_spend;
mod m20261019_000014_budget;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261019_000001_company::Migration),
            Box::new(m20261019_000002_employee::Migration),
            Box::new(m20261019_000003_organizational_unit::Migration),
            Box::new(m20261019_000004_line_of_business::Migration),
            Box::new(m20261019_000005_business_function::Migration),
            Box::new(m20261019_000006_capability::Migration),
            Box::new(m20261019_000007_business_process::Migration),
            Box::new(m20261019_000008_activity::Migration),
            Box::new(m20261019_000009_application::Migration),
            Box::new(m20261019_000010_technology_stack::Migration),
            Box::new(m20261019_000011_technology::Migration),
            Box::new(m20261019_000012_expenditure::Migration),
            Box::new(m20261019_000013_spend::Migration),
            Box::new(m20261019_000014_budget::Migration),
        ]
    }
}
