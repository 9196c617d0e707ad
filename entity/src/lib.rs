//! SeaORM entities for the portfolio database.

pub mod prelude;

pub mod activity;
pub mod application;
pub mod budget;
pub mod business_function;
pub mod business_process;
pub mod capability;
pub mod company;
pub mod employee;
pub mod expenditure;
pub mod line_of_business;
pub mod organizational_unit;
pub mod sea_orm_active_enums;
pub mod spend;
pub mod technology;
pub mod technology_stack;
