//! Repositories for the application portfolio: applications, technology stacks, technologies,
//! expenditures, spend and budgets.

pub mod application;
pub mod budget;
pub mod expenditure;
pub mod spend;
pub mod technology;
pub mod technology_stack;
