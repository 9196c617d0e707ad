//! Repositories for the organization hierarchy: organizational unit, line of business,
//! business function, capability, business process and activity.

pub mod activity;
pub mod business_function;
pub mod business_process;
pub mod capability;
pub mod line_of_business;
pub mod organizational_unit;
