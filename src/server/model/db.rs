//! Database model type aliases.
//!
//! Short names for the SeaORM models of the `entity` crate used across repositories
//! and services.

pub type CompanyModel = entity::company::Model;

/// Person responsible for an organizational unit, line of business or business function,
/// identified across companies by their external `employee_id`.
pub type EmployeeModel = entity::employee::Model;

pub type OrganizationalUnitModel = entity::organizational_unit::Model;

pub type LineOfBusinessModel = entity::line_of_business::Model;

pub type BusinessFunctionModel = entity::business_function::Model;

pub type CapabilityModel = entity::capability::Model;

pub type BusinessProcessModel = entity::business_process::Model;

pub type ActivityModel = entity::activity::Model;

pub type ApplicationModel = entity::application::Model;

/// Technology stacks are shared by every company, `name` holds the `name-version` composite.
pub type TechnologyStackModel = entity::technology_stack::Model;

/// Link between an application and a technology stack.
pub type TechnologyModel = entity::technology::Model;

pub type ExpenditureModel = entity::expenditure::Model;

/// Dated amount attributed to a technology or an expenditure, see
/// [`SpendTarget`](crate::server::model::spend::SpendTarget).
pub type SpendModel = entity::spend::Model;

pub type BudgetModel = entity::budget::Model;
