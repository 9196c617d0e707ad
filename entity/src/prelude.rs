pub use super::activity::Entity as Activity;
pub use super::application::Entity as Application;
pub use super::budget::Entity as Budget;
pub use super::business_function::Entity as BusinessFunction;
pub use super::business_process::Entity as BusinessProcess;
pub use super::capability::Entity as Capability;
pub use super::company::Entity as Company;
pub use super::employee::Entity as Employee;
pub use super::expenditure::Entity as Expenditure;
pub use super::line_of_business::Entity as LineOfBusiness;
pub use super::organizational_unit::Entity as OrganizationalUnit;
pub use super::spend::Entity as Spend;
pub use super::technology::Entity as Technology;
pub use super::technology_stack::Entity as TechnologyStack;
