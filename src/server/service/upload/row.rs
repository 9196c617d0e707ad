//! Typed rows of the two upload layouts.
//!
//! Every row of a workbook is parsed before anything is written, so malformed cells and
//! unknown enum literals abort an upload up front.

use entity::sea_orm_active_enums::{
    ApplicationStatus, ApplicationType, BusinessFunctionType, CurrencySuccessor, ProcessStatus,
    ResourcesRequired,
};

use crate::server::{
    data::{
        organization::business_process::NewBusinessProcess,
        portfolio::{application::NewApplication, expenditure::NewExpenditure},
    },
    error::upload::UploadError,
    service::upload::sheet::SheetRow,
};

/// Column positions of the functional view layout
mod functional_columns {
    pub const ORGANIZATIONAL_UNIT: u32 = 0;
    pub const ORGANIZATIONAL_UNIT_EMPLOYEE: u32 = 1;
    pub const LINE_OF_BUSINESS: u32 = 3;
    pub const LINE_OF_BUSINESS_EMPLOYEE: u32 = 4;
    pub const BUSINESS_FUNCTION: u32 = 6;
    pub const BUSINESS_FUNCTION_TYPE: u32 = 7;
    pub const BUSINESS_FUNCTION_EMPLOYEE: u32 = 8;
    pub const CAPABILITY: u32 = 10;
    pub const PROCESS: u32 = 11;
    pub const PROCESS_START: u32 = 12;
    pub const PROCESS_EXPECTED_END: u32 = 13;
    pub const PROCESS_END: u32 = 14;
    pub const PROCESS_STATUS: u32 = 15;
    pub const ACTIVITY: u32 = 16;
    pub const ACTIVITY_RESOURCES: u32 = 17;
}

/// Column positions of the application portfolio layout
mod portfolio_columns {
    pub const ORGANIZATIONAL_UNIT: u32 = 0;
    pub const ORGANIZATIONAL_UNIT_EMPLOYEE: u32 = 1;
    pub const LINE_OF_BUSINESS: u32 = 3;
    pub const LINE_OF_BUSINESS_EMPLOYEE: u32 = 4;
    pub const APPLICATION: u32 = 6;
    pub const APPLICATION_DESCRIPTION: u32 = 7;
    pub const APPLICATION_TYPE: u32 = 8;
    pub const APPLICATION_STATUS: u32 = 9;
    pub const IMPLEMENTATION_DATE: u32 = 10;
    pub const STACK_NAME: u32 = 11;
    pub const STACK_VERSION: u32 = 12;
    pub const STACK_TYPE: u32 = 13;
    pub const TECHNOLOGY_SPEND: u32 = 14;
    pub const TECHNOLOGY_SPEND_UNIT: u32 = 15;
    pub const EXPENDITURE_DESCRIPTION: u32 = 16;
    pub const EXPENDITURE_TYPE: u32 = 17;
    pub const EXPENDITURE_START: u32 = 18;
    pub const EXPENDITURE_END: u32 = 19;
    pub const EXPENDITURE_SPEND: u32 = 20;
    pub const EXPENDITURE_SPEND_UNIT: u32 = 21;
    pub const BUDGET_YEAR: u32 = 22;
    pub const BUDGET_AMOUNT: u32 = 23;
    pub const BUDGET_UNIT: u32 = 24;
}

/// Responsible employee given by external id and name
#[derive(Clone, Debug, PartialEq)]
pub struct EmployeeCell {
    pub employee_id: String,
    pub name: String,
}

/// A named record with an optional responsible employee
#[derive(Clone, Debug, PartialEq)]
pub struct Managed {
    pub name: String,
    pub employee: Option<EmployeeCell>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProcessCells {
    pub process: NewBusinessProcess,
    pub activity: Option<(String, ResourcesRequired)>,
}

/// Functional view row: organization hierarchy down to an optional process and activity
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionalRow {
    pub row: u32,
    pub organizational_unit: Managed,
    pub line_of_business: Managed,
    pub business_function: Managed,
    pub function_type: BusinessFunctionType,
    pub capability: String,
    pub process: Option<ProcessCells>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TechnologyCells {
    /// `name-version`, or `name` alone without a version
    pub stack_name: String,
    pub stack_type: String,
    pub spend: Option<(f64, CurrencySuccessor)>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BudgetCells {
    pub year: i32,
    pub amount: f64,
    pub successor: CurrencySuccessor,
}

/// Application portfolio row: application with optional technology, expenditure and budget
#[derive(Clone, Debug, PartialEq)]
pub struct PortfolioRow {
    pub row: u32,
    pub organizational_unit: Managed,
    pub line_of_business: Managed,
    pub application: NewApplication,
    pub technology: Option<TechnologyCells>,
    pub expenditure: Option<NewExpenditure>,
    /// Expenditure spend cells, `None` when the amount cell is blank
    pub expenditure_spend: Option<(f64, CurrencySuccessor)>,
    pub budget: Option<BudgetCells>,
}

/// A parsed row of either layout
#[derive(Clone, Debug, PartialEq)]
pub enum UploadRow {
    Functional(FunctionalRow),
    Portfolio(PortfolioRow),
}

impl UploadRow {
    pub fn row(&self) -> u32 {
        match self {
            Self::Functional(row) => row.row,
            Self::Portfolio(row) => row.row,
        }
    }
}

fn employee(row: &SheetRow, column: u32) -> Result<Option<EmployeeCell>, UploadError> {
    let Some(employee_id) = row.optional_string(column)? else {
        return Ok(None);
    };
    let name = row.optional_string(column + 1)?.unwrap_or_default();

    Ok(Some(EmployeeCell { employee_id, name }))
}

fn managed(
    row: &SheetRow,
    column: u32,
    employee_column: u32,
    field: &'static str,
) -> Result<Managed, UploadError> {
    Ok(Managed {
        name: row.string(column, field)?,
        employee: employee(row, employee_column)?,
    })
}

impl FunctionalRow {
    pub fn parse(row: &SheetRow) -> Result<Self, UploadError> {
        use functional_columns::*;

        let organizational_unit = managed(
            row,
            ORGANIZATIONAL_UNIT,
            ORGANIZATIONAL_UNIT_EMPLOYEE,
            "organizational unit name",
        )?;
        let line_of_business = managed(
            row,
            LINE_OF_BUSINESS,
            LINE_OF_BUSINESS_EMPLOYEE,
            "line of business name",
        )?;
        let business_function = managed(
            row,
            BUSINESS_FUNCTION,
            BUSINESS_FUNCTION_EMPLOYEE,
            "business function name",
        )?;
        let function_type = row.required_enum(BUSINESS_FUNCTION_TYPE, "business function type")?;
        let capability = row.string(CAPABILITY, "capability description")?;

        let process = match row.optional_string(PROCESS)? {
            Some(name) => {
                let process = NewBusinessProcess {
                    name,
                    start_date: row.optional_date(PROCESS_START)?,
                    expected_end_date: row.optional_date(PROCESS_EXPECTED_END)?,
                    end_date: row.optional_date(PROCESS_END)?,
                    status: row.required_enum::<ProcessStatus>(PROCESS_STATUS, "process status")?,
                };

                let activity = match row.optional_string(ACTIVITY)? {
                    Some(activity) => Some((
                        activity,
                        row.required_enum(ACTIVITY_RESOURCES, "resources required")?,
                    )),
                    None => None,
                };

                Some(ProcessCells { process, activity })
            }
            None => {
                if row.optional_string(ACTIVITY)?.is_some() {
                    return Err(UploadError::MissingCell {
                        row: row.row(),
                        column: PROCESS,
                        field: "business process name",
                    });
                }
                None
            }
        };

        Ok(Self {
            row: row.row(),
            organizational_unit,
            line_of_business,
            business_function,
            function_type,
            capability,
            process,
        })
    }
}

impl PortfolioRow {
    pub fn parse(row: &SheetRow) -> Result<Self, UploadError> {
        use portfolio_columns::*;

        let organizational_unit = managed(
            row,
            ORGANIZATIONAL_UNIT,
            ORGANIZATIONAL_UNIT_EMPLOYEE,
            "organizational unit name",
        )?;
        let line_of_business = managed(
            row,
            LINE_OF_BUSINESS,
            LINE_OF_BUSINESS_EMPLOYEE,
            "line of business name",
        )?;

        let application = NewApplication {
            name: row.string(APPLICATION, "application name")?,
            description: row.optional_string(APPLICATION_DESCRIPTION)?,
            application_type: row
                .required_enum::<ApplicationType>(APPLICATION_TYPE, "application type")?,
            status: row.required_enum::<ApplicationStatus>(APPLICATION_STATUS, "application status")?,
            implementation_date: row.optional_date(IMPLEMENTATION_DATE)?,
        };

        let technology = match row.optional_string(STACK_NAME)? {
            Some(name) => {
                let stack_name = match row.optional_string(STACK_VERSION)? {
                    Some(version) => format!("{}-{}", name, version),
                    None => name,
                };
                let spend = match row.optional_number(TECHNOLOGY_SPEND)? {
                    Some(amount) => Some((amount, row.successor(TECHNOLOGY_SPEND_UNIT)?)),
                    None => None,
                };

                Some(TechnologyCells {
                    stack_name,
                    stack_type: row.string(STACK_TYPE, "technology stack type")?,
                    spend,
                })
            }
            None => None,
        };

        let expenditure = match row.optional_string(EXPENDITURE_TYPE)? {
            Some(expenditure_type) => Some(NewExpenditure {
                description: row.optional_string(EXPENDITURE_DESCRIPTION)?,
                expenditure_type,
                start_date: row.optional_date(EXPENDITURE_START)?,
                end_date: row.optional_date(EXPENDITURE_END)?,
            }),
            None => None,
        };

        let expenditure_spend = match row.optional_number(EXPENDITURE_SPEND)? {
            Some(amount) => Some((amount, row.successor(EXPENDITURE_SPEND_UNIT)?)),
            None => None,
        };

        let budget = match row.optional_integer(BUDGET_YEAR)? {
            Some(year) => Some(BudgetCells {
                year,
                amount: row.number_or_zero(BUDGET_AMOUNT)?,
                successor: row.successor(BUDGET_UNIT)?,
            }),
            None => None,
        };

        Ok(Self {
            row: row.row(),
            organizational_unit,
            line_of_business,
            application,
            technology,
            expenditure,
            expenditure_spend,
            budget,
        })
    }

    /// Budget cells are only applied when the expenditure spend amount reads as zero,
    /// a blank amount included
    pub fn budget_to_apply(&self) -> Option<&BudgetCells> {
        let expenditure_amount = self.expenditure_spend.map(|(amount, _)| amount).unwrap_or(0.0);

        if expenditure_amount == 0.0 {
            self.budget.as_ref()
        } else {
            None
        }
    }
}
