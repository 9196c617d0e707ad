use serde::{Deserialize, Serialize};

/// Spend report for a company.
///
/// `years`, `running_totals` and `growing_totals` are aligned by index and hold the five
/// years ending at the current year in descending order. `lob_names`, `lob_spend` and
/// `lob_budget` are aligned by index and hold the current year only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct YearlySpendDetailsDto {
    /// Years of the trailing window, current year first
    pub years: Vec<i32>,
    /// Spend of applications with status `Running`, per year
    pub running_totals: Vec<f64>,
    /// Spend of applications with status `InProgress`, per year
    pub growing_totals: Vec<f64>,
    /// Line of business names in order of first appearance
    pub lob_names: Vec<String>,
    /// Current-year spend per line of business
    pub lob_spend: Vec<f64>,
    /// Current-year budget per line of business
    pub lob_budget: Vec<f64>,
}
