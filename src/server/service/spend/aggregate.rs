use std::collections::HashMap;

use chrono::Datelike;
use entity::sea_orm_active_enums::ApplicationStatus;

use crate::{
    model::spend::YearlySpendDetailsDto,
    server::{
        error::portfolio::PortfolioError,
        model::{
            db::{ApplicationModel, SpendModel},
            spend::{
                is_technology_spend_type, technology_expenditure_type, SpendSnapshot,
                SpendTarget,
            },
        },
        util::currency::normalize_amount,
    },
};

/// Number of years in the trailing window, the current year included
pub const YEAR_WINDOW: i32 = 5;

/// Compute the yearly spend report of a company from its snapshot.
///
/// - `years` runs from `current_year` down to `current_year - 4`. For each year, spend dated in
///   that year is summed into the running total when its application is `Running` and into the
///   growing total when it is `InProgress`.
/// - Technology spend only counts when its expenditure type is the one its stack books to
///   (`INFRA` on `CLOUD` stacks, `LICENSE` otherwise). Expenditure spend only counts when its
///   type is neither `INFRA` nor `LICENSE`. Spend matching neither is ignored. Types compare
///   case-insensitively.
/// - Current-year spend of every application, whatever its status, and budgets for the current
///   year are summed per line of business name. Names keep the order in which lines of business
///   were created and duplicates share one bucket.
///
/// Amounts are normalized with [`normalize_amount`].
pub fn aggregate_yearly_spend(
    snapshot: &SpendSnapshot,
    current_year: i32,
) -> Result<YearlySpendDetailsDto, PortfolioError> {
    let applications: HashMap<i32, &ApplicationModel> =
        snapshot.applications.iter().map(|a| (a.id, a)).collect();
    let lob_names_by_id: HashMap<i32, &str> = snapshot
        .lines_of_business
        .iter()
        .map(|lob| (lob.id, lob.name.as_str()))
        .collect();

    let attributed = attribute_spend(snapshot, &applications)?;

    let years: Vec<i32> = (0..YEAR_WINDOW).map(|offset| current_year - offset).collect();
    let mut running_totals = vec![0.0; years.len()];
    let mut growing_totals = vec![0.0; years.len()];

    for (index, year) in years.iter().enumerate() {
        for &(spend, application) in attributed.iter() {
            if spend.date_of_update.year() != *year {
                continue;
            }

            let amount = normalize_amount(spend.amount, spend.successor);
            match application.status {
                ApplicationStatus::Running => running_totals[index] += amount,
                ApplicationStatus::InProgress => growing_totals[index] += amount,
                ApplicationStatus::Planned | ApplicationStatus::Retired => {}
            }
        }
    }

    let mut lob_names: Vec<String> = Vec::new();
    let mut lob_index: HashMap<&str, usize> = HashMap::new();
    for lob in snapshot.lines_of_business.iter() {
        if !lob_index.contains_key(lob.name.as_str()) {
            lob_index.insert(lob.name.as_str(), lob_names.len());
            lob_names.push(lob.name.clone());
        }
    }

    let bucket_of = |application: &ApplicationModel| -> Result<usize, PortfolioError> {
        lob_names_by_id
            .get(&application.line_of_business_id)
            .and_then(|name| lob_index.get(name).copied())
            .ok_or(PortfolioError::ReferenceNotFound {
                kind: "Line of business",
                id: application.line_of_business_id,
            })
    };

    let mut lob_spend = vec![0.0; lob_names.len()];
    for &(spend, application) in attributed.iter() {
        if spend.date_of_update.year() == current_year {
            lob_spend[bucket_of(application)?] += normalize_amount(spend.amount, spend.successor);
        }
    }

    let mut lob_budget = vec![0.0; lob_names.len()];
    for budget in snapshot.budgets.iter().filter(|b| b.year == current_year) {
        let application = applications.get(&budget.application_id).copied().ok_or(
            PortfolioError::ReferenceNotFound {
                kind: "Application",
                id: budget.application_id,
            },
        )?;

        lob_budget[bucket_of(application)?] += normalize_amount(budget.amount, budget.successor);
    }

    Ok(YearlySpendDetailsDto {
        years,
        running_totals,
        growing_totals,
        lob_names,
        lob_spend,
        lob_budget,
    })
}

/// Pair every countable spend with the application it is attributed to
fn attribute_spend<'s>(
    snapshot: &'s SpendSnapshot,
    applications: &HashMap<i32, &'s ApplicationModel>,
) -> Result<Vec<(&'s SpendModel, &'s ApplicationModel)>, PortfolioError> {
    let technologies: HashMap<i32, _> = snapshot.technologies.iter().map(|t| (t.id, t)).collect();
    let stacks: HashMap<i32, _> = snapshot
        .technology_stacks
        .iter()
        .map(|s| (s.id, s))
        .collect();
    let expenditures: HashMap<i32, _> = snapshot.expenditures.iter().map(|e| (e.id, e)).collect();

    let application = |id: i32| -> Result<&'s ApplicationModel, PortfolioError> {
        applications
            .get(&id)
            .copied()
            .ok_or(PortfolioError::ReferenceNotFound {
                kind: "Application",
                id,
            })
    };

    let mut attributed = Vec::new();
    for spend in snapshot.spends.iter() {
        match SpendTarget::from(spend) {
            SpendTarget::Technology(id) => {
                let Some(technology) = technologies.get(&id) else {
                    continue;
                };
                let stack = stacks.get(&technology.technology_stack_id).ok_or(
                    PortfolioError::ReferenceNotFound {
                        kind: "Technology stack",
                        id: technology.technology_stack_id,
                    },
                )?;

                if spend
                    .expenditure_type
                    .trim()
                    .eq_ignore_ascii_case(technology_expenditure_type(&stack.stack_type))
                {
                    attributed.push((spend, application(technology.application_id)?));
                }
            }
            SpendTarget::Expenditure(id) => {
                let Some(expenditure) = expenditures.get(&id) else {
                    continue;
                };

                if !is_technology_spend_type(&spend.expenditure_type) {
                    attributed.push((spend, application(expenditure.application_id)?));
                }
            }
        }
    }

    Ok(attributed)
}
