//! Spend ownership and the read-only snapshot the spend report is computed from.

use entity::sea_orm_active_enums::SpendTargetKind;

use crate::server::model::db::{
    ApplicationModel, BudgetModel, ExpenditureModel, LineOfBusinessModel, SpendModel,
    TechnologyModel, TechnologyStackModel,
};

/// Stack type whose technology spend is booked as infrastructure
pub const CLOUD: &str = "CLOUD";
/// Expenditure type of spend attached to a technology on a cloud stack
pub const INFRA: &str = "INFRA";
/// Expenditure type of spend attached to a technology on any other stack
pub const LICENSE: &str = "LICENSE";

/// Record a spend row is attributed to.
///
/// Persisted as the `target_kind` discriminant plus `target_id`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpendTarget {
    /// `technology.id`
    Technology(i32),
    /// `expenditure.id`
    Expenditure(i32),
}

impl SpendTarget {
    pub fn from_parts(kind: SpendTargetKind, id: i32) -> Self {
        match kind {
            SpendTargetKind::Technology => Self::Technology(id),
            SpendTargetKind::Expenditure => Self::Expenditure(id),
        }
    }

    pub fn kind(&self) -> SpendTargetKind {
        match self {
            Self::Technology(_) => SpendTargetKind::Technology,
            Self::Expenditure(_) => SpendTargetKind::Expenditure,
        }
    }

    pub fn id(&self) -> i32 {
        match self {
            Self::Technology(id) | Self::Expenditure(id) => *id,
        }
    }
}

impl From<&SpendModel> for SpendTarget {
    fn from(spend: &SpendModel) -> Self {
        Self::from_parts(spend.target_kind, spend.target_id)
    }
}

/// Expenditure type assigned to the spend of a technology on a stack of `stack_type`
pub fn technology_expenditure_type(stack_type: &str) -> &'static str {
    if stack_type.trim().eq_ignore_ascii_case(CLOUD) {
        INFRA
    } else {
        LICENSE
    }
}

/// Whether `expenditure_type` is one of the types reserved for technology spend
pub fn is_technology_spend_type(expenditure_type: &str) -> bool {
    let expenditure_type = expenditure_type.trim();
    expenditure_type.eq_ignore_ascii_case(INFRA) || expenditure_type.eq_ignore_ascii_case(LICENSE)
}

/// Everything a company's spend report reads, loaded in one pass.
///
/// Every collection is ordered by id.
#[derive(Clone, Debug, Default)]
pub struct SpendSnapshot {
    pub lines_of_business: Vec<LineOfBusinessModel>,
    pub applications: Vec<ApplicationModel>,
    pub technologies: Vec<TechnologyModel>,
    pub technology_stacks: Vec<TechnologyStackModel>,
    pub expenditures: Vec<ExpenditureModel>,
    pub spends: Vec<SpendModel>,
    pub budgets: Vec<BudgetModel>,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Expect CLOUD stacks to book INFRA spend regardless of case, anything else LICENSE
    #[test]
    fn derives_technology_expenditure_type() {
        assert_eq!(technology_expenditure_type("CLOUD"), INFRA);
        assert_eq!(technology_expenditure_type(" cloud "), INFRA);
        assert_eq!(technology_expenditure_type("ON_PREM"), LICENSE);
        assert_eq!(technology_expenditure_type(""), LICENSE);
    }

    /// Expect INFRA and LICENSE to be recognised in any case, other types not
    #[test]
    fn recognises_technology_spend_types() {
        assert!(is_technology_spend_type("INFRA"));
        assert!(is_technology_spend_type("infra"));
        assert!(is_technology_spend_type(" License "));
        assert!(!is_technology_spend_type("Consulting"));
    }

    /// Expect the discriminant and id to survive a conversion through their persisted parts
    #[test]
    fn converts_between_target_and_parts() {
        let target = SpendTarget::Expenditure(7);

        assert_eq!(target.kind(), SpendTargetKind::Expenditure);
        assert_eq!(SpendTarget::from_parts(target.kind(), target.id()), target);
    }
}
