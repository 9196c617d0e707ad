//! Yearly spend report.
//!
//! [`SpendService`] loads a company's [`SpendSnapshot`] and hands it to
//! [`aggregate::aggregate_yearly_spend`], which computes the report without touching the database.

pub mod aggregate;

use chrono::{Datelike, Utc};
use entity::sea_orm_active_enums::SpendTargetKind;
use sea_orm::DatabaseConnection;

use crate::{
    model::spend::YearlySpendDetailsDto,
    server::{
        data::{
            company::CompanyRepository,
            organization::line_of_business::LineOfBusinessRepository,
            portfolio::{
                application::ApplicationRepository, budget::BudgetRepository,
                expenditure::ExpenditureRepository, spend::SpendRepository,
                technology::TechnologyRepository, technology_stack::TechnologyStackRepository,
            },
        },
        error::{portfolio::PortfolioError, Error},
        model::spend::SpendSnapshot,
        service::retry::RetryContext,
    },
};

pub struct SpendService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SpendService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Spend report for the current calendar year (UTC).
    pub async fn yearly_spend_details(
        &self,
        company_id: i32,
    ) -> Result<YearlySpendDetailsDto, Error> {
        self.yearly_spend_details_for_year(company_id, Utc::now().year())
            .await
    }

    /// Spend report for the five years ending at `current_year`.
    ///
    /// # Returns
    /// - `Ok(YearlySpendDetailsDto)` - The report, see [`aggregate::aggregate_yearly_spend`]
    /// - `Err(Error::PortfolioError(CompanyNotFound))` - Company does not exist
    /// - `Err(Error::PortfolioError(ReferenceNotFound))` - Stored portfolio data is dangling
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn yearly_spend_details_for_year(
        &self,
        company_id: i32,
        current_year: i32,
    ) -> Result<YearlySpendDetailsDto, Error> {
        let snapshot = self.load_snapshot(company_id).await?;

        tracing::debug!(
            "Aggregating {} spend and {} budget records for company ID {}",
            snapshot.spends.len(),
            snapshot.budgets.len(),
            company_id
        );

        Ok(aggregate::aggregate_yearly_spend(&snapshot, current_year)?)
    }

    async fn load_snapshot(&self, company_id: i32) -> Result<SpendSnapshot, Error> {
        let ctx = RetryContext::new();

        let db = self.db.clone();

        ctx.execute_with_retry(
            &format!("spend snapshot for company ID {}", company_id),
            || {
                let db = db.clone();

                Box::pin(async move {
                    if CompanyRepository::new(&db)
                        .find_by_id(company_id)
                        .await?
                        .is_none()
                    {
                        return Err(PortfolioError::CompanyNotFound(company_id).into());
                    }

                    let lines_of_business = LineOfBusinessRepository::new(&db)
                        .get_all_for_company(company_id)
                        .await?;
                    let applications = ApplicationRepository::new(&db)
                        .get_all_for_company(company_id)
                        .await?;
                    let technologies = TechnologyRepository::new(&db)
                        .get_all_for_company(company_id)
                        .await?;
                    let technology_stacks = TechnologyStackRepository::new(&db).get_all().await?;
                    let expenditures = ExpenditureRepository::new(&db)
                        .get_all_for_company(company_id)
                        .await?;
                    let budgets = BudgetRepository::new(&db)
                        .get_all_for_company(company_id)
                        .await?;

                    let spend_repo = SpendRepository::new(&db);
                    let mut spends = spend_repo
                        .get_all_for_targets(
                            SpendTargetKind::Technology,
                            technologies.iter().map(|t| t.id).collect(),
                        )
                        .await?;
                    spends.extend(
                        spend_repo
                            .get_all_for_targets(
                                SpendTargetKind::Expenditure,
                                expenditures.iter().map(|e| e.id).collect(),
                            )
                            .await?,
                    );
                    spends.sort_by_key(|spend| spend.id);

                    Ok(SpendSnapshot {
                        lines_of_business,
                        applications,
                        technologies,
                        technology_stacks,
                        expenditures,
                        spends,
                        budgets,
                    })
                })
            },
        )
        .await
    }
}
