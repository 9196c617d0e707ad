use entity::sea_orm_active_enums::{ApplicationStatus, CurrencySuccessor, SpendTargetKind};
use portfolio::server::{
    error::{portfolio::PortfolioError, Error},
    search::SearchMirror,
    service::{
        spend::SpendService,
        upload::{UploadLayout, UploadService},
    },
};

use super::*;

fn dated(year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, 6, 1).unwrap()
}

/// Expect the uploaded Payroll cloud spend to show up as running and HR spend
#[tokio::test]
async fn payroll_cloud_spend_counts_as_running() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portfolio_tables().build().await?;
    let company = test.portfolio().insert_company("C").await?;
    let search = SearchMirror::default();

    let mut row = portfolio_row("Acme Org", "HR", "Payroll");
    row.extend([(11, "AWS".into()), (13, "CLOUD".into()), (14, 10.0.into())]);
    let bytes = SheetBuilder::app_portfolio().with_row(row).build()?;
    UploadService::new(&test.db, &search)
        .upload(UploadLayout::AppPortfolio, company.id, bytes, today())
        .await
        .unwrap();

    let details = SpendService::new(&test.db)
        .yearly_spend_details_for_year(company.id, 2026)
        .await
        .unwrap();

    assert_eq!(details.years, vec![2026, 2025, 2024, 2023, 2022]);
    assert_eq!(details.running_totals, vec![10.0, 0.0, 0.0, 0.0, 0.0]);
    assert_eq!(details.growing_totals, vec![0.0; 5]);
    assert_eq!(details.lob_names, vec!["HR".to_string()]);
    assert_eq!(details.lob_spend, vec![10.0]);
    assert_eq!(details.lob_budget, vec![0.0]);

    Ok(())
}

/// Expect M amounts scaled by 1000 while K and raw amounts stay unscaled
#[tokio::test]
async fn normalizes_currency_units() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portfolio_tables().build().await?;
    let (company, _, lob) = test
        .portfolio()
        .insert_company_hierarchy("C", "Acme Org", "HR")
        .await?;
    let application = test
        .portfolio()
        .insert_application(lob.id, "Payroll", ApplicationStatus::Running)
        .await?;
    let expenditure = test
        .portfolio()
        .insert_expenditure(application.id, "Consulting")
        .await?;

    for (amount, successor) in [
        (5.0, CurrencySuccessor::M),
        (5.0, CurrencySuccessor::K),
        (5.0, CurrencySuccessor::Raw),
    ] {
        test.portfolio()
            .insert_spend(
                SpendTargetKind::Expenditure,
                expenditure.id,
                "Consulting",
                amount,
                successor,
                dated(2026),
            )
            .await?;
    }

    let details = SpendService::new(&test.db)
        .yearly_spend_details_for_year(company.id, 2026)
        .await
        .unwrap();

    assert_eq!(details.running_totals[0], 5010.0);

    Ok(())
}

/// Expect spend outside the five year window to be left out and in-progress spend to grow
#[tokio::test]
async fn window_covers_five_years() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portfolio_tables().build().await?;
    let (company, _, lob) = test
        .portfolio()
        .insert_company_hierarchy("C", "Acme Org", "HR")
        .await?;
    let application = test
        .portfolio()
        .insert_application(lob.id, "Migration", ApplicationStatus::InProgress)
        .await?;
    let expenditure = test
        .portfolio()
        .insert_expenditure(application.id, "Consulting")
        .await?;

    for year in [2026, 2022, 2021] {
        test.portfolio()
            .insert_spend(
                SpendTargetKind::Expenditure,
                expenditure.id,
                "Consulting",
                1.0,
                CurrencySuccessor::Raw,
                dated(year),
            )
            .await?;
    }

    let details = SpendService::new(&test.db)
        .yearly_spend_details_for_year(company.id, 2026)
        .await
        .unwrap();

    assert_eq!(details.years.len(), 5);
    assert_eq!(details.running_totals, vec![0.0; 5]);
    assert_eq!(details.growing_totals, vec![1.0, 0.0, 0.0, 0.0, 1.0]);

    Ok(())
}

/// Expect per line of business vectors to share one index per name
#[tokio::test]
async fn aligns_line_of_business_vectors() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portfolio_tables().build().await?;
    let (company, unit, hr) = test
        .portfolio()
        .insert_company_hierarchy("C", "Acme Org", "HR")
        .await?;
    let finance = test
        .portfolio()
        .insert_line_of_business(unit.id, "Finance")
        .await?;

    let payroll = test
        .portfolio()
        .insert_application(hr.id, "Payroll", ApplicationStatus::Retired)
        .await?;
    let ledger = test
        .portfolio()
        .insert_application(finance.id, "Ledger", ApplicationStatus::Running)
        .await?;

    let stack = test
        .portfolio()
        .insert_technology_stack("Oracle-19c", "ONPREM")
        .await?;
    let technology = test.portfolio().insert_technology(ledger.id, stack.id).await?;
    test.portfolio()
        .insert_spend(
            SpendTargetKind::Technology,
            technology.id,
            "LICENSE",
            2.0,
            CurrencySuccessor::M,
            dated(2026),
        )
        .await?;
    test.portfolio()
        .insert_budget(payroll.id, 2026, 7.0, CurrencySuccessor::Raw)
        .await?;
    test.portfolio()
        .insert_budget(ledger.id, 2025, 9.0, CurrencySuccessor::Raw)
        .await?;

    let details = SpendService::new(&test.db)
        .yearly_spend_details_for_year(company.id, 2026)
        .await
        .unwrap();

    assert_eq!(details.lob_names, vec!["HR".to_string(), "Finance".to_string()]);
    assert_eq!(details.lob_spend, vec![0.0, 2000.0]);
    assert_eq!(details.lob_budget, vec![7.0, 0.0]);

    Ok(())
}

/// Expect an unknown company to be reported as not found
#[tokio::test]
async fn rejects_unknown_company() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portfolio_tables().build().await?;

    let result = SpendService::new(&test.db)
        .yearly_spend_details_for_year(7, 2026)
        .await;

    assert!(matches!(
        result,
        Err(Error::PortfolioError(PortfolioError::CompanyNotFound(7)))
    ));

    Ok(())
}
