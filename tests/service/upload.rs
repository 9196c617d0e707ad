use chrono::NaiveDate;
use entity::sea_orm_active_enums::{ApplicationStatus, CurrencySuccessor, SpendTargetKind};
use portfolio::{
    model::search::SearchKind,
    server::{
        error::{upload::UploadError, Error},
        search::SearchMirror,
        service::upload::{UploadLayout, UploadService},
    },
};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter};

use super::*;

async fn count<E>(test: &TestContext, _: E) -> Result<u64, TestError>
where
    E: EntityTrait,
    E::Model: Sync,
{
    Ok(E::find().count(&test.db).await?)
}

/// Expect the Payroll row to create the whole chain and book its cloud spend as INFRA
#[tokio::test]
async fn creates_application_chain_with_cloud_spend() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portfolio_tables().build().await?;
    let company = test.portfolio().insert_company("Acme").await?;
    let search = SearchMirror::default();

    let mut row = portfolio_row("Acme Org", "HR", "Payroll");
    row.extend([
        (11, "AWS".into()),
        (13, "CLOUD".into()),
        (14, 10.0.into()),
        (15, "RAW".into()),
    ]);
    let bytes = SheetBuilder::app_portfolio().with_row(row).build()?;

    let summary = UploadService::new(&test.db, &search)
        .upload(UploadLayout::AppPortfolio, company.id, bytes, today())
        .await
        .unwrap();

    assert_eq!(summary.rows_processed, 1);
    // organizational unit, line of business, application, stack, technology, spend
    assert_eq!(summary.created, 6);

    let spends = entity::prelude::Spend::find().all(&test.db).await?;
    assert_eq!(spends.len(), 1);
    assert_eq!(spends[0].expenditure_type, "INFRA");
    assert_eq!(spends[0].target_kind, SpendTargetKind::Technology);
    assert_eq!(spends[0].amount, 10.0);
    assert_eq!(spends[0].successor, CurrencySuccessor::Raw);
    assert_eq!(spends[0].date_of_update, today());

    let application = entity::prelude::Application::find()
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(application.status, ApplicationStatus::Running);

    Ok(())
}

/// Expect an identical workbook uploaded twice to leave a single copy of every record
#[tokio::test]
async fn second_identical_upload_creates_nothing() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portfolio_tables().build().await?;
    let company = test.portfolio().insert_company("C").await?;
    let search = SearchMirror::default();

    let mut row = portfolio_row("Acme Org", "HR", "Payroll");
    row.extend([
        (11, "Oracle".into()),
        (12, "19c".into()),
        (13, "ONPREM".into()),
        (14, 4.0.into()),
        (15, "K".into()),
        (17, "Consulting".into()),
        (22, 2026.into()),
        (23, 50.0.into()),
        (24, "K".into()),
    ]);
    let bytes = SheetBuilder::app_portfolio().with_row(row).build()?;

    let service = UploadService::new(&test.db, &search);
    let first = service
        .upload(UploadLayout::AppPortfolio, company.id, bytes.clone(), today())
        .await
        .unwrap();
    let second = service
        .upload(UploadLayout::AppPortfolio, company.id, bytes, today())
        .await
        .unwrap();

    assert!(first.created > 0);
    assert_eq!(second.created, 0);
    assert_eq!(second.updated, 0);

    assert_eq!(count(&test, entity::prelude::OrganizationalUnit).await?, 1);
    assert_eq!(count(&test, entity::prelude::LineOfBusiness).await?, 1);
    assert_eq!(count(&test, entity::prelude::Application).await?, 1);
    assert_eq!(count(&test, entity::prelude::TechnologyStack).await?, 1);
    assert_eq!(count(&test, entity::prelude::Technology).await?, 1);
    assert_eq!(count(&test, entity::prelude::Expenditure).await?, 1);
    assert_eq!(count(&test, entity::prelude::Spend).await?, 1);
    assert_eq!(count(&test, entity::prelude::Budget).await?, 1);

    let stack = entity::prelude::TechnologyStack::find()
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(stack.name, "Oracle-19c");

    Ok(())
}

/// Expect duplicate rows within one workbook to resolve to the records of the first row
#[tokio::test]
async fn duplicate_rows_resolve_to_one_application() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portfolio_tables().build().await?;
    let company = test.portfolio().insert_company("C").await?;
    let search = SearchMirror::default();

    let bytes = SheetBuilder::app_portfolio()
        .with_row(portfolio_row("Acme Org", "HR", "Payroll"))
        .with_blank_row()
        .with_row(portfolio_row(" acme org ", "hr", "PAYROLL"))
        .build()?;

    let summary = UploadService::new(&test.db, &search)
        .upload(UploadLayout::AppPortfolio, company.id, bytes, today())
        .await
        .unwrap();

    assert_eq!(summary.rows_processed, 2);
    assert_eq!(count(&test, entity::prelude::OrganizationalUnit).await?, 1);
    assert_eq!(count(&test, entity::prelude::LineOfBusiness).await?, 1);
    assert_eq!(count(&test, entity::prelude::Application).await?, 1);

    Ok(())
}

/// Expect equally named records of another company to be left alone
#[tokio::test]
async fn resolves_names_within_the_company() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portfolio_tables().build().await?;
    let (_, globex_finance, _) = test
        .portfolio()
        .insert_company_hierarchy("Globex", "Finance", "Payroll")
        .await?;
    let acme = test.portfolio().insert_company("Acme").await?;
    let search = SearchMirror::default();

    let bytes = SheetBuilder::app_portfolio()
        .with_row(portfolio_row("Finance", "Payroll", "Ledger"))
        .build()?;

    UploadService::new(&test.db, &search)
        .upload(UploadLayout::AppPortfolio, acme.id, bytes, today())
        .await
        .unwrap();

    let units = entity::prelude::OrganizationalUnit::find()
        .filter(entity::organizational_unit::Column::Name.eq("Finance"))
        .all(&test.db)
        .await?;

    assert_eq!(units.len(), 2);
    assert!(units
        .iter()
        .any(|unit| unit.company_id == acme.id && unit.id != globex_finance.id));

    Ok(())
}

/// Expect a different amount to update the existing spend, keeping its date
#[tokio::test]
async fn changed_amount_updates_spend() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portfolio_tables().build().await?;
    let company = test.portfolio().insert_company("C").await?;
    let search = SearchMirror::default();
    let service = UploadService::new(&test.db, &search);

    let later = NaiveDate::from_ymd_opt(2026, 4, 15).unwrap();

    for (amount, unit, date) in [(5.0, "K", today()), (7.0, "M", later)] {
        let mut row = portfolio_row("Acme Org", "HR", "Payroll");
        row.extend([
            (17, "Consulting".into()),
            (20, amount.into()),
            (21, unit.into()),
        ]);
        let bytes = SheetBuilder::app_portfolio().with_row(row).build()?;

        service
            .upload(UploadLayout::AppPortfolio, company.id, bytes, date)
            .await
            .unwrap();
    }

    let spends = entity::prelude::Spend::find().all(&test.db).await?;
    assert_eq!(spends.len(), 1);
    assert_eq!(spends[0].amount, 7.0);
    assert_eq!(spends[0].successor, CurrencySuccessor::M);
    assert_eq!(spends[0].expenditure_type, "Consulting");
    assert_eq!(spends[0].target_kind, SpendTargetKind::Expenditure);
    assert_eq!(spends[0].date_of_update, today());

    Ok(())
}

/// Expect budget cells to be ignored when the row books a nonzero expenditure spend
#[tokio::test]
async fn budget_only_applies_without_expenditure_spend() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portfolio_tables().build().await?;
    let company = test.portfolio().insert_company("C").await?;
    let search = SearchMirror::default();

    let mut with_spend = portfolio_row("Acme Org", "HR", "Payroll");
    with_spend.extend([
        (17, "Consulting".into()),
        (20, 3.0.into()),
        (22, 2026.into()),
        (23, 90.0.into()),
    ]);
    let mut without_spend = portfolio_row("Acme Org", "HR", "Billing");
    without_spend.extend([(22, 2026.into()), (23, 40.0.into()), (24, "M".into())]);

    let bytes = SheetBuilder::app_portfolio()
        .with_row(with_spend)
        .with_row(without_spend)
        .build()?;

    UploadService::new(&test.db, &search)
        .upload(UploadLayout::AppPortfolio, company.id, bytes, today())
        .await
        .unwrap();

    let budgets = entity::prelude::Budget::find().all(&test.db).await?;
    let billing = entity::prelude::Application::find()
        .filter(entity::application::Column::Name.eq("Billing"))
        .one(&test.db)
        .await?
        .unwrap();

    assert_eq!(budgets.len(), 1);
    assert_eq!(budgets[0].application_id, billing.id);
    assert_eq!(budgets[0].amount, 40.0);
    assert_eq!(budgets[0].successor, CurrencySuccessor::M);

    Ok(())
}

/// Expect an unknown application type to abort the upload before any row is written
#[tokio::test]
async fn invalid_application_type_aborts_upload() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portfolio_tables().build().await?;
    let company = test.portfolio().insert_company("C").await?;
    let search = SearchMirror::default();

    let mut invalid = portfolio_row("Acme Org", "HR", "Billing");
    invalid[3] = (8, "NOT_A_TYPE".into());

    let bytes = SheetBuilder::app_portfolio()
        .with_row(portfolio_row("Acme Org", "HR", "Payroll"))
        .with_row(invalid)
        .with_row(portfolio_row("Acme Org", "HR", "Ledger"))
        .build()?;

    let result = UploadService::new(&test.db, &search)
        .upload(UploadLayout::AppPortfolio, company.id, bytes, today())
        .await;

    assert!(matches!(
        result,
        Err(Error::UploadError(UploadError::InvalidEnum { row: 3, column: 8, .. }))
    ));
    assert_eq!(count(&test, entity::prelude::Application).await?, 0);
    assert_eq!(count(&test, entity::prelude::OrganizationalUnit).await?, 0);
    assert!(search.search(SearchKind::Application, "").await.is_empty());

    Ok(())
}

/// Expect rows applied before a failing row to stay committed and the failing row to roll back
#[tokio::test]
async fn failing_row_keeps_earlier_rows_committed() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portfolio_tables().build().await?;
    let company = test.portfolio().insert_company("C").await?;
    let search = SearchMirror::default();

    test.db
        .execute_unprepared(
            "CREATE TRIGGER reject_broken BEFORE INSERT ON application \
             WHEN NEW.name = 'Broken' BEGIN SELECT RAISE(ABORT, 'rejected'); END;",
        )
        .await?;

    let bytes = SheetBuilder::app_portfolio()
        .with_row(portfolio_row("Acme Org", "HR", "Payroll"))
        .with_row(portfolio_row("Finance", "Treasury", "Broken"))
        .with_row(portfolio_row("Acme Org", "HR", "Ledger"))
        .build()?;

    let result = UploadService::new(&test.db, &search)
        .upload(UploadLayout::AppPortfolio, company.id, bytes, today())
        .await;

    assert!(matches!(result, Err(Error::DbErr(_))));

    let applications = entity::prelude::Application::find().all(&test.db).await?;
    assert_eq!(applications.len(), 1);
    assert_eq!(applications[0].name, "Payroll");

    // The failing row's organizational unit was rolled back with it
    let units = entity::prelude::OrganizationalUnit::find().all(&test.db).await?;
    assert_eq!(units.len(), 1);
    assert_eq!(units[0].name, "Acme Org");

    let hits = search.search(SearchKind::Application, "").await;
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Payroll");

    Ok(())
}

/// Expect an unknown company to be rejected before the workbook is read
#[tokio::test]
async fn rejects_unknown_company() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portfolio_tables().build().await?;
    let search = SearchMirror::default();

    let result = UploadService::new(&test.db, &search)
        .upload_app_portfolio(42, b"not a workbook".to_vec())
        .await;

    assert!(matches!(
        result,
        Err(Error::PortfolioError(
            portfolio::server::error::portfolio::PortfolioError::CompanyNotFound(42)
        ))
    ));

    Ok(())
}

/// Expect the functional view to build the organization chain and reassign employees on re-upload
#[tokio::test]
async fn functional_view_builds_chain_and_updates_employee() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portfolio_tables().build().await?;
    let company = test.portfolio().insert_company("C").await?;
    let search = SearchMirror::default();
    let service = UploadService::new(&test.db, &search);

    let functional_row = |employee_id: &str, employee_name: &str| -> Vec<(u16, Cell)> {
        vec![
            (0, "People".into()),
            (1, employee_id.into()),
            (2, employee_name.into()),
            (3, "HR".into()),
            (6, "Hiring".into()),
            (7, "Core".into()),
            (10, "Recruit staff".into()),
            (11, "Interview".into()),
            (12, 46081.into()),
            (15, "InProgress".into()),
            (16, "Schedule".into()),
            (17, "Low".into()),
        ]
    };

    let first = SheetBuilder::functional_view()
        .with_row(functional_row("E-1", "Ada"))
        .build()?;
    let summary = service
        .upload(UploadLayout::FunctionalView, company.id, first, today())
        .await
        .unwrap();

    // employee, organizational unit, line of business, function, capability, process, activity
    assert_eq!(summary.created, 7);

    let second = SheetBuilder::functional_view()
        .with_row(functional_row("E-2", "Grace"))
        .build()?;
    let summary = service
        .upload(UploadLayout::FunctionalView, company.id, second, today())
        .await
        .unwrap();

    assert_eq!(summary.created, 1);
    assert_eq!(summary.updated, 1);

    let grace = entity::prelude::Employee::find()
        .filter(entity::employee::Column::EmployeeId.eq("E-2"))
        .one(&test.db)
        .await?
        .unwrap();
    let unit = entity::prelude::OrganizationalUnit::find()
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(unit.employee_id, Some(grace.id));

    let process = entity::prelude::BusinessProcess::find()
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(process.start_date, chrono::NaiveDate::from_ymd_opt(2026, 2, 28));

    assert_eq!(count(&test, entity::prelude::Capability).await?, 1);
    assert_eq!(count(&test, entity::prelude::Activity).await?, 1);

    let hits = search.search(SearchKind::BusinessFunction, "hir").await;
    assert_eq!(hits.len(), 1);

    Ok(())
}
