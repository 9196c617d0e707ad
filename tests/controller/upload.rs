use axum::http::StatusCode;
use portfolio::model::upload::{UPLOAD_FAILURE_MESSAGE, UPLOAD_SUCCESS_MESSAGE};
use sea_orm::{ConnectionTrait, EntityTrait, PaginatorTrait};

use super::*;

fn payroll_workbook(application_type: &str) -> Result<Vec<u8>, TestError> {
    SheetBuilder::app_portfolio()
        .with_row([
            (0, "Acme Org".into()),
            (3, "HR".into()),
            (6, "Payroll".into()),
            (8, application_type.into()),
            (9, "Running".into()),
        ])
        .build()
}

/// Expect 200 OK with the success message for a valid application portfolio
#[tokio::test]
async fn accepts_app_portfolio() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_portfolio_tables()
        .with_company_hierarchy("C", "Acme Org", "HR")
        .build()
        .await?;
    let (app, _) = util::app(&test);

    let resp = app
        .oneshot(util::upload_request(
            "/api/upload-excels/appView/1",
            &payroll_workbook("WEB")?,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_text(resp).await, UPLOAD_SUCCESS_MESSAGE);
    assert_eq!(entity::prelude::Application::find().count(&test.db).await?, 1);
    assert_eq!(
        entity::prelude::OrganizationalUnit::find()
            .count(&test.db)
            .await?,
        1
    );

    Ok(())
}

/// Expect 400 Bad Request with the failure message for an unknown application type
#[tokio::test]
async fn rejects_unknown_application_type() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_portfolio_tables()
        .with_company_hierarchy("C", "Acme Org", "HR")
        .build()
        .await?;
    let (app, _) = util::app(&test);

    let resp = app
        .oneshot(util::upload_request(
            "/api/upload-excels/appView/1",
            &payroll_workbook("NOT_A_TYPE")?,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(resp).await, UPLOAD_FAILURE_MESSAGE);
    assert_eq!(entity::prelude::Application::find().count(&test.db).await?, 0);

    Ok(())
}

/// Expect 400 Bad Request when the request has no `file` field
#[tokio::test]
async fn rejects_missing_file_field() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_portfolio_tables()
        .with_company_hierarchy("C", "Acme Org", "HR")
        .build()
        .await?;
    let (app, _) = util::app(&test);

    let resp = app
        .oneshot(util::upload_request_with_field(
            "/api/upload-excels/appView/1",
            "attachment",
            &payroll_workbook("WEB")?,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(resp).await, UPLOAD_FAILURE_MESSAGE);

    Ok(())
}

/// Expect 400 Bad Request for bytes that are not a workbook
#[tokio::test]
async fn rejects_unreadable_workbook() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_portfolio_tables()
        .with_company_hierarchy("C", "Acme Org", "HR")
        .build()
        .await?;
    let (app, _) = util::app(&test);

    let resp = app
        .oneshot(util::upload_request(
            "/api/upload-excels/functionalView/1",
            b"plain text, not a spreadsheet",
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect a row that fails to write to answer with the failure message and keep earlier rows
#[tokio::test]
async fn failed_row_write_returns_failure_message() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_portfolio_tables()
        .with_company_hierarchy("C", "Acme Org", "HR")
        .build()
        .await?;
    let (app, _) = util::app(&test);

    test.db
        .execute_unprepared(
            "CREATE TRIGGER reject_broken BEFORE INSERT ON application \
             WHEN NEW.name = 'Broken' BEGIN SELECT RAISE(ABORT, 'rejected'); END;",
        )
        .await?;

    let bytes = SheetBuilder::app_portfolio()
        .with_row([
            (0, "Acme Org".into()),
            (3, "HR".into()),
            (6, "Payroll".into()),
            (8, "WEB".into()),
            (9, "Running".into()),
        ])
        .with_row([
            (0, "Acme Org".into()),
            (3, "HR".into()),
            (6, "Broken".into()),
            (8, "WEB".into()),
            (9, "Running".into()),
        ])
        .build()?;

    let resp = app
        .oneshot(util::upload_request("/api/upload-excels/appView/1", &bytes))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(resp).await, UPLOAD_FAILURE_MESSAGE);

    let applications = entity::prelude::Application::find().all(&test.db).await?;
    assert_eq!(applications.len(), 1);
    assert_eq!(applications[0].name, "Payroll");

    Ok(())
}

/// Expect 404 Not Found for an unknown company
#[tokio::test]
async fn unknown_company() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portfolio_tables().build().await?;
    let (app, _) = util::app(&test);

    let resp = app
        .oneshot(util::upload_request(
            "/api/upload-excels/appView/5",
            &payroll_workbook("WEB")?,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect a functional view workbook to be accepted
#[tokio::test]
async fn accepts_functional_view() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_portfolio_tables()
        .with_company_hierarchy("C", "People", "HR")
        .build()
        .await?;
    let (app, _) = util::app(&test);

    let bytes = SheetBuilder::functional_view()
        .with_row([
            (0, "People".into()),
            (3, "HR".into()),
            (6, "Hiring".into()),
            (7, "support".into()),
            (10, "Recruit staff".into()),
        ])
        .build()?;

    let resp = app
        .oneshot(util::upload_request(
            "/api/upload-excels/functionalView/1",
            &bytes,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        entity::prelude::BusinessFunction::find()
            .count(&test.db)
            .await?,
        1
    );
    assert_eq!(
        entity::prelude::LineOfBusiness::find().count(&test.db).await?,
        1
    );

    Ok(())
}
