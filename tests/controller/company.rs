use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::sea_orm_active_enums::ApplicationStatus;
use portfolio::{
    model::company::{ApplicationDto, CompanyDto, CreateCompanyDto},
    server::{
        controller::company::{
            create_company, get_companies, get_company, get_company_applications,
        },
        model::app::AppState,
    },
};

use super::*;

/// Expect 201 Created with the stored company
#[tokio::test]
async fn creates_company() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portfolio_tables().build().await?;

    let result = create_company(
        State(test.to_app_state::<AppState>()),
        Json(CreateCompanyDto {
            name: "Acme".to_string(),
        }),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let company: CompanyDto = body_json(resp).await;
    assert_eq!(company.name, "Acme");

    Ok(())
}

/// Expect 400 Bad Request for a blank company name
#[tokio::test]
async fn rejects_blank_company_name() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portfolio_tables().build().await?;

    let result = create_company(
        State(test.to_app_state::<AppState>()),
        Json(CreateCompanyDto {
            name: "   ".to_string(),
        }),
    )
    .await;

    assert_eq!(result.into_response().status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect every company in the listing
#[tokio::test]
async fn lists_companies() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_portfolio_tables()
        .with_company_hierarchy("Acme", "People", "HR")
        .with_company_hierarchy("Globex", "People", "HR")
        .build()
        .await?;

    let resp = get_companies(State(test.to_app_state::<AppState>()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let companies: Vec<CompanyDto> = body_json(resp).await;
    assert_eq!(companies.len(), 2);

    Ok(())
}

/// Expect 404 Not Found for an unknown company
#[tokio::test]
async fn company_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portfolio_tables().build().await?;

    let resp = get_company(State(test.to_app_state::<AppState>()), Path(1))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect the applications of the company with their line of business names
#[tokio::test]
async fn lists_company_applications() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portfolio_tables().build().await?;
    let (acme, _, hr) = test
        .portfolio()
        .insert_company_hierarchy("Acme", "People", "HR")
        .await?;
    let (_, _, globex_hr) = test
        .portfolio()
        .insert_company_hierarchy("Globex", "People", "HR")
        .await?;
    test.portfolio()
        .insert_application(hr.id, "Payroll", ApplicationStatus::Running)
        .await?;
    test.portfolio()
        .insert_application(globex_hr.id, "Billing", ApplicationStatus::Planned)
        .await?;

    let resp = get_company_applications(State(test.to_app_state::<AppState>()), Path(acme.id))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let applications: Vec<ApplicationDto> = body_json(resp).await;
    assert_eq!(applications.len(), 1);
    assert_eq!(applications[0].name, "Payroll");
    assert_eq!(applications[0].line_of_business, "HR");
    assert_eq!(applications[0].status, "Running");

    Ok(())
}

/// Expect 404 Not Found when listing applications of an unknown company
#[tokio::test]
async fn applications_of_unknown_company() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portfolio_tables().build().await?;

    let resp = get_company_applications(State(test.to_app_state::<AppState>()), Path(9))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
