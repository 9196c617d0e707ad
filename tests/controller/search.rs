use axum::http::StatusCode;
use portfolio::model::search::{SearchHitDto, SearchKind};

use super::*;

/// Expect records created by an upload to be searchable by name fragment
#[tokio::test]
async fn finds_uploaded_application() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_portfolio_tables()
        .with_company_hierarchy("C", "Acme Org", "HR")
        .build()
        .await?;
    let (app, _) = util::app(&test);

    let bytes = SheetBuilder::app_portfolio()
        .with_row([
            (0, "Acme Org".into()),
            (3, "HR".into()),
            (6, "Payroll".into()),
            (8, "SAAS".into()),
            (9, "Planned".into()),
        ])
        .build()?;
    let resp = app
        .clone()
        .oneshot(util::upload_request("/api/upload-excels/appView/1", &bytes))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .oneshot(util::get_request("/api/_search/application?query=PAY"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let hits: Vec<SearchHitDto> = body_json(resp).await;
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].kind, SearchKind::Application);
    assert_eq!(hits[0].name, "Payroll");

    Ok(())
}

/// Expect an empty query to return every record of the kind
#[tokio::test]
async fn empty_query_matches_all() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_portfolio_tables()
        .with_company_hierarchy("Acme", "People", "HR")
        .with_company_hierarchy("Globex", "Finance", "Payroll")
        .build()
        .await?;
    let (app, state) = util::app(&test);
    state.search.rebuild(&test.db).await?;

    let resp = app
        .oneshot(util::get_request("/api/_search/organizational-unit"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let hits: Vec<SearchHitDto> = body_json(resp).await;
    let names: Vec<&str> = hits.iter().map(|hit| hit.name.as_str()).collect();
    assert_eq!(names, vec!["People", "Finance"]);

    Ok(())
}

/// Expect 400 Bad Request for an unknown record kind
#[tokio::test]
async fn rejects_unknown_kind() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portfolio_tables().build().await?;
    let (app, _) = util::app(&test);

    let resp = app
        .oneshot(util::get_request("/api/_search/spaceship?query=x"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
