use axum::http::StatusCode;
use chrono::{Datelike, Utc};
use portfolio::model::spend::YearlySpendDetailsDto;

use super::*;

/// Expect five years ending at the current year for a company without spend
#[tokio::test]
async fn returns_empty_report() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_portfolio_tables()
        .with_company_hierarchy("Acme", "People", "HR")
        .build()
        .await?;
    let (app, _) = util::app(&test);

    let resp = app
        .oneshot(util::get_request("/api/yearlySpendDetails/1"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let details: YearlySpendDetailsDto = body_json(resp).await;
    let year = Utc::now().year();
    assert_eq!(details.years, (0..5).map(|offset| year - offset).collect::<Vec<_>>());
    assert_eq!(details.running_totals, vec![0.0; 5]);
    assert_eq!(details.lob_names, vec!["HR".to_string()]);
    assert_eq!(details.lob_spend.len(), details.lob_names.len());
    assert_eq!(details.lob_budget.len(), details.lob_names.len());

    Ok(())
}

/// Expect 404 Not Found for an unknown company
#[tokio::test]
async fn unknown_company() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portfolio_tables().build().await?;
    let (app, _) = util::app(&test);

    let resp = app
        .oneshot(util::get_request("/api/yearlySpendDetails/3"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
