use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, spend::YearlySpendDetailsDto},
    server::{error::Error, model::app::AppState, service::spend::SpendService},
};

pub static SPEND_TAG: &str = "spend";

/// Running and growing spend of the last five years plus current-year spend and budget per
/// line of business
#[utoipa::path(
    get,
    path = "/api/yearlySpendDetails/{company_id}",
    tag = SPEND_TAG,
    params(("company_id" = i32, Path, description = "Company ID")),
    responses(
        (status = 200, description = "Spend report for the company", body = YearlySpendDetailsDto),
        (status = 404, description = "Company not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_yearly_spend_details(
    State(state): State<AppState>,
    Path(company_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let details = SpendService::new(&state.db)
        .yearly_spend_details(company_id)
        .await?;

    Ok((StatusCode::OK, Json(details)))
}
