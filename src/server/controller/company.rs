use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        company::{ApplicationDto, CompanyDto, CreateCompanyDto},
    },
    server::{error::Error, model::app::AppState, service::company::CompanyService},
};

pub static COMPANY_TAG: &str = "company";

/// List all companies
#[utoipa::path(
    get,
    path = "/api/companies",
    tag = COMPANY_TAG,
    responses(
        (status = 200, description = "Success when listing companies", body = Vec<CompanyDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_companies(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let companies = CompanyService::new(&state.db).get_companies().await?;

    Ok((StatusCode::OK, Json(companies)))
}

/// Create a company
#[utoipa::path(
    post,
    path = "/api/companies",
    tag = COMPANY_TAG,
    request_body = CreateCompanyDto,
    responses(
        (status = 201, description = "Company created", body = CompanyDto),
        (status = 400, description = "Company name is blank", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_company(
    State(state): State<AppState>,
    Json(payload): Json<CreateCompanyDto>,
) -> Result<impl IntoResponse, Error> {
    let company = CompanyService::new(&state.db)
        .create_company(&payload.name)
        .await?;

    Ok((StatusCode::CREATED, Json(company)))
}

/// Get a company by ID
#[utoipa::path(
    get,
    path = "/api/companies/{company_id}",
    tag = COMPANY_TAG,
    params(("company_id" = i32, Path, description = "Company ID")),
    responses(
        (status = 200, description = "Company found", body = CompanyDto),
        (status = 404, description = "Company not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_company(
    State(state): State<AppState>,
    Path(company_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let Some(company) = CompanyService::new(&state.db).get_company(company_id).await? else {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: "Company not found".to_string(),
            }),
        )
            .into_response());
    };

    Ok((StatusCode::OK, Json(company)).into_response())
}

/// List the applications of a company
#[utoipa::path(
    get,
    path = "/api/companies/{company_id}/applications",
    tag = COMPANY_TAG,
    params(("company_id" = i32, Path, description = "Company ID")),
    responses(
        (status = 200, description = "Applications of every line of business in the company", body = Vec<ApplicationDto>),
        (status = 404, description = "Company not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_company_applications(
    State(state): State<AppState>,
    Path(company_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let applications = CompanyService::new(&state.db)
        .get_applications(company_id)
        .await?;

    Ok((StatusCode::OK, Json(applications)))
}
