//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. Swagger UI is served at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/companies` - List companies
/// - `POST /api/companies` - Create a company
/// - `GET /api/companies/{company_id}` - Get a company
/// - `GET /api/companies/{company_id}/applications` - List a company's applications
/// - `GET /api/yearlySpendDetails/{company_id}` - Spend and budget report
/// - `POST /api/upload-excels/appView/{company_id}` - Upload an application portfolio workbook
/// - `POST /api/upload-excels/functionalView/{company_id}` - Upload a functional view workbook
/// - `GET /api/_search/{kind}` - Search mirrored records by name
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState::from(db));
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Portfolio", description = "Enterprise portfolio API"), tags(
        (name = controller::company::COMPANY_TAG, description = "Company API routes"),
        (name = controller::spend::SPEND_TAG, description = "Spend reporting API routes"),
        (name = controller::upload::UPLOAD_TAG, description = "Spreadsheet upload API routes"),
        (name = controller::search::SEARCH_TAG, description = "Search API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::company::get_companies,
            controller::company::create_company
        ))
        .routes(routes!(controller::company::get_company))
        .routes(routes!(controller::company::get_company_applications))
        .routes(routes!(controller::spend::get_yearly_spend_details))
        .routes(routes!(controller::upload::upload_app_portfolio))
        .routes(routes!(controller::upload::upload_functional_view))
        .routes(routes!(controller::search::search))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
