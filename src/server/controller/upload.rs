use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    model::{
        api::ErrorDto,
        upload::{UploadForm, UPLOAD_FAILURE_MESSAGE, UPLOAD_SUCCESS_MESSAGE},
    },
    server::{
        error::{portfolio::PortfolioError, upload::UploadError, Error},
        model::app::AppState,
        service::upload::{UploadLayout, UploadService},
    },
};

pub static UPLOAD_TAG: &str = "upload";

/// Bytes of the `file` field of a multipart upload
async fn read_file_field(mut multipart: Multipart) -> Result<Vec<u8>, Error> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("file") {
            return Ok(field.bytes().await?.to_vec());
        }
    }

    Err(UploadError::MissingFile.into())
}

/// Apply the uploaded workbook and answer with one of the two upload status strings.
///
/// An unknown company is still reported as 404, every other failure is logged and answered
/// with 400 and [`UPLOAD_FAILURE_MESSAGE`].
async fn upload_workbook(
    state: AppState,
    layout: UploadLayout,
    company_id: i32,
    multipart: Multipart,
) -> Result<Response, Error> {
    let service = UploadService::new(&state.db, &state.search);

    let result = match (read_file_field(multipart).await, layout) {
        (Ok(bytes), UploadLayout::FunctionalView) => {
            service.upload_functional_view(company_id, bytes).await
        }
        (Ok(bytes), UploadLayout::AppPortfolio) => {
            service.upload_app_portfolio(company_id, bytes).await
        }
        (Err(err), _) => Err(err),
    };

    match result {
        Ok(_) => Ok((StatusCode::OK, UPLOAD_SUCCESS_MESSAGE).into_response()),
        Err(err @ Error::PortfolioError(PortfolioError::CompanyNotFound(_))) => Err(err),
        Err(Error::UploadError(err)) => Ok(err.into_response()),
        Err(Error::MultipartError(err)) => Ok(UploadError::from(err).into_response()),
        Err(err) => {
            tracing::error!(
                "Upload for company ID {} failed while applying rows: {:?}",
                company_id,
                err
            );

            Ok((StatusCode::BAD_REQUEST, UPLOAD_FAILURE_MESSAGE).into_response())
        }
    }
}

/// Upload an application portfolio workbook
///
/// Rows hold organizational unit, line of business, application, technology stack, technology
/// spend, expenditure, expenditure spend and budget columns below two header rows.
#[utoipa::path(
    post,
    path = "/api/upload-excels/appView/{company_id}",
    tag = UPLOAD_TAG,
    params(("company_id" = i32, Path, description = "Company ID")),
    request_body(content = UploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Every row was applied", body = String, content_type = "text/plain"),
        (status = 400, description = "Workbook, row content or a row write failed", body = String, content_type = "text/plain"),
        (status = 404, description = "Company not found", body = ErrorDto)
    ),
)]
pub async fn upload_app_portfolio(
    State(state): State<AppState>,
    Path(company_id): Path<i32>,
    multipart: Multipart,
) -> Result<Response, Error> {
    upload_workbook(state, UploadLayout::AppPortfolio, company_id, multipart).await
}

/// Upload a functional view workbook
///
/// Rows hold organizational unit, line of business, business function, capability, business
/// process and activity columns below two header rows.
#[utoipa::path(
    post,
    path = "/api/upload-excels/functionalView/{company_id}",
    tag = UPLOAD_TAG,
    params(("company_id" = i32, Path, description = "Company ID")),
    request_body(content = UploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Every row was applied", body = String, content_type = "text/plain"),
        (status = 400, description = "Workbook, row content or a row write failed", body = String, content_type = "text/plain"),
        (status = 404, description = "Company not found", body = ErrorDto)
    ),
)]
pub async fn upload_functional_view(
    State(state): State<AppState>,
    Path(company_id): Path<i32>,
    multipart: Multipart,
) -> Result<Response, Error> {
    upload_workbook(state, UploadLayout::FunctionalView, company_id, multipart).await
}
