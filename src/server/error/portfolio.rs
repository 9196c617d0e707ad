use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("Company ID {0} not found")]
    CompanyNotFound(i32),
    /// Stored data points at a record that no longer exists, e.g. a technology whose
    /// application was removed outside of the upload flow.
    #[error("{kind} ID {id} referenced by stored portfolio data was not found")]
    ReferenceNotFound { kind: &'static str, id: i32 },
}

impl IntoResponse for PortfolioError {
    fn into_response(self) -> Response {
        tracing::debug!("Portfolio error: {}", self);

        let error = match self {
            Self::CompanyNotFound(_) => "Company not found".to_string(),
            Self::ReferenceNotFound { kind, .. } => format!("{} not found", kind),
        };

        (StatusCode::NOT_FOUND, Json(ErrorDto { error })).into_response()
    }
}
