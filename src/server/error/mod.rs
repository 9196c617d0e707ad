//! Error types for the portfolio server.
//!
//! Domain errors are grouped per concern (configuration, spreadsheet uploads, portfolio lookups)
//! and collected into the top level [`Error`]. Every error type implements `IntoResponse` so
//! controllers can return `Result<impl IntoResponse, Error>` and rely on `?` throughout.

pub mod config;
pub mod portfolio;
pub mod retry;
pub mod upload;

use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, portfolio::PortfolioError, upload::UploadError},
};

/// Main error type for the portfolio server.
///
/// Aggregates the domain-specific error types and external library errors. `#[from]` lets the
/// `?` operator convert underlying errors, and the `IntoResponse` implementation maps each
/// category to the HTTP response API consumers expect.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Upload errors (unreadable workbook, malformed cells, unknown enum literals)
/// - Portfolio errors (unknown company, dangling references)
/// - External library errors (database, multipart parsing, socket binding)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Spreadsheet content could not be turned into portfolio rows.
    #[error(transparent)]
    UploadError(#[from] UploadError),
    /// A record referenced by a request or by stored data does not exist.
    #[error(transparent)]
    PortfolioError(#[from] PortfolioError),
    /// Request payload failed validation.
    #[error("Invalid request: {0}")]
    ParseError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Multipart request body could not be read.
    #[error(transparent)]
    MultipartError(#[from] MultipartError),
    /// I/O error (binding the listener, serving connections).
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For malformed uploads, unreadable multipart bodies and invalid payloads
/// - 404 Not Found - For unknown companies or dangling references
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::UploadError(err) => err.into_response(),
            Self::PortfolioError(err) => err.into_response(),
            Self::MultipartError(err) => UploadError::from(err).into_response(),
            Self::ParseError(reason) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: reason })).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the client
/// to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
