use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::model::upload::UPLOAD_FAILURE_MESSAGE;

/// Problems with the uploaded spreadsheet itself.
///
/// Rows and columns are 0-based positions in the first worksheet, header rows included.
#[derive(Error, Debug)]
pub enum UploadError {
    #[error("Multipart request did not contain a `file` field")]
    MissingFile,
    #[error("Failed to read multipart request: {0}")]
    Multipart(#[from] MultipartError),
    #[error("Failed to open workbook: {0}")]
    Workbook(#[from] calamine::Error),
    #[error("Workbook does not contain any worksheet")]
    MissingWorksheet,
    #[error("Row {row}, column {column}: expected {expected}, found {found}")]
    InvalidCell {
        row: u32,
        column: u32,
        expected: &'static str,
        found: String,
    },
    #[error("Row {row}, column {column}: required {field} is empty")]
    MissingCell {
        row: u32,
        column: u32,
        field: &'static str,
    },
    #[error("Row {row}, column {column}: {value:?} is not a valid {kind}")]
    InvalidEnum {
        row: u32,
        column: u32,
        kind: &'static str,
        value: String,
    },
}

/// Every upload failure is reported with the same plain-text body existing clients match on,
/// the detailed cause only goes to the log.
impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        tracing::warn!("Rejected spreadsheet upload: {}", self);

        (StatusCode::BAD_REQUEST, UPLOAD_FAILURE_MESSAGE).into_response()
    }
}
