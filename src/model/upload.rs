//! Status strings returned by the spreadsheet upload endpoints.
//!
//! Existing clients compare these literally, spelling included.

/// Body returned when every row of an upload was applied
pub const UPLOAD_SUCCESS_MESSAGE: &str = "sucessfully Added";

/// Body returned when an upload was aborted because of malformed spreadsheet content
pub const UPLOAD_FAILURE_MESSAGE: &str = "Please check your input data";

/// Multipart form accepted by the upload endpoints
#[derive(utoipa::ToSchema)]
pub struct UploadForm {
    /// The xlsx, xls or ods workbook
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}
