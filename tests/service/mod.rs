//! Integration tests for the upload and spend services.
//!
//! Workbooks are written with `SheetBuilder`, applied through `UploadService` and read back
//! through the repositories or `SpendService`.

mod spend;
mod upload;

use chrono::NaiveDate;
use portfolio_test_utils::prelude::*;

/// Date used as "today" for spend created by uploads
fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
}

/// Application portfolio cells naming organizational unit, line of business and application
fn portfolio_row(organizational_unit: &str, line_of_business: &str, application: &str) -> Vec<(u16, Cell)> {
    vec![
        (0, organizational_unit.into()),
        (3, line_of_business.into()),
        (6, application.into()),
        (8, "WEB".into()),
        (9, "Running".into()),
    ]
}
