//! HTTP controller endpoints for the portfolio web API.
//!
//! Axum handlers for companies, the spend report, spreadsheet uploads and search. Handlers
//! validate inputs, call into the services and map results to HTTP responses, each one
//! annotated with utoipa for the OpenAPI document.

pub mod company;
pub mod search;
pub mod spend;
pub mod upload;
