//! Enterprise portfolio backend.
//!
//! Organization hierarchy and application portfolio imported from Excel workbooks,
//! persisted with SeaORM and reported on through an axum REST API.

pub mod model;
pub mod server;
