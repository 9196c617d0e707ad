//! Service layer.
//!
//! Services coordinate repositories into the operations exposed over HTTP: company management,
//! the spreadsheet upload resolver and the yearly spend report. Read paths are wrapped in
//! [`retry::RetryContext`] to ride out transient connection failures.

pub mod company;
pub mod retry;
pub mod spend;
pub mod upload;
