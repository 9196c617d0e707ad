//! Shared test utilities for the portfolio crate.
//!
//! Tests run in two phases. `TestBuilder` declares the tables and records a test needs and
//! `build()` produces a `TestContext` backed by an in-memory SQLite database. The context then
//! exposes fixture helpers for inserting further records during the test itself, and
//! `SheetBuilder` writes workbooks in the upload layouts.

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod sheet;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;
pub use sheet::{Cell, SheetBuilder};

pub mod prelude {
    pub use crate::{Cell, SheetBuilder, TestBuilder, TestContext, TestError};
}
