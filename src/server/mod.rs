//! Server application core modules.
//!
//! This module contains all server-side functionality of the portfolio backend: HTTP routing,
//! database repositories, spreadsheet ingestion, spend reporting and the in-process search
//! mirror.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod search;
pub mod service;
pub mod startup;
pub mod util;
