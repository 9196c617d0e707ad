//! Server application models and type definitions.
//!
//! Application state shared by the HTTP handlers, database model type aliases and the
//! in-memory representations the upload and spend services work with.

pub mod app;
pub mod db;
pub mod spend;
pub mod upload;
