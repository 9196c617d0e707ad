//! Test fixture modules for database record creation.
//!
//! - `portfolio` - Companies, the organization chain and application portfolio records

pub mod portfolio;
