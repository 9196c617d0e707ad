//! API data transfer objects shared by controllers and services.

pub mod api;
pub mod company;
pub mod search;
pub mod spend;
pub mod upload;
