//! Small helpers shared by services.

pub mod currency;
