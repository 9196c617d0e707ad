//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries per table and are generic over [`sea_orm::ConnectionTrait`]
//! so the upload flow can run them inside a transaction. Lookups that feed the upload index and
//! the spend report are company-scoped by joining up the parent chain to the owning company.

pub mod company;
pub mod employee;
pub mod organization;
pub mod portfolio;
