//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories are generic over SeaORM's `ConnectionTrait`, so
//! a service can run them against the pool or inside a `DatabaseTransaction`. They convert
//! entity models to domain models at the boundary and hold no business rules.

pub mod base_salary;
pub mod catalog;
pub mod dashboard;
pub mod discord_account;
pub mod employee;
pub mod location;
pub mod organization;
pub mod social_account;

#[cfg(test)]
mod test;
