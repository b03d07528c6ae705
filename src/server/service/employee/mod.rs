//! Employee use cases.
//!
//! Mutating operations open a transaction on entry, run every repository call on it
//! and commit only after the reloaded employee has been read back. Returning early with
//! an error drops the transaction, which rolls back all prior writes.

mod base_salary;
mod create;
mod details;
mod general_info;
mod listing;
mod personal_info;
mod roles;
mod skills;
mod status;

#[cfg(test)]
mod test;

use std::collections::HashSet;

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::model::catalog::CatalogItem;

pub use details::load_details;

/// Service for employee records and their associations.
pub struct EmployeeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EmployeeService<'a> {
    /// Creates a new EmployeeService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `EmployeeService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Checks that every requested id is among the rows found.
fn all_found(requested: &[Uuid], found: &[CatalogItem]) -> bool {
    let found: HashSet<Uuid> = found.iter().map(|item| item.id).collect();
    requested.iter().all(|id| found.contains(id))
}

/// Removes duplicate ids, keeping the first occurrence.
fn dedup(ids: &[Uuid]) -> Vec<Uuid> {
    let mut seen = HashSet::new();
    ids.iter().copied().filter(|id| seen.insert(*id)).collect()
}
