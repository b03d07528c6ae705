//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them for
//! unit tests of domain conversions and DTO mapping.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let employee = fixture::employee::entity();
//!
//! let left = fixture::employee::entity_builder()
//!     .working_status("left")
//!     .build();
//! ```

pub mod employee;

pub use employee::{entity as employee_entity, entity_builder as employee_entity_builder};
