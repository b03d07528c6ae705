//! Request and response DTOs shared by the HTTP layer.

pub mod api;
pub mod auth;
pub mod dashboard;
pub mod employee;
