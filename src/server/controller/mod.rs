//! HTTP request handlers.
//!
//! Each handler checks access through `AuthGuard`, converts the request DTO into
//! service params, calls the service and wraps the result in `ApiResponse`.

pub mod auth;
pub mod dashboard;
pub mod employee;

#[cfg(test)]
mod test;
