use chrono::NaiveDate;
use uuid::Uuid;

use crate::server::error::{dashboard::DashboardError, employee::EmployeeError};

/// Date layout accepted by every date field in request bodies.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses an employee id path segment.
///
/// # Returns
/// - `Ok(Uuid)` - Valid UUID
/// - `Err(EmployeeError::InvalidEmployeeId)` - Not a UUID
pub fn parse_employee_id(value: &str) -> Result<Uuid, EmployeeError> {
    Uuid::parse_str(value).map_err(|_| EmployeeError::InvalidEmployeeId)
}

/// Parses a project id path segment.
pub fn parse_project_id(value: &str) -> Result<Uuid, DashboardError> {
    Uuid::parse_str(value).map_err(|_| DashboardError::InvalidProjectId)
}

/// Parses a `YYYY-MM-DD` date.
///
/// Month and day must be zero-padded; `2023-2-1` is rejected.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let bytes = value.as_bytes();
    let fixed_layout = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !fixed_layout {
        return None;
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}
