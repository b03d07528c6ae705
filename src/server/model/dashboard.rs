//! Dashboard domain models.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
    model::dashboard::BasicProjectDto,
    server::error::{internal::InternalError, AppError},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: Uuid,
    pub code: String,
    pub name: String,
}

impl Project {
    pub fn from_entity(entity: entity::project::Model) -> Self {
        Self {
            id: entity.id,
            code: entity.code,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> BasicProjectDto {
        BasicProjectDto {
            id: self.id,
            code: self.code,
            name: self.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkSurvey {
    pub end_date: NaiveDate,
    pub workload: f64,
    pub deadline: f64,
    pub learning: f64,
}

impl WorkSurvey {
    pub fn from_entity(entity: entity::work_survey::Model) -> Self {
        Self {
            end_date: entity.end_date,
            workload: entity.workload,
            deadline: entity.deadline,
            learning: entity.learning,
        }
    }
}

/// Rewrites a stored `YYYY/Q` quarter as `Q/YYYY`.
///
/// # Returns
/// - `Ok(String)` - Display form
/// - `Err(AppError::InternalErr(MalformedQuarter))` - Stored value not in `YYYY/Q` form
pub fn display_quarter(quarter: &str) -> Result<String, AppError> {
    match quarter.split_once('/') {
        Some((year, q)) if !year.is_empty() && !q.is_empty() && !q.contains('/') => {
            Ok(format!("{}/{}", q, year))
        }
        _ => Err(InternalError::MalformedQuarter(quarter.to_string()).into()),
    }
}
