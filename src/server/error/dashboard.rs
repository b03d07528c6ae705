use axum::http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DashboardError {
    #[error("invalid project ID")]
    InvalidProjectId,
    #[error("project not found")]
    ProjectNotFound,
}

impl DashboardError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidProjectId => StatusCode::BAD_REQUEST,
            Self::ProjectNotFound => StatusCode::NOT_FOUND,
        }
    }
}
