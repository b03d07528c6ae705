use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        dashboard::{ActionItemReportDto, AuditDto, EngineeringHealthDto, WorkSurveysDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::dashboard::DashboardService,
        state::AppState, util::parse::parse_project_id,
    },
};

/// Tag for grouping dashboard endpoints in OpenAPI documentation
pub static DASHBOARD_TAG: &str = "dashboard";

/// Get a project's work survey history.
///
/// Returns the project's surveys oldest first. Every survey after the first carries
/// the percentage change of each score against the previous survey.
///
/// # Access Control
/// - Any logged-in employee
///
/// # Returns
/// - `200 OK` - Project and its surveys
/// - `400 Bad Request` - Project id is not a UUID
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Project not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/dashboards/projects/{project_id}/work-surveys",
    tag = DASHBOARD_TAG,
    params(
        ("project_id" = String, Path, description = "Project UUID")
    ),
    responses(
        (status = 200, description = "Work surveys with trends", body = ApiResponse<WorkSurveysDto>),
        (status = 400, description = "Invalid project id", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_work_surveys(
    State(state): State<AppState>,
    session: Session,
    Path(project_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let project_id = parse_project_id(&project_id)?;
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let work_surveys = DashboardService::new(&state.db)
        .work_surveys(project_id)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::new(work_surveys))))
}

/// Get a project's action item counts per quarter.
///
/// # Access Control
/// - Any logged-in employee
#[utoipa::path(
    get,
    path = "/api/dashboards/projects/{project_id}/action-items",
    tag = DASHBOARD_TAG,
    params(
        ("project_id" = String, Path, description = "Project UUID")
    ),
    responses(
        (status = 200, description = "Action item counts with trends", body = ApiResponse<Vec<ActionItemReportDto>>),
        (status = 400, description = "Invalid project id", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_action_items(
    State(state): State<AppState>,
    session: Session,
    Path(project_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let project_id = parse_project_id(&project_id)?;
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let reports = DashboardService::new(&state.db)
        .action_items(project_id)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::new(reports))))
}

/// Get engineering health scores of the latest quarters.
///
/// # Access Control
/// - Any logged-in employee
#[utoipa::path(
    get,
    path = "/api/dashboards/engineering-health",
    tag = DASHBOARD_TAG,
    responses(
        (status = 200, description = "Engineering health averages and groups", body = ApiResponse<EngineeringHealthDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_engineering_health(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let health = DashboardService::new(&state.db).engineering_health().await?;

    Ok((StatusCode::OK, Json(ApiResponse::new(health))))
}

/// Get audit scores of the latest quarters.
///
/// # Access Control
/// - Any logged-in employee
#[utoipa::path(
    get,
    path = "/api/dashboards/audits",
    tag = DASHBOARD_TAG,
    responses(
        (status = 200, description = "Audit averages and groups", body = ApiResponse<AuditDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_audits(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let audits = DashboardService::new(&state.db).audits().await?;

    Ok((StatusCode::OK, Json(ApiResponse::new(audits))))
}
