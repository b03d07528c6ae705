use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        auth::CurrentEmployeeDto,
    },
    server::{
        error::AppError,
        middleware::{
            auth::AuthGuard,
            session::{AuthSession, CsrfSession},
        },
        service::{auth::DiscordAuthService, employee::EmployeeService},
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Query parameters for the OAuth callback endpoint.
///
/// # Fields
/// - `state` - CSRF protection token that must match the value stored in the session
/// - `code` - Authorization code used to exchange for access tokens
#[derive(Deserialize)]
pub struct CallbackParams {
    /// CSRF state token to be validated against the session value.
    pub state: String,
    /// Authorization code from Discord for token exchange.
    pub code: String,
}

/// Start the Discord login.
///
/// Stores a fresh CSRF token in the session and redirects to Discord's consent page.
#[utoipa::path(
    get,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Redirect to Discord"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_service =
        DiscordAuthService::new(&state.db, &state.http_client, &state.oauth_client);

    let (url, csrf_token) = auth_service.login_url();

    CsrfSession::new(&session)
        .set_token(csrf_token.secret().to_string())
        .await?;

    Ok(Redirect::temporary(url.as_str()))
}

/// Complete the Discord login.
///
/// Validates the CSRF state, exchanges the code and logs in the employee linked to
/// the Discord account.
///
/// # Returns
/// - `200 OK` - Logged-in employee
/// - `400 Bad Request` - CSRF state mismatch
/// - `403 Forbidden` - Discord account not linked to any employee
/// - `500 Internal Server Error` - Token exchange or Discord error
#[utoipa::path(
    get,
    path = "/api/auth/callback",
    tag = AUTH_TAG,
    params(
        ("state" = String, Query, description = "CSRF state returned by Discord"),
        ("code" = String, Query, description = "Authorization code")
    ),
    responses(
        (status = 200, description = "Logged in", body = ApiResponse<CurrentEmployeeDto>),
        (status = 400, description = "CSRF validation failed", body = ErrorDto),
        (status = 403, description = "Discord account not linked to an employee", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    params: Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service =
        DiscordAuthService::new(&state.db, &state.http_client, &state.oauth_client);

    CsrfSession::new(&session).validate(&params.0.state).await?;

    let employee = auth_service.callback(params.0.code).await?;

    session.cycle_id().await?;
    AuthSession::new(&session)
        .set_employee_id(employee.id)
        .await?;

    let current = current_employee(&state, employee.id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::new(current))))
}

/// Log out.
///
/// Clears the session; succeeds whether or not anyone was logged in.
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = ApiResponse<Option<String>>)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(None::<String>).with_message("Logged out")),
    ))
}

/// Get the logged-in employee.
///
/// # Returns
/// - `200 OK` - Employee behind the session with role codes
/// - `401 Unauthorized` - Not logged in, or the session's employee no longer exists
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current employee", body = ApiResponse<CurrentEmployeeDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_current_employee(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let employee = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let current = current_employee(&state, employee.id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::new(current))))
}

async fn current_employee(
    state: &AppState,
    employee_id: uuid::Uuid,
) -> Result<CurrentEmployeeDto, AppError> {
    let details = EmployeeService::new(&state.db)
        .get_details(employee_id)
        .await?;

    Ok(CurrentEmployeeDto {
        id: details.employee.id,
        full_name: details.employee.full_name,
        display_name: details.employee.display_name,
        team_email: details.employee.team_email,
        avatar: details.employee.avatar,
        roles: details.roles.into_iter().map(|role| role.code).collect(),
    })
}
