use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use uuid::Uuid;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// CSRF state validation failed during OAuth callback.
    ///
    /// The CSRF state token in the OAuth callback URL does not match the token stored
    /// in the session, indicating a potential CSRF attack or an invalid callback request.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// Exchanging the OAuth authorization code for a token failed.
    #[error("Failed to exchange OAuth code: {0}")]
    TokenExchange(String),

    /// No employee id is stored in the session.
    #[error("No employee in session")]
    EmployeeNotInSession,

    /// The session references an employee that no longer exists.
    #[error("Employee {0} from session not found in database")]
    EmployeeNotInDatabase(Uuid),

    /// The Discord account that logged in is not linked to any employee.
    #[error("Discord user {0} is not linked to an employee")]
    EmployeeNotLinked(String),

    /// The employee lacks a role required by the endpoint.
    #[error("Employee {0} denied access: {1}")]
    AccessDenied(Uuid, String),
}

/// Converts authentication errors into HTTP responses.
///
/// All errors are logged at debug level for diagnostics while the client receives a
/// generic message.
///
/// # Returns
/// - 400 Bad Request - CSRF failures and failed code exchanges
/// - 401 Unauthorized - No valid employee in session
/// - 403 Forbidden - Unlinked Discord account or missing role
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::CsrfValidationFailed | Self::TokenExchange(_) => (
                StatusCode::BAD_REQUEST,
                "There was an issue logging you in, please try again.",
            ),
            Self::EmployeeNotInSession | Self::EmployeeNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "unauthorized")
            }
            Self::EmployeeNotLinked(_) => (
                StatusCode::FORBIDDEN,
                "discord account is not linked to an employee",
            ),
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "forbidden"),
        };

        (status, Json(ErrorDto::new(message))).into_response()
    }
}
