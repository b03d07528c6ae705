//! Type-safe session management wrappers.
//!
//! This module provides type-safe interfaces for managing different aspects of the
//! session, organized by concern. Each struct handles a specific domain of session data,
//! preventing typos, ensuring type consistency, and centralizing session-related logic.
//!
//! # Architecture
//!
//! Session management is split into focused concerns:
//! - `AuthSession` - Authentication state (employee ID)
//! - `CsrfSession` - CSRF token management for the OAuth flow
//!
//! Each struct wraps the same underlying `Session` but exposes only the methods
//! relevant to its concern.

use tower_sessions::Session;
use uuid::Uuid;

use crate::server::error::{auth::AuthError, AppError};

// Session key constants
const SESSION_AUTH_EMPLOYEE_ID: &str = "auth:employee";
const SESSION_AUTH_CSRF_TOKEN: &str = "auth:csrf_token";

/// Authentication session management.
///
/// Stores the id of the logged-in employee and handles the session lifecycle.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the employee's id in the session.
    ///
    /// Called after successful authentication to establish a logged-in session.
    ///
    /// # Returns
    /// - `Ok(())` - Employee id stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_employee_id(&self, employee_id: Uuid) -> Result<(), AppError> {
        self.session
            .insert(SESSION_AUTH_EMPLOYEE_ID, employee_id.to_string())
            .await?;
        Ok(())
    }

    /// Retrieves the logged-in employee's id from the session.
    ///
    /// # Returns
    /// - `Ok(Some(employee_id))` - An employee is logged in
    /// - `Ok(None)` - No employee in session
    /// - `Err(AppError::AuthErr(EmployeeNotInSession))` - Stored value is not a UUID
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_employee_id(&self) -> Result<Option<Uuid>, AppError> {
        let Some(value) = self
            .session
            .get::<String>(SESSION_AUTH_EMPLOYEE_ID)
            .await?
        else {
            return Ok(None);
        };

        let employee_id = Uuid::parse_str(&value).map_err(|_| AuthError::EmployeeNotInSession)?;

        Ok(Some(employee_id))
    }

    /// Clears all data from the session.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}

/// CSRF protection session management.
///
/// Tokens are stored when the login redirect is issued and checked once on callback.
pub struct CsrfSession<'a> {
    session: &'a Session,
}

impl<'a> CsrfSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores a CSRF token in the session.
    ///
    /// # Returns
    /// - `Ok(())` - Token successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_token(&self, token: String) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_CSRF_TOKEN, token).await?;
        Ok(())
    }

    /// Retrieves and removes the CSRF token from the session.
    ///
    /// The token is removed so each one can only be used once.
    ///
    /// # Returns
    /// - `Ok(Some(token))` - CSRF token was found and removed
    /// - `Ok(None)` - No CSRF token in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn take_token(&self) -> Result<Option<String>, AppError> {
        let token = self.session.remove(SESSION_AUTH_CSRF_TOKEN).await?;
        Ok(token)
    }

    /// Takes the stored token and checks it against the `state` returned by Discord.
    ///
    /// # Returns
    /// - `Ok(())` - Tokens match
    /// - `Err(AppError::AuthErr(CsrfValidationFailed))` - Missing or different token
    pub async fn validate(&self, state: &str) -> Result<(), AppError> {
        match self.take_token().await? {
            Some(token) if token == state => Ok(()),
            _ => Err(AuthError::CsrfValidationFailed.into()),
        }
    }
}
