use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::{catalog::CatalogRepository, employee::EmployeeRepository},
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::employee::Employee,
};

/// Role code granting access to administrative endpoints.
pub const ADMIN_ROLE_CODE: &str = "admin";

pub enum Permission {
    Admin,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the logged-in employee and checks every permission.
    ///
    /// # Returns
    /// - `Ok(Employee)` - Logged-in employee holding all permissions
    /// - `Err(AppError::AuthErr(EmployeeNotInSession))` - Nobody is logged in
    /// - `Err(AppError::AuthErr(EmployeeNotInDatabase))` - Session references a missing employee
    /// - `Err(AppError::AuthErr(AccessDenied))` - A permission is missing
    pub async fn require(&self, permissions: &[Permission]) -> Result<Employee, AppError> {
        let Some(employee_id) = AuthSession::new(self.session).get_employee_id().await? else {
            return Err(AuthError::EmployeeNotInSession.into());
        };

        let Some(employee) = EmployeeRepository::new(self.db)
            .find_by_id(employee_id)
            .await?
        else {
            return Err(AuthError::EmployeeNotInDatabase(employee_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    let is_admin = CatalogRepository::new(self.db)
                        .has_role_code(employee_id, ADMIN_ROLE_CODE)
                        .await?;
                    if !is_admin {
                        return Err(AuthError::AccessDenied(
                            employee_id,
                            "Employee attempted an admin action without the admin role"
                                .to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(employee)
    }
}
