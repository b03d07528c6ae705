use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{AuthGuard, Permission, ADMIN_ROLE_CODE},
        session::AuthSession,
    },
};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod require;
