use crate::server::{
    error::{dashboard::DashboardError, AppError},
    service::dashboard::DashboardService,
};
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod audits;
