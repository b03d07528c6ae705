use crate::server::{data::base_salary::BaseSalaryRepository, model::employee::UpdateBaseSalaryParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod upsert;
