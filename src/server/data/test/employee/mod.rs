use crate::server::{
    data::employee::EmployeeRepository,
    model::employee::{GeneralInfoChanges, SearchEmployeesParams, WorkingStatus},
};
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, employee::EmployeeFactory},
};

mod find_by_discord_id;
mod line_managers;
mod search;
mod update_general_info;
