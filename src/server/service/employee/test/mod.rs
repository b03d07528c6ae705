use crate::{
    model::employee::{
        CreateEmployeeDto, UpdateBaseSalaryDto, UpdateGeneralInfoDto, UpdatePersonalInfoDto,
        UpdateSkillsDto,
    },
    server::{
        error::{employee::EmployeeError, AppError},
        model::employee::{
            CreateEmployeeParams, SearchEmployeesParams, UpdateBaseSalaryParams,
            UpdateGeneralInfoParams, UpdatePersonalInfoParams, UpdateRolesParams,
            UpdateSkillsParams, WorkingStatus,
        },
        service::{discord::fake::FakeDirectory, employee::EmployeeService},
    },
};
use chrono::NaiveDate;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait};
use test_utils::{
    builder::TestBuilder,
    factory::{self, employee::EmployeeFactory},
};
use uuid::Uuid;

mod base_salary;
mod create;
mod general_info;
mod personal_info;
mod roles;

/// Asserts that a service call failed with the given employee error.
fn assert_employee_err<T: std::fmt::Debug>(result: Result<T, AppError>, expected: EmployeeError) {
    match result {
        Err(AppError::EmployeeErr(err)) => assert_eq!(err, expected),
        other => panic!("expected {expected:?}, got {other:?}"),
    }
}

/// Builds general-info params that pass request validation.
fn general_info(email: &str) -> UpdateGeneralInfoParams {
    UpdateGeneralInfoParams::from_dto(UpdateGeneralInfoDto {
        full_name: "Updated Name".to_string(),
        email: email.to_string(),
        phone: "0123456789".to_string(),
        ..Default::default()
    })
    .unwrap()
}

async fn social_account_count(db: &DatabaseConnection) -> Result<u64, DbErr> {
    entity::prelude::SocialAccount::find().count(db).await
}
