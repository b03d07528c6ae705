use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, PaginationDto},
        employee::{
            BasicEmployeeDto, CreateEmployeeDto, EmployeeDto, EmployeeListItemDto, GeneralInfoDto,
            PublicEmployeeDto, SearchEmployeesDto, UpdateBaseSalaryDto, UpdateEmployeeStatusDto,
            UpdateGeneralInfoDto, UpdatePersonalInfoDto, UpdateRolesDto, UpdateSkillsDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            discord::{AuditLogEntry, AUDIT_UPDATE_BASE_SALARY, AUDIT_UPDATE_WORKING_STATUS},
            employee::{
                CreateEmployeeParams, SearchEmployeesParams, UpdateBaseSalaryParams,
                UpdateGeneralInfoParams, UpdatePersonalInfoParams, UpdateRolesParams,
                UpdateSkillsParams, WorkingStatus,
            },
        },
        service::{discord::audit_log::log_best_effort, employee::EmployeeService},
        state::AppState,
        util::{money::format_money, parse::parse_employee_id},
    },
};

/// Tag for grouping employee endpoints in OpenAPI documentation
pub static EMPLOYEE_TAG: &str = "employee";

/// Update an employee's general information.
///
/// Updates names, team email, phone, dates, line manager, referrer, social accounts,
/// the linked Discord account, organizations and Wise payout details in a single
/// transaction. Blank string fields keep their stored value.
///
/// # Access Control
/// - `Admin` - Only admins can edit employees
///
/// # Arguments
/// - `state` - Application state containing the database connection and Discord directory
/// - `session` - Employee's session for authentication
/// - `employee_id` - Employee to update
/// - `payload` - General info update
///
/// # Returns
/// - `200 OK` - Updated general information
/// - `400 Bad Request` - Invalid id, invalid field or conflicting value
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an admin
/// - `404 Not Found` - Employee, line manager, referrer, organization or Discord member not found
/// - `500 Internal Server Error` - Database or Discord error
#[utoipa::path(
    put,
    path = "/api/employees/{employee_id}/general-info",
    tag = EMPLOYEE_TAG,
    params(
        ("employee_id" = String, Path, description = "Employee UUID")
    ),
    request_body = UpdateGeneralInfoDto,
    responses(
        (status = 200, description = "Successfully updated general info", body = ApiResponse<GeneralInfoDto>),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Referenced record not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_general_info(
    State(state): State<AppState>,
    session: Session,
    Path(employee_id): Path<String>,
    Json(payload): Json<UpdateGeneralInfoDto>,
) -> Result<impl IntoResponse, AppError> {
    let employee_id = parse_employee_id(&employee_id)?;
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = UpdateGeneralInfoParams::from_dto(payload)?;
    let details = EmployeeService::new(&state.db)
        .update_general_info(state.discord_directory.as_ref(), employee_id, params)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(details.into_general_info_dto())),
    ))
}

/// Create an employee.
///
/// Creates the employee with positions, roles, seniority and an initial base salary.
///
/// # Access Control
/// - `Admin` - Only admins can create employees
///
/// # Returns
/// - `201 Created` - The new employee
/// - `400 Bad Request` - Invalid field, email already in use
/// - `401 Unauthorized` / `403 Forbidden` - Not logged in or not an admin
/// - `404 Not Found` - Seniority, position, role or referrer not found
#[utoipa::path(
    post,
    path = "/api/employees",
    tag = EMPLOYEE_TAG,
    request_body = CreateEmployeeDto,
    responses(
        (status = 201, description = "Successfully created employee", body = ApiResponse<EmployeeDto>),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Referenced record not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_employee(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateEmployeeDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = CreateEmployeeParams::from_dto(payload)?;
    let details = EmployeeService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::new(details.into_dto()))))
}

/// Get an employee's full profile.
///
/// # Access Control
/// - Any logged-in employee
#[utoipa::path(
    get,
    path = "/api/employees/{employee_id}",
    tag = EMPLOYEE_TAG,
    params(
        ("employee_id" = String, Path, description = "Employee UUID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved employee", body = ApiResponse<EmployeeDto>),
        (status = 400, description = "Invalid employee id", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Employee not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_employee(
    State(state): State<AppState>,
    session: Session,
    Path(employee_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let employee_id = parse_employee_id(&employee_id)?;
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let details = EmployeeService::new(&state.db)
        .get_details(employee_id)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::new(details.into_dto()))))
}

/// Search employees.
///
/// Filters by working status, catalog codes, line managers and a keyword matched
/// against names and emails. Pages are 1-based and default to 20 entries.
///
/// # Access Control
/// - Any logged-in employee
#[utoipa::path(
    post,
    path = "/api/employees/search",
    tag = EMPLOYEE_TAG,
    request_body = SearchEmployeesDto,
    responses(
        (status = 200, description = "Page of matching employees", body = ApiResponse<Vec<EmployeeListItemDto>>),
        (status = 400, description = "Invalid filter", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_employees(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SearchEmployeesDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = SearchEmployeesParams::from_dto(payload)?;
    let pagination = PaginationDto {
        page: params.page + 1,
        size: params.size,
        total: 0,
    };
    let (items, total) = EmployeeService::new(&state.db).search(params).await?;

    let items: Vec<EmployeeListItemDto> = items.into_iter().map(|item| item.into_dto()).collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse::paginated(
            items,
            PaginationDto { total, ..pagination },
        )),
    ))
}

/// Get every employee acting as a line manager.
///
/// # Access Control
/// - Any logged-in employee
#[utoipa::path(
    get,
    path = "/api/line-managers",
    tag = EMPLOYEE_TAG,
    responses(
        (status = 200, description = "Line managers", body = ApiResponse<Vec<BasicEmployeeDto>>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_line_managers(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let line_managers = EmployeeService::new(&state.db).line_managers().await?;
    let line_managers: Vec<_> = line_managers
        .into_iter()
        .map(|employee| employee.into_basic_dto())
        .collect();

    Ok((StatusCode::OK, Json(ApiResponse::new(line_managers))))
}

/// Public directory of current employees.
///
/// # Access Control
/// - Public, no login required
#[utoipa::path(
    get,
    path = "/api/public/employees",
    tag = EMPLOYEE_TAG,
    responses(
        (status = 200, description = "Current employees", body = ApiResponse<Vec<PublicEmployeeDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_public_employees(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let employees = EmployeeService::new(&state.db).public_list().await?;
    let employees: Vec<_> = employees
        .into_iter()
        .map(|employee| employee.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(ApiResponse::new(employees))))
}

/// Update an employee's personal information.
///
/// # Access Control
/// - `Admin` - Only admins can edit employees
#[utoipa::path(
    put,
    path = "/api/employees/{employee_id}/personal-info",
    tag = EMPLOYEE_TAG,
    params(
        ("employee_id" = String, Path, description = "Employee UUID")
    ),
    request_body = UpdatePersonalInfoDto,
    responses(
        (status = 200, description = "Successfully updated personal info", body = ApiResponse<EmployeeDto>),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Employee not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_personal_info(
    State(state): State<AppState>,
    session: Session,
    Path(employee_id): Path<String>,
    Json(payload): Json<UpdatePersonalInfoDto>,
) -> Result<impl IntoResponse, AppError> {
    let employee_id = parse_employee_id(&employee_id)?;
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = UpdatePersonalInfoParams::from_dto(payload)?;
    let details = EmployeeService::new(&state.db)
        .update_personal_info(employee_id, params)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::new(details.into_dto()))))
}

/// Update an employee's positions, chapters, seniority and stacks.
///
/// # Access Control
/// - `Admin` - Only admins can edit employees
#[utoipa::path(
    put,
    path = "/api/employees/{employee_id}/skills",
    tag = EMPLOYEE_TAG,
    params(
        ("employee_id" = String, Path, description = "Employee UUID")
    ),
    request_body = UpdateSkillsDto,
    responses(
        (status = 200, description = "Successfully updated skills", body = ApiResponse<EmployeeDto>),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Employee or catalog entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_skills(
    State(state): State<AppState>,
    session: Session,
    Path(employee_id): Path<String>,
    Json(payload): Json<UpdateSkillsDto>,
) -> Result<impl IntoResponse, AppError> {
    let employee_id = parse_employee_id(&employee_id)?;
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = UpdateSkillsParams::from_dto(payload)?;
    let details = EmployeeService::new(&state.db)
        .update_skills(employee_id, params)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::new(details.into_dto()))))
}

/// Update an employee's base salary.
///
/// Posts an audit entry with the new monthly payout once the salary is stored.
///
/// # Access Control
/// - `Admin` - Only admins can edit salaries
#[utoipa::path(
    put,
    path = "/api/employees/{employee_id}/base-salary",
    tag = EMPLOYEE_TAG,
    params(
        ("employee_id" = String, Path, description = "Employee UUID")
    ),
    request_body = UpdateBaseSalaryDto,
    responses(
        (status = 200, description = "Successfully updated base salary", body = ApiResponse<EmployeeDto>),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Employee not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_base_salary(
    State(state): State<AppState>,
    session: Session,
    Path(employee_id): Path<String>,
    Json(payload): Json<UpdateBaseSalaryDto>,
) -> Result<impl IntoResponse, AppError> {
    let employee_id = parse_employee_id(&employee_id)?;
    let actor = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = UpdateBaseSalaryParams::from_dto(payload)?;
    let new_salary = format_money(params.total(), &params.currency_code);
    let details = EmployeeService::new(&state.db)
        .update_base_salary(employee_id, params)
        .await?;

    log_best_effort(
        state.audit_log.as_ref(),
        AuditLogEntry::new(AUDIT_UPDATE_BASE_SALARY)
            .field("employee_id", actor.id.to_string())
            .field("updated_employee_id", employee_id.to_string())
            .field("new_salary", new_salary),
    )
    .await;

    Ok((StatusCode::OK, Json(ApiResponse::new(details.into_dto()))))
}

/// Update an employee's working status.
///
/// Posts an audit entry with the new status once it is stored.
///
/// # Access Control
/// - `Admin` - Only admins can change working status
#[utoipa::path(
    put,
    path = "/api/employees/{employee_id}/employee-status",
    tag = EMPLOYEE_TAG,
    params(
        ("employee_id" = String, Path, description = "Employee UUID")
    ),
    request_body = UpdateEmployeeStatusDto,
    responses(
        (status = 200, description = "Successfully updated working status", body = ApiResponse<EmployeeDto>),
        (status = 400, description = "Invalid working status", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Employee not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_employee_status(
    State(state): State<AppState>,
    session: Session,
    Path(employee_id): Path<String>,
    Json(payload): Json<UpdateEmployeeStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let employee_id = parse_employee_id(&employee_id)?;
    let actor = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let status = WorkingStatus::parse(&payload.employee_status)?;
    let details = EmployeeService::new(&state.db)
        .update_status(employee_id, status)
        .await?;

    log_best_effort(
        state.audit_log.as_ref(),
        AuditLogEntry::new(AUDIT_UPDATE_WORKING_STATUS)
            .field("employee_id", actor.id.to_string())
            .field("updated_employee_id", employee_id.to_string())
            .field("working_status", status.as_str()),
    )
    .await;

    Ok((StatusCode::OK, Json(ApiResponse::new(details.into_dto()))))
}

/// Replace an employee's roles.
///
/// # Access Control
/// - `Admin` - Only admins can assign roles
#[utoipa::path(
    put,
    path = "/api/employees/{employee_id}/roles",
    tag = EMPLOYEE_TAG,
    params(
        ("employee_id" = String, Path, description = "Employee UUID")
    ),
    request_body = UpdateRolesDto,
    responses(
        (status = 200, description = "Successfully updated roles", body = ApiResponse<EmployeeDto>),
        (status = 400, description = "Empty role list", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Employee or role not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_roles(
    State(state): State<AppState>,
    session: Session,
    Path(employee_id): Path<String>,
    Json(payload): Json<UpdateRolesDto>,
) -> Result<impl IntoResponse, AppError> {
    let employee_id = parse_employee_id(&employee_id)?;
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = UpdateRolesParams::from_dto(payload)?;
    let details = EmployeeService::new(&state.db)
        .update_roles(employee_id, params)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::new(details.into_dto()))))
}
