use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{auth, dashboard, employee},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Fortress", description = "Employee records and team dashboards"),
    tags(
        (name = "auth", description = "Discord login and the current session"),
        (name = "employee", description = "Employee records"),
        (name = "dashboard", description = "Project and engineering dashboards"),
    )
)]
pub struct ApiDoc;

/// Builds every API route and the Swagger UI serving their OpenAPI document.
pub fn router() -> Router<AppState> {
    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::login))
        .routes(routes!(auth::callback))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_current_employee))
        .routes(routes!(employee::create_employee))
        .routes(routes!(employee::search_employees))
        .routes(routes!(employee::get_employee))
        .routes(routes!(employee::update_general_info))
        .routes(routes!(employee::update_personal_info))
        .routes(routes!(employee::update_skills))
        .routes(routes!(employee::update_base_salary))
        .routes(routes!(employee::update_employee_status))
        .routes(routes!(employee::update_roles))
        .routes(routes!(employee::get_line_managers))
        .routes(routes!(employee::get_public_employees))
        .routes(routes!(dashboard::get_work_surveys))
        .routes(routes!(dashboard::get_action_items))
        .routes(routes!(dashboard::get_engineering_health))
        .routes(routes!(dashboard::get_audits))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
}
