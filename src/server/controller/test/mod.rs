use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use sea_orm::{DatabaseConnection, EntityTrait};
use serde_json::Value;
use test_utils::{
    builder::TestBuilder, context::TestContext, factory, factory::employee::EmployeeFactory,
};
use tower::util::ServiceExt;
use uuid::Uuid;

use crate::server::{
    config::Config,
    middleware::{auth::ADMIN_ROLE_CODE, session::AuthSession},
    model::discord::AUDIT_UPDATE_WORKING_STATUS,
    router,
    service::discord::fake::{FakeDirectory, RecordingAuditLog},
    startup,
    state::AppState,
};

mod employee;

fn config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        server_addr: ([127, 0, 0, 1], 8080).into(),
        discord_bot_token: "token".to_string(),
        discord_guild_id: 1,
        discord_audit_channel_id: None,
        discord_client_id: "client".to_string(),
        discord_client_secret: "secret".to_string(),
        discord_redirect_url: "http://localhost:8080/api/auth/callback".to_string(),
        discord_auth_url: "https://discord.com/oauth2/authorize".to_string(),
        discord_token_url: "https://discord.com/api/oauth2/token".to_string(),
    }
}

/// Builds the full router over the test database with in-memory Discord collaborators.
async fn app(db: &DatabaseConnection, audit_log: Arc<RecordingAuditLog>) -> Router {
    let session = startup::connect_to_session(db, false).await.unwrap();
    let state = AppState::new(
        db.clone(),
        startup::setup_reqwest_client().unwrap(),
        startup::setup_oauth_client(&config()).unwrap(),
        Arc::new(FakeDirectory::default()),
        audit_log,
    );

    router::router().with_state(state).layer(session)
}

/// Logs the employee in and returns the matching session cookie.
async fn login(test: &mut TestContext, employee_id: Uuid) -> String {
    let session = test.session().await.unwrap();
    AuthSession::new(session)
        .set_employee_id(employee_id)
        .await
        .unwrap();
    session.save().await.unwrap();

    format!("id={}", session.id().unwrap())
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    cookie: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        request = request.header(header::COOKIE, cookie);
    }
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, body)
}

/// Tests that the OpenAPI document lists the employee routes.
///
/// Expected: 200 with the general-info path present
#[tokio::test]
async fn serves_openapi_document() {
    let test = TestBuilder::new()
        .with_employee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, body) = send(
        app(db, Arc::default()).await,
        Method::GET,
        "/api-docs/openapi.json",
        None,
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]
        .get("/api/employees/{employee_id}/general-info")
        .is_some());
}

/// Tests the current-employee endpoint for a logged-in admin.
///
/// Expected: 200 with the employee id and the admin role code
#[tokio::test]
async fn returns_current_employee() {
    let mut test = TestBuilder::new()
        .with_employee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.clone().unwrap();

    let employee = factory::create_employee(&db).await.unwrap();
    let role = factory::create_role_with_code(&db, ADMIN_ROLE_CODE, 1)
        .await
        .unwrap();
    factory::assign_role(&db, employee.id, role.id).await.unwrap();
    let cookie = login(&mut test, employee.id).await;

    let (status, body) = send(
        app(&db, Arc::default()).await,
        Method::GET,
        "/api/auth/me",
        Some(&cookie),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], employee.id.to_string());
    assert_eq!(body["data"]["roles"], serde_json::json!([ADMIN_ROLE_CODE]));
}

/// Tests the current-employee endpoint without a session.
///
/// Expected: 401 with an error body
#[tokio::test]
async fn rejects_anonymous_current_employee() {
    let test = TestBuilder::new()
        .with_employee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, body) = send(
        app(db, Arc::default()).await,
        Method::GET,
        "/api/auth/me",
        None,
        None,
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body["error"].is_string());
}
