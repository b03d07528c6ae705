use super::*;

/// Tests the public directory without a session.
///
/// Expected: 200 listing only the employee who has not left
#[tokio::test]
async fn public_employees_need_no_login() {
    let test = TestBuilder::new()
        .with_employee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let current = factory::create_employee(db).await.unwrap();
    EmployeeFactory::new(db)
        .working_status("left")
        .build()
        .await
        .unwrap();

    let (status, body) = send(
        app(db, Arc::default()).await,
        Method::GET,
        "/api/public/employees",
        None,
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["id"], current.id.to_string());
}

/// Tests reading an employee without a session.
///
/// Expected: 401
#[tokio::test]
async fn employee_details_require_login() {
    let test = TestBuilder::new()
        .with_employee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = factory::create_employee(db).await.unwrap();

    let (status, _) = send(
        app(db, Arc::default()).await,
        Method::GET,
        &format!("/api/employees/{}", employee.id),
        None,
        None,
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

/// Tests a path id that is not a UUID.
///
/// Expected: 400 with the invalid employee id message
#[tokio::test]
async fn rejects_malformed_employee_id() {
    let test = TestBuilder::new()
        .with_employee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, body) = send(
        app(db, Arc::default()).await,
        Method::PUT,
        "/api/employees/not-a-uuid/roles",
        None,
        Some(serde_json::json!({ "roles": [] })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

/// Tests an admin changing an employee's working status.
///
/// Expected: 200 with the new status and one audit entry naming both employees
#[tokio::test]
async fn status_update_is_audited() {
    let mut test = TestBuilder::new()
        .with_employee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.clone().unwrap();

    let admin = factory::create_employee(&db).await.unwrap();
    let role = factory::create_role_with_code(&db, ADMIN_ROLE_CODE, 1)
        .await
        .unwrap();
    factory::assign_role(&db, admin.id, role.id).await.unwrap();
    let employee = factory::create_employee(&db).await.unwrap();
    let cookie = login(&mut test, admin.id).await;
    let audit_log = Arc::new(RecordingAuditLog::default());

    let (status, body) = send(
        app(&db, audit_log.clone()).await,
        Method::PUT,
        &format!("/api/employees/{}/employee-status", employee.id),
        Some(&cookie),
        Some(serde_json::json!({ "employeeStatus": "left" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["workingStatus"], "left");

    let entries = audit_log.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].log_type, AUDIT_UPDATE_WORKING_STATUS);
    assert!(entries[0]
        .fields
        .contains(&("employee_id".to_string(), admin.id.to_string())));
    assert!(entries[0]
        .fields
        .contains(&("updated_employee_id".to_string(), employee.id.to_string())));
}

/// Tests a non-admin changing a working status.
///
/// Expected: 403, status unchanged and no audit entry
#[tokio::test]
async fn status_update_requires_admin() {
    let mut test = TestBuilder::new()
        .with_employee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.clone().unwrap();

    let member = factory::create_employee(&db).await.unwrap();
    let employee = factory::create_employee(&db).await.unwrap();
    let cookie = login(&mut test, member.id).await;
    let audit_log = Arc::new(RecordingAuditLog::default());

    let (status, _) = send(
        app(&db, audit_log.clone()).await,
        Method::PUT,
        &format!("/api/employees/{}/employee-status", employee.id),
        Some(&cookie),
        Some(serde_json::json!({ "employeeStatus": "left" })),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(audit_log.entries().is_empty());

    let stored = entity::prelude::Employee::find_by_id(employee.id)
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.working_status, employee.working_status);
}
