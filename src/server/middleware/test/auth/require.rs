use super::*;

/// Tests an employee holding the admin role.
///
/// Expected: Ok(Employee) for the logged-in employee
#[tokio::test]
async fn grants_access_to_admin() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_employee_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let employee = factory::create_employee(db).await?;
    let role = factory::create_role_with_code(db, ADMIN_ROLE_CODE, 1).await?;
    factory::assign_role(db, employee.id, role.id).await?;

    AuthSession::new(session)
        .set_employee_id(employee.id)
        .await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await;

    assert_eq!(result.unwrap().id, employee.id);

    Ok(())
}

/// Tests an employee without the admin role.
///
/// Expected: Err(AuthError::AccessDenied) carrying the employee id
#[tokio::test]
async fn denies_access_without_admin_role() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_employee_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let employee = factory::create_employee(db).await?;
    let role = factory::create_role(db).await?;
    factory::assign_role(db, employee.id, role.id).await?;

    AuthSession::new(session)
        .set_employee_id(employee.id)
        .await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(employee_id, message))) => {
            assert_eq!(employee_id, employee.id);
            assert!(message.contains("admin"));
        }
        other => panic!("Expected AccessDenied error, got: {:?}", other),
    }

    Ok(())
}

/// Tests that no permissions only requires a logged-in employee.
///
/// Expected: Ok(Employee)
#[tokio::test]
async fn empty_permission_list_grants_access() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_employee_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let employee = factory::create_employee(db).await?;
    AuthSession::new(session)
        .set_employee_id(employee.id)
        .await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests a request without a logged-in employee.
///
/// Expected: Err(AuthError::EmployeeNotInSession)
#[tokio::test]
async fn rejects_missing_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_employee_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::EmployeeNotInSession))
    ));

    Ok(())
}

/// Tests a session pointing at an employee that no longer exists.
///
/// Expected: Err(AuthError::EmployeeNotInDatabase)
#[tokio::test]
async fn rejects_unknown_employee() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_employee_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let missing = Uuid::new_v4();
    AuthSession::new(session).set_employee_id(missing).await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    match result {
        Err(AppError::AuthErr(AuthError::EmployeeNotInDatabase(employee_id))) => {
            assert_eq!(employee_id, missing)
        }
        other => panic!("Expected EmployeeNotInDatabase error, got: {:?}", other),
    }

    Ok(())
}
