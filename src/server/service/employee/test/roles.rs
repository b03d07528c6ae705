use super::*;

/// Tests replacing an employee's roles.
///
/// Expected: Ok with exactly the submitted role
#[tokio::test]
async fn replaces_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_employee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = factory::create_employee(db).await?;
    let old_role = factory::create_role(db).await?;
    let new_role = factory::create_role(db).await?;
    factory::assign_role(db, employee.id, old_role.id).await?;

    let service = EmployeeService::new(db);
    let details = service
        .update_roles(employee.id, UpdateRolesParams { roles: vec![new_role.id] })
        .await
        .unwrap();

    assert_eq!(details.roles.iter().map(|r| r.id).collect::<Vec<_>>(), vec![new_role.id]);

    Ok(())
}

/// Tests an unknown role.
///
/// Expected: Err(RoleNotFound) and the old role kept
#[tokio::test]
async fn rejects_unknown_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_employee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = factory::create_employee(db).await?;
    let role = factory::create_role(db).await?;
    factory::assign_role(db, employee.id, role.id).await?;

    let service = EmployeeService::new(db);
    let result = service
        .update_roles(
            employee.id,
            UpdateRolesParams {
                roles: vec![role.id, Uuid::new_v4()],
            },
        )
        .await;

    assert_employee_err(result, EmployeeError::RoleNotFound);
    assert!(service.has_role(employee.id, &role.code).await.unwrap());

    Ok(())
}
