use super::*;

/// Tests listing line managers.
///
/// Verifies that only employees referenced by a current employee are returned, once
/// each, and that managers of employees who left are not listed.
///
/// Expected: Ok with exactly the active manager
#[tokio::test]
async fn lists_managers_of_current_employees() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_employee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (manager, _) = factory::helpers::create_employee_with_line_manager(db).await?;
    EmployeeFactory::new(db)
        .line_manager_id(Some(manager.id))
        .build()
        .await?;
    let former_manager = factory::create_employee(db).await?;
    EmployeeFactory::new(db)
        .line_manager_id(Some(former_manager.id))
        .working_status("left")
        .build()
        .await?;

    let repo = EmployeeRepository::new(db);
    let managers = repo.line_managers().await?;

    assert_eq!(managers.len(), 1);
    assert_eq!(managers[0].id, manager.id);

    Ok(())
}
