use super::*;

/// Tests that the general-info update writes the allow-listed columns.
///
/// Verifies that changed columns are stored and that columns outside the allow-list,
/// such as the personal email and working status, keep their values.
///
/// Expected: Ok with updated full name, team email and dates; other columns unchanged
#[tokio::test]
async fn writes_allow_listed_columns_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_employee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (manager, employee) = factory::helpers::create_employee_with_line_manager(db).await?;

    let repo = EmployeeRepository::new(db);
    let current = repo.find_by_id(employee.id).await?.unwrap();
    let mut changes = GeneralInfoChanges::from_employee(&current);
    changes.full_name = "Renamed Employee".to_string();
    changes.team_email = "renamed@d.foundation".to_string();
    changes.left_date = NaiveDate::from_ymd_opt(2024, 6, 30);
    changes.line_manager_id = None;
    changes.wise_currency = "EUR".to_string();

    let updated = repo.update_general_info(employee.id, changes).await?;

    assert_eq!(updated.full_name, "Renamed Employee");
    assert_eq!(updated.team_email, "renamed@d.foundation");
    assert_eq!(updated.left_date, NaiveDate::from_ymd_opt(2024, 6, 30));
    assert_eq!(updated.line_manager_id, None);
    assert_eq!(updated.wise_currency, "EUR");
    assert_eq!(updated.personal_email, employee.personal_email);
    assert_eq!(updated.working_status, employee.working_status);
    assert!(repo.exists(manager.id).await?);

    Ok(())
}

/// Tests updating an employee that does not exist.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_for_missing_employee() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_employee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = factory::create_employee(db).await?;
    let changes = GeneralInfoChanges::from_employee(
        &crate::server::model::employee::Employee::from_entity(employee),
    );

    let repo = EmployeeRepository::new(db);
    let result = repo
        .update_general_info(uuid::Uuid::new_v4(), changes)
        .await;

    assert!(result.is_err());

    Ok(())
}
