use super::*;

fn create_params(
    team_email: &str,
    seniority_id: Uuid,
    positions: Vec<Uuid>,
    roles: Vec<Uuid>,
) -> CreateEmployeeParams {
    CreateEmployeeParams::from_dto(CreateEmployeeDto {
        full_name: "New Hire".to_string(),
        display_name: "Hire".to_string(),
        team_email: team_email.to_string(),
        personal_email: "hire@example.com".to_string(),
        positions,
        salary: 20_000_000,
        seniority_id,
        roles,
        status: "on-boarding".to_string(),
        referred_by: None,
        joined_date: "2024-03-01".to_string(),
    })
    .unwrap()
}

/// Tests creating an employee with positions, roles and a base salary.
///
/// Expected: Ok with links, seniority and a base salary paid fully to the personal account
#[tokio::test]
async fn creates_employee_with_links() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_employee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let seniority = factory::create_seniority(db, 3).await?;
    let position = factory::create_position(db).await?;
    let role = factory::create_role(db).await?;

    let params = create_params(
        "new.hire@d.foundation",
        seniority.id,
        vec![position.id, position.id],
        vec![role.id],
    );

    let service = EmployeeService::new(db);
    let details = service.create(params).await.unwrap();

    assert_eq!(details.employee.team_email, "new.hire@d.foundation");
    assert_eq!(details.employee.working_status, "on-boarding");
    assert_eq!(details.seniority.map(|s| s.id), Some(seniority.id));
    assert_eq!(details.positions.len(), 1);
    assert_eq!(details.roles.len(), 1);
    let salary = details.base_salary.unwrap();
    assert_eq!(salary.contract_amount, 20_000_000);
    assert_eq!(salary.personal_account_amount, 20_000_000);
    assert_eq!(salary.company_account_amount, 0);
    assert_eq!(salary.currency_code, "VND");

    Ok(())
}

/// Tests creating an employee with a team email already in use.
///
/// Expected: Err(TeamEmailExisted) and no new employee
#[tokio::test]
async fn rejects_existing_team_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_employee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_employee_with_email(db, "taken@d.foundation").await?;
    let seniority = factory::create_seniority(db, 1).await?;
    let role = factory::create_role(db).await?;

    let service = EmployeeService::new(db);
    let result = service
        .create(create_params(
            &existing.team_email,
            seniority.id,
            vec![],
            vec![role.id],
        ))
        .await;

    assert_employee_err(result, EmployeeError::TeamEmailExisted);
    assert_eq!(entity::prelude::Employee::find().count(db).await?, 1);

    Ok(())
}

/// Tests creating an employee with unknown references.
///
/// Expected: Err(SeniorityNotFound), Err(PositionNotFound), then Err(RoleNotFound)
#[tokio::test]
async fn rejects_unknown_references() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_employee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let seniority = factory::create_seniority(db, 1).await?;
    let position = factory::create_position(db).await?;
    let role = factory::create_role(db).await?;

    let service = EmployeeService::new(db);

    let result = service
        .create(create_params(
            "a@d.foundation",
            Uuid::new_v4(),
            vec![position.id],
            vec![role.id],
        ))
        .await;
    assert_employee_err(result, EmployeeError::SeniorityNotFound);

    let result = service
        .create(create_params(
            "b@d.foundation",
            seniority.id,
            vec![Uuid::new_v4()],
            vec![role.id],
        ))
        .await;
    assert_employee_err(result, EmployeeError::PositionNotFound);

    let result = service
        .create(create_params(
            "c@d.foundation",
            seniority.id,
            vec![position.id],
            vec![Uuid::new_v4()],
        ))
        .await;
    assert_employee_err(result, EmployeeError::RoleNotFound);

    assert_eq!(entity::prelude::Employee::find().count(db).await?, 0);

    Ok(())
}
