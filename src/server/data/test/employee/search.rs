use super::*;

fn params() -> SearchEmployeesParams {
    SearchEmployeesParams {
        size: 20,
        ..Default::default()
    }
}

/// Tests that employees who left are hidden without a status filter.
///
/// Expected: Ok with only the current employee and a total of 1
#[tokio::test]
async fn excludes_left_employees_by_default() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_employee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let current = factory::create_employee(db).await?;
    EmployeeFactory::new(db).working_status("left").build().await?;

    let repo = EmployeeRepository::new(db);
    let (employees, total) = repo.search(&params()).await?;

    assert_eq!(total, 1);
    assert_eq!(employees[0].id, current.id);

    Ok(())
}

/// Tests filtering by working status.
///
/// Expected: Ok with only employees that left when filtering on `left`
#[tokio::test]
async fn filters_by_working_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_employee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_employee(db).await?;
    let left = EmployeeFactory::new(db).working_status("left").build().await?;

    let repo = EmployeeRepository::new(db);
    let (employees, total) = repo
        .search(&SearchEmployeesParams {
            working_statuses: vec![WorkingStatus::Left],
            ..params()
        })
        .await?;

    assert_eq!(total, 1);
    assert_eq!(employees[0].id, left.id);

    Ok(())
}

/// Tests filtering by position code and keyword together.
///
/// Expected: Ok with the single employee holding the position and matching the keyword
#[tokio::test]
async fn filters_by_position_code_and_keyword() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_employee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let position = factory::create_position(db).await?;
    let alice = EmployeeFactory::new(db).full_name("Alice Nguyen").build().await?;
    let bob = EmployeeFactory::new(db).full_name("Bob Tran").build().await?;
    let carol = EmployeeFactory::new(db).full_name("Carol Nguyen").build().await?;
    factory::assign_position(db, alice.id, position.id).await?;
    factory::assign_position(db, bob.id, position.id).await?;

    let repo = EmployeeRepository::new(db);
    let (employees, total) = repo
        .search(&SearchEmployeesParams {
            positions: vec![position.code.clone()],
            keyword: "Nguyen".to_string(),
            ..params()
        })
        .await?;

    assert_eq!(total, 1);
    assert_eq!(employees[0].id, alice.id);
    assert_ne!(employees[0].id, carol.id);

    Ok(())
}

/// Tests pagination ordered by full name.
///
/// Expected: Ok with the second page holding the third name and the full total
#[tokio::test]
async fn paginates_sorted_by_full_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_employee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Charlie", "Alice", "Bob"] {
        EmployeeFactory::new(db).full_name(name).build().await?;
    }

    let repo = EmployeeRepository::new(db);
    let (employees, total) = repo
        .search(&SearchEmployeesParams {
            page: 1,
            size: 2,
            ..Default::default()
        })
        .await?;

    assert_eq!(total, 3);
    assert_eq!(employees.len(), 1);
    assert_eq!(employees[0].full_name, "Charlie");

    Ok(())
}

/// Tests filtering by stack code.
///
/// Expected: Ok with only the employee working on the stack
#[tokio::test]
async fn filters_by_stack_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_employee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stack = factory::create_stack(db).await?;
    let rust = factory::create_employee(db).await?;
    factory::create_employee(db).await?;
    factory::assign_stack(db, rust.id, stack.id).await?;

    let repo = EmployeeRepository::new(db);
    let (employees, total) = repo
        .search(&SearchEmployeesParams {
            stacks: vec![stack.code.clone()],
            ..params()
        })
        .await?;

    assert_eq!(total, 1);
    assert_eq!(employees[0].id, rust.id);

    Ok(())
}

/// Tests that chapter and organization codes narrow the result together.
///
/// Expected: Ok with only the employee matching both codes
#[tokio::test]
async fn filters_by_chapter_and_organization_codes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_employee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let chapter = factory::create_chapter(db).await?;
    let organization = factory::create_organization(db).await?;
    let both = factory::create_employee(db).await?;
    let chapter_only = factory::create_employee(db).await?;
    factory::create_employee(db).await?;
    factory::assign_chapter(db, both.id, chapter.id).await?;
    factory::assign_chapter(db, chapter_only.id, chapter.id).await?;
    factory::add_employee_to_organization(db, both.id, organization.id).await?;

    let repo = EmployeeRepository::new(db);
    let (employees, total) = repo
        .search(&SearchEmployeesParams {
            chapters: vec![chapter.code.clone()],
            organizations: vec![organization.code.clone()],
            ..params()
        })
        .await?;

    assert_eq!(total, 1);
    assert_eq!(employees[0].id, both.id);

    Ok(())
}
