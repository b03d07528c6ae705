use super::*;

/// Tests replacing an employee's positions and stacks.
///
/// Expected: Ok with only the new position and stack linked
#[tokio::test]
async fn replaces_positions_and_stacks() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_employee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = factory::create_employee(db).await?;
    let old_position = factory::create_position(db).await?;
    let new_position = factory::create_position(db).await?;
    let stack = factory::create_stack(db).await?;
    factory::assign_position(db, employee.id, old_position.id).await?;

    let repo = CatalogRepository::new(db);
    repo.replace_positions(employee.id, &[new_position.id]).await?;
    repo.replace_stacks(employee.id, &[stack.id]).await?;

    let positions = repo.positions_of(employee.id).await?;
    let stacks = repo.stacks_of(employee.id).await?;
    assert_eq!(positions.len(), 1);
    assert_eq!(positions[0].id, new_position.id);
    assert_eq!(stacks.len(), 1);
    assert_eq!(stacks[0].code, stack.code);

    Ok(())
}

/// Tests role lookups by code after replacing roles.
///
/// Expected: Ok(true) for the assigned admin role, Ok(false) for the removed one
#[tokio::test]
async fn replaces_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_employee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = factory::create_employee(db).await?;
    let member = factory::create_role_with_code(db, "member", 1).await?;
    let admin = factory::create_role_with_code(db, "admin", 10).await?;
    factory::assign_role(db, employee.id, member.id).await?;

    let repo = CatalogRepository::new(db);
    repo.replace_roles(employee.id, &[admin.id]).await?;

    assert!(repo.has_role_code(employee.id, "admin").await?);
    assert!(!repo.has_role_code(employee.id, "member").await?);

    Ok(())
}
