use super::*;

/// Tests replacing organization memberships.
///
/// Expected: Ok with only the newly given organization linked afterwards
#[tokio::test]
async fn replaces_existing_memberships() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_employee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = factory::create_employee(db).await?;
    let old = factory::create_organization(db).await?;
    let new = factory::create_organization(db).await?;
    factory::add_employee_to_organization(db, employee.id, old.id).await?;

    let repo = OrganizationRepository::new(db);
    repo.replace_for_employee(employee.id, &[new.id]).await?;

    let organizations = repo.find_by_employee(employee.id).await?;
    assert_eq!(organizations.len(), 1);
    assert_eq!(organizations[0].id, new.id);

    Ok(())
}

/// Tests that memberships of other employees are untouched.
///
/// Expected: Ok with the other employee still linked to its organization
#[tokio::test]
async fn leaves_other_employees_alone() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_employee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = factory::create_employee(db).await?;
    let other = factory::create_employee(db).await?;
    let organization = factory::create_organization(db).await?;
    factory::add_employee_to_organization(db, other.id, organization.id).await?;

    let repo = OrganizationRepository::new(db);
    repo.replace_for_employee(employee.id, &[organization.id])
        .await?;

    assert_eq!(repo.find_by_employee(other.id).await?.len(), 1);
    assert_eq!(repo.find_by_employee(employee.id).await?.len(), 1);

    Ok(())
}
