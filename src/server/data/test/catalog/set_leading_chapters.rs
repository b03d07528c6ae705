use super::*;

/// Tests moving chapter leadership.
///
/// Verifies that the employee leads exactly the given chapters afterwards and that the
/// chapter they led before is released.
///
/// Expected: Ok with only the new chapter led by the employee
#[tokio::test]
async fn leads_exactly_the_given_chapters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_employee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = factory::create_employee(db).await?;
    let first = factory::create_chapter(db).await?;
    let second = factory::create_chapter(db).await?;

    let repo = CatalogRepository::new(db);
    repo.set_leading_chapters(employee.id, &[first.id]).await?;
    repo.set_leading_chapters(employee.id, &[second.id]).await?;

    let led = repo.chapters_led_by(employee.id).await?;
    assert_eq!(led.len(), 1);
    assert_eq!(led[0].id, second.id);

    Ok(())
}
