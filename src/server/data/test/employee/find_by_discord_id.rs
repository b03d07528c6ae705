use super::*;

/// Tests finding the employee linked to a Discord account.
///
/// Expected: Ok(Some) with the employee whose account holds the Discord id
#[tokio::test]
async fn finds_linked_employee() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_employee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, employee) =
        factory::helpers::create_employee_with_discord(db, "111111111111111111", "alice").await?;

    let repo = EmployeeRepository::new(db);
    let found = repo.find_by_discord_id("111111111111111111").await?;

    assert_eq!(found.map(|e| e.id), Some(employee.id));

    Ok(())
}

/// Tests that an account with no linked employee yields nothing.
///
/// Expected: Ok(None) for an unlinked account and for an unknown Discord id
#[tokio::test]
async fn returns_none_without_link() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_employee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_discord_account(db).await?;
    let account = factory::discord_account::DiscordAccountFactory::new(db)
        .discord_id("222222222222222222")
        .build()
        .await?;
    factory::create_employee(db).await?;

    let repo = EmployeeRepository::new(db);

    assert!(repo.find_by_discord_id(&account.discord_id).await?.is_none());
    assert!(repo.find_by_discord_id("999").await?.is_none());

    Ok(())
}
