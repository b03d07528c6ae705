use super::*;

/// Tests that a Notion update keeps the stored account id.
///
/// Expected: Ok with the new name and email and the original account id
#[tokio::test]
async fn notion_update_keeps_account_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_employee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = factory::create_employee(db).await?;
    let account =
        factory::create_social_account(db, employee.id, "notion", "notion-1", "Old").await?;
    let input = SocialAccountInput {
        account_id: "ignored".to_string(),
        name: "New".to_string(),
        email: "new@notion.so".to_string(),
    };

    let repo = SocialAccountRepository::new(db);
    let updated = repo
        .update(
            account.id,
            SocialAccountChanges::for_existing(SocialAccountType::Notion, &input),
        )
        .await?;

    assert_eq!(updated.account_id, "notion-1");
    assert_eq!(updated.name, "New");
    assert_eq!(updated.email, "new@notion.so");

    Ok(())
}

/// Tests creating a provider account.
///
/// Expected: Ok with the account listed for the employee
#[tokio::test]
async fn creates_account_for_provider() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_employee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = factory::create_employee(db).await?;
    let input = SocialAccountInput {
        account_id: "octocat".to_string(),
        name: "octocat".to_string(),
        email: String::new(),
    };

    let repo = SocialAccountRepository::new(db);
    repo.create(employee.id, SocialAccountType::GitHub, &input)
        .await?;

    let accounts = repo.find_by_employee(employee.id).await?;
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].account_type, "github");

    Ok(())
}
