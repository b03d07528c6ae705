use super::*;

/// Tests inserting a Discord account that does not exist yet.
///
/// Expected: Ok with the Discord id and username stored
#[tokio::test]
async fn creates_new_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordAccount)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DiscordAccountRepository::new(db);
    let account = repo.upsert("123456789012345678", "alice").await?;

    assert_eq!(account.discord_id, "123456789012345678");
    assert_eq!(account.username, "alice");

    Ok(())
}

/// Tests upserting an existing Discord id.
///
/// Verifies the existing row keeps its id and only the username changes.
///
/// Expected: Ok with the original row id, new username and a single row in the table
#[tokio::test]
async fn updates_username_of_existing_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordAccount)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::discord_account::DiscordAccountFactory::new(db)
        .discord_id("123456789012345678")
        .username("old-name")
        .build()
        .await?;

    let repo = DiscordAccountRepository::new(db);
    let account = repo.upsert("123456789012345678", "new-name").await?;

    assert_eq!(account.id, existing.id);
    assert_eq!(account.username, "new-name");
    assert_eq!(entity::prelude::DiscordAccount::find().count(db).await?, 1);

    Ok(())
}
