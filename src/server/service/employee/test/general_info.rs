use super::*;

/// Tests a full general-info update.
///
/// Verifies that scalars, dates, line manager, referrer and organizations are stored,
/// and that one social account per provider is created.
///
/// Expected: Ok with the submitted values
#[tokio::test]
async fn updates_general_info() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_employee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (manager, employee) = factory::helpers::create_employee_with_line_manager(db).await?;
    let referrer = factory::create_employee(db).await?;
    let organization = factory::create_organization(db).await?;

    let mut params = general_info(&employee.team_email);
    params.line_manager_id = Some(manager.id);
    params.referred_by = Some(referrer.id);
    params.joined_date = "2023-02-01".to_string();
    params.left_date = "2024-02-01".to_string();
    params.github_id = "octocat".to_string();
    params.organization_ids = vec![organization.id];

    let service = EmployeeService::new(db);
    let details = service
        .update_general_info(&FakeDirectory::default(), employee.id, params)
        .await
        .unwrap();

    assert_eq!(details.employee.full_name, "Updated Name");
    assert_eq!(details.employee.phone_number, "0123456789");
    assert_eq!(details.employee.joined_date, NaiveDate::from_ymd_opt(2023, 2, 1));
    assert_eq!(details.employee.left_date, NaiveDate::from_ymd_opt(2024, 2, 1));
    assert_eq!(details.line_manager.map(|m| m.id), Some(manager.id));
    assert_eq!(details.referrer.map(|r| r.id), Some(referrer.id));
    assert_eq!(details.organizations.len(), 1);
    assert_eq!(details.organizations[0].id, organization.id);
    assert_eq!(details.social_accounts.len(), 3);
    assert!(details
        .social_accounts
        .iter()
        .any(|a| a.account_type == "github" && a.account_id == "octocat"));

    Ok(())
}

/// Tests that blank scalars keep their stored values while the line manager is cleared.
///
/// Expected: Ok with the old display name and no line manager
#[tokio::test]
async fn keeps_blank_scalars_and_clears_line_manager() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_employee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, employee) = factory::helpers::create_employee_with_line_manager(db).await?;

    let params = general_info(&employee.team_email);

    let service = EmployeeService::new(db);
    let details = service
        .update_general_info(&FakeDirectory::default(), employee.id, params)
        .await
        .unwrap();

    assert_eq!(details.employee.display_name, employee.display_name);
    assert_eq!(details.employee.joined_date, employee.joined_date);
    assert!(details.line_manager.is_none());

    Ok(())
}

/// Tests that applying the same update twice leaves one social account per provider.
///
/// Expected: Ok both times with exactly three social account rows
#[tokio::test]
async fn repeated_update_does_not_duplicate_social_accounts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_employee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = factory::create_employee(db).await?;
    factory::create_social_account(db, employee.id, "gitlab", "someone", "someone").await?;

    let mut params = general_info(&employee.team_email);
    params.github_id = "octocat".to_string();
    params.notion_id = "notion-1".to_string();
    params.notion_name = "Notion Name".to_string();

    let service = EmployeeService::new(db);
    let first = service
        .update_general_info(&FakeDirectory::default(), employee.id, params.clone())
        .await
        .unwrap();
    let second = service
        .update_general_info(&FakeDirectory::default(), employee.id, params)
        .await
        .unwrap();

    assert_eq!(first.social_accounts.len(), 4);
    assert_eq!(second.social_accounts.len(), 4);
    assert_eq!(social_account_count(db).await?, 4);
    assert!(second
        .social_accounts
        .iter()
        .any(|a| a.account_type == "gitlab" && a.account_id == "someone"));

    Ok(())
}

/// Tests that a left date before the joined date is rejected without writing.
///
/// Expected: Err(LeftDateBeforeJoinedDate) and the stored row unchanged
#[tokio::test]
async fn rejects_left_date_before_joined_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_employee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = factory::create_employee(db).await?;

    let mut params = general_info(&employee.team_email);
    params.joined_date = "2024-05-01".to_string();
    params.left_date = "2024-04-30".to_string();

    let service = EmployeeService::new(db);
    let result = service
        .update_general_info(&FakeDirectory::default(), employee.id, params)
        .await;

    assert_employee_err(result, EmployeeError::LeftDateBeforeJoinedDate);
    let stored = entity::prelude::Employee::find_by_id(employee.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.full_name, employee.full_name);
    assert_eq!(stored.left_date, None);
    assert_eq!(social_account_count(db).await?, 0);

    Ok(())
}

/// Tests that a left date before the stored joined date is rejected too.
///
/// Expected: Err(LeftDateBeforeJoinedDate)
#[tokio::test]
async fn rejects_left_date_before_stored_joined_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_employee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = EmployeeFactory::new(db)
        .joined_date(NaiveDate::from_ymd_opt(2023, 6, 1))
        .build()
        .await?;

    let mut params = general_info(&employee.team_email);
    params.left_date = "2023-05-31".to_string();

    let service = EmployeeService::new(db);
    let result = service
        .update_general_info(&FakeDirectory::default(), employee.id, params)
        .await;

    assert_employee_err(result, EmployeeError::LeftDateBeforeJoinedDate);

    Ok(())
}

/// Tests that an unparseable joined date is rejected.
///
/// Expected: Err(InvalidJoinedDate)
#[tokio::test]
async fn rejects_invalid_joined_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_employee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = factory::create_employee(db).await?;

    let mut params = general_info(&employee.team_email);
    params.joined_date = "01/02/2023".to_string();

    let service = EmployeeService::new(db);
    let result = service
        .update_general_info(&FakeDirectory::default(), employee.id, params)
        .await;

    assert_employee_err(result, EmployeeError::InvalidJoinedDate);

    Ok(())
}

/// Tests that a joined date without zero-padded month and day is rejected.
///
/// Expected: Err(InvalidJoinedDate) and the stored joined date unchanged
#[tokio::test]
async fn rejects_unpadded_joined_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_employee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = factory::create_employee(db).await?;

    let mut params = general_info(&employee.team_email);
    params.joined_date = "2023-2-1".to_string();

    let service = EmployeeService::new(db);
    let result = service
        .update_general_info(&FakeDirectory::default(), employee.id, params)
        .await;

    assert_employee_err(result, EmployeeError::InvalidJoinedDate);

    let stored = entity::prelude::Employee::find_by_id(employee.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.joined_date, employee.joined_date);

    Ok(())
}

/// Tests that non-blank scalars are stored exactly as sent, surrounding spaces included.
///
/// Expected: Ok with the padded full name
#[tokio::test]
async fn stores_scalars_verbatim() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_employee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = factory::create_employee(db).await?;

    let mut params = general_info(&employee.team_email);
    params.full_name = "  Padded Name  ".to_string();

    let service = EmployeeService::new(db);
    let details = service
        .update_general_info(&FakeDirectory::default(), employee.id, params)
        .await
        .unwrap();

    assert_eq!(details.employee.full_name, "  Padded Name  ");

    Ok(())
}

/// Tests that an employee cannot be their own referrer.
///
/// Expected: Err(CannotSelfReferral)
#[tokio::test]
async fn rejects_self_referral() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_employee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = factory::create_employee(db).await?;

    let mut params = general_info(&employee.team_email);
    params.referred_by = Some(employee.id);

    let service = EmployeeService::new(db);
    let result = service
        .update_general_info(&FakeDirectory::default(), employee.id, params)
        .await;

    assert_employee_err(result, EmployeeError::CannotSelfReferral);

    Ok(())
}

/// Tests the order of reference checks.
///
/// A missing line manager is reported before a missing employee.
///
/// Expected: Err(LineManagerNotFound), then Err(ReferrerNotFound), then Err(EmployeeNotFound)
#[tokio::test]
async fn reports_missing_references_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_employee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = EmployeeService::new(db);
    let directory = FakeDirectory::default();
    let missing_employee = Uuid::new_v4();

    let mut params = general_info("someone@d.foundation");
    params.line_manager_id = Some(Uuid::new_v4());
    params.referred_by = Some(Uuid::new_v4());
    let result = service
        .update_general_info(&directory, missing_employee, params.clone())
        .await;
    assert_employee_err(result, EmployeeError::LineManagerNotFound);

    params.line_manager_id = None;
    let result = service
        .update_general_info(&directory, missing_employee, params.clone())
        .await;
    assert_employee_err(result, EmployeeError::ReferrerNotFound);

    params.referred_by = None;
    let result = service
        .update_general_info(&directory, missing_employee, params)
        .await;
    assert_employee_err(result, EmployeeError::EmployeeNotFound);

    Ok(())
}

/// Tests changing the team email to one held by another employee.
///
/// Expected: Err(EmailExisted)
#[tokio::test]
async fn rejects_email_held_by_another_employee() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_employee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = factory::create_employee(db).await?;
    let other = factory::create_employee(db).await?;

    let service = EmployeeService::new(db);
    let result = service
        .update_general_info(
            &FakeDirectory::default(),
            employee.id,
            general_info(&other.team_email),
        )
        .await;

    assert_employee_err(result, EmployeeError::EmailExisted);

    Ok(())
}

/// Tests that resubmitting the current team email passes the uniqueness check.
///
/// Expected: Ok with the email unchanged
#[tokio::test]
async fn accepts_unchanged_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_employee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = factory::create_employee(db).await?;

    let service = EmployeeService::new(db);
    let details = service
        .update_general_info(
            &FakeDirectory::default(),
            employee.id,
            general_info(&employee.team_email),
        )
        .await
        .unwrap();

    assert_eq!(details.employee.team_email, employee.team_email);

    Ok(())
}

/// Tests linking a Discord member found in the guild.
///
/// Expected: Ok with a Discord account row holding the member id and submitted username
#[tokio::test]
async fn links_discord_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_employee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = factory::create_employee(db).await?;
    let directory = FakeDirectory::default().with_member("jane", "111222333");

    let mut params = general_info(&employee.team_email);
    params.discord_name = " jane ".to_string();

    let service = EmployeeService::new(db);
    let details = service
        .update_general_info(&directory, employee.id, params)
        .await
        .unwrap();

    let account = details.discord_account.unwrap();
    assert_eq!(account.discord_id, "111222333");
    assert_eq!(account.username, "jane");
    assert_eq!(details.employee.discord_account_id, Some(account.id));

    Ok(())
}

/// Tests relinking the Discord account the employee already holds.
///
/// Expected: Ok reusing the existing account row
#[tokio::test]
async fn relinks_own_discord_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_employee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (account, employee) =
        factory::helpers::create_employee_with_discord(db, "444555666", "old-name").await?;
    let directory = FakeDirectory::default().with_member("new-name", "444555666");

    let mut params = general_info(&employee.team_email);
    params.discord_name = "new-name".to_string();

    let service = EmployeeService::new(db);
    let details = service
        .update_general_info(&directory, employee.id, params)
        .await
        .unwrap();

    let linked = details.discord_account.unwrap();
    assert_eq!(linked.id, account.id);
    assert_eq!(linked.username, "new-name");

    Ok(())
}

/// Tests linking a Discord member already linked to another employee.
///
/// Expected: Err(DiscordAccountAlreadyUsedByAnotherEmployee) and the employee unlinked
#[tokio::test]
async fn rejects_discord_account_of_another_employee() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_employee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_employee_with_discord(db, "777888999", "taken").await?;
    let employee = factory::create_employee(db).await?;
    let directory = FakeDirectory::default().with_member("taken", "777888999");

    let mut params = general_info(&employee.team_email);
    params.discord_name = "taken".to_string();

    let service = EmployeeService::new(db);
    let result = service
        .update_general_info(&directory, employee.id, params)
        .await;

    assert_employee_err(result, EmployeeError::DiscordAccountAlreadyUsedByAnotherEmployee);
    let stored = entity::prelude::Employee::find_by_id(employee.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.discord_account_id, None);

    Ok(())
}

/// Tests a Discord username that is not a guild member.
///
/// Expected: Err(DiscordMemberNotFoundInGuild)
#[tokio::test]
async fn rejects_unknown_discord_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_employee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = factory::create_employee(db).await?;

    let mut params = general_info(&employee.team_email);
    params.discord_name = "ghost".to_string();

    let service = EmployeeService::new(db);
    let result = service
        .update_general_info(&FakeDirectory::default(), employee.id, params)
        .await;

    assert_employee_err(result, EmployeeError::DiscordMemberNotFoundInGuild);

    Ok(())
}

/// Tests that a failing Discord lookup aborts the update.
///
/// Expected: Err(AppError) other than an employee error, employee unchanged
#[tokio::test]
async fn propagates_discord_failure() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_employee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = factory::create_employee(db).await?;

    let mut params = general_info(&employee.team_email);
    params.discord_name = "jane".to_string();

    let service = EmployeeService::new(db);
    let result = service
        .update_general_info(&FakeDirectory::failing(), employee.id, params)
        .await;

    assert!(matches!(result, Err(AppError::InternalError(_))));
    let stored = entity::prelude::Employee::find_by_id(employee.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.full_name, employee.full_name);

    Ok(())
}

/// Tests that an unknown organization rolls back the writes made before the check.
///
/// Expected: Err(OrganizationNotFound) with no social accounts and the old name stored
#[tokio::test]
async fn unknown_organization_rolls_back_update() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_employee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = factory::create_employee(db).await?;
    factory::create_organization(db).await?;

    let mut params = general_info(&employee.team_email);
    params.github_id = "octocat".to_string();
    params.organization_ids = vec![Uuid::new_v4()];

    let service = EmployeeService::new(db);
    let result = service
        .update_general_info(&FakeDirectory::default(), employee.id, params)
        .await;

    assert_employee_err(result, EmployeeError::OrganizationNotFound);
    let stored = entity::prelude::Employee::find_by_id(employee.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.full_name, employee.full_name);
    assert_eq!(social_account_count(db).await?, 0);

    Ok(())
}

/// Tests that submitted organizations replace the previous memberships.
///
/// Expected: Ok with only the newly submitted organization
#[tokio::test]
async fn replaces_organizations() -> Result<(), DbErr> {
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

    let mut params = general_info(&employee.team_email);
    params.organization_ids = vec![new.id];

    let service = EmployeeService::new(db);
    let details = service
        .update_general_info(&FakeDirectory::default(), employee.id, params)
        .await
        .unwrap();

    let ids: Vec<Uuid> = details.organizations.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![new.id]);

    Ok(())
}
