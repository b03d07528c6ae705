use super::*;

fn params(contract_amount: i64) -> UpdateBaseSalaryParams {
    UpdateBaseSalaryParams {
        contract_amount,
        company_account_amount: contract_amount / 2,
        personal_account_amount: contract_amount / 2,
        currency_code: "VND".to_string(),
        effective_date: None,
        batch: 15,
    }
}

/// Tests replacing an existing base salary.
///
/// Expected: Ok with the same row id and the new amounts and batch
#[tokio::test]
async fn replaces_existing_salary() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_employee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = factory::create_employee(db).await?;
    let existing = factory::create_base_salary(db, employee.id, 10_000_000).await?;

    let repo = BaseSalaryRepository::new(db);
    let salary = repo.upsert(employee.id, &params(20_000_000)).await?;

    assert_eq!(salary.id, existing.id);
    assert_eq!(salary.contract_amount, 20_000_000);
    assert_eq!(salary.batch, 15);

    Ok(())
}

/// Tests creating a base salary for an employee without one.
///
/// Expected: Ok with the salary readable through find_by_employee
#[tokio::test]
async fn creates_missing_salary() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_employee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = factory::create_employee(db).await?;

    let repo = BaseSalaryRepository::new(db);
    repo.upsert(employee.id, &params(8_000_000)).await?;

    let salary = repo.find_by_employee(employee.id).await?.unwrap();
    assert_eq!(salary.contract_amount, 8_000_000);
    assert_eq!(salary.currency_code, "VND");

    Ok(())
}
