use super::*;

/// Tests replacing an existing base salary.
///
/// Expected: Ok with a single base salary row holding the new amounts
#[tokio::test]
async fn updates_base_salary() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_employee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = factory::create_employee(db).await?;
    factory::create_base_salary(db, employee.id, 10_000_000).await?;

    let params = UpdateBaseSalaryParams::from_dto(UpdateBaseSalaryDto {
        contract_amount: 30_000_000,
        company_account_amount: 5_000_000,
        personal_account_amount: 25_000_000,
        currency_code: "VND".to_string(),
        effective_date: NaiveDate::from_ymd_opt(2024, 7, 1),
        batch: 15,
    })
    .unwrap();

    let service = EmployeeService::new(db);
    let details = service
        .update_base_salary(employee.id, params)
        .await
        .unwrap();

    let salary = details.base_salary.unwrap();
    assert_eq!(salary.contract_amount, 30_000_000);
    assert_eq!(salary.company_account_amount, 5_000_000);
    assert_eq!(salary.batch, 15);
    assert_eq!(entity::prelude::BaseSalary::find().count(db).await?, 1);

    Ok(())
}
