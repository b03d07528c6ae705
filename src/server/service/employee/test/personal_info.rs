use super::*;

fn personal_info(personal_email: &str, country: &str, city: &str) -> UpdatePersonalInfoParams {
    UpdatePersonalInfoParams::from_dto(UpdatePersonalInfoDto {
        dob: NaiveDate::from_ymd_opt(1995, 4, 12).unwrap(),
        gender: "female".to_string(),
        place_of_residence: "District 3".to_string(),
        address: "1 Nguyen Hue".to_string(),
        personal_email: personal_email.to_string(),
        country: country.to_string(),
        city: city.to_string(),
    })
    .unwrap()
}

/// Tests updating personal info with a city of the given country.
///
/// Expected: Ok with the new location and personal fields
#[tokio::test]
async fn updates_personal_info() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_employee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = factory::create_employee(db).await?;
    let country = factory::create_country(db, "Vietnam").await?;
    factory::create_city(db, country.id, "Ho Chi Minh").await?;

    let service = EmployeeService::new(db);
    let details = service
        .update_personal_info(
            employee.id,
            personal_info(&employee.personal_email, "Vietnam", "Ho Chi Minh"),
        )
        .await
        .unwrap();

    assert_eq!(details.employee.country, "Vietnam");
    assert_eq!(details.employee.city, "Ho Chi Minh");
    assert_eq!(details.employee.gender, "female");
    assert_eq!(
        details.employee.date_of_birth,
        NaiveDate::from_ymd_opt(1995, 4, 12)
    );

    Ok(())
}

/// Tests location and personal email checks.
///
/// Expected: Err(CountryNotFound), Err(CityDoesNotBelongToCountry), Err(PersonalEmailExisted)
#[tokio::test]
async fn rejects_invalid_location_and_taken_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_employee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = factory::create_employee(db).await?;
    let other = factory::create_employee(db).await?;
    let vietnam = factory::create_country(db, "Vietnam").await?;
    let singapore = factory::create_country(db, "Singapore").await?;
    factory::create_city(db, vietnam.id, "Hanoi").await?;
    factory::create_city(db, singapore.id, "Singapore").await?;

    let service = EmployeeService::new(db);

    let result = service
        .update_personal_info(
            employee.id,
            personal_info(&employee.personal_email, "Atlantis", "Hanoi"),
        )
        .await;
    assert_employee_err(result, EmployeeError::CountryNotFound);

    let result = service
        .update_personal_info(
            employee.id,
            personal_info(&employee.personal_email, "Vietnam", "Singapore"),
        )
        .await;
    assert_employee_err(result, EmployeeError::CityDoesNotBelongToCountry);

    let result = service
        .update_personal_info(
            employee.id,
            personal_info(&other.personal_email, "Vietnam", "Hanoi"),
        )
        .await;
    assert_employee_err(result, EmployeeError::PersonalEmailExisted);

    Ok(())
}
