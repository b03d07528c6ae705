use super::*;

/// Tests the audit report with a missing area.
///
/// Expected: Ok with zero for areas without scores
#[tokio::test]
async fn reports_missing_areas_as_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dashboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let project = factory::create_project(db).await?;
    factory::create_audit_score(db, project.id, "2024/2", "frontend", 8.0).await?;
    factory::create_audit_score(db, project.id, "2024/2", "backend", 6.0).await?;

    let service = DashboardService::new(db);
    let report = service.audits().await.unwrap();

    assert_eq!(report.average.len(), 1);
    assert_eq!(report.average[0].quarter, "2/2024");
    assert_eq!(report.average[0].avg, 7.0);
    let group = &report.groups[0];
    assert_eq!(group.frontend, 8.0);
    assert_eq!(group.backend, 6.0);
    assert_eq!(group.mobile, 0.0);
    assert!(group.trend.is_none());

    Ok(())
}

/// Tests that a stored quarter not in `YYYY/Q` form is an internal error.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn fails_on_malformed_quarter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dashboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let project = factory::create_project(db).await?;
    factory::create_audit_score(db, project.id, "Q2-2024", "frontend", 8.0).await?;

    let service = DashboardService::new(db);
    let result = service.audits().await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
