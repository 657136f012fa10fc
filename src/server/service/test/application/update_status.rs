use super::*;

/// Tests approving and rejecting through the service.
///
/// Expected: Ok(Some) with the new status persisted
#[tokio::test]
async fn updates_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_application_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::department::seed_departments(db).await?;
    let application = factory::application::create_application(db, "2023/37654").await?;

    let service = ApplicationService::new(db);

    let approved = service
        .update_status(application.id, ApplicationStatus::Approved)
        .await?;
    assert_eq!(
        approved.unwrap().status,
        entity::application::ApplicationStatus::Approved
    );

    let rejected = service
        .update_status(application.id, ApplicationStatus::Rejected)
        .await?;
    assert_eq!(
        rejected.unwrap().status,
        entity::application::ApplicationStatus::Rejected
    );

    Ok(())
}

/// Tests updating an unknown application.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_application_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::department::seed_departments(db).await?;

    let service = ApplicationService::new(db);
    let result = service
        .update_status(999, ApplicationStatus::Approved)
        .await?;

    assert!(result.is_none());

    Ok(())
}
