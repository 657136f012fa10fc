use super::*;

/// Tests approving a pending application.
///
/// Expected: Ok(Some) with the status persisted
#[tokio::test]
async fn updates_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_application_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::department::seed_departments(db).await?;
    let application = factory::application::create_application(db, "2023/37654").await?;

    let repo = ApplicationRepository::new(db);
    let updated = repo
        .update_status(application.id, ApplicationStatus::Approved)
        .await?;

    assert!(updated.is_some());
    assert_eq!(updated.unwrap().status, ApplicationStatus::Approved);

    // Verify the status is persisted
    let db_application = entity::prelude::Application::find_by_id(application.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_application.status, ApplicationStatus::Approved);

    Ok(())
}

/// Tests updating an id with no matching row.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_application_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::department::seed_departments(db).await?;

    let repo = ApplicationRepository::new(db);
    let updated = repo.update_status(999, ApplicationStatus::Rejected).await?;

    assert!(updated.is_none());

    Ok(())
}
