use super::*;

/// Tests creating a new application.
///
/// Verifies that the repository inserts the row with a server-assigned id,
/// `pending` status, and a creation timestamp.
///
/// Expected: Ok with application created as pending
#[tokio::test]
async fn creates_pending_application() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_application_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::department::seed_departments(db).await?;

    let repo = ApplicationRepository::new(db);
    let result = repo.create(new_application("2023/37654")).await;

    assert!(result.is_ok());
    let application = result.unwrap();
    assert!(application.id > 0);
    assert_eq!(application.university_id, "2023/37654");
    assert_eq!(application.status, ApplicationStatus::Pending);

    // Verify the row exists in the database
    let db_application = entity::prelude::Application::find_by_id(application.id)
        .one(db)
        .await?;
    assert!(db_application.is_some());

    Ok(())
}

/// Tests creating an application with an already-used university id.
///
/// Verifies that the unique column constraint rejects a second row with the
/// same university id even if the service-level check is bypassed.
///
/// Expected: Err with database constraint violation
#[tokio::test]
async fn fails_for_duplicate_university_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_application_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::department::seed_departments(db).await?;
    factory::application::create_application(db, "2023/37654").await?;

    let repo = ApplicationRepository::new(db);
    let result = repo.create(new_application("2023/37654")).await;

    assert!(result.is_err());

    Ok(())
}
