use super::*;

/// Tests deleting a stored application.
///
/// Expected: Ok(true) with the row removed
#[tokio::test]
async fn deletes_application() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_application_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::department::seed_departments(db).await?;
    let application = factory::application::create_application(db, "2023/37654").await?;

    let repo = ApplicationRepository::new(db);
    let deleted = repo.delete(application.id).await?;

    assert!(deleted);

    // Verify the row no longer exists
    let db_application = entity::prelude::Application::find_by_id(application.id)
        .one(db)
        .await?;
    assert!(db_application.is_none());

    Ok(())
}

/// Tests deleting an id with no matching row.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_application_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ApplicationRepository::new(db);
    let deleted = repo.delete(999).await?;

    assert!(!deleted);

    Ok(())
}
