use super::*;

/// Tests deleting through the service.
///
/// Expected: Ok(true) for a stored application, Ok(false) otherwise
#[tokio::test]
async fn deletes_application() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_application_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::department::seed_departments(db).await?;
    let application = factory::application::create_application(db, "2023/37654").await?;

    let service = ApplicationService::new(db);

    assert!(service.delete(application.id).await?);
    assert!(!service.delete(application.id).await?);

    Ok(())
}
