use super::*;

/// Tests the admin listing.
///
/// Expected: Ok with submissions newest first
#[tokio::test]
async fn lists_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_application_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::department::seed_departments(db).await?;
    factory::application::create_application(db, "2023/11111").await?;
    factory::application::create_application(db, "2023/22222").await?;

    let service = ApplicationService::new(db);
    let applications = service.list().await?;

    assert_eq!(applications.len(), 2);
    assert_eq!(applications[0].university_id, "2023/22222");
    assert_eq!(applications[1].university_id, "2023/11111");

    Ok(())
}
