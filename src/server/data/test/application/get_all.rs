use super::*;

/// Tests listing with no stored applications.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_application_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::department::seed_departments(db).await?;

    let repo = ApplicationRepository::new(db);
    let applications = repo.get_all().await?;

    assert!(applications.is_empty());

    Ok(())
}

/// Tests list ordering.
///
/// Two applications created back to back can share a creation timestamp, so
/// the ordering must fall back to the id to stay newest first.
///
/// Expected: Ok with the later submission listed first
#[tokio::test]
async fn returns_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_application_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::department::seed_departments(db).await?;
    factory::application::create_application(db, "2023/11111").await?;
    factory::application::create_application(db, "2023/22222").await?;

    let repo = ApplicationRepository::new(db);
    let applications = repo.get_all().await?;

    assert_eq!(applications.len(), 2);
    assert_eq!(applications[0].university_id, "2023/22222");
    assert_eq!(applications[1].university_id, "2023/11111");

    Ok(())
}
