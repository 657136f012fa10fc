use super::*;

/// Tests a fully valid submission.
///
/// Expected: Ok with the application stored as pending
#[tokio::test]
async fn creates_pending_application() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_application_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::department::seed_departments(db).await?;

    let service = ApplicationService::new(db);
    let application = service.create(valid_dto(), None, &upload_dir()).await?;

    assert_eq!(application.university_id, "2023/37654");
    assert_eq!(application.phone_number, "+201012345678");
    assert_eq!(
        application.status,
        entity::application::ApplicationStatus::Pending
    );
    assert_eq!(application.schedule, None);

    Ok(())
}

/// Tests that blank required fields are rejected by name.
///
/// Expected: Err(BadRequest) naming the missing field
#[tokio::test]
async fn rejects_missing_required_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_application_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::department::seed_departments(db).await?;
    let service = ApplicationService::new(db);

    let mut dto = valid_dto();
    dto.full_name = String::new();
    let result = service.create(dto, None, &upload_dir()).await;
    assert!(matches!(
        result,
        Err(AppError::BadRequest(msg)) if msg == "Missing required field: full_name"
    ));

    let mut dto = valid_dto();
    dto.skills = "   ".to_string();
    let result = service.create(dto, None, &upload_dir()).await;
    assert!(matches!(
        result,
        Err(AppError::BadRequest(msg)) if msg == "Missing required field: skills"
    ));

    let mut dto = valid_dto();
    dto.year = 0;
    let result = service.create(dto, None, &upload_dir()).await;
    assert!(matches!(
        result,
        Err(AppError::BadRequest(msg)) if msg == "Missing required field: year"
    ));

    let mut dto = valid_dto();
    dto.first_choice = 0;
    let result = service.create(dto, None, &upload_dir()).await;
    assert!(matches!(
        result,
        Err(AppError::BadRequest(msg)) if msg == "Missing required field: first_choice"
    ));

    Ok(())
}

/// Tests rejection of malformed field values.
///
/// Expected: Err(BadRequest) for a bad email, year, or faculty
#[tokio::test]
async fn rejects_malformed_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_application_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::department::seed_departments(db).await?;
    let service = ApplicationService::new(db);

    let mut dto = valid_dto();
    dto.email = "jane@gmail.com".to_string();
    let result = service.create(dto, None, &upload_dir()).await;
    assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg.starts_with("Invalid email")));

    let mut dto = valid_dto();
    dto.year = 6;
    let result = service.create(dto, None, &upload_dir()).await;
    assert!(matches!(
        result,
        Err(AppError::BadRequest(msg)) if msg == "Invalid year: must be between 1 and 5"
    ));

    let mut dto = valid_dto();
    dto.faculty = "Astrology".to_string();
    let result = service.create(dto, None, &upload_dir()).await;
    assert!(matches!(
        result,
        Err(AppError::BadRequest(msg)) if msg == "Unknown faculty: Astrology"
    ));

    Ok(())
}

/// Tests rejection of department ids outside the seeded set.
///
/// Expected: Err(BadRequest) naming the unknown id
#[tokio::test]
async fn rejects_unknown_departments() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_application_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::department::seed_departments(db).await?;
    let service = ApplicationService::new(db);

    let mut dto = valid_dto();
    dto.first_choice = 99;
    let result = service.create(dto, None, &upload_dir()).await;
    assert!(matches!(
        result,
        Err(AppError::BadRequest(msg)) if msg == "Unknown department id: 99"
    ));

    let mut dto = valid_dto();
    dto.second_choice = Some(42);
    let result = service.create(dto, None, &upload_dir()).await;
    assert!(matches!(
        result,
        Err(AppError::BadRequest(msg)) if msg == "Unknown department id: 42"
    ));

    Ok(())
}

/// Tests the duplicate submission guard.
///
/// Expected: Err(Conflict) on a second submission with the same id
#[tokio::test]
async fn rejects_duplicate_university_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_application_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::department::seed_departments(db).await?;
    let service = ApplicationService::new(db);

    service.create(valid_dto(), None, &upload_dir()).await?;

    let result = service.create(valid_dto(), None, &upload_dir()).await;
    assert!(matches!(
        result,
        Err(AppError::Conflict(msg))
            if msg == "Application with this university ID already exists"
    ));

    Ok(())
}

/// Tests storing an uploaded schedule.
///
/// The university id contains a slash, so the stored filename must carry
/// the sanitized form.
///
/// Expected: Ok with the schedule stored under a deterministic name
#[tokio::test]
async fn stores_uploaded_schedule() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_application_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::department::seed_departments(db).await?;
    let service = ApplicationService::new(db);

    let dir = upload_dir();
    let application = service
        .create(valid_dto(), Some(b"%PDF-1.4 test".to_vec()), &dir)
        .await?;

    assert_eq!(
        application.schedule.as_deref(),
        Some("StudentSchedule_2023-37654.pdf")
    );

    let stored = std::path::Path::new(&dir).join("StudentSchedule_2023-37654.pdf");
    assert!(stored.exists());

    Ok(())
}
