use sea_orm::DatabaseConnection;
use std::path::Path;

use crate::{
    model::{
        application::{is_institutional_email, ApplicationStatus, CreateApplicationDto},
        faculty::Faculty,
    },
    server::{
        data::{application::ApplicationRepository, department::DepartmentRepository},
        error::AppError,
        model::application::{status_to_db, NewApplication},
    },
};

pub struct ApplicationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ApplicationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Validates and stores a new submission.
    ///
    /// Field checks run first and name the offending field in the 400
    /// message. The duplicate check precedes the insert; the unique column
    /// constraint still backstops a race between two concurrent submissions
    /// with the same id. When the multipart variant supplied a PDF, it is
    /// written under `upload_dir` before the row is inserted.
    pub async fn create(
        &self,
        dto: CreateApplicationDto,
        schedule_pdf: Option<Vec<u8>>,
        upload_dir: &str,
    ) -> Result<entity::application::Model, AppError> {
        validate_fields(&dto)?;

        let departments = DepartmentRepository::new(self.db);
        if !departments.exists(dto.first_choice).await? {
            return Err(AppError::BadRequest(format!(
                "Unknown department id: {}",
                dto.first_choice
            )));
        }
        if let Some(second) = dto.second_choice {
            if !departments.exists(second).await? {
                return Err(AppError::BadRequest(format!(
                    "Unknown department id: {}",
                    second
                )));
            }
        }

        let repo = ApplicationRepository::new(self.db);
        if repo.exists_by_university_id(&dto.university_id).await? {
            return Err(AppError::Conflict(
                "Application with this university ID already exists".to_string(),
            ));
        }

        let stored_schedule = match schedule_pdf {
            Some(bytes) => Some(store_schedule(upload_dir, &dto.university_id, &bytes).await?),
            None => None,
        };

        Ok(repo.create(NewApplication::from_dto(dto, stored_schedule)).await?)
    }

    /// Returns all applications, newest first.
    pub async fn list(&self) -> Result<Vec<entity::application::Model>, AppError> {
        let repo = ApplicationRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Sets the status of an application.
    /// Returns `None` if no application matches the id.
    pub async fn update_status(
        &self,
        id: i32,
        status: ApplicationStatus,
    ) -> Result<Option<entity::application::Model>, AppError> {
        let repo = ApplicationRepository::new(self.db);

        Ok(repo.update_status(id, status_to_db(status)).await?)
    }

    /// Deletes an application.
    /// Returns `false` if no application matches the id.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = ApplicationRepository::new(self.db);

        Ok(repo.delete(id).await?)
    }
}

/// Rejects a submission whose required fields are blank or malformed,
/// naming the field in the message.
fn validate_fields(dto: &CreateApplicationDto) -> Result<(), AppError> {
    let required = [
        ("university_id", &dto.university_id),
        ("full_name", &dto.full_name),
        ("email", &dto.email),
        ("faculty", &dto.faculty),
        ("phone_number", &dto.phone_number),
        ("skills", &dto.skills),
        ("motivation", &dto.motivation),
    ];

    for (name, value) in required {
        if value.trim().is_empty() {
            return Err(AppError::BadRequest(format!(
                "Missing required field: {name}"
            )));
        }
    }

    if dto.year == 0 {
        return Err(AppError::BadRequest(
            "Missing required field: year".to_string(),
        ));
    }
    if !(1..=5).contains(&dto.year) {
        return Err(AppError::BadRequest(
            "Invalid year: must be between 1 and 5".to_string(),
        ));
    }

    if dto.first_choice == 0 {
        return Err(AppError::BadRequest(
            "Missing required field: first_choice".to_string(),
        ));
    }

    if !is_institutional_email(&dto.email) {
        return Err(AppError::BadRequest(
            "Invalid email: must be an institutional address like name2398765@miuegypt.edu.eg"
                .to_string(),
        ));
    }

    if Faculty::from_name(&dto.faculty).is_none() {
        return Err(AppError::BadRequest(format!(
            "Unknown faculty: {}",
            dto.faculty
        )));
    }

    Ok(())
}

/// Writes the uploaded PDF under `upload_dir` with the deterministic name
/// `StudentSchedule_{university_id}.pdf` and returns the stored filename.
async fn store_schedule(
    upload_dir: &str,
    university_id: &str,
    bytes: &[u8],
) -> Result<String, AppError> {
    // The university id contains a '/', which would otherwise split the
    // filename into directories.
    let safe_id = university_id.replace(['/', '\\'], "-");
    let filename = format!("StudentSchedule_{safe_id}.pdf");

    tokio::fs::create_dir_all(upload_dir).await?;
    tokio::fs::write(Path::new(upload_dir).join(&filename), bytes).await?;

    Ok(filename)
}
