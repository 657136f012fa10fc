use entity::application::ApplicationStatus as DbStatus;

use crate::model::application::{ApplicationDto, ApplicationStatus, CreateApplicationDto};

/// Validated column values for a new application row.
///
/// Built by the service after field validation; `schedule` already carries
/// the stored filename for the upload variant.
#[derive(Debug, Clone)]
pub struct NewApplication {
    pub university_id: String,
    pub full_name: String,
    pub email: String,
    pub faculty: String,
    pub year: i32,
    pub phone_number: String,
    pub first_choice: i32,
    pub second_choice: Option<i32>,
    pub skills: String,
    pub motivation: String,
    pub schedule: Option<String>,
}

impl NewApplication {
    pub fn from_dto(dto: CreateApplicationDto, schedule: Option<String>) -> Self {
        Self {
            university_id: dto.university_id,
            full_name: dto.full_name,
            email: dto.email,
            faculty: dto.faculty,
            year: dto.year,
            phone_number: dto.phone_number,
            first_choice: dto.first_choice,
            second_choice: dto.second_choice,
            skills: dto.skills,
            motivation: dto.motivation,
            schedule: schedule.or(dto.schedule),
        }
    }
}

pub fn status_to_wire(status: DbStatus) -> ApplicationStatus {
    match status {
        DbStatus::Pending => ApplicationStatus::Pending,
        DbStatus::Approved => ApplicationStatus::Approved,
        DbStatus::Rejected => ApplicationStatus::Rejected,
    }
}

pub fn status_to_db(status: ApplicationStatus) -> DbStatus {
    match status {
        ApplicationStatus::Pending => DbStatus::Pending,
        ApplicationStatus::Approved => DbStatus::Approved,
        ApplicationStatus::Rejected => DbStatus::Rejected,
    }
}

/// Converts a stored row into its wire representation.
pub fn into_dto(model: entity::application::Model) -> ApplicationDto {
    ApplicationDto {
        application_id: model.id,
        university_id: model.university_id,
        full_name: model.full_name,
        email: model.email,
        faculty: model.faculty,
        year: model.year,
        phone_number: model.phone_number,
        first_choice: model.first_choice,
        second_choice: model.second_choice,
        skills: model.skills,
        motivation: model.motivation,
        schedule: model.schedule,
        status: status_to_wire(model.status),
        created_at: model.created_at,
    }
}
