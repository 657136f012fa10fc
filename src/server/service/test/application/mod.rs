use crate::{
    model::application::{ApplicationStatus, CreateApplicationDto},
    server::{error::AppError, service::application::ApplicationService},
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod list;
mod update_status;

/// A submission matching the format every validation rule expects.
fn valid_dto() -> CreateApplicationDto {
    CreateApplicationDto {
        university_id: "2023/37654".to_string(),
        full_name: "Jane Q Doe".to_string(),
        email: "jane2398765@miuegypt.edu.eg".to_string(),
        faculty: "Computer Science".to_string(),
        year: 1,
        phone_number: "+201012345678".to_string(),
        first_choice: 1,
        second_choice: None,
        skills: "Rust, public speaking".to_string(),
        motivation: "I want to join the club".to_string(),
        schedule: None,
    }
}

fn upload_dir() -> String {
    std::env::temp_dir()
        .join("msp-portal-test-uploads")
        .to_string_lossy()
        .into_owned()
}
