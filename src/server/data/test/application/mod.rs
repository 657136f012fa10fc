use crate::server::{data::application::ApplicationRepository, model::application::NewApplication};
use entity::application::ApplicationStatus;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod update_status;

fn new_application(university_id: &str) -> NewApplication {
    NewApplication {
        university_id: university_id.to_string(),
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
