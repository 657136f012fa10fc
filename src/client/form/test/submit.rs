use crate::client::form::state::ApplicationForm;
use crate::client::form::submit::{build_payload, normalize_phone};

fn complete_form() -> ApplicationForm {
    ApplicationForm {
        full_name: " Jane Q Doe ".to_string(),
        email: "jane2398765@miuegypt.edu.eg".to_string(),
        student_id: "2023/37654".to_string(),
        faculty: "Computer Science".to_string(),
        year: "Freshman".to_string(),
        schedule: Some("timetable.pdf".to_string()),
        phone: "01012345678".to_string(),
        first_choice: "Software Development".to_string(),
        second_choice: "Media & Content Creation".to_string(),
        skills: "Rust, public speaking".to_string(),
        motivation: "I want to build things with people".to_string(),
    }
}

/// Test phone normalization
///
/// Expected: the leading local zero is replaced by the +20 country code.
#[test]
fn test_normalize_phone_adds_country_code() {
    assert_eq!(normalize_phone("01012345678"), "+201012345678");
}

/// Test payload assembly
///
/// Expected: labels map to stored integers, the phone gains the country
/// code, text fields are trimmed, and the schedule filename passes through.
#[test]
fn test_build_payload_maps_form_to_wire() {
    let payload = build_payload(&complete_form());

    assert_eq!(payload.university_id, "2023/37654");
    assert_eq!(payload.full_name, "Jane Q Doe");
    assert_eq!(payload.email, "jane2398765@miuegypt.edu.eg");
    assert_eq!(payload.faculty, "Computer Science");
    assert_eq!(payload.year, 1);
    assert_eq!(payload.phone_number, "+201012345678");
    assert_eq!(payload.first_choice, 1);
    assert_eq!(payload.second_choice, Some(3));
    assert_eq!(payload.schedule.as_deref(), Some("timetable.pdf"));
}

/// Test optional fields in the payload
///
/// Expected: an empty second choice and no schedule become `None`, and the
/// last year label maps to 5.
#[test]
fn test_build_payload_optional_fields() {
    let mut form = complete_form();
    form.second_choice = String::new();
    form.schedule = None;
    form.year = "Senior 2".to_string();

    let payload = build_payload(&form);
    assert_eq!(payload.second_choice, None);
    assert_eq!(payload.schedule, None);
    assert_eq!(payload.year, 5);
}
