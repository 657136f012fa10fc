use crate::client::form::state::{ApplicationForm, Step};
use crate::client::form::validate::{
    is_valid_phone, is_valid_student_id, offered_departments, sanitize_phone, validate_all,
    validate_step, Field,
};
use crate::model::application::is_institutional_email;

fn filled_form() -> ApplicationForm {
    ApplicationForm {
        full_name: "Jane Q Doe".to_string(),
        email: "jane2398765@miuegypt.edu.eg".to_string(),
        student_id: "2023/37654".to_string(),
        faculty: "Computer Science".to_string(),
        year: "Freshman".to_string(),
        schedule: None,
        phone: "01012345678".to_string(),
        first_choice: "Software Development".to_string(),
        second_choice: String::new(),
        skills: "Rust, public speaking".to_string(),
        motivation: "I want to build things with people".to_string(),
    }
}

/// Test full name validation
///
/// Expected: two or three whitespace-separated words pass, anything else
/// fails on the full name field.
#[test]
fn test_full_name_word_count() {
    let mut form = filled_form();

    for name in ["Jane Doe", "Jane Q Doe", "  Jane   Doe  "] {
        form.full_name = name.to_string();
        assert!(validate_step(Step::Personal, &form).is_empty(), "{name}");
    }

    for name in ["", "Jane", "Jane Q Public Doe"] {
        form.full_name = name.to_string();
        let errors = validate_step(Step::Personal, &form);
        assert!(
            errors.iter().any(|e| e.field == Field::FullName),
            "{name:?}"
        );
    }
}

/// Test institutional email validation
///
/// Expected: letters then digits at `@miuegypt.edu.eg` passes; missing
/// digits, missing letters, or any other domain fails.
#[test]
fn test_institutional_email_shape() {
    assert!(is_institutional_email("jane2398765@miuegypt.edu.eg"));
    assert!(is_institutional_email("a1@miuegypt.edu.eg"));

    assert!(!is_institutional_email("jane@miuegypt.edu.eg"));
    assert!(!is_institutional_email("2398765@miuegypt.edu.eg"));
    assert!(!is_institutional_email("jane2398765@gmail.com"));
    assert!(!is_institutional_email("jane.2398765@miuegypt.edu.eg"));
    assert!(!is_institutional_email("jane2398765x@miuegypt.edu.eg"));
    assert!(!is_institutional_email(""));
}

/// Test university ID validation
///
/// Expected: four digits, a slash, then five or more digits.
#[test]
fn test_student_id_format() {
    assert!(is_valid_student_id("2023/37654"));
    assert!(is_valid_student_id("1999/123456"));

    assert!(!is_valid_student_id("202/37654"));
    assert!(!is_valid_student_id("20233/37654"));
    assert!(!is_valid_student_id("2023/3765"));
    assert!(!is_valid_student_id("2023-37654"));
    assert!(!is_valid_student_id("2023/37a54"));
    assert!(!is_valid_student_id("202337654"));
    assert!(!is_valid_student_id(""));
}

/// Test phone sanitization and validation
///
/// Expected: non-digits are stripped on input, and the stored value must be
/// exactly 11 digits starting with 0.
#[test]
fn test_phone_rules() {
    assert_eq!(sanitize_phone("010 1234-5678"), "01012345678");
    assert_eq!(sanitize_phone("(010) 12345678"), "01012345678");

    assert!(is_valid_phone("01012345678"));
    assert!(!is_valid_phone("1012345678"));
    assert!(!is_valid_phone("0101234567"));
    assert!(!is_valid_phone("010123456789"));
    assert!(!is_valid_phone("11012345678"));
}

/// Test schedule file validation
///
/// Expected: no file is fine, a `.pdf` (any case) is fine, anything else
/// fails on the schedule field.
#[test]
fn test_schedule_is_optional_but_pdf_only() {
    let mut form = filled_form();

    form.schedule = None;
    assert!(validate_step(Step::Documents, &form).is_empty());

    form.schedule = Some("timetable.pdf".to_string());
    assert!(validate_step(Step::Documents, &form).is_empty());

    form.schedule = Some("timetable.PDF".to_string());
    assert!(validate_step(Step::Documents, &form).is_empty());

    form.schedule = Some("timetable.png".to_string());
    let errors = validate_step(Step::Documents, &form);
    assert!(errors.iter().any(|e| e.field == Field::Schedule));
}

/// Test department offering by faculty
///
/// Expected: technical departments only show up for Computer Science and
/// ECE; everyone gets the other four.
#[test]
fn test_offered_departments_by_faculty() {
    let cs = offered_departments("Computer Science");
    assert_eq!(cs.len(), 6);

    let ece = offered_departments("Engineering Sciences & Arts - ECE");
    assert_eq!(ece.len(), 6);

    let business = offered_departments("Business");
    assert_eq!(business.len(), 4);
    assert!(business.iter().all(|d| d.name != "Software Development"));
    assert!(business.iter().all(|d| d.name != "Technical Training"));

    // Unknown or empty faculty gets the restricted list too.
    assert_eq!(offered_departments("").len(), 4);
}

/// Test department preference validation
///
/// Expected: first choice is required, the second may be empty but never
/// equal to the first, and neither may name a department the faculty
/// cannot join.
#[test]
fn test_preference_rules() {
    let mut form = filled_form();

    form.first_choice = String::new();
    let errors = validate_step(Step::Preferences, &form);
    assert!(errors.iter().any(|e| e.field == Field::FirstChoice));

    form.first_choice = "Public Relations".to_string();
    form.second_choice = "Public Relations".to_string();
    let errors = validate_step(Step::Preferences, &form);
    assert!(errors.iter().any(|e| e.field == Field::SecondChoice));

    form.second_choice = "Event Planning".to_string();
    assert!(validate_step(Step::Preferences, &form).is_empty());

    form.faculty = "Pharmacy".to_string();
    form.first_choice = "Software Development".to_string();
    let errors = validate_step(Step::Preferences, &form);
    assert!(errors.iter().any(|e| e.field == Field::FirstChoice));
}

/// Test extra info validation
///
/// Expected: whitespace-only skills or motivation fail their fields.
#[test]
fn test_extra_info_required() {
    let mut form = filled_form();

    form.skills = "   ".to_string();
    form.motivation = String::new();
    let errors = validate_step(Step::Extra, &form);
    assert!(errors.iter().any(|e| e.field == Field::Skills));
    assert!(errors.iter().any(|e| e.field == Field::Motivation));
}

/// Test whole-form validation
///
/// Expected: a fully valid form produces no errors; a form broken in two
/// different steps reports both.
#[test]
fn test_validate_all_spans_steps() {
    let form = filled_form();
    assert!(validate_all(&form).is_empty());

    let mut broken = filled_form();
    broken.email = "not-an-email".to_string();
    broken.phone = "123".to_string();
    let errors = validate_all(&broken);
    assert!(errors.iter().any(|e| e.field == Field::Email));
    assert!(errors.iter().any(|e| e.field == Field::Phone));
}
