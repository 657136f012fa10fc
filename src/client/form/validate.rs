use crate::client::form::state::{ApplicationForm, Step};
use crate::model::application::is_institutional_email;
use crate::model::department::{is_technical_department, Department, DEPARTMENTS};
use crate::model::faculty::Faculty;

/// Every field the wizard collects, for targeting inline error messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    FullName,
    Email,
    StudentId,
    Faculty,
    Year,
    Schedule,
    Phone,
    FirstChoice,
    SecondChoice,
    Skills,
    Motivation,
}

/// One field-level validation failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

impl FieldError {
    fn new(field: Field, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// Runs a single step's rules. `Review` has no rules of its own.
pub fn validate_step(step: Step, form: &ApplicationForm) -> Vec<FieldError> {
    let mut errors = Vec::new();

    match step {
        Step::Personal => {
            let words = form.full_name.split_whitespace().count();
            if !(2..=3).contains(&words) {
                errors.push(FieldError::new(
                    Field::FullName,
                    "Enter your full name (two or three words)",
                ));
            }

            if !is_institutional_email(form.email.trim()) {
                errors.push(FieldError::new(
                    Field::Email,
                    "Use your university email, e.g. name2398765@miuegypt.edu.eg",
                ));
            }

            if !is_valid_student_id(form.student_id.trim()) {
                errors.push(FieldError::new(
                    Field::StudentId,
                    "Enter your university ID as year/number, e.g. 2023/37654",
                ));
            }
        }
        Step::University => {
            if form.faculty.is_empty() {
                errors.push(FieldError::new(Field::Faculty, "Select your faculty"));
            }
            if form.year.is_empty() {
                errors.push(FieldError::new(Field::Year, "Select your academic year"));
            }
        }
        Step::Documents => {
            if let Some(name) = &form.schedule {
                if !name.to_lowercase().ends_with(".pdf") {
                    errors.push(FieldError::new(
                        Field::Schedule,
                        "Only PDF files are allowed",
                    ));
                }
            }

            if !is_valid_phone(&form.phone) {
                errors.push(FieldError::new(
                    Field::Phone,
                    "Enter an 11 digit phone number starting with 0",
                ));
            }
        }
        Step::Preferences => {
            if form.first_choice.is_empty() {
                errors.push(FieldError::new(
                    Field::FirstChoice,
                    "Choose a first department",
                ));
            } else if offered_departments(&form.faculty)
                .iter()
                .all(|d| d.name != form.first_choice)
            {
                errors.push(FieldError::new(
                    Field::FirstChoice,
                    "This department is not offered to your faculty",
                ));
            }

            if !form.second_choice.is_empty() {
                if form.second_choice == form.first_choice {
                    errors.push(FieldError::new(
                        Field::SecondChoice,
                        "Pick a different second department",
                    ));
                } else if offered_departments(&form.faculty)
                    .iter()
                    .all(|d| d.name != form.second_choice)
                {
                    errors.push(FieldError::new(
                        Field::SecondChoice,
                        "This department is not offered to your faculty",
                    ));
                }
            }
        }
        Step::Extra => {
            if form.skills.trim().is_empty() {
                errors.push(FieldError::new(Field::Skills, "Tell us about your skills"));
            }
            if form.motivation.trim().is_empty() {
                errors.push(FieldError::new(
                    Field::Motivation,
                    "Tell us why you want to join",
                ));
            }
        }
        Step::Review => {}
    }

    errors
}

/// Runs every data step's rules, in step order. Used as the last gate
/// before submission.
pub fn validate_all(form: &ApplicationForm) -> Vec<FieldError> {
    Step::DATA_STEPS
        .into_iter()
        .flat_map(|step| validate_step(step, form))
        .collect()
}

/// `year/number` where the year is exactly four digits and the number at
/// least five.
pub fn is_valid_student_id(id: &str) -> bool {
    let Some((year, number)) = id.split_once('/') else {
        return false;
    };

    year.len() == 4
        && year.chars().all(|c| c.is_ascii_digit())
        && number.len() >= 5
        && number.chars().all(|c| c.is_ascii_digit())
}

/// Drops everything but ASCII digits, so pasted numbers with spaces or
/// dashes still validate.
pub fn sanitize_phone(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Local Egyptian mobile format: exactly 11 digits with a leading zero.
pub fn is_valid_phone(phone: &str) -> bool {
    phone.len() == 11
        && phone.starts_with('0')
        && phone.chars().all(|c| c.is_ascii_digit())
}

/// The departments the picker offers for a faculty. Technical departments
/// only appear for the faculties that may join them.
pub fn offered_departments(faculty: &str) -> Vec<Department> {
    let technical_allowed = Faculty::from_name(faculty)
        .map(|f| f.allows_technical_departments())
        .unwrap_or(false);

    DEPARTMENTS
        .into_iter()
        .filter(|d| technical_allowed || !is_technical_department(d.name))
        .collect()
}
