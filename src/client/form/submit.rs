use crate::client::form::state::ApplicationForm;
use crate::model::application::{CreateApplicationDto, YEAR_LEVELS};
use crate::model::department::department_id_by_name;

/// Converts a validated local phone (`01012345678`) to the international
/// form the API stores (`+201012345678`).
pub fn normalize_phone(phone: &str) -> String {
    let rest = phone.strip_prefix('0').unwrap_or(phone);
    format!("+20{rest}")
}

/// Assembles the wire payload from a form that already passed the full
/// validation pass. Labels become the integers the API stores; unmapped
/// selects fall back to 0, which the server reports as missing.
pub fn build_payload(form: &ApplicationForm) -> CreateApplicationDto {
    let year = YEAR_LEVELS
        .iter()
        .find(|(label, _)| *label == form.year)
        .map(|(_, value)| *value)
        .unwrap_or(0);

    let second_choice = if form.second_choice.is_empty() {
        None
    } else {
        department_id_by_name(&form.second_choice)
    };

    CreateApplicationDto {
        university_id: form.student_id.trim().to_string(),
        full_name: form.full_name.trim().to_string(),
        email: form.email.trim().to_string(),
        faculty: form.faculty.clone(),
        year,
        phone_number: normalize_phone(&form.phone),
        first_choice: department_id_by_name(&form.first_choice).unwrap_or(0),
        second_choice,
        skills: form.skills.trim().to_string(),
        motivation: form.motivation.trim().to_string(),
        schedule: form.schedule.clone(),
    }
}
