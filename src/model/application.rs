use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// Review state of an application. Serialized lowercase on the wire
/// (`"pending"`, `"approved"`, `"rejected"`); deserialization of anything
/// else fails at the serde boundary.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Academic year labels offered by the wizard, paired with the integer the
/// API stores (1-5).
pub const YEAR_LEVELS: [(&str, i32); 5] = [
    ("Freshman", 1),
    ("Sophomore", 2),
    ("Junior", 3),
    ("Senior", 4),
    ("Senior 2", 5),
];

/// Looks up the display label for a stored year, for the admin table.
pub fn year_label(year: i32) -> Option<&'static str> {
    YEAR_LEVELS
        .iter()
        .find(|(_, value)| *value == year)
        .map(|(label, _)| *label)
}

/// Checks the institutional address shape: one or more letters, then one or
/// more digits, then exactly `@miuegypt.edu.eg`. Both the wizard and the API
/// enforce this, whatever else differs between them.
pub fn is_institutional_email(email: &str) -> bool {
    const DOMAIN: &str = "@miuegypt.edu.eg";

    let Some(local) = email.strip_suffix(DOMAIN) else {
        return false;
    };

    let letters = local.chars().take_while(|c| c.is_ascii_alphabetic()).count();
    let digits = local
        .chars()
        .skip(letters)
        .take_while(|c| c.is_ascii_digit())
        .count();

    letters > 0 && digits > 0 && letters + digits == local.chars().count()
}

/// Body of `POST /api/applications`. The wizard assembles this after the
/// final re-validation pass: phone already carries the `+20` prefix,
/// department choices are integer ids, `schedule` is a bare filename.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CreateApplicationDto {
    pub university_id: String,
    pub full_name: String,
    pub email: String,
    pub faculty: String,
    pub year: i32,
    pub phone_number: String,
    pub first_choice: i32,
    #[serde(default)]
    pub second_choice: Option<i32>,
    pub skills: String,
    pub motivation: String,
    #[serde(default)]
    pub schedule: Option<String>,
}

/// One stored application, as returned by the list endpoint.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ApplicationDto {
    pub application_id: i32,
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
    pub status: ApplicationStatus,
    pub created_at: DateTime<Utc>,
}

/// `GET /api/applications` envelope, newest first.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ApplicationListDto {
    pub success: bool,
    pub data: Vec<ApplicationDto>,
    pub count: usize,
}

/// 201 body of a successful submission.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ApplicationCreatedDto {
    pub success: bool,
    pub message: String,
    pub data: ApplicationReceiptDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ApplicationReceiptDto {
    pub application_id: i32,
    pub university_id: String,
    pub status: ApplicationStatus,
}

/// Body of `PUT /api/applications/{id}/status`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UpdateStatusDto {
    pub status: ApplicationStatus,
}

/// 200 body of a successful status update.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct StatusUpdatedDto {
    pub success: bool,
    pub message: String,
    pub data: StatusReceiptDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct StatusReceiptDto {
    pub application_id: i32,
    pub status: ApplicationStatus,
}
