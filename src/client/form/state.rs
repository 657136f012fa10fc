use crate::client::form::validate::{sanitize_phone, validate_all, validate_step, Field, FieldError};
use crate::model::application::CreateApplicationDto;
use crate::model::department::is_technical_department;
use crate::model::faculty::Faculty;

/// Which of the three top-level screens is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    Form,
    Success,
}

/// The wizard's steps, in order. `Review` is read-only; everything before
/// it owns an isolated validation rule set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Personal,
    University,
    Documents,
    Preferences,
    Extra,
    Review,
}

impl Step {
    /// The steps that collect input, in order (everything but `Review`).
    pub const DATA_STEPS: [Step; 5] = [
        Step::Personal,
        Step::University,
        Step::Documents,
        Step::Preferences,
        Step::Extra,
    ];

    pub fn index(self) -> usize {
        match self {
            Step::Personal => 0,
            Step::University => 1,
            Step::Documents => 2,
            Step::Preferences => 3,
            Step::Extra => 4,
            Step::Review => 5,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::Personal => "Personal Info",
            Step::University => "University Info",
            Step::Documents => "Documents & Contact",
            Step::Preferences => "Club Preferences",
            Step::Extra => "Extra Info",
            Step::Review => "Review",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            Step::Personal => "Tell us who you are",
            Step::University => "Your faculty and year",
            Step::Documents => "Upload schedule and phone",
            Step::Preferences => "Choose your departments",
            Step::Extra => "Tell us more",
            Step::Review => "Check your details before submitting",
        }
    }

    pub fn next(self) -> Option<Step> {
        match self {
            Step::Personal => Some(Step::University),
            Step::University => Some(Step::Documents),
            Step::Documents => Some(Step::Preferences),
            Step::Preferences => Some(Step::Extra),
            Step::Extra => Some(Step::Review),
            Step::Review => None,
        }
    }

    pub fn prev(self) -> Option<Step> {
        match self {
            Step::Personal => None,
            Step::University => Some(Step::Personal),
            Step::Documents => Some(Step::University),
            Step::Preferences => Some(Step::Documents),
            Step::Extra => Some(Step::Preferences),
            Step::Review => Some(Step::Extra),
        }
    }
}

/// Raw wizard input, exactly as typed/selected. Selects hold the display
/// string with `""` meaning "not chosen"; `schedule` holds the chosen
/// filename. Conversion to the wire payload happens in `submit`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApplicationForm {
    pub full_name: String,
    pub email: String,
    pub student_id: String,
    pub faculty: String,
    pub year: String,
    pub schedule: Option<String>,
    pub phone: String,
    pub first_choice: String,
    pub second_choice: String,
    pub skills: String,
    pub motivation: String,
}

impl ApplicationForm {
    /// Sets the faculty, clearing any selected technical department that
    /// the new faculty is no longer offered.
    pub fn set_faculty(&mut self, faculty: &str) {
        self.faculty = faculty.to_string();

        let allowed = Faculty::from_name(faculty)
            .map(|f| f.allows_technical_departments())
            .unwrap_or(false);

        if !allowed {
            if is_technical_department(&self.first_choice) {
                self.first_choice.clear();
            }
            if is_technical_department(&self.second_choice) {
                self.second_choice.clear();
            }
        }
    }

    /// Stores the phone keeping digits only, mirroring the input mask.
    pub fn set_phone(&mut self, raw: &str) {
        self.phone = sanitize_phone(raw);
    }
}

/// The wizard state machine.
///
/// `next` advances one step iff the current step validates; `back` retreats
/// unconditionally; `begin_submit` re-validates the whole required set
/// before handing out the payload. Validation never panics or throws, it
/// only fills `errors` for inline rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct Wizard {
    pub screen: Screen,
    pub step: Step,
    pub form: ApplicationForm,
    pub errors: Vec<FieldError>,
    pub submitting: bool,
    pub submit_error: Option<String>,
}

impl Wizard {
    pub fn new() -> Self {
        Self {
            screen: Screen::Welcome,
            step: Step::Personal,
            form: ApplicationForm::default(),
            errors: Vec::new(),
            submitting: false,
            submit_error: None,
        }
    }

    /// Leaves the welcome screen for the first form step.
    pub fn start(&mut self) {
        self.screen = Screen::Form;
    }

    /// Advances one step if the current step's rules pass. This is also the
    /// `Review` transition from the last data step, which re-validates
    /// before exposing the summary.
    pub fn next(&mut self) -> bool {
        self.errors = validate_step(self.step, &self.form);
        if !self.errors.is_empty() {
            return false;
        }

        if let Some(step) = self.step.next() {
            self.step = step;
        }
        true
    }

    /// Retreats one step without re-validating.
    pub fn back(&mut self) {
        if let Some(step) = self.step.prev() {
            self.step = step;
            self.errors.clear();
        }
    }

    /// Re-validates every data step and, when clean, flips `submitting` and
    /// returns the assembled payload for the network call. On failure the
    /// wizard stays where it is with the errors populated.
    pub fn begin_submit(&mut self) -> Option<CreateApplicationDto> {
        self.errors = validate_all(&self.form);
        if !self.errors.is_empty() {
            return None;
        }

        self.submitting = true;
        self.submit_error = None;
        Some(crate::client::form::submit::build_payload(&self.form))
    }

    /// A successful submission lands on the success screen.
    pub fn finish_success(&mut self) {
        self.submitting = false;
        self.screen = Screen::Success;
    }

    /// A failed submission stays on the review step and surfaces the
    /// server's message.
    pub fn fail_submit(&mut self, message: String) {
        self.submitting = false;
        self.submit_error = Some(message);
    }

    /// The inline message for one field, if its last validation failed.
    pub fn error_for(&self, field: Field) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message)
    }
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}
