/// The closed set of faculties an applicant may belong to. Stored as the
/// display string; parsing back through `from_name` is the validation
/// boundary on the server.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Faculty {
    ComputerScience,
    EngineeringEce,
    MassCommunication,
    Dentistry,
    EngineeringArchitecture,
    Pharmacy,
    Business,
    Alsun,
}

impl Faculty {
    pub const ALL: [Faculty; 8] = [
        Faculty::ComputerScience,
        Faculty::EngineeringEce,
        Faculty::MassCommunication,
        Faculty::Dentistry,
        Faculty::EngineeringArchitecture,
        Faculty::Pharmacy,
        Faculty::Business,
        Faculty::Alsun,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ComputerScience => "Computer Science",
            Self::EngineeringEce => "Engineering Sciences & Arts - ECE",
            Self::MassCommunication => "Mass Communication",
            Self::Dentistry => "Dentistry",
            Self::EngineeringArchitecture => "Engineering Sciences & Arts - Architecture",
            Self::Pharmacy => "Pharmacy",
            Self::Business => "Business",
            Self::Alsun => "Alsun",
        }
    }

    /// Parses a display string back into the closed set.
    pub fn from_name(name: &str) -> Option<Faculty> {
        Self::ALL.into_iter().find(|f| f.as_str() == name)
    }

    /// Faculties whose students may pick the technical departments
    /// (Software Development, Technical Training).
    pub fn allows_technical_departments(&self) -> bool {
        matches!(self, Self::ComputerScience | Self::EngineeringEce)
    }
}
