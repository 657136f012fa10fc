/// One entry of the fixed department lookup set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Department {
    pub id: i32,
    pub name: &'static str,
}

/// The fixed department set, matching the ids the seed migration produces.
pub const DEPARTMENTS: [Department; 6] = [
    Department {
        id: 1,
        name: "Software Development",
    },
    Department {
        id: 2,
        name: "Technical Training",
    },
    Department {
        id: 3,
        name: "Media & Content Creation",
    },
    Department {
        id: 4,
        name: "Public Relations",
    },
    Department {
        id: 5,
        name: "Human Resources",
    },
    Department {
        id: 6,
        name: "Event Planning",
    },
];

/// Department names only offered to the technical faculties.
pub const TECHNICAL_DEPARTMENTS: [&str; 2] = ["Software Development", "Technical Training"];

pub fn department_id_by_name(name: &str) -> Option<i32> {
    DEPARTMENTS.iter().find(|d| d.name == name).map(|d| d.id)
}

pub fn department_name_by_id(id: i32) -> Option<&'static str> {
    DEPARTMENTS.iter().find(|d| d.id == id).map(|d| d.name)
}

pub fn is_technical_department(name: &str) -> bool {
    TECHNICAL_DEPARTMENTS.contains(&name)
}
