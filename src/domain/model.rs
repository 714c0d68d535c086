use serde::{Deserialize, Serialize};
use std::fmt;

/// One roster record. Fields are caller-supplied and not validated:
/// duplicate ids are allowed and the gpa range is not checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub major: String,
    pub gpa: f64,
}

impl Student {
    pub fn new(id: String, name: String, major: String, gpa: f64) -> Self {
        Self {
            id,
            name,
            major,
            gpa,
        }
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} | Name: {} | Major: {} | GPA: {:.2}",
            self.id, self.name, self.major, self.gpa
        )
    }
}
