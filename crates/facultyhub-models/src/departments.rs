//! Department and specialization models.

use serde::{Deserialize, Serialize};

use crate::ids::{DepartmentId, SpecializationId};

/// Department codes that are split into specializations when the backend does not
/// send the `has_specializations` flag.
const SPECIALIZED_CODES: &[&str] = &["ELEC", "EE"];

/// Arabic stem of "electrical" as it appears in department names.
const SPECIALIZED_NAME_STEM: &str = "كهرب";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: DepartmentId,
    pub name: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Absent in some older payloads; see [`Department::offers_specializations`].
    #[serde(default)]
    pub has_specializations: Option<bool>,
}

impl Department {
    /// Whether students of this department are split into specializations at some level.
    ///
    /// The explicit flag wins. Without it, the Electrical department is recognized by
    /// code or by its Arabic name.
    pub fn offers_specializations(&self) -> bool {
        match self.has_specializations {
            Some(flag) => flag,
            None => {
                SPECIALIZED_CODES
                    .iter()
                    .any(|code| self.code.eq_ignore_ascii_case(code))
                    || self.name.contains(SPECIALIZED_NAME_STEM)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specialization {
    pub id: SpecializationId,
    pub name: String,
    #[serde(default)]
    pub code: String,
    pub department: DepartmentId,
    #[serde(default)]
    pub department_name: Option<String>,
}
