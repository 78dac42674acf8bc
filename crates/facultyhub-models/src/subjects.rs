//! Subject catalog models.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ids::{DepartmentId, SpecializationId, SubjectId};
use crate::levels::LevelName;

/// Semester a subject is taught in; the catalog knows only two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Semester {
    First,
    Second,
}

impl Semester {
    pub fn number(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::First),
            2 => Some(Self::Second),
            _ => None,
        }
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl Serialize for Semester {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(self.number())
    }
}

impl<'de> Deserialize<'de> for Semester {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let n = u8::deserialize(deserializer)?;
        Self::from_number(n)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid semester: {}", n)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: SubjectId,
    pub code: String,
    pub name: String,
    pub department: Option<DepartmentId>,
    pub level: LevelName,
    pub semester: Semester,
    #[serde(default)]
    pub specialization: Option<SpecializationId>,
    #[serde(default)]
    pub is_elective: bool,
    #[serde(default)]
    pub credit_hours: Option<u32>,
}
