//! Level (year of study) models.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ids::{AcademicYearId, DepartmentId, LevelId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LevelName {
    Preparatory,
    First,
    Second,
    Third,
    Fourth,
}

impl LevelName {
    pub const ALL: [LevelName; 5] = [
        Self::Preparatory,
        Self::First,
        Self::Second,
        Self::Third,
        Self::Fourth,
    ];

    /// Wire value, also used as the `level` query parameter of the subject catalog.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Preparatory => "PREPARATORY",
            Self::First => "FIRST",
            Self::Second => "SECOND",
            Self::Third => "THIRD",
            Self::Fourth => "FOURTH",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Preparatory => "الفرقة الإعدادية",
            Self::First => "الفرقة الأولى",
            Self::Second => "الفرقة الثانية",
            Self::Third => "الفرقة الثالثة",
            Self::Fourth => "الفرقة الرابعة",
        }
    }
}

impl fmt::Display for LevelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    pub id: LevelId,
    pub name: LevelName,
    /// The preparatory level is faculty-wide and has no department.
    #[serde(default)]
    pub department: Option<DepartmentId>,
    pub academic_year: AcademicYearId,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl Level {
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .unwrap_or_else(|| self.name.label())
    }
}
