//! Exam grade upload and approval models.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ids::LevelId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradeType {
    Midterm,
    Final,
}

impl GradeType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Midterm => "midterm",
            Self::Final => "final",
        }
    }
}

impl fmt::Display for GradeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for GradeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "midterm" => Ok(Self::Midterm),
            "final" => Ok(Self::Final),
            other => Err(format!("unknown grade type: {}", other)),
        }
    }
}

/// Outcome of a grade sheet upload. Row-level problems do not fail the upload;
/// they come back in `errors`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadGradesResponse {
    pub message: String,
    #[serde(default)]
    pub errors: Vec<String>,
}

/// Unapproved grades grouped by level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingGrades {
    pub level_id: LevelId,
    pub level_name: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub academic_year: Option<String>,
    pub pending_count: u64,
    #[serde(default)]
    pub midterm_count: u64,
    #[serde(default)]
    pub final_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApproveGradesResponse {
    pub message: String,
    #[serde(default)]
    pub approved_count: u64,
}
