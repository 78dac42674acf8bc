//! Student roster models.

use serde::{Deserialize, Serialize};

use crate::ids::{SpecializationId, StudentId};
use crate::value_types::NationalId;

/// A row of the student roster.
///
/// `national_id` stays a raw string: rows come from spreadsheet imports and one
/// malformed id must not make the whole roster undecodable.
/// [`Student::national_id_checked`] validates it on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub full_name: String,
    pub national_id: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub has_account: Option<bool>,
    #[serde(default)]
    pub level_name: Option<String>,
    #[serde(default)]
    pub specialization: Option<SpecializationId>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub academic_year: Option<String>,
}

impl Student {
    /// Whether the student has a login account.
    ///
    /// Roster endpoints report either an explicit flag or the account's username.
    pub fn has_account(&self) -> bool {
        self.has_account.unwrap_or(self.username.is_some())
    }

    pub fn national_id_checked(&self) -> Result<NationalId, crate::ValueTypeError> {
        self.national_id.parse()
    }
}

/// Answer of `POST student-affairs/students/{id}/reset-password/`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetPasswordResponse {
    #[serde(default)]
    pub message: Option<String>,
}
