//! Teaching staff models.

use serde::{Deserialize, Serialize};

use crate::ids::DoctorId;

/// A doctor is not bound to a department and can be assigned across departments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: DoctorId,
    pub full_name: String,
    #[serde(default)]
    pub national_id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}
