//! The authenticated user behind a session.

use serde::{Deserialize, Serialize};

use crate::ids::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    StudentAffairs,
    StaffAffairs,
    /// Legacy name of the staff affairs role.
    Staff,
    Doctor,
    Student,
    #[serde(other)]
    Unknown,
}

impl Role {
    pub fn manages_staff(self) -> bool {
        matches!(self, Self::Admin | Self::StaffAffairs | Self::Staff)
    }

    pub fn manages_students(self) -> bool {
        matches!(self, Self::Admin | Self::StudentAffairs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: UserId,
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub role: Role,
    #[serde(default)]
    pub national_id: Option<String>,
}

impl SessionUser {
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_format() {
        let role: Role = serde_json::from_str(r#""STAFF_AFFAIRS""#).unwrap();
        assert_eq!(role, Role::StaffAffairs);
        assert!(role.manages_staff());
        assert!(!role.manages_students());

        let unknown: Role = serde_json::from_str(r#""DEAN""#).unwrap();
        assert_eq!(unknown, Role::Unknown);
    }

    #[test]
    fn test_display_name_falls_back_to_username() {
        let user = SessionUser {
            id: UserId::new(1),
            username: "admin".into(),
            first_name: String::new(),
            last_name: String::new(),
            role: Role::Admin,
            national_id: None,
        };
        assert_eq!(user.display_name(), "admin");
    }
}
