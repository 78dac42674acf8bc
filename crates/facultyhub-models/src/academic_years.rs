//! Academic year and term models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{AcademicYearId, TermId};
use crate::subjects::Semester;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum YearStatus {
    Open,
    Closed,
}

impl YearStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Open => "مفتوح",
            Self::Closed => "مغلق",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcademicYear {
    pub id: AcademicYearId,
    /// e.g. "2024-2025"
    pub name: String,
    pub status: YearStatus,
    #[serde(default)]
    pub is_current: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl AcademicYear {
    pub fn is_open(&self) -> bool {
        self.status == YearStatus::Open
    }
}

/// The year flagged current, if any.
///
/// At most one year is current; the backend enforces it. Should a payload ever
/// carry more than one, the first wins.
pub fn current_year(years: &[AcademicYear]) -> Option<&AcademicYear> {
    years.iter().find(|y| y.is_current)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TermName {
    First,
    Second,
}

impl TermName {
    /// Subjects are catalogued by semester; the first term teaches semester 1.
    pub fn semester(self) -> Semester {
        match self {
            Self::First => Semester::First,
            Self::Second => Semester::Second,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::First => "الترم الأول",
            Self::Second => "الترم الثاني",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub id: TermId,
    pub name: TermName,
    #[serde(default)]
    pub name_display: Option<String>,
    #[serde(default)]
    pub academic_year_id: Option<AcademicYearId>,
}

impl Term {
    pub fn display_name(&self) -> &str {
        self.name_display
            .as_deref()
            .unwrap_or_else(|| self.name.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn year(id: i64, current: bool) -> AcademicYear {
        AcademicYear {
            id: AcademicYearId::new(id),
            name: format!("{}-{}", 2020 + id, 2021 + id),
            status: YearStatus::Open,
            is_current: current,
            created_at: None,
        }
    }

    #[test]
    fn test_current_year_picks_flagged() {
        let years = vec![year(1, false), year(2, true), year(3, false)];
        assert_eq!(current_year(&years).map(|y| y.id), Some(AcademicYearId::new(2)));
    }

    #[test]
    fn test_current_year_none() {
        assert!(current_year(&[year(1, false)]).is_none());
        assert!(current_year(&[]).is_none());
    }

    #[test]
    fn test_current_year_first_wins_on_duplicates() {
        let years = vec![year(5, true), year(6, true)];
        assert_eq!(current_year(&years).map(|y| y.id), Some(AcademicYearId::new(5)));
    }

    #[test]
    fn test_year_status_wire_format() {
        let y: AcademicYear = serde_json::from_str(
            r#"{"id": 1, "name": "2024-2025", "status": "CLOSED", "is_current": false}"#,
        )
        .unwrap();
        assert!(!y.is_open());
        assert_eq!(y.status.label(), "مغلق");
    }

    #[test]
    fn test_term_semester() {
        assert_eq!(TermName::First.semester(), Semester::First);
        assert_eq!(TermName::Second.semester(), Semester::Second);
    }
}
