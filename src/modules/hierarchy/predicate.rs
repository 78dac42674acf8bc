//! Specialization gating.
//!
//! Departments split into specializations (tracks) do so only after their entry
//! level: first-year students are not yet assigned a track. Which level names count
//! as "entry" differs per flow, so the set is always passed explicitly.

use facultyhub_models::{Department, Level, LevelName};

/// Level names that are never scoped by specialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryLevels(&'static [LevelName]);

impl EntryLevels {
    pub const FIRST_ONLY: Self = Self(&[LevelName::First]);
    pub const FIRST_AND_PREPARATORY: Self = Self(&[LevelName::First, LevelName::Preparatory]);

    pub fn contains(self, name: LevelName) -> bool {
        self.0.contains(&name)
    }

    pub fn names(self) -> &'static [LevelName] {
        self.0
    }
}

/// Every screen that gates selection on specialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flow {
    /// Browsing students of a level (student affairs hierarchy view).
    StudentRoster,
    /// Account management over the student hierarchy.
    UserManagement,
    /// Assigning doctors to subjects.
    CourseAssignment,
    /// Uploading exam grade sheets.
    GradeUpload,
    /// Browsing the subject catalog of a level.
    SubjectCatalog,
}

impl Flow {
    /// The entry-level set of each flow.
    ///
    /// Roster screens only ever exempt the first level. Flows that reach subjects also
    /// exempt the preparatory level, whose subjects are faculty-wide.
    pub fn entry_levels(self) -> EntryLevels {
        match self {
            Self::StudentRoster | Self::UserManagement => EntryLevels::FIRST_ONLY,
            Self::CourseAssignment | Self::GradeUpload | Self::SubjectCatalog => {
                EntryLevels::FIRST_AND_PREPARATORY
            }
        }
    }
}

/// Whether selections under `level` of `department` must also name a specialization.
///
/// Missing data never blocks: with either side absent the answer is `false`, and the
/// caller asks again once both are known.
pub fn requires_specialization(
    department: Option<&Department>,
    level: Option<&Level>,
    entry: EntryLevels,
) -> bool {
    match (department, level) {
        (Some(department), Some(level)) => {
            department.offers_specializations() && !entry.contains(level.name)
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use facultyhub_models::{AcademicYearId, DepartmentId, LevelId};

    fn department(has_specializations: bool) -> Department {
        Department {
            id: DepartmentId::new(1),
            name: "Electrical".into(),
            code: "ELEC".into(),
            description: None,
            has_specializations: Some(has_specializations),
        }
    }

    fn level(name: LevelName) -> Level {
        Level {
            id: LevelId::new(1),
            name,
            department: Some(DepartmentId::new(1)),
            academic_year: AcademicYearId::new(1),
            display_name: None,
        }
    }

    #[test]
    fn test_department_without_specializations_never_requires() {
        let dept = department(false);
        for name in LevelName::ALL {
            for entry in [EntryLevels::FIRST_ONLY, EntryLevels::FIRST_AND_PREPARATORY] {
                assert!(!requires_specialization(Some(&dept), Some(&level(name)), entry));
            }
        }
    }

    #[test]
    fn test_first_level_exempt() {
        let dept = department(true);
        let entry = EntryLevels::FIRST_ONLY;
        assert!(!requires_specialization(Some(&dept), Some(&level(LevelName::First)), entry));
        for name in [LevelName::Second, LevelName::Third, LevelName::Fourth] {
            assert!(requires_specialization(Some(&dept), Some(&level(name)), entry));
        }
    }

    #[test]
    fn test_preparatory_depends_on_flow() {
        let dept = department(true);
        let prep = level(LevelName::Preparatory);
        assert!(requires_specialization(Some(&dept), Some(&prep), EntryLevels::FIRST_ONLY));
        assert!(!requires_specialization(
            Some(&dept),
            Some(&prep),
            EntryLevels::FIRST_AND_PREPARATORY
        ));
    }

    #[test]
    fn test_missing_inputs_do_not_require() {
        let dept = department(true);
        let second = level(LevelName::Second);
        let entry = EntryLevels::FIRST_ONLY;
        assert!(!requires_specialization(None, Some(&second), entry));
        assert!(!requires_specialization(Some(&dept), None, entry));
        assert!(!requires_specialization(None, None, entry));
    }

    #[test]
    fn test_flow_mapping() {
        assert_eq!(Flow::StudentRoster.entry_levels(), EntryLevels::FIRST_ONLY);
        assert_eq!(Flow::UserManagement.entry_levels(), EntryLevels::FIRST_ONLY);
        assert_eq!(
            Flow::GradeUpload.entry_levels(),
            EntryLevels::FIRST_AND_PREPARATORY
        );
        assert!(Flow::CourseAssignment.entry_levels().contains(LevelName::Preparatory));
    }
}
