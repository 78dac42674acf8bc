//! Hierarchy part of submission forms.
//!
//! Forms hold a department, year, level and (when the level requires it) a
//! specialization. Setters cascade: changing a parent clears everything picked
//! under it, so a stale child can never be submitted with a new parent.

use facultyhub_core::{ClientError, messages};
use facultyhub_models::{
    AcademicYear, AcademicYearId, Department, DepartmentId, Level, LevelId, Specialization,
    SpecializationId,
};

use super::predicate::{EntryLevels, Flow, requires_specialization};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HierarchySelection {
    entry: EntryLevels,
    department: Option<Department>,
    year: Option<AcademicYear>,
    level: Option<Level>,
    specialization: Option<Specialization>,
}

impl HierarchySelection {
    pub fn new(entry: EntryLevels) -> Self {
        Self {
            entry,
            department: None,
            year: None,
            level: None,
            specialization: None,
        }
    }

    pub fn for_flow(flow: Flow) -> Self {
        Self::new(flow.entry_levels())
    }

    /// Returns whether the department changed. A change clears year, level and
    /// specialization.
    pub fn set_department(&mut self, department: Option<Department>) -> bool {
        if self.department_id() == department.as_ref().map(|d| d.id) {
            return false;
        }
        self.department = department;
        self.year = None;
        self.level = None;
        self.specialization = None;
        true
    }

    /// Returns whether the year changed. A change clears level and specialization.
    pub fn set_year(&mut self, year: Option<AcademicYear>) -> bool {
        if self.year_id() == year.as_ref().map(|y| y.id) {
            return false;
        }
        self.year = year;
        self.level = None;
        self.specialization = None;
        true
    }

    /// Returns whether the level changed. A change clears the specialization.
    pub fn set_level(&mut self, level: Option<Level>) -> bool {
        if self.level_id() == level.as_ref().map(|l| l.id) {
            return false;
        }
        self.level = level;
        self.specialization = None;
        true
    }

    /// Refused with `false` when the current level is not split by specialization.
    pub fn set_specialization(&mut self, specialization: Option<Specialization>) -> bool {
        if specialization.is_some() && !self.requires_specialization() {
            return false;
        }
        self.specialization = specialization;
        true
    }

    pub fn requires_specialization(&self) -> bool {
        requires_specialization(self.department.as_ref(), self.level.as_ref(), self.entry)
    }

    /// Department, year and level are set, and so is the specialization if the
    /// level requires one.
    pub fn is_complete(&self) -> bool {
        self.department.is_some()
            && self.year.is_some()
            && self.level.is_some()
            && (!self.requires_specialization() || self.specialization.is_some())
    }

    pub fn ensure_complete(&self) -> Result<(), ClientError> {
        if self.is_complete() {
            Ok(())
        } else {
            Err(ClientError::incomplete(messages::INCOMPLETE_SELECTION))
        }
    }

    pub fn entry_levels(&self) -> EntryLevels {
        self.entry
    }

    pub fn department(&self) -> Option<&Department> {
        self.department.as_ref()
    }

    pub fn year(&self) -> Option<&AcademicYear> {
        self.year.as_ref()
    }

    pub fn level(&self) -> Option<&Level> {
        self.level.as_ref()
    }

    pub fn specialization(&self) -> Option<&Specialization> {
        self.specialization.as_ref()
    }

    pub fn department_id(&self) -> Option<DepartmentId> {
        self.department.as_ref().map(|d| d.id)
    }

    pub fn year_id(&self) -> Option<AcademicYearId> {
        self.year.as_ref().map(|y| y.id)
    }

    pub fn level_id(&self) -> Option<LevelId> {
        self.level.as_ref().map(|l| l.id)
    }

    /// The specialization to send, omitted whenever the level does not require one.
    pub fn specialization_id(&self) -> Option<SpecializationId> {
        if self.requires_specialization() {
            self.specialization.as_ref().map(|s| s.id)
        } else {
            None
        }
    }
}
