//! Typed child lists of the hierarchy.

use facultyhub_models::{AcademicYear, Department, Level, Specialization, Student, Subject};

use crate::keys::EntityKind;

/// A child list as returned for one [`crate::Query`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    Departments(Vec<Department>),
    Years(Vec<AcademicYear>),
    Levels(Vec<Level>),
    Specializations(Vec<Specialization>),
    Students(Vec<Student>),
    Subjects(Vec<Subject>),
}

impl Listing {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Departments(_) => EntityKind::Departments,
            Self::Years(_) => EntityKind::Years,
            Self::Levels(_) => EntityKind::Levels,
            Self::Specializations(_) => EntityKind::Specializations,
            Self::Students(_) => EntityKind::Students,
            Self::Subjects(_) => EntityKind::Subjects,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Departments(v) => v.len(),
            Self::Years(v) => v.len(),
            Self::Levels(v) => v.len(),
            Self::Specializations(v) => v.len(),
            Self::Students(v) => v.len(),
            Self::Subjects(v) => v.len(),
        }
    }

    /// An empty list is a valid answer ("no data"), not a failure.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
