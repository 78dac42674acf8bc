//! Strongly-typed ID newtypes for domain entities.
//!
//! The backend identifies every row by an integer primary key. Wrapping each in
//! its own type keeps a `LevelId` from being passed where a `DepartmentId` is
//! expected, which matters in a hierarchy where every query carries several ids.
//!
//! # Example
//!
//! ```ignore
//! use facultyhub_models::ids::{DepartmentId, LevelId};
//!
//! fn levels_of(department: DepartmentId) { /* ... */ }
//!
//! levels_of(DepartmentId::new(3));     // OK
//! // levels_of(LevelId::new(3));       // Compile error! Type mismatch.
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Defines an integer ID newtype with serde, display and parsing support.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            #[inline]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            #[inline]
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            #[inline]
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            #[inline]
            fn from(id: $name) -> i64 {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse::<i64>().map(Self)
            }
        }
    };
}

define_id!(
    /// Strongly-typed ID for Department entities.
    DepartmentId
);

define_id!(
    /// Strongly-typed ID for AcademicYear entities.
    AcademicYearId
);

define_id!(
    /// Strongly-typed ID for Term entities.
    TermId
);

define_id!(
    /// Strongly-typed ID for Level entities.
    LevelId
);

define_id!(
    /// Strongly-typed ID for Specialization entities.
    SpecializationId
);

define_id!(
    /// Strongly-typed ID for Subject entities.
    SubjectId
);

define_id!(
    /// Strongly-typed ID for Student entities.
    StudentId
);

define_id!(
    /// Strongly-typed ID for Doctor entities (backend user ids).
    DoctorId
);

define_id!(
    /// Strongly-typed ID for course offerings created by doctor assignment.
    AssignmentId
);

define_id!(
    /// Strongly-typed ID for GradingTemplate entities.
    GradingTemplateId
);

define_id!(
    /// Strongly-typed ID for backend user accounts.
    UserId
);
