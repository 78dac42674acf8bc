//! Cache keys.
//!
//! A [`Query`] names one child list of the hierarchy: its entity kind plus the
//! parent ids that scope it. The same value is the request the data source
//! answers and the key the cache stores the answer under.

use std::fmt;

use facultyhub_models::{
    AcademicYearId, DepartmentId, LevelId, LevelName, Semester, SpecializationId,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Departments,
    Years,
    Levels,
    Specializations,
    Students,
    Subjects,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Departments => "departments",
            Self::Years => "years",
            Self::Levels => "levels",
            Self::Specializations => "specializations",
            Self::Students => "students",
            Self::Subjects => "subjects",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Query {
    Departments,
    /// Academic years in which the department has levels.
    Years { department: DepartmentId },
    Levels {
        department: DepartmentId,
        year: AcademicYearId,
    },
    Specializations { department: DepartmentId },
    Students {
        level: LevelId,
        specialization: Option<SpecializationId>,
    },
    Subjects {
        department: DepartmentId,
        level: LevelName,
        semester: Semester,
        specialization: Option<SpecializationId>,
    },
}

impl Query {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Departments => EntityKind::Departments,
            Self::Years { .. } => EntityKind::Years,
            Self::Levels { .. } => EntityKind::Levels,
            Self::Specializations { .. } => EntityKind::Specializations,
            Self::Students { .. } => EntityKind::Students,
            Self::Subjects { .. } => EntityKind::Subjects,
        }
    }

    /// Stable textual key, used in log fields.
    pub fn cache_key(&self) -> String {
        let parts: Vec<String> = match self {
            Self::Departments => vec![],
            Self::Years { department } => vec![format!("department:{}", department)],
            Self::Levels { department, year } => vec![
                format!("department:{}", department),
                format!("year:{}", year),
            ],
            Self::Specializations { department } => vec![format!("department:{}", department)],
            Self::Students {
                level,
                specialization,
            } => {
                let mut parts = vec![format!("level:{}", level)];
                if let Some(spec) = specialization {
                    parts.push(format!("specialization:{}", spec));
                }
                parts
            }
            Self::Subjects {
                department,
                level,
                semester,
                specialization,
            } => {
                let mut parts = vec![
                    format!("department:{}", department),
                    format!("level:{}", level),
                    format!("semester:{}", semester),
                ];
                if let Some(spec) = specialization {
                    parts.push(format!("specialization:{}", spec));
                }
                parts
            }
        };

        if parts.is_empty() {
            self.kind().as_str().to_string()
        } else {
            format!("{}:{}", self.kind(), parts.join(":"))
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.cache_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_key_formats() {
        assert_eq!(Query::Departments.cache_key(), "departments");
        assert_eq!(
            Query::Levels {
                department: DepartmentId::new(2),
                year: AcademicYearId::new(7),
            }
            .cache_key(),
            "levels:department:2:year:7"
        );
        assert_eq!(
            Query::Subjects {
                department: DepartmentId::new(2),
                level: LevelName::Third,
                semester: Semester::Second,
                specialization: Some(SpecializationId::new(4)),
            }
            .cache_key(),
            "subjects:department:2:level:THIRD:semester:2:specialization:4"
        );
    }

    #[test]
    fn test_specialization_distinguishes_keys() {
        let general = Query::Students {
            level: LevelId::new(1),
            specialization: None,
        };
        let scoped = Query::Students {
            level: LevelId::new(1),
            specialization: Some(SpecializationId::new(3)),
        };
        assert_ne!(general, scoped);
        assert_ne!(general.cache_key(), scoped.cache_key());
        assert_eq!(general.kind(), scoped.kind());
    }
}
