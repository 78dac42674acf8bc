//! # FacultyHub Models
//!
//! Entities and DTOs exchanged with the faculty backend.
//!
//! All authoritative state lives server-side; these types are read-through copies
//! of it plus the request bodies the client sends.
//!
//! # Modules
//!
//! - [`ids`]: strongly-typed integer ids, one per entity
//! - [`departments`]: departments and their specializations (tracks)
//! - [`academic_years`]: academic years and terms
//! - [`levels`]: levels of study within a department and year
//! - [`subjects`]: the subject catalog
//! - [`students`]: student roster rows
//! - [`doctors`]: teaching staff
//! - [`assignments`]: doctor-to-subject assignments
//! - [`grading_templates`]: grading weight configurations
//! - [`exam_grades`]: exam grade upload and approval
//! - [`users`]: the authenticated user behind a session
//! - [`value_types`]: validated domain primitives

pub mod academic_years;
pub mod assignments;
pub mod departments;
pub mod doctors;
pub mod exam_grades;
pub mod grading_templates;
pub mod ids;
pub mod levels;
pub mod students;
pub mod subjects;
pub mod users;
pub mod value_types;

pub use academic_years::{AcademicYear, Term, TermName, YearStatus, current_year};
pub use assignments::{AssignDoctorRequest, AssignDoctorResponse, Assignment};
pub use departments::{Department, Specialization};
pub use doctors::Doctor;
pub use exam_grades::{ApproveGradesResponse, GradeType, PendingGrades, UploadGradesResponse};
pub use grading_templates::{GradingTemplate, GradingTemplateDto, GradingWeights};
pub use ids::{
    AcademicYearId, AssignmentId, DepartmentId, DoctorId, GradingTemplateId, LevelId,
    SpecializationId, StudentId, SubjectId, TermId, UserId,
};
pub use levels::{Level, LevelName};
pub use students::{ResetPasswordResponse, Student};
pub use subjects::{Semester, Subject};
pub use users::{Role, SessionUser};
pub use value_types::{NationalId, ValueTypeError};
