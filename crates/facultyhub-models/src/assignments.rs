//! Doctor assignment models.

use serde::{Deserialize, Serialize};

use crate::ids::{
    AcademicYearId, AssignmentId, DoctorId, GradingTemplateId, LevelId, SpecializationId,
    SubjectId, TermId,
};

/// An existing assignment as listed by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: AssignmentId,
    pub doctor_id: DoctorId,
    pub doctor_name: String,
    pub subject_name: String,
    pub subject_code: String,
    pub level_name: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub term: Option<String>,
    #[serde(default)]
    pub term_id: Option<TermId>,
    #[serde(default)]
    pub academic_year: Option<String>,
    #[serde(default)]
    pub academic_year_id: Option<AcademicYearId>,
    #[serde(default)]
    pub grading_template: Option<String>,
    #[serde(default)]
    pub specialization_name: Option<String>,
}

/// Body of `POST staff-affairs/assign-doctor/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignDoctorRequest {
    pub doctor_id: DoctorId,
    pub subject_id: SubjectId,
    pub level_id: LevelId,
    pub term_id: TermId,
    pub grading_template_id: Option<GradingTemplateId>,
    pub specialization_id: Option<SpecializationId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignDoctorResponse {
    pub message: String,
    #[serde(default)]
    pub offering_id: Option<AssignmentId>,
}
