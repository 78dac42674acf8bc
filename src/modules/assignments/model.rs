use facultyhub_cache::Query;
use facultyhub_core::{ClientError, messages};
use facultyhub_models::{
    AcademicYear, AssignDoctorRequest, Assignment, Department, Doctor, GradingTemplate,
    GradingTemplateId, Level, Semester, Specialization, Subject, Term,
};

use crate::modules::hierarchy::{Flow, HierarchySelection};

/// Lists the assignment screen loads up front.
#[derive(Debug, Clone, Default)]
pub struct AssignmentFormData {
    pub departments: Vec<Department>,
    pub years: Vec<AcademicYear>,
    pub doctors: Vec<Doctor>,
    pub assignments: Vec<Assignment>,
    pub templates: Vec<GradingTemplate>,
}

#[derive(Debug, Clone)]
pub struct AssignmentSubmitted {
    pub message: String,
    /// The refreshed assignment list; `None` when the refresh after a successful
    /// submission failed.
    pub assignments: Option<Vec<Assignment>>,
}

/// Doctor-to-subject assignment form.
///
/// Changing the year clears the term. Changing level, term or specialization clears
/// the subject, since the subject list is scoped by all three.
#[derive(Debug, Clone)]
pub struct AssignmentForm {
    selection: HierarchySelection,
    term: Option<Term>,
    subject: Option<Subject>,
    doctor: Option<Doctor>,
    template: Option<GradingTemplateId>,
    submitting: bool,
}

impl Default for AssignmentForm {
    fn default() -> Self {
        Self::new()
    }
}

impl AssignmentForm {
    pub fn new() -> Self {
        Self {
            selection: HierarchySelection::for_flow(Flow::CourseAssignment),
            term: None,
            subject: None,
            doctor: None,
            template: None,
            submitting: false,
        }
    }

    pub fn selection(&self) -> &HierarchySelection {
        &self.selection
    }

    pub fn set_department(&mut self, department: Option<Department>) {
        if self.selection.set_department(department) {
            self.term = None;
            self.subject = None;
        }
    }

    pub fn set_year(&mut self, year: Option<AcademicYear>) {
        if self.selection.set_year(year) {
            self.term = None;
            self.subject = None;
        }
    }

    pub fn set_level(&mut self, level: Option<Level>) {
        if self.selection.set_level(level) {
            self.subject = None;
        }
    }

    pub fn set_specialization(&mut self, specialization: Option<Specialization>) -> bool {
        let changed = self.selection.specialization().map(|s| s.id)
            != specialization.as_ref().map(|s| s.id);
        if !self.selection.set_specialization(specialization) {
            return false;
        }
        if changed {
            self.subject = None;
        }
        true
    }

    pub fn set_term(&mut self, term: Option<Term>) {
        if self.term.as_ref().map(|t| t.id) != term.as_ref().map(|t| t.id) {
            self.subject = None;
        }
        self.term = term;
    }

    pub fn set_subject(&mut self, subject: Option<Subject>) {
        self.subject = subject;
    }

    pub fn set_doctor(&mut self, doctor: Option<Doctor>) {
        self.doctor = doctor;
    }

    pub fn set_template(&mut self, template: Option<GradingTemplateId>) {
        self.template = template;
    }

    /// Picks the template flagged default unless one is already chosen.
    pub fn prefill_template(&mut self, templates: &[GradingTemplate]) {
        if self.template.is_none() {
            self.template = templates.iter().find(|t| t.is_default).map(|t| t.id);
        }
    }

    pub fn term(&self) -> Option<&Term> {
        self.term.as_ref()
    }

    pub fn subject(&self) -> Option<&Subject> {
        self.subject.as_ref()
    }

    pub fn doctor(&self) -> Option<&Doctor> {
        self.doctor.as_ref()
    }

    pub fn template(&self) -> Option<GradingTemplateId> {
        self.template
    }

    /// Semester whose subjects can be taught in the chosen term.
    pub fn semester(&self) -> Option<Semester> {
        self.term.as_ref().map(|t| t.name.semester())
    }

    /// The subject list query for the current selection, once level and term are known.
    pub fn subject_query(&self) -> Option<Query> {
        let department = self.selection.department_id()?;
        let level = self.selection.level()?;
        let semester = self.semester()?;
        if self.selection.requires_specialization() && self.selection.specialization().is_none() {
            return None;
        }

        Some(Query::Subjects {
            department,
            level: level.name,
            semester,
            specialization: self.selection.specialization_id(),
        })
    }

    pub fn is_complete(&self) -> bool {
        self.selection.is_complete()
            && self.term.is_some()
            && self.subject.is_some()
            && self.doctor.is_some()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn can_submit(&self) -> bool {
        self.is_complete() && !self.submitting
    }

    /// Builds the request and marks the form in flight. Refused while a previous
    /// submission is pending or when a required field is missing.
    pub fn begin_submit(&mut self) -> Result<AssignDoctorRequest, ClientError> {
        if self.submitting {
            return Err(ClientError::incomplete(messages::SUBMISSION_IN_PROGRESS));
        }

        let request = match (
            self.selection.level_id(),
            &self.term,
            &self.subject,
            &self.doctor,
        ) {
            (Some(level_id), Some(term), Some(subject), Some(doctor))
                if self.selection.is_complete() =>
            {
                AssignDoctorRequest {
                    doctor_id: doctor.id,
                    subject_id: subject.id,
                    level_id,
                    term_id: term.id,
                    grading_template_id: self.template,
                    specialization_id: self.selection.specialization_id(),
                }
            }
            _ => return Err(ClientError::incomplete(messages::INCOMPLETE_SELECTION)),
        };

        self.submitting = true;
        Ok(request)
    }

    /// Clears the in-flight flag. A successful submission also clears subject and
    /// doctor so the next assignment can be entered; a rejected one keeps every field.
    pub fn finish_submit(&mut self, succeeded: bool) {
        self.submitting = false;
        if succeeded {
            self.subject = None;
            self.doctor = None;
        }
    }
}
