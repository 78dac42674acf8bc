use facultyhub_core::{ClientError, messages};
use facultyhub_models::{AcademicYear, Department, GradeType, Level, LevelId, Specialization};
use reqwest::multipart::{Form, Part};

use crate::modules::hierarchy::{Flow, HierarchySelection};

/// A grade spreadsheet picked for upload. Its content is parsed by the backend.
#[derive(Clone, PartialEq, Eq)]
pub struct GradeSheet {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl GradeSheet {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }
}

impl std::fmt::Debug for GradeSheet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GradeSheet")
            .field("file_name", &self.file_name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct GradeUploadForm {
    selection: HierarchySelection,
    grade_type: GradeType,
    sheet: Option<GradeSheet>,
    uploading: bool,
}

impl Default for GradeUploadForm {
    fn default() -> Self {
        Self::new()
    }
}

impl GradeUploadForm {
    pub fn new() -> Self {
        Self {
            selection: HierarchySelection::for_flow(Flow::GradeUpload),
            grade_type: GradeType::Midterm,
            sheet: None,
            uploading: false,
        }
    }

    pub fn selection(&self) -> &HierarchySelection {
        &self.selection
    }

    pub fn set_department(&mut self, department: Option<Department>) {
        self.selection.set_department(department);
    }

    pub fn set_year(&mut self, year: Option<AcademicYear>) {
        self.selection.set_year(year);
    }

    pub fn set_level(&mut self, level: Option<Level>) {
        self.selection.set_level(level);
    }

    pub fn set_specialization(&mut self, specialization: Option<Specialization>) -> bool {
        self.selection.set_specialization(specialization)
    }

    pub fn set_grade_type(&mut self, grade_type: GradeType) {
        self.grade_type = grade_type;
    }

    pub fn set_sheet(&mut self, sheet: Option<GradeSheet>) {
        self.sheet = sheet;
    }

    pub fn grade_type(&self) -> GradeType {
        self.grade_type
    }

    pub fn sheet(&self) -> Option<&GradeSheet> {
        self.sheet.as_ref()
    }

    pub fn is_complete(&self) -> bool {
        self.selection.is_complete() && self.sheet.is_some()
    }

    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    pub fn can_submit(&self) -> bool {
        self.is_complete() && !self.uploading
    }

    /// Builds the multipart body and marks the form in flight.
    pub fn begin_upload(&mut self) -> Result<(LevelId, Form), ClientError> {
        if self.uploading {
            return Err(ClientError::incomplete(messages::SUBMISSION_IN_PROGRESS));
        }

        let (level_id, sheet) = match (self.selection.level_id(), &self.sheet) {
            (Some(level_id), Some(sheet)) if self.selection.is_complete() => (level_id, sheet),
            _ => return Err(ClientError::incomplete(messages::UPLOAD_FILE_REQUIRED)),
        };

        let file = Part::bytes(sheet.bytes.clone()).file_name(sheet.file_name.clone());
        let form = Form::new()
            .part("file", file)
            .text("level_id", level_id.to_string())
            .text("grade_type", self.grade_type.as_str());

        self.uploading = true;
        Ok((level_id, form))
    }

    /// A successful upload clears the picked file; a failed one keeps it for retry.
    pub fn finish_upload(&mut self, succeeded: bool) {
        self.uploading = false;
        if succeeded {
            self.sheet = None;
        }
    }
}
