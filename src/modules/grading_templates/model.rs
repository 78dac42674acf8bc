use facultyhub_core::{ClientError, messages};
use facultyhub_models::grading_templates::{REQUIRED_TOTAL, weight_total_message};
use facultyhub_models::{GradingTemplate, GradingTemplateDto, GradingTemplateId};
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightComponent {
    Attendance,
    Quizzes,
    Coursework,
    Midterm,
    Final,
}

impl WeightComponent {
    pub const ALL: [WeightComponent; 5] = [
        Self::Attendance,
        Self::Quizzes,
        Self::Coursework,
        Self::Midterm,
        Self::Final,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Attendance => "الحضور",
            Self::Quizzes => "الكويزات",
            Self::Coursework => "أعمال السنة",
            Self::Midterm => "الميدتيرم",
            Self::Final => "الفاينال",
        }
    }
}

/// Create/edit form for a grading template.
///
/// The running total is recomputed on every read; saving is refused until the
/// name is filled in and the weights add up to 100.
#[derive(Debug, Clone, Default)]
pub struct GradingTemplateForm {
    id: Option<GradingTemplateId>,
    dto: GradingTemplateDto,
    saving: bool,
}

impl GradingTemplateForm {
    /// A new template with the standard 10/10/10/20/50 distribution.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn edit(template: &GradingTemplate) -> Self {
        Self {
            id: Some(template.id),
            dto: GradingTemplateDto::from(template),
            saving: false,
        }
    }

    pub fn id(&self) -> Option<GradingTemplateId> {
        self.id
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    pub fn dto(&self) -> &GradingTemplateDto {
        &self.dto
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.dto.name = name.into();
    }

    pub fn set_weight(&mut self, component: WeightComponent, value: u32) {
        let weights = &mut self.dto.weights;
        match component {
            WeightComponent::Attendance => weights.attendance = value,
            WeightComponent::Quizzes => weights.quizzes = value,
            WeightComponent::Coursework => weights.coursework = value,
            WeightComponent::Midterm => weights.midterm = value,
            WeightComponent::Final => weights.final_exam = value,
        }
    }

    pub fn weight(&self, component: WeightComponent) -> u32 {
        let weights = &self.dto.weights;
        match component {
            WeightComponent::Attendance => weights.attendance,
            WeightComponent::Quizzes => weights.quizzes,
            WeightComponent::Coursework => weights.coursework,
            WeightComponent::Midterm => weights.midterm,
            WeightComponent::Final => weights.final_exam,
        }
    }

    pub fn set_attendance_slots(&mut self, slots: u32) {
        self.dto.attendance_slots = slots;
    }

    pub fn set_quiz_count(&mut self, count: u32) {
        self.dto.quiz_count = count;
    }

    pub fn set_default(&mut self, is_default: bool) {
        self.dto.is_default = is_default;
    }

    pub fn running_total(&self) -> u32 {
        self.dto.weights.total()
    }

    /// The live total warning, `None` while the weights add up.
    pub fn total_warning(&self) -> Option<String> {
        let total = self.running_total();
        (total != REQUIRED_TOTAL).then(|| weight_total_message(total))
    }

    pub fn can_save(&self) -> bool {
        !self.saving && self.validate().is_ok()
    }

    /// Checks the name first, then every field rule including the weight sum.
    pub fn validate(&self) -> Result<&GradingTemplateDto, ClientError> {
        if self.dto.name.trim().is_empty() {
            return Err(ClientError::incomplete(messages::TEMPLATE_NAME_REQUIRED));
        }
        self.dto.validate()?;
        Ok(&self.dto)
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub(crate) fn begin_save(&mut self) -> Result<GradingTemplateDto, ClientError> {
        if self.saving {
            return Err(ClientError::incomplete(messages::SUBMISSION_IN_PROGRESS));
        }
        let dto = self.validate()?.clone();
        self.saving = true;
        Ok(dto)
    }

    pub(crate) fn finish_save(&mut self, saved: Option<GradingTemplateId>) {
        self.saving = false;
        if saved.is_some() {
            self.id = saved;
        }
    }
}
