//! Grading template models.
//!
//! A template distributes 100 marks over five components. The weights must sum to
//! exactly [`REQUIRED_TOTAL`] before a template can be saved or used.

use std::borrow::Cow;

use facultyhub_core::serde::deserialize_lenient_u32;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::ids::GradingTemplateId;

pub const REQUIRED_TOTAL: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_weight_total"))]
pub struct GradingWeights {
    #[serde(rename = "attendance_weight", deserialize_with = "deserialize_lenient_u32")]
    pub attendance: u32,
    #[serde(rename = "quizzes_weight", deserialize_with = "deserialize_lenient_u32")]
    pub quizzes: u32,
    #[serde(rename = "coursework_weight", deserialize_with = "deserialize_lenient_u32")]
    pub coursework: u32,
    #[serde(rename = "midterm_weight", deserialize_with = "deserialize_lenient_u32")]
    pub midterm: u32,
    #[serde(rename = "final_weight", deserialize_with = "deserialize_lenient_u32")]
    pub final_exam: u32,
}

impl GradingWeights {
    pub const fn new(attendance: u32, quizzes: u32, coursework: u32, midterm: u32, final_exam: u32) -> Self {
        Self {
            attendance,
            quizzes,
            coursework,
            midterm,
            final_exam,
        }
    }

    /// Saturating sum of the five weights.
    pub fn total(&self) -> u32 {
        [
            self.attendance,
            self.quizzes,
            self.coursework,
            self.midterm,
            self.final_exam,
        ]
        .iter()
        .fold(0u32, |acc, w| acc.saturating_add(*w))
    }

    pub fn is_balanced(&self) -> bool {
        self.total() == REQUIRED_TOTAL
    }
}

impl Default for GradingWeights {
    /// The faculty's standard distribution: 10/10/10/20/50.
    fn default() -> Self {
        Self::new(10, 10, 10, 20, 50)
    }
}

/// Message shown when the weights do not add up, with the running total.
pub fn weight_total_message(total: u32) -> String {
    format!(
        "مجموع الدرجات يجب أن يساوي {} (الحالي: {})",
        REQUIRED_TOTAL, total
    )
}

fn validate_weight_total(weights: &GradingWeights) -> Result<(), ValidationError> {
    let total = weights.total();
    if total == REQUIRED_TOTAL {
        return Ok(());
    }

    let mut error =
        ValidationError::new("weight_total").with_message(Cow::Owned(weight_total_message(total)));
    error.add_param(Cow::Borrowed("total"), &total);
    Err(error)
}

fn default_attendance_slots() -> u32 {
    14
}

fn default_quiz_count() -> u32 {
    2
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradingTemplate {
    pub id: GradingTemplateId,
    pub name: String,
    #[serde(flatten)]
    pub weights: GradingWeights,
    #[serde(default = "default_attendance_slots")]
    pub attendance_slots: u32,
    #[serde(default = "default_quiz_count")]
    pub quiz_count: u32,
    #[serde(default)]
    pub is_default: bool,
}

/// Body of template create/update requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct GradingTemplateDto {
    #[validate(custom(function = "validate_not_blank"), length(max = 100))]
    pub name: String,
    #[serde(flatten)]
    #[validate(nested)]
    pub weights: GradingWeights,
    #[validate(range(min = 1))]
    pub attendance_slots: u32,
    pub quiz_count: u32,
    pub is_default: bool,
}

impl Default for GradingTemplateDto {
    fn default() -> Self {
        Self {
            name: String::new(),
            weights: GradingWeights::default(),
            attendance_slots: default_attendance_slots(),
            quiz_count: default_quiz_count(),
            is_default: false,
        }
    }
}

impl From<&GradingTemplate> for GradingTemplateDto {
    fn from(template: &GradingTemplate) -> Self {
        Self {
            name: template.name.clone(),
            weights: template.weights,
            attendance_slots: template.attendance_slots,
            quiz_count: template.quiz_count,
            is_default: template.is_default,
        }
    }
}

fn validate_not_blank(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("blank")
            .with_message(Cow::Borrowed(facultyhub_core::messages::TEMPLATE_NAME_REQUIRED)));
    }
    Ok(())
}
