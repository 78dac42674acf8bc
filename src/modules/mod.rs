pub mod assignments;
pub mod exam_grades;
pub mod grading_templates;
pub mod hierarchy;
pub mod students;
