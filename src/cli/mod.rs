pub mod assign;
pub mod browse;
pub mod grades;
pub mod prompt;
pub mod templates;
