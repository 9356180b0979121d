pub mod generic_distractors;
pub mod question_templates;
