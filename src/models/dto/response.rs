use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::Mcq;

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub success: bool,
    pub questions: Vec<Mcq>,
    pub processing_time: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages_processed: Option<usize>,
    pub text_length: usize,
    pub generated_at: DateTime<Utc>,
}

impl QuestionsResponse {
    pub fn new(
        questions: Vec<Mcq>,
        processing_time: f64,
        pages_processed: Option<usize>,
        text_length: usize,
    ) -> Self {
        QuestionsResponse {
            success: true,
            questions,
            processing_time,
            pages_processed,
            text_length,
            generated_at: Utc::now(),
        }
    }
}
