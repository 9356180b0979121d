use actix_multipart::form::{bytes::Bytes, text::Text, MultipartForm};
use serde::Deserialize;
use validator::Validate;

use crate::errors::{AppError, AppResult};

pub const MIN_QUESTIONS: u16 = 1;
pub const MAX_QUESTIONS: u16 = 20;
pub const DEFAULT_QUESTIONS: u16 = 5;

// The upload cap is applied once, by the MultipartFormConfig installed at
// server startup from Config::max_upload_bytes.
#[derive(Debug, MultipartForm)]
pub struct PdfUploadForm {
    pub file: Bytes,

    pub num_questions: Option<Text<u16>>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateFromTextRequest {
    #[validate(length(min = 1, message = "text must not be empty"))]
    pub text: String,

    #[validate(range(min = 1, max = 20))]
    pub num_questions: Option<u16>,
}

/// Applies the default and the 1–20 bound shared by both endpoints.
pub fn resolve_question_count(requested: Option<u16>) -> AppResult<usize> {
    let count = requested.unwrap_or(DEFAULT_QUESTIONS);
    if !(MIN_QUESTIONS..=MAX_QUESTIONS).contains(&count) {
        return Err(AppError::ValidationError(format!(
            "num_questions must be between {} and {}",
            MIN_QUESTIONS, MAX_QUESTIONS
        )));
    }
    Ok(count as usize)
}
