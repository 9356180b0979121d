use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("No text extracted: {0}")]
    NoTextExtracted(String),

    #[error("PDF processing error: {0}")]
    PdfError(String),

    #[error("No questions generated: {0}")]
    NoQuestionsGenerated(String),

    #[error("NLP engine unavailable")]
    NlpUnavailable,

    #[error("NLP engine error: {0}")]
    NlpError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    fn error_code(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::NoTextExtracted(_) => "NO_TEXT_EXTRACTED",
            AppError::PdfError(_) => "PDF_ERROR",
            AppError::NoQuestionsGenerated(_) => "NO_QUESTIONS_GENERATED",
            AppError::NlpUnavailable => "NLP_UNAVAILABLE",
            AppError::NlpError(_) => "NLP_ERROR",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: &'static str,
    pub message: String,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NoTextExtracted(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::PdfError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NoQuestionsGenerated(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NlpUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            AppError::NlpError(_) => StatusCode::BAD_GATEWAY,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            success: false,
            error: self.error_code(),
            message: self.to_string(),
        })
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::NlpError(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            AppError::ValidationError("test".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::NoTextExtracted("test".into()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::NlpUnavailable.status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            AppError::NlpError("test".into()).status_code(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_error_messages() {
        let err = AppError::NoTextExtracted("empty pages".into());
        assert_eq!(err.to_string(), "No text extracted: empty pages");
    }

    #[test]
    fn test_validation_errors_convert_to_bad_request() {
        let err: AppError = validator::ValidationErrors::new().into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
