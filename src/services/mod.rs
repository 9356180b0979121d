pub mod document_service;
pub mod generation_steps;
pub mod mcq_service;

pub use document_service::{DocumentService, ExtractedDocument};
pub use mcq_service::McqService;
