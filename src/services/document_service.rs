use crate::errors::{AppError, AppResult};

/// Text pulled out of an uploaded document.
#[derive(Clone, Debug)]
pub struct ExtractedDocument {
    pub text: String,
    pub pages_processed: usize,
}

/// Thin wrapper over the PDF text extractor. Extraction itself is a black
/// box; this service only maps its outcomes onto the API error taxonomy.
pub struct DocumentService;

impl DocumentService {
    pub fn new() -> Self {
        DocumentService
    }

    pub fn extract_text(&self, data: &[u8]) -> AppResult<ExtractedDocument> {
        let text = pdf_extract::extract_text_from_mem(data).map_err(|err| {
            log::error!("failed to read PDF: {}", err);
            AppError::PdfError(
                "could not read the PDF file, please ensure it is not corrupted".to_string(),
            )
        })?;

        if text.trim().is_empty() {
            return Err(AppError::NoTextExtracted(
                "could not extract readable text from the PDF file".to_string(),
            ));
        }

        // The extractor separates pages with form feeds.
        let pages_processed = text
            .split('\x0C')
            .filter(|page| !page.trim().is_empty())
            .count();

        log::info!(
            "extracted text from {} pages, total length {}",
            pages_processed,
            text.len()
        );

        Ok(ExtractedDocument {
            text,
            pages_processed,
        })
    }
}

impl Default for DocumentService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_are_a_pdf_error() {
        let service = DocumentService::new();
        let result = service.extract_text(b"definitely not a pdf");

        assert!(matches!(result, Err(AppError::PdfError(_))));
    }
}
