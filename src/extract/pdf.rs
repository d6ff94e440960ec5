use super::{DEFAULT_MAX_BYTES, DocumentFormat, ExtractError, TextExtractor, check_size};

/// Page text of a PDF, concatenated in page order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfExtractor {
    pub max_bytes: Option<usize>,
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self {
            max_bytes: Some(DEFAULT_MAX_BYTES),
        }
    }
}

impl TextExtractor for PdfExtractor {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Pdf
    }

    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractError> {
        check_size(bytes, self.max_bytes)?;
        pdf_extract::extract_text_from_mem(bytes).map_err(|err| ExtractError::Malformed {
            format: DocumentFormat::Pdf,
            reason: err.to_string(),
        })
    }
}
