use async_trait::async_trait;
use tracing::debug;

use crate::application::TextExtractor;
use crate::domain::DomainError;

/// [`TextExtractor`] backed by the `pdf-extract` crate.
///
/// Parsing runs on the blocking pool. A panic inside the parser (malformed
/// files can trigger one) is reported as an extraction error.
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PdfTextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Readers accept `%PDF` anywhere in the first kilobyte.
fn has_pdf_header(bytes: &[u8]) -> bool {
    bytes[..bytes.len().min(1024)]
        .windows(4)
        .any(|w| w == b"%PDF")
}

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract_text(&self, bytes: Vec<u8>) -> Result<String, DomainError> {
        if !has_pdf_header(&bytes) {
            return Err(DomainError::extraction(
                "No PDF header in the first 1024 bytes of the file",
            ));
        }

        let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
            .await
            .map_err(|e| {
                if e.is_panic() {
                    DomainError::extraction("PDF parser panicked on this file")
                } else {
                    DomainError::internal(format!("PDF extraction task failed: {}", e))
                }
            })?
            .map_err(|e| DomainError::extraction(format!("Failed to extract PDF text: {}", e)))?;

        debug!("Extracted {} characters of PDF text", text.chars().count());
        Ok(text)
    }
}
