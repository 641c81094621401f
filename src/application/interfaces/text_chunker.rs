use crate::domain::{DomainError, TextChunk};

/// Splits document text into ordered, possibly overlapping chunks.
pub trait TextChunker: Send + Sync {
    fn split(&self, text: &str) -> Result<Vec<TextChunk>, DomainError>;
}
