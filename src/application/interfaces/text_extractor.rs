use async_trait::async_trait;

use crate::domain::DomainError;

/// Pulls plain text out of a binary document.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// Text of every page, concatenated in page order.
    async fn extract_text(&self, bytes: Vec<u8>) -> Result<String, DomainError>;
}
