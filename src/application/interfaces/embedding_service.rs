use async_trait::async_trait;

use crate::domain::{DomainError, EmbeddingConfig, TextChunk};

/// Turns text chunks into vectors, one per chunk and in the same order.
#[async_trait]
pub trait EmbeddingService: Send + Sync {
    async fn embed_chunks(&self, chunks: &[TextChunk]) -> Result<Vec<Vec<f32>>, DomainError>;

    fn config(&self) -> &EmbeddingConfig;
}
