use async_trait::async_trait;
use tracing::debug;

use crate::application::EmbeddingService;
use crate::domain::{DomainError, EmbeddingConfig, TextChunk};

pub const PLACEHOLDER_FILL: f32 = 0.1;

/// Emits the same constant vector for every chunk. Stands in until a real
/// embedding model is wired in; similarity search over these vectors is
/// meaningless.
pub struct PlaceholderEmbedding {
    config: EmbeddingConfig,
    fill: f32,
}

impl PlaceholderEmbedding {
    pub fn new(dimensions: usize) -> Self {
        Self {
            config: EmbeddingConfig::new("placeholder".to_string(), dimensions),
            fill: PLACEHOLDER_FILL,
        }
    }
}

impl Default for PlaceholderEmbedding {
    fn default() -> Self {
        let config = EmbeddingConfig::default();
        Self::new(config.dimensions())
    }
}

#[async_trait]
impl EmbeddingService for PlaceholderEmbedding {
    async fn embed_chunks(&self, chunks: &[TextChunk]) -> Result<Vec<Vec<f32>>, DomainError> {
        let vectors = vec![vec![self.fill; self.config.dimensions()]; chunks.len()];
        debug!(
            "Generated {} placeholder vectors with {} dimensions",
            vectors.len(),
            self.config.dimensions()
        );
        Ok(vectors)
    }

    fn config(&self) -> &EmbeddingConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_one_vector_per_chunk() {
        let service = PlaceholderEmbedding::new(8);
        let chunks = vec![TextChunk::new(0, "a"), TextChunk::new(1, "b")];

        let vectors = service.embed_chunks(&chunks).await.unwrap();

        assert_eq!(vectors.len(), 2);
        assert!(vectors.iter().all(|v| v.len() == 8));
        assert!(vectors.iter().flatten().all(|x| (*x - 0.1).abs() < f32::EPSILON));
    }

    #[tokio::test]
    async fn test_default_matches_default_vector_size() {
        let service = PlaceholderEmbedding::default();
        assert_eq!(service.config().dimensions(), 1536);
    }
}
