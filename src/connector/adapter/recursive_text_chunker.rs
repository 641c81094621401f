use text_splitter::{Characters, ChunkConfig, TextSplitter};

use crate::application::TextChunker;
use crate::domain::{ChunkingConfig, DomainError, TextChunk};

/// [`TextChunker`] backed by `text-splitter`.
///
/// Splits on the largest semantic unit that fits (paragraphs, then lines,
/// sentences, words, characters) with chunk size and overlap counted in
/// characters.
pub struct RecursiveTextChunker {
    splitter: TextSplitter<Characters>,
    config: ChunkingConfig,
}

impl RecursiveTextChunker {
    pub fn new(config: ChunkingConfig) -> Result<Self, DomainError> {
        if config.chunk_size == 0 {
            return Err(DomainError::invalid_input("Chunk size must be greater than zero"));
        }

        let chunk_config = ChunkConfig::new(config.chunk_size)
            .with_overlap(config.chunk_overlap)
            .map_err(|e| {
                DomainError::invalid_input(format!(
                    "Invalid chunking config (size={}, overlap={}): {}",
                    config.chunk_size, config.chunk_overlap, e
                ))
            })?;

        Ok(Self {
            splitter: TextSplitter::new(chunk_config),
            config,
        })
    }

    pub fn config(&self) -> ChunkingConfig {
        self.config
    }
}

impl TextChunker for RecursiveTextChunker {
    fn split(&self, text: &str) -> Result<Vec<TextChunk>, DomainError> {
        Ok(self
            .splitter
            .chunks(text)
            .enumerate()
            .map(|(index, chunk)| TextChunk::new(index, chunk))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_text(paragraphs: usize) -> String {
        (0..paragraphs)
            .map(|i| format!("Paragraph {} talks about vectors and collections in some detail.", i))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    #[test]
    fn test_short_text_is_one_chunk() {
        let chunker = RecursiveTextChunker::new(ChunkingConfig::default()).unwrap();
        let chunks = chunker.split("A short page.").unwrap();
        assert_eq!(chunks, vec![TextChunk::new(0, "A short page.")]);
    }

    #[test]
    fn test_chunks_respect_size_and_are_indexed() {
        let chunker = RecursiveTextChunker::new(ChunkingConfig::new(200, 40)).unwrap();
        let chunks = chunker.split(&sample_text(30)).unwrap();

        assert!(chunks.len() > 1);
        for (i, chunk) in chunks.iter().enumerate() {
            assert_eq!(chunk.index, i);
            assert!(chunk.char_count() <= 200, "chunk {} too long", i);
        }
    }

    #[test]
    fn test_empty_text_has_no_chunks() {
        let chunker = RecursiveTextChunker::new(ChunkingConfig::default()).unwrap();
        assert!(chunker.split("").unwrap().is_empty());
    }

    #[test]
    fn test_overlap_not_smaller_than_size_is_rejected() {
        assert!(RecursiveTextChunker::new(ChunkingConfig::new(100, 100)).is_err());
        assert!(RecursiveTextChunker::new(ChunkingConfig::new(0, 0)).is_err());
    }
}
