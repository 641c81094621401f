use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use crate::application::{EmbeddingService, TextChunker, TextExtractor, VectorStoreAdmin};
use crate::domain::{
    CollectionName, DomainError, IndexReport, PdfDocument, Point, PointIdStrategy, TextChunk,
};

pub const DEFAULT_UPSERT_BATCH_SIZE: usize = 256;

#[derive(Debug, Clone, Copy)]
pub struct IndexOptions {
    pub id_strategy: PointIdStrategy,
    pub batch_size: usize,
    pub show_progress: bool,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            id_strategy: PointIdStrategy::Sequential,
            batch_size: DEFAULT_UPSERT_BATCH_SIZE,
            show_progress: false,
        }
    }
}

/// Extracts the text of a PDF, chunks it, embeds each chunk and upserts one
/// point per chunk into an existing collection.
pub struct IndexPdfUseCase {
    store: Arc<dyn VectorStoreAdmin>,
    extractor: Arc<dyn TextExtractor>,
    chunker: Arc<dyn TextChunker>,
    embedding_service: Arc<dyn EmbeddingService>,
    options: IndexOptions,
}

impl IndexPdfUseCase {
    pub fn new(
        store: Arc<dyn VectorStoreAdmin>,
        extractor: Arc<dyn TextExtractor>,
        chunker: Arc<dyn TextChunker>,
        embedding_service: Arc<dyn EmbeddingService>,
    ) -> Self {
        Self {
            store,
            extractor,
            chunker,
            embedding_service,
            options: IndexOptions::default(),
        }
    }

    pub fn with_options(mut self, options: IndexOptions) -> Self {
        self.options = options;
        self
    }

    pub async fn execute(&self, collection: &str, path: &Path) -> Result<IndexReport, DomainError> {
        let is_pdf = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("pdf"));
        if !is_pdf {
            return Err(DomainError::invalid_input(format!(
                "Not a PDF file: {}",
                path.display()
            )));
        }

        let source = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("document.pdf")
            .to_string();

        let bytes = tokio::fs::read(path).await.map_err(|e| {
            DomainError::invalid_input(format!("Cannot read {}: {}", path.display(), e))
        })?;

        self.index_bytes(collection, &source, bytes).await
    }

    /// Same pipeline as [`Self::execute`] for PDF bytes already in memory.
    pub async fn index_bytes(
        &self,
        collection: &str,
        source: &str,
        bytes: Vec<u8>,
    ) -> Result<IndexReport, DomainError> {
        let name = CollectionName::parse(collection)?;
        let start_time = Instant::now();

        self.check_collection(&name).await?;

        info!("Extracting text from {} ({} bytes)", source, bytes.len());
        let text = self.extractor.extract_text(bytes).await?;
        let document = PdfDocument::new(source, text);
        if !document.has_text() {
            return Err(DomainError::invalid_input(format!(
                "PDF '{}' has no extractable text",
                source
            )));
        }

        let chunks = self.chunker.split(document.text())?;
        if chunks.is_empty() {
            return Err(DomainError::invalid_input(format!(
                "PDF '{}' produced no chunks",
                source
            )));
        }
        debug!(
            "Split {} characters into {} chunks",
            document.char_count(),
            chunks.len()
        );

        debug!(
            "Embedding {} chunks with {}",
            chunks.len(),
            self.embedding_service.config().model_name()
        );
        let vectors = self.embedding_service.embed_chunks(&chunks).await?;
        if vectors.len() != chunks.len() {
            return Err(DomainError::embedding(format!(
                "Expected {} vectors, got {}",
                chunks.len(),
                vectors.len()
            )));
        }

        let points = self.build_points(document.name(), &chunks, vectors);
        let batch_count = self.upsert(&name, &points).await?;

        let duration_ms = start_time.elapsed().as_millis() as u64;
        info!(
            "Indexed {} into {}: {} chunks in {} batches ({} ms)",
            source,
            name,
            points.len(),
            batch_count,
            duration_ms
        );

        Ok(IndexReport {
            source: source.to_string(),
            collection: name.to_string(),
            char_count: document.char_count(),
            chunk_count: points.len(),
            batch_count,
            duration_ms,
        })
    }

    /// The collection must exist and its vector size must match the
    /// embedding dimensions.
    async fn check_collection(&self, name: &CollectionName) -> Result<(), DomainError> {
        let info = self.store.collection_info(name).await?.ok_or_else(|| {
            DomainError::not_found(format!(
                "Collection '{}' does not exist; create it first",
                name
            ))
        })?;

        let params = info.vectors().ok_or_else(|| {
            DomainError::invalid_input(format!(
                "Collection '{}' has no single unnamed vector config; points cannot be upserted into it",
                name
            ))
        })?;

        let dimensions = self.embedding_service.config().dimensions();
        if params.size as usize != dimensions {
            return Err(DomainError::invalid_input(format!(
                "Collection '{}' expects {}-dimensional vectors but the embedding model produces {}",
                name, params.size, dimensions
            )));
        }

        Ok(())
    }

    fn build_points(&self, source: &str, chunks: &[TextChunk], vectors: Vec<Vec<f32>>) -> Vec<Point> {
        chunks
            .iter()
            .zip(vectors)
            .map(|(chunk, vector)| {
                Point::new(self.options.id_strategy.id_for(chunk.index), vector)
                    .with_payload("content", chunk.content.clone())
                    .with_payload("source", source)
                    .with_payload("chunk_index", chunk.index)
            })
            .collect()
    }

    async fn upsert(&self, name: &CollectionName, points: &[Point]) -> Result<usize, DomainError> {
        let batch_size = self.options.batch_size.max(1);

        let progress_bar = if self.options.show_progress {
            let bar = ProgressBar::new(points.len() as u64);
            bar.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} points {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("#>-"),
            );
            bar
        } else {
            ProgressBar::hidden()
        };
        progress_bar.set_message(name.to_string());

        let mut batch_count = 0;
        for batch in points.chunks(batch_size) {
            if let Err(e) = self.store.upsert_points(name, batch, true).await {
                progress_bar.abandon();
                return Err(e);
            }
            batch_count += 1;
            progress_bar.inc(batch.len() as u64);
            debug!("Upserted batch {} ({} points)", batch_count, batch.len());
        }

        progress_bar.finish_and_clear();
        Ok(batch_count)
    }
}
