use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use crate::application::{EmbeddingService, TextChunker, TextExtractor, VectorStoreAdmin};
use crate::domain::{ChunkingConfig, PointIdStrategy, VectorParams};
use crate::{
    CreateCollectionUseCase, DeleteCollectionUseCase, InMemoryVectorStore, IndexOptions,
    IndexPdfUseCase, ListCollectionsUseCase, PdfTextExtractor, PlaceholderEmbedding,
    QdrantConfig, QdrantRestClient, RecursiveTextChunker, TestConnectionUseCase,
};

pub struct ContainerConfig {
    pub qdrant: QdrantConfig,
    /// Use a process-local store instead of a Qdrant server.
    pub memory_storage: bool,
    /// Vector params for new collections; the size is also the placeholder
    /// embedding dimension.
    pub vector_params: VectorParams,
    pub chunking: ChunkingConfig,
    pub batch_size: usize,
    pub show_progress: bool,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            qdrant: QdrantConfig::default(),
            memory_storage: false,
            vector_params: VectorParams::default(),
            chunking: ChunkingConfig::default(),
            batch_size: crate::DEFAULT_UPSERT_BATCH_SIZE,
            show_progress: false,
        }
    }
}

pub struct Container {
    store: Arc<dyn VectorStoreAdmin>,
    extractor: Arc<dyn TextExtractor>,
    chunker: Arc<dyn TextChunker>,
    embedding_service: Arc<dyn EmbeddingService>,
    target: String,
    config: ContainerConfig,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Result<Self> {
        let (store, target): (Arc<dyn VectorStoreAdmin>, String) = if config.memory_storage {
            debug!("Using in-memory vector store");
            (Arc::new(InMemoryVectorStore::new()), "in-memory store".to_string())
        } else {
            let client = QdrantRestClient::new(&config.qdrant)?;
            let target = client.base_url().as_str().trim_end_matches('/').to_string();
            debug!("Using Qdrant at {}", target);
            (Arc::new(client), target)
        };

        let chunker = Arc::new(RecursiveTextChunker::new(config.chunking)?);
        let embedding_service =
            Arc::new(PlaceholderEmbedding::new(config.vector_params.size as usize));

        Ok(Self {
            store,
            extractor: Arc::new(PdfTextExtractor::new()),
            chunker,
            embedding_service,
            target,
            config,
        })
    }

    /// Replace the PDF reader, e.g. with a fake in tests.
    pub fn with_extractor(mut self, extractor: Arc<dyn TextExtractor>) -> Self {
        self.extractor = extractor;
        self
    }

    pub fn test_connection_use_case(&self) -> TestConnectionUseCase {
        TestConnectionUseCase::new(self.store.clone())
    }

    pub fn create_collection_use_case(&self) -> CreateCollectionUseCase {
        CreateCollectionUseCase::new(self.store.clone())
    }

    pub fn delete_collection_use_case(&self) -> DeleteCollectionUseCase {
        DeleteCollectionUseCase::new(self.store.clone())
    }

    pub fn list_collections_use_case(&self) -> ListCollectionsUseCase {
        ListCollectionsUseCase::new(self.store.clone())
    }

    pub fn index_use_case(&self, id_strategy: PointIdStrategy) -> IndexPdfUseCase {
        IndexPdfUseCase::new(
            self.store.clone(),
            self.extractor.clone(),
            self.chunker.clone(),
            self.embedding_service.clone(),
        )
        .with_options(IndexOptions {
            id_strategy,
            batch_size: self.config.batch_size,
            show_progress: self.config.show_progress,
        })
    }

    pub fn vector_params(&self) -> VectorParams {
        self.config.vector_params
    }

    /// Human readable description of the store in use.
    pub fn target(&self) -> &str {
        &self.target
    }
}
