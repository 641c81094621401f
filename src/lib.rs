pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{
    CollectionCreated, CreateCollectionUseCase, DeleteCollectionUseCase, EmbeddingService,
    IndexOptions, IndexPdfUseCase, ListCollectionsUseCase, TestConnectionUseCase, TextChunker,
    TextExtractor, VectorStoreAdmin, DEFAULT_UPSERT_BATCH_SIZE,
};

pub use cli::Commands;

pub use connector::{
    resolve_base_url, InMemoryVectorStore, PdfTextExtractor, PlaceholderEmbedding, QdrantConfig,
    QdrantRestClient, RecursiveTextChunker, DEFAULT_QDRANT_PORT, DEFAULT_QDRANT_URL,
    DEFAULT_TIMEOUT_SECS,
};

pub use domain::{
    ChunkingConfig, CollectionInfo, CollectionName, CollectionStatus, ConnectionStatus, Distance,
    DomainError, EmbeddingConfig, IndexReport, PdfDocument, Point, PointId, PointIdStrategy,
    ServerInfo, TextChunk, VectorParams, DEFAULT_VECTOR_SIZE,
};
