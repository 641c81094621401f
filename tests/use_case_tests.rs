//! Use cases against the in-memory store.

use std::sync::Arc;

use async_trait::async_trait;
use qdrant_admin::{
    ChunkingConfig, CollectionInfo, CollectionName, CreateCollectionUseCase,
    DeleteCollectionUseCase, Distance, DomainError, InMemoryVectorStore, IndexOptions,
    IndexPdfUseCase, ListCollectionsUseCase, PdfTextExtractor, PlaceholderEmbedding, Point,
    PointId, PointIdStrategy, RecursiveTextChunker, ServerInfo, TestConnectionUseCase,
    TextExtractor, VectorParams, VectorStoreAdmin,
};
use tempfile::tempdir;

/// Returns the same text for any input bytes.
struct FixedTextExtractor(String);

#[async_trait]
impl TextExtractor for FixedTextExtractor {
    async fn extract_text(&self, _bytes: Vec<u8>) -> Result<String, DomainError> {
        Ok(self.0.clone())
    }
}

/// Reports every collection as having named vectors only and refuses writes.
struct NamedVectorsStore(InMemoryVectorStore);

#[async_trait]
impl VectorStoreAdmin for NamedVectorsStore {
    async fn server_info(&self) -> Result<ServerInfo, DomainError> {
        self.0.server_info().await
    }

    async fn list_collections(&self) -> Result<Vec<CollectionName>, DomainError> {
        self.0.list_collections().await
    }

    async fn collection_info(
        &self,
        name: &CollectionName,
    ) -> Result<Option<CollectionInfo>, DomainError> {
        Ok(self.0.collection_info(name).await?.map(|info| {
            CollectionInfo::new(info.name().clone(), info.status(), info.points_count(), None)
        }))
    }

    async fn create_collection(
        &self,
        name: &CollectionName,
        params: VectorParams,
    ) -> Result<(), DomainError> {
        self.0.create_collection(name, params).await
    }

    async fn delete_collection(&self, name: &CollectionName) -> Result<bool, DomainError> {
        self.0.delete_collection(name).await
    }

    async fn upsert_points(
        &self,
        _name: &CollectionName,
        points: &[Point],
        _wait: bool,
    ) -> Result<(), DomainError> {
        Err(DomainError::vector_store(format!(
            "unexpected upsert of {} points",
            points.len()
        )))
    }
}

fn long_text() -> String {
    (0..40)
        .map(|i| format!("Section {} explains how points are stored in a collection.", i))
        .collect::<Vec<_>>()
        .join("\n\n")
}

struct TestEnv {
    store: Arc<InMemoryVectorStore>,
}

impl TestEnv {
    async fn with_collection(size: u64) -> Self {
        let store = Arc::new(InMemoryVectorStore::new());
        CreateCollectionUseCase::new(store.clone())
            .execute("docs", VectorParams::new(size, Distance::Cosine))
            .await
            .expect("create collection");
        Self { store }
    }

    fn index_use_case(&self, text: &str, dims: usize, options: IndexOptions) -> IndexPdfUseCase {
        IndexPdfUseCase::new(
            self.store.clone(),
            Arc::new(FixedTextExtractor(text.to_string())),
            Arc::new(RecursiveTextChunker::new(ChunkingConfig::new(300, 50)).unwrap()),
            Arc::new(PlaceholderEmbedding::new(dims)),
        )
        .with_options(options)
    }
}

fn docs() -> CollectionName {
    CollectionName::parse("docs").unwrap()
}

#[tokio::test]
async fn create_twice_replaces_and_clears_points() {
    let env = TestEnv::with_collection(8).await;
    env.index_use_case(&long_text(), 8, IndexOptions::default())
        .index_bytes("docs", "a.pdf", b"%PDF".to_vec())
        .await
        .expect("index");

    let created = CreateCollectionUseCase::new(env.store.clone())
        .execute("docs", VectorParams::new(8, Distance::Cosine))
        .await
        .expect("recreate");

    assert!(created.replaced);
    assert!(env.store.points(&docs()).await.is_empty());
}

#[tokio::test]
async fn create_rejects_blank_name_and_zero_size() {
    let store = Arc::new(InMemoryVectorStore::new());
    let use_case = CreateCollectionUseCase::new(store);

    let err = use_case.execute("  ", VectorParams::default()).await.unwrap_err();
    assert!(err.is_invalid_input());

    let err = use_case
        .execute("docs", VectorParams::new(0, Distance::Cosine))
        .await
        .unwrap_err();
    assert!(err.is_invalid_input());
}

#[tokio::test]
async fn delete_reports_whether_collection_existed() {
    let env = TestEnv::with_collection(8).await;
    let use_case = DeleteCollectionUseCase::new(env.store.clone());

    assert!(use_case.execute("docs").await.unwrap());
    assert!(!use_case.execute("docs").await.unwrap());
}

#[tokio::test]
async fn list_is_sorted_and_info_reports_points() {
    let env = TestEnv::with_collection(8).await;
    CreateCollectionUseCase::new(env.store.clone())
        .execute("archive", VectorParams::new(8, Distance::Dot))
        .await
        .unwrap();

    let use_case = ListCollectionsUseCase::new(env.store.clone());
    let names = use_case.execute().await.unwrap();
    let names: Vec<&str> = names.iter().map(|n| n.as_str()).collect();
    assert_eq!(names, vec!["archive", "docs"]);

    let info = use_case.get("archive").await.unwrap();
    assert_eq!(info.points_count(), 0);
    assert_eq!(info.vectors(), Some(VectorParams::new(8, Distance::Dot)));

    assert!(use_case.get("ghost").await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn index_upserts_one_point_per_chunk() {
    let env = TestEnv::with_collection(8).await;
    let report = env
        .index_use_case(&long_text(), 8, IndexOptions::default())
        .index_bytes("docs", "manual.pdf", b"%PDF".to_vec())
        .await
        .expect("index");

    assert!(report.chunk_count > 1);
    assert_eq!(report.source, "manual.pdf");
    assert_eq!(report.collection, "docs");

    let points = env.store.points(&docs()).await;
    assert_eq!(points.len(), report.chunk_count);

    let first = points
        .iter()
        .find(|p| p.id == PointId::Num(0))
        .expect("point 0");
    assert!(first.content().unwrap().starts_with("Section 0"));
    assert_eq!(first.payload["source"], "manual.pdf");
    assert_eq!(first.payload["chunk_index"], 0);
    assert_eq!(first.vector, vec![0.1; 8]);
}

#[tokio::test]
async fn index_into_missing_collection_is_not_found() {
    let store = Arc::new(InMemoryVectorStore::new());
    let use_case = IndexPdfUseCase::new(
        store,
        Arc::new(FixedTextExtractor(long_text())),
        Arc::new(RecursiveTextChunker::new(ChunkingConfig::default()).unwrap()),
        Arc::new(PlaceholderEmbedding::new(8)),
    );

    let err = use_case
        .index_bytes("docs", "a.pdf", b"%PDF".to_vec())
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn index_rejects_dimension_mismatch_before_upsert() {
    let env = TestEnv::with_collection(16).await;
    let err = env
        .index_use_case(&long_text(), 8, IndexOptions::default())
        .index_bytes("docs", "a.pdf", b"%PDF".to_vec())
        .await
        .unwrap_err();

    assert!(err.is_invalid_input());
    assert!(env.store.points(&docs()).await.is_empty());
}

#[tokio::test]
async fn index_rejects_collection_without_single_vector_config() {
    let store = Arc::new(NamedVectorsStore(InMemoryVectorStore::new()));
    store
        .create_collection(&docs(), VectorParams::new(8, Distance::Cosine))
        .await
        .unwrap();

    let use_case = IndexPdfUseCase::new(
        store,
        Arc::new(FixedTextExtractor(long_text())),
        Arc::new(RecursiveTextChunker::new(ChunkingConfig::default()).unwrap()),
        Arc::new(PlaceholderEmbedding::new(8)),
    );

    let err = use_case
        .index_bytes("docs", "a.pdf", b"%PDF".to_vec())
        .await
        .unwrap_err();
    assert!(err.is_invalid_input(), "got: {}", err);
    assert!(err.to_string().contains("no single unnamed vector config"));
}

#[tokio::test]
async fn index_rejects_pdf_without_text() {
    let env = TestEnv::with_collection(8).await;
    let err = env
        .index_use_case("  \n \n", 8, IndexOptions::default())
        .index_bytes("docs", "scan.pdf", b"%PDF".to_vec())
        .await
        .unwrap_err();

    assert!(err.is_invalid_input());
}

#[tokio::test]
async fn index_batches_upserts() {
    let env = TestEnv::with_collection(8).await;
    let options = IndexOptions {
        batch_size: 2,
        ..IndexOptions::default()
    };
    let report = env
        .index_use_case(&long_text(), 8, options)
        .index_bytes("docs", "a.pdf", b"%PDF".to_vec())
        .await
        .unwrap();

    assert_eq!(report.batch_count, report.chunk_count.div_ceil(2));
}

#[tokio::test]
async fn sequential_ids_overwrite_and_uuid_ids_append() {
    let env = TestEnv::with_collection(8).await;
    let text = long_text();

    let sequential = env.index_use_case(&text, 8, IndexOptions::default());
    let first = sequential
        .index_bytes("docs", "a.pdf", b"%PDF".to_vec())
        .await
        .unwrap();
    sequential
        .index_bytes("docs", "a.pdf", b"%PDF".to_vec())
        .await
        .unwrap();
    assert_eq!(env.store.points(&docs()).await.len(), first.chunk_count);

    let uuid = env.index_use_case(
        &text,
        8,
        IndexOptions {
            id_strategy: PointIdStrategy::Uuid,
            ..IndexOptions::default()
        },
    );
    uuid.index_bytes("docs", "a.pdf", b"%PDF".to_vec())
        .await
        .unwrap();
    assert_eq!(env.store.points(&docs()).await.len(), first.chunk_count * 2);
}

#[tokio::test]
async fn execute_reads_pdf_from_disk() {
    let env = TestEnv::with_collection(8).await;
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("Report.PDF");
    std::fs::write(&path, b"%PDF-1.4 fake").unwrap();

    let report = env
        .index_use_case("Short page of text.", 8, IndexOptions::default())
        .execute("docs", &path)
        .await
        .expect("index from disk");

    assert_eq!(report.source, "Report.PDF");
    assert_eq!(report.chunk_count, 1);
}

#[tokio::test]
async fn execute_indexes_real_pdf_pages() {
    let env = TestEnv::with_collection(8).await;
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("two_pages.pdf");
    std::fs::copy(
        concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/two_pages.pdf"),
        &path,
    )
    .unwrap();

    let use_case = IndexPdfUseCase::new(
        env.store.clone(),
        Arc::new(PdfTextExtractor::new()),
        Arc::new(RecursiveTextChunker::new(ChunkingConfig::default()).unwrap()),
        Arc::new(PlaceholderEmbedding::new(8)),
    );
    let report = use_case.execute("docs", &path).await.expect("index pdf");
    assert_eq!(report.source, "two_pages.pdf");

    let points = env.store.points(&docs()).await;
    let content: String = points.iter().filter_map(|p| p.content()).collect();
    let first = content.find("First").expect("page 1 text");
    let second = content.find("Second").expect("page 2 text");
    assert!(first < second);
}

#[tokio::test]
async fn execute_rejects_non_pdf_and_missing_files() {
    let env = TestEnv::with_collection(8).await;
    let use_case = env.index_use_case("text", 8, IndexOptions::default());
    let dir = tempdir().expect("tempdir");

    let txt = dir.path().join("notes.txt");
    std::fs::write(&txt, b"hello").unwrap();
    assert!(use_case.execute("docs", &txt).await.unwrap_err().is_invalid_input());

    let missing = dir.path().join("missing.pdf");
    assert!(use_case
        .execute("docs", &missing)
        .await
        .unwrap_err()
        .is_invalid_input());
}

#[tokio::test]
async fn in_memory_store_always_connects() {
    let store = Arc::new(InMemoryVectorStore::new());
    let status = TestConnectionUseCase::new(store.clone()).execute().await;
    assert!(status.is_connected());
    assert!(store.list_collections().await.unwrap().is_empty());
}
