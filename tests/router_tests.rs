use std::sync::Arc;

use async_trait::async_trait;
use qdrant_admin::cli::IdStrategyArg;
use qdrant_admin::connector::api::{Container, ContainerConfig, Router};
use qdrant_admin::{Commands, DomainError, TextExtractor, VectorParams};
use tempfile::tempdir;

struct FixedTextExtractor(&'static str);

#[async_trait]
impl TextExtractor for FixedTextExtractor {
    async fn extract_text(&self, _bytes: Vec<u8>) -> Result<String, DomainError> {
        Ok(self.0.to_string())
    }
}

fn memory_container() -> Container {
    let config = ContainerConfig {
        memory_storage: true,
        vector_params: VectorParams::new(4, qdrant_admin::Distance::Cosine),
        ..ContainerConfig::default()
    };
    Container::new(config)
        .expect("container")
        .with_extractor(Arc::new(FixedTextExtractor("Uma página de texto.")))
}

#[tokio::test]
async fn full_session_against_memory_store() {
    let container = memory_container();
    let router = Router::new(&container);

    let output = router.route(Commands::Check).await.unwrap();
    assert!(output.starts_with("Connected to in-memory store"));

    let output = router
        .route(Commands::Create {
            name: "docs".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(
        output,
        "Collection 'docs' created successfully (size 4, distance Cosine)"
    );

    let dir = tempdir().unwrap();
    let pdf = dir.path().join("intro.pdf");
    std::fs::write(&pdf, b"%PDF-1.7").unwrap();

    let output = router
        .route(Commands::Index {
            collection: "docs".to_string(),
            pdf,
            ids: IdStrategyArg::Sequential,
        })
        .await
        .unwrap();
    assert!(output.starts_with("PDF 'intro.pdf' indexed into collection 'docs'"));

    let output = router
        .route(Commands::Info {
            name: "docs".to_string(),
        })
        .await
        .unwrap();
    assert!(output.contains("Points:  1"), "got: {}", output);

    let output = router.route(Commands::List).await.unwrap();
    assert_eq!(output, "Collections (1):\n  docs");

    let output = router
        .route(Commands::Delete {
            name: "docs".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(output, "Collection 'docs' deleted successfully");

    let output = router.route(Commands::List).await.unwrap();
    assert_eq!(output, "No collections.");
}

#[tokio::test]
async fn recreate_mentions_replacement() {
    let container = memory_container();
    let router = Router::new(&container);
    let create = || Commands::Create {
        name: "docs".to_string(),
    };

    router.route(create()).await.unwrap();
    let output = router.route(create()).await.unwrap();
    assert!(output.contains("was replaced"));
}

#[tokio::test]
async fn errors_carry_operation_context() {
    let container = memory_container();
    let router = Router::new(&container);

    let err = router
        .route(Commands::Create {
            name: "   ".to_string(),
        })
        .await
        .unwrap_err();
    let rendered = format!("{:#}", err);
    assert!(rendered.starts_with("Failed to create collection"));
    assert!(rendered.contains("must not be empty"));

    let err = router
        .route(Commands::Index {
            collection: "ghost".to_string(),
            pdf: "missing.pdf".into(),
            ids: IdStrategyArg::Sequential,
        })
        .await
        .unwrap_err();
    assert!(format!("{:#}", err).starts_with("Failed to process and index 'missing.pdf'"));
}

#[tokio::test]
async fn delete_missing_collection_is_not_an_error() {
    let container = memory_container();
    let router = Router::new(&container);

    let output = router
        .route(Commands::Delete {
            name: "ghost".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(output, "Collection 'ghost' was not present; nothing deleted");
}

#[tokio::test]
async fn shell_is_not_routed() {
    let container = memory_container();
    let router = Router::new(&container);
    assert!(router.route(Commands::Shell).await.is_err());
}
