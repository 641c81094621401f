use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use crate::application::VectorStoreAdmin;
use crate::domain::{
    CollectionInfo, CollectionName, CollectionStatus, DomainError, Point, PointId, ServerInfo,
    VectorParams,
};

struct StoredCollection {
    params: VectorParams,
    points: HashMap<PointId, Point>,
}

/// Process-local stand-in for Qdrant. Nothing survives the process.
pub struct InMemoryVectorStore {
    collections: Arc<Mutex<HashMap<CollectionName, StoredCollection>>>,
}

impl InMemoryVectorStore {
    pub fn new() -> Self {
        Self {
            collections: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Stored points of a collection ordered by id, for inspection.
    pub async fn points(&self, name: &CollectionName) -> Vec<Point> {
        let collections = self.collections.lock().await;
        let mut points: Vec<Point> = collections
            .get(name)
            .map(|c| c.points.values().cloned().collect())
            .unwrap_or_default();
        points.sort_by_key(|p| p.id.to_string());
        points
    }
}

impl Default for InMemoryVectorStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VectorStoreAdmin for InMemoryVectorStore {
    async fn server_info(&self) -> Result<ServerInfo, DomainError> {
        Ok(ServerInfo::new("in-memory vector store", env!("CARGO_PKG_VERSION")))
    }

    async fn list_collections(&self) -> Result<Vec<CollectionName>, DomainError> {
        let collections = self.collections.lock().await;
        Ok(collections.keys().cloned().collect())
    }

    async fn collection_info(
        &self,
        name: &CollectionName,
    ) -> Result<Option<CollectionInfo>, DomainError> {
        let collections = self.collections.lock().await;
        Ok(collections.get(name).map(|c| {
            CollectionInfo::new(
                name.clone(),
                CollectionStatus::Green,
                c.points.len() as u64,
                Some(c.params),
            )
        }))
    }

    async fn create_collection(
        &self,
        name: &CollectionName,
        params: VectorParams,
    ) -> Result<(), DomainError> {
        let mut collections = self.collections.lock().await;
        if collections.contains_key(name) {
            return Err(DomainError::vector_store(format!(
                "Collection '{}' already exists",
                name
            )));
        }

        collections.insert(
            name.clone(),
            StoredCollection {
                params,
                points: HashMap::new(),
            },
        );
        debug!("Created in-memory collection {}", name);
        Ok(())
    }

    async fn delete_collection(&self, name: &CollectionName) -> Result<bool, DomainError> {
        let mut collections = self.collections.lock().await;
        Ok(collections.remove(name).is_some())
    }

    async fn upsert_points(
        &self,
        name: &CollectionName,
        points: &[Point],
        _wait: bool,
    ) -> Result<(), DomainError> {
        let mut collections = self.collections.lock().await;
        let collection = collections.get_mut(name).ok_or_else(|| {
            DomainError::not_found(format!("Collection '{}' does not exist", name))
        })?;

        let expected = collection.params.size as usize;
        if let Some(bad) = points.iter().find(|p| p.vector.len() != expected) {
            return Err(DomainError::vector_store(format!(
                "Point {} has {} dimensions, collection '{}' expects {}",
                bad.id,
                bad.vector.len(),
                name,
                expected
            )));
        }

        for point in points {
            collection.points.insert(point.id.clone(), point.clone());
        }

        debug!("Saved {} points to in-memory collection {}", points.len(), name);
        Ok(())
    }
}
