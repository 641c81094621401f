use async_trait::async_trait;

use crate::domain::{CollectionInfo, CollectionName, DomainError, Point, ServerInfo, VectorParams};

/// Collection management and point writes against a vector store.
#[async_trait]
pub trait VectorStoreAdmin: Send + Sync {
    /// Cheap request that succeeds whenever the server answers at all.
    async fn server_info(&self) -> Result<ServerInfo, DomainError>;

    async fn list_collections(&self) -> Result<Vec<CollectionName>, DomainError>;

    /// `Ok(None)` when the collection does not exist.
    async fn collection_info(
        &self,
        name: &CollectionName,
    ) -> Result<Option<CollectionInfo>, DomainError>;

    async fn create_collection(
        &self,
        name: &CollectionName,
        params: VectorParams,
    ) -> Result<(), DomainError>;

    /// Returns `false` when there was nothing to delete.
    async fn delete_collection(&self, name: &CollectionName) -> Result<bool, DomainError>;

    /// Insert or overwrite points. With `wait` the call returns only once the
    /// points are applied.
    async fn upsert_points(
        &self,
        name: &CollectionName,
        points: &[Point],
        wait: bool,
    ) -> Result<(), DomainError>;
}
