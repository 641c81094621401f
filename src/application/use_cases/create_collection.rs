use std::sync::Arc;

use tracing::info;

use crate::application::VectorStoreAdmin;
use crate::domain::{CollectionName, DomainError, VectorParams};

/// What `CreateCollectionUseCase` did.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionCreated {
    pub name: CollectionName,
    pub params: VectorParams,
    /// An existing collection of the same name was dropped first.
    pub replaced: bool,
}

/// Creates a collection, dropping any existing one with the same name.
pub struct CreateCollectionUseCase {
    store: Arc<dyn VectorStoreAdmin>,
}

impl CreateCollectionUseCase {
    pub fn new(store: Arc<dyn VectorStoreAdmin>) -> Self {
        Self { store }
    }

    pub async fn execute(
        &self,
        name: &str,
        params: VectorParams,
    ) -> Result<CollectionCreated, DomainError> {
        let name = CollectionName::parse(name)?;
        if params.size == 0 {
            return Err(DomainError::invalid_input("Vector size must be greater than zero"));
        }

        let replaced = match self.store.collection_info(&name).await? {
            Some(existing) => {
                info!(
                    "Collection {} already exists with {} points, recreating",
                    name,
                    existing.points_count()
                );
                self.store.delete_collection(&name).await?
            }
            None => false,
        };

        self.store.create_collection(&name, params).await?;

        info!(
            "Created collection {} (size={}, distance={})",
            name, params.size, params.distance
        );

        Ok(CollectionCreated {
            name,
            params,
            replaced,
        })
    }
}
