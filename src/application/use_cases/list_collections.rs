use std::sync::Arc;

use crate::application::VectorStoreAdmin;
use crate::domain::{CollectionInfo, CollectionName, DomainError};

pub struct ListCollectionsUseCase {
    store: Arc<dyn VectorStoreAdmin>,
}

impl ListCollectionsUseCase {
    pub fn new(store: Arc<dyn VectorStoreAdmin>) -> Self {
        Self { store }
    }

    /// Collection names in lexical order.
    pub async fn execute(&self) -> Result<Vec<CollectionName>, DomainError> {
        let mut names = self.store.list_collections().await?;
        names.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        Ok(names)
    }

    pub async fn get(&self, name: &str) -> Result<CollectionInfo, DomainError> {
        let name = CollectionName::parse(name)?;
        self.store
            .collection_info(&name)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Collection '{}' does not exist", name)))
    }
}
