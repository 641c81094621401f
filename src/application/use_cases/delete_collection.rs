use std::sync::Arc;

use tracing::info;

use crate::application::VectorStoreAdmin;
use crate::domain::{CollectionName, DomainError};

pub struct DeleteCollectionUseCase {
    store: Arc<dyn VectorStoreAdmin>,
}

impl DeleteCollectionUseCase {
    pub fn new(store: Arc<dyn VectorStoreAdmin>) -> Self {
        Self { store }
    }

    /// Returns `false` when the collection did not exist.
    pub async fn execute(&self, name: &str) -> Result<bool, DomainError> {
        let name = CollectionName::parse(name)?;

        let deleted = self.store.delete_collection(&name).await?;
        if deleted {
            info!("Deleted collection {}", name);
        } else {
            info!("Collection {} was not present", name);
        }

        Ok(deleted)
    }
}
