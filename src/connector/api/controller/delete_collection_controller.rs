use anyhow::{Context, Result};

use super::super::Container;

pub struct DeleteCollectionController<'a> {
    container: &'a Container,
}

impl<'a> DeleteCollectionController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn delete(&self, name: String) -> Result<String> {
        let use_case = self.container.delete_collection_use_case();
        let name = name.trim();

        let deleted = use_case
            .execute(name)
            .await
            .with_context(|| format!("Failed to delete collection '{}'", name))?;

        if deleted {
            Ok(format!("Collection '{}' deleted successfully", name))
        } else {
            Ok(format!("Collection '{}' was not present; nothing deleted", name))
        }
    }
}
