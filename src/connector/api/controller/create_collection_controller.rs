use anyhow::{Context, Result};

use crate::CollectionCreated;

use super::super::Container;

pub struct CreateCollectionController<'a> {
    container: &'a Container,
}

impl<'a> CreateCollectionController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn create(&self, name: String) -> Result<String> {
        let use_case = self.container.create_collection_use_case();
        let created = use_case
            .execute(&name, self.container.vector_params())
            .await
            .with_context(|| format!("Failed to create collection '{}'", name.trim()))?;

        Ok(self.format_create_success(&created))
    }

    fn format_create_success(&self, created: &CollectionCreated) -> String {
        let mut output = format!(
            "Collection '{}' created successfully (size {}, distance {})",
            created.name, created.params.size, created.params.distance
        );
        if created.replaced {
            output.push_str("\nAn existing collection with this name was replaced.");
        }
        output
    }
}
