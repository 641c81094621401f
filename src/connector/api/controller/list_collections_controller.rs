use anyhow::{Context, Result};

use crate::CollectionInfo;

use super::super::Container;

pub struct ListCollectionsController<'a> {
    container: &'a Container,
}

impl<'a> ListCollectionsController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn list(&self) -> Result<String> {
        let use_case = self.container.list_collections_use_case();
        let names = use_case.execute().await.context("Failed to list collections")?;

        if names.is_empty() {
            return Ok("No collections.".to_string());
        }

        let mut output = format!("Collections ({}):", names.len());
        for name in names {
            output.push_str(&format!("\n  {}", name));
        }
        Ok(output)
    }

    pub async fn info(&self, name: String) -> Result<String> {
        let use_case = self.container.list_collections_use_case();
        let info = use_case
            .get(&name)
            .await
            .with_context(|| format!("Failed to read collection '{}'", name.trim()))?;

        Ok(self.format_info(&info))
    }

    fn format_info(&self, info: &CollectionInfo) -> String {
        let vectors = match info.vectors() {
            Some(params) => format!("{} ({})", params.size, params.distance),
            None => "named vectors".to_string(),
        };

        format!(
            "Collection: {}\n  Status:  {}\n  Points:  {}\n  Vectors: {}",
            info.name(),
            info.status().as_str(),
            info.points_count(),
            vectors
        )
    }
}
