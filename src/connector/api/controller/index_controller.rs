use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::{IndexReport, PointIdStrategy};

use super::super::Container;

pub struct IndexController<'a> {
    container: &'a Container,
}

impl<'a> IndexController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn index(
        &self,
        collection: String,
        pdf: PathBuf,
        id_strategy: PointIdStrategy,
    ) -> Result<String> {
        let use_case = self.container.index_use_case(id_strategy);
        let report = use_case
            .execute(&collection, &pdf)
            .await
            .with_context(|| format!("Failed to process and index '{}'", pdf.display()))?;

        Ok(self.format_index_success(&report, id_strategy))
    }

    fn format_index_success(&self, report: &IndexReport, id_strategy: PointIdStrategy) -> String {
        format!(
            "PDF '{}' indexed into collection '{}'\n{} characters, {} chunks, {} batches, {} ids ({} ms)",
            report.source,
            report.collection,
            report.char_count,
            report.chunk_count,
            report.batch_count,
            id_strategy.as_str(),
            report.duration_ms
        )
    }
}
