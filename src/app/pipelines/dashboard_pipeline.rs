use crate::core::dataset::Dataset;
use crate::core::views::build_report;
use crate::core::{ConfigProvider, Pipeline, Storage};
use crate::domain::view::DashboardReport;
use crate::render::{render_html, render_json};
use crate::utils::error::Result;
use std::path::Path;

pub const HTML_FILENAME: &str = "dashboard.html";
pub const JSON_FILENAME: &str = "dashboard.json";

/// Reads the cleaned CSV, precomputes every region view and writes the
/// dashboard files.
pub struct DashboardPipeline<S: Storage, C: ConfigProvider> {
    pub(crate) storage: S,
    pub(crate) config: C,
}

impl<S: Storage, C: ConfigProvider> DashboardPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn output_file(&self, filename: &str) -> String {
        Path::new(self.config.output_path())
            .join(filename)
            .to_string_lossy()
            .into_owned()
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for DashboardPipeline<S, C> {
    async fn extract(&self) -> Result<Dataset> {
        tracing::debug!("Reading dataset from: {}", self.config.data_path());
        let bytes = self.storage.read_file(self.config.data_path()).await?;
        tracing::debug!("Read {} bytes", bytes.len());

        Dataset::from_csv_bytes(&bytes)
    }

    async fn transform(&self, dataset: Dataset) -> Result<DashboardReport> {
        Ok(build_report(
            &dataset,
            self.config.title(),
            self.config.colors(),
        ))
    }

    async fn load(&self, report: DashboardReport) -> Result<Vec<String>> {
        let mut written = Vec::new();

        for format in self.config.output_formats() {
            let (filename, content) = match format.as_str() {
                "html" => (HTML_FILENAME, render_html(&report)?),
                "json" => (JSON_FILENAME, render_json(&report)?),
                other => {
                    // rejected during config validation
                    tracing::warn!("Skipping unsupported output format: {}", other);
                    continue;
                }
            };

            let path = self.output_file(filename);
            tracing::debug!("Writing {} ({} bytes)", path, content.len());
            self.storage.write_file(&path, content.as_bytes()).await?;
            written.push(path);
        }

        Ok(written)
    }
}
