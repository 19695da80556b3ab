use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct DashboardEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> DashboardEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Load → recompute every view → write. Returns the written paths.
    pub async fn run(&self) -> Result<Vec<String>> {
        tracing::info!("Starting dashboard build...");

        // Extract
        tracing::info!("Loading dataset...");
        let dataset = self.pipeline.extract().await?;
        tracing::info!(
            "Loaded {} constituencies in {} regions",
            dataset.len(),
            dataset.regions().len()
        );

        // Transform
        tracing::info!("Computing region views...");
        let report = self.pipeline.transform(dataset).await?;
        let failed = report.views.iter().filter(|v| !v.is_ok()).count();
        if failed > 0 {
            tracing::warn!("⚠️ {} of {} views could not be computed", failed, report.views.len());
        } else {
            tracing::info!("Computed {} views", report.views.len());
        }

        // Load
        tracing::info!("Writing dashboard...");
        let written = self.pipeline.load(report).await?;
        for path in &written {
            tracing::info!("Output saved to: {}", path);
        }

        Ok(written)
    }
}
