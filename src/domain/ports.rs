use crate::core::dataset::Dataset;
use crate::core::colors::ColorScheme;
use crate::domain::view::DashboardReport;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn data_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> &[String];
    fn title(&self) -> &str;
    fn colors(&self) -> &ColorScheme;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Dataset>;
    async fn transform(&self, dataset: Dataset) -> Result<DashboardReport>;
    /// Returns the paths of the written files.
    async fn load(&self, report: DashboardReport) -> Result<Vec<String>>;
}
