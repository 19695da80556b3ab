pub use crate::app::pipelines::dashboard_pipeline::DashboardPipeline;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pipelines::dashboard_pipeline::{HTML_FILENAME, JSON_FILENAME};
    use crate::config::DashboardSettings;
    use crate::domain::model::RegionFilter;
    use crate::domain::ports::{Pipeline, Storage};
    use crate::utils::error::{DashboardError, Result};
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        async fn put_file(&self, path: &str, data: &str) {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.as_bytes().to_vec());
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                DashboardError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    const SAMPLE: &str = "\
Constituency,Region,Winning Party,Result,Majority,Votes Cast,Electorate
Aldershot,South East,Labour,Lab gain from Con,5683,45395,78553
Arundel and South Downs,South East,Conservative,Con hold,11999,53337,76939
Ashfield,East Midlands,Reform UK,Reform gain from Con,5509,42297,78582
Bassetlaw,East Midlands,Labour,Lab gain from Con,5768,46221,79868
";

    fn settings() -> DashboardSettings {
        DashboardSettings {
            data_path: "data/cleaned_data.csv".to_string(),
            output_path: "out".to_string(),
            ..DashboardSettings::default()
        }
    }

    #[tokio::test]
    async fn test_extract_parses_dataset() {
        let storage = MockStorage::new();
        storage.put_file("data/cleaned_data.csv", SAMPLE).await;
        let pipeline = DashboardPipeline::new(storage, settings());

        let dataset = pipeline.extract().await.unwrap();

        assert_eq!(dataset.len(), 4);
        assert_eq!(dataset.regions(), ["South East", "East Midlands"]);
    }

    #[tokio::test]
    async fn test_extract_missing_file_fails() {
        let pipeline = DashboardPipeline::new(MockStorage::new(), settings());

        let err = pipeline.extract().await.unwrap_err();
        assert!(matches!(err, DashboardError::IoError(_)));
    }

    #[tokio::test]
    async fn test_transform_builds_every_view() {
        let storage = MockStorage::new();
        storage.put_file("data/cleaned_data.csv", SAMPLE).await;
        let pipeline = DashboardPipeline::new(storage, settings());

        let dataset = pipeline.extract().await.unwrap();
        let report = pipeline.transform(dataset).await.unwrap();

        assert_eq!(report.title, "2024 Regional UK General Election Results");
        assert_eq!(report.views.len(), 3);
        let midlands = report
            .view(&RegionFilter::Region("East Midlands".to_string()))
            .unwrap();
        let cards = midlands.cards.as_ref().unwrap();
        assert_eq!(cards.seat_change, "2 (100%)");
        assert_eq!(cards.total_votes, "88,518");
    }

    #[tokio::test]
    async fn test_load_writes_requested_formats() {
        let storage = MockStorage::new();
        storage.put_file("data/cleaned_data.csv", SAMPLE).await;
        let pipeline = DashboardPipeline::new(storage.clone(), settings());

        let dataset = pipeline.extract().await.unwrap();
        let report = pipeline.transform(dataset).await.unwrap();
        let written = pipeline.load(report).await.unwrap();

        let html_path = format!("out/{}", HTML_FILENAME);
        let json_path = format!("out/{}", JSON_FILENAME);
        assert_eq!(written, vec![html_path.clone(), json_path.clone()]);

        let html = String::from_utf8(storage.get_file(&html_path).await.unwrap()).unwrap();
        assert!(html.contains("<option value=\"East Midlands\">East Midlands</option>"));

        let json: serde_json::Value =
            serde_json::from_slice(&storage.get_file(&json_path).await.unwrap()).unwrap();
        assert_eq!(json["views"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_load_json_only() {
        let storage = MockStorage::new();
        storage.put_file("data/cleaned_data.csv", SAMPLE).await;
        let config = DashboardSettings {
            output_formats: vec!["json".to_string()],
            ..settings()
        };
        let pipeline = DashboardPipeline::new(storage.clone(), config);

        let dataset = pipeline.extract().await.unwrap();
        let report = pipeline.transform(dataset).await.unwrap();
        let written = pipeline.load(report).await.unwrap();

        assert_eq!(written, vec![format!("out/{}", JSON_FILENAME)]);
        assert!(storage
            .get_file(&format!("out/{}", HTML_FILENAME))
            .await
            .is_none());
    }
}
