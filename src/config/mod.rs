pub mod cli;
pub mod toml_config;

use crate::core::colors::ColorScheme;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_file_extensions, validate_non_empty_string, validate_output_formats, validate_path,
    Validate,
};
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

pub const DEFAULT_DATA_PATH: &str = "data/cleaned_data.csv";
pub const DEFAULT_OUTPUT_PATH: &str = "./output";
pub const DEFAULT_TITLE: &str = "2024 Regional UK General Election Results";

#[cfg(feature = "cli")]
use clap::Parser;

/// Command line flags. Anything left unset falls back to the TOML file given
/// with `--config`, then to the built-in defaults.
#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "uk-election-dashboard")]
#[command(about = "Builds the 2024 UK regional election results dashboard")]
pub struct CliConfig {
    /// Cleaned results CSV
    #[arg(long)]
    pub data: Option<String>,

    /// Directory the dashboard files are written to
    #[arg(long)]
    pub output_path: Option<String>,

    /// Output formats (html, json)
    #[arg(long, value_delimiter = ',')]
    pub formats: Vec<String>,

    /// Optional TOML configuration file
    #[arg(long)]
    pub config: Option<String>,

    /// Page title
    #[arg(long)]
    pub title: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 載入 TOML（若有指定）並與命令列參數合併，命令列優先
    pub fn resolve(&self) -> Result<DashboardSettings> {
        let file_config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                let config = TomlConfig::from_file(path)?;
                config.validate()?;
                config
            }
            None => TomlConfig::default(),
        };

        let mut settings = DashboardSettings::from_toml(&file_config);
        if let Some(data) = &self.data {
            settings.data_path = data.clone();
        }
        if let Some(output_path) = &self.output_path {
            settings.output_path = output_path.clone();
        }
        if !self.formats.is_empty() {
            settings.output_formats = self.formats.clone();
        }
        if let Some(title) = &self.title {
            settings.title = title.clone();
        }

        settings.validate()?;
        Ok(settings)
    }
}

/// Fully resolved settings handed to the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSettings {
    pub data_path: String,
    pub output_path: String,
    pub output_formats: Vec<String>,
    pub title: String,
    pub colors: ColorScheme,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            data_path: DEFAULT_DATA_PATH.to_string(),
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            output_formats: vec!["html".to_string(), "json".to_string()],
            title: DEFAULT_TITLE.to_string(),
            colors: ColorScheme::default(),
        }
    }
}

impl DashboardSettings {
    pub fn from_toml(config: &TomlConfig) -> Self {
        let defaults = Self::default();
        let colors = match &config.colors {
            Some(c) => defaults
                .colors
                .clone()
                .merge(&c.party, &c.result, c.default.as_deref()),
            None => defaults.colors.clone(),
        };

        Self {
            data_path: config
                .dataset_path()
                .map(str::to_string)
                .unwrap_or(defaults.data_path),
            output_path: config
                .output_path()
                .map(str::to_string)
                .unwrap_or(defaults.output_path),
            output_formats: config
                .output_formats()
                .map(<[String]>::to_vec)
                .unwrap_or(defaults.output_formats),
            title: config
                .title()
                .map(str::to_string)
                .unwrap_or(defaults.title),
            colors,
        }
    }

    pub fn wants(&self, format: &str) -> bool {
        self.output_formats.iter().any(|f| f == format)
    }
}

impl Validate for DashboardSettings {
    fn validate(&self) -> Result<()> {
        validate_path("data", &self.data_path)?;
        validate_file_extensions("data", &[self.data_path.clone()], &["csv"])?;
        validate_path("output_path", &self.output_path)?;
        validate_output_formats("formats", &self.output_formats)?;
        validate_non_empty_string("title", &self.title)?;
        Ok(())
    }
}

impl ConfigProvider for DashboardSettings {
    fn data_path(&self) -> &str {
        &self.data_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_formats(&self) -> &[String] {
        &self.output_formats
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn colors(&self) -> &ColorScheme {
        &self.colors
    }
}
