use crate::utils::error::{DashboardError, Result};
use crate::utils::validation::{
    validate_file_extensions, validate_hex_color, validate_non_empty_string,
    validate_output_formats, validate_path, Validate,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// 所有區段皆為選填，未設定的值由命令列參數或內建預設補上
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub dashboard: Option<DashboardSection>,
    pub dataset: Option<DatasetSection>,
    pub output: Option<OutputSection>,
    pub colors: Option<ColorsSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSection {
    pub title: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSection {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSection {
    pub path: Option<String>,
    pub formats: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ColorsSection {
    pub default: Option<String>,
    #[serde(default)]
    pub party: HashMap<String, String>,
    #[serde(default)]
    pub result: HashMap<String, String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DashboardError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DashboardError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DATA_DIR})，未定義的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DashboardError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn title(&self) -> Option<&str> {
        self.dashboard.as_ref().and_then(|d| d.title.as_deref())
    }

    pub fn dataset_path(&self) -> Option<&str> {
        self.dataset.as_ref().map(|d| d.path.as_str())
    }

    pub fn output_path(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.path.as_deref())
    }

    pub fn output_formats(&self) -> Option<&[String]> {
        self.output.as_ref().and_then(|o| o.formats.as_deref())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(title) = self.title() {
            validate_non_empty_string("dashboard.title", title)?;
        }

        if let Some(path) = self.dataset_path() {
            validate_path("dataset.path", path)?;
            validate_file_extensions("dataset.path", &[path.to_string()], &["csv"])?;
        }

        if let Some(path) = self.output_path() {
            validate_path("output.path", path)?;
        }

        if let Some(formats) = self.output_formats() {
            validate_output_formats("output.formats", formats)?;
        }

        if let Some(colors) = &self.colors {
            if let Some(default) = &colors.default {
                validate_hex_color("colors.default", default)?;
            }
            for (party, color) in &colors.party {
                validate_hex_color(&format!("colors.party.{}", party), color)?;
            }
            for (result, color) in &colors.result {
                validate_hex_color(&format!("colors.result.{}", result), color)?;
            }
        }

        Ok(())
    }
}
