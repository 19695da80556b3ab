use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Dataset is missing required column '{column}'")]
    MissingColumn { column: String },

    #[error("Malformed record at row {row}: {reason}")]
    MalformedRecord { row: usize, reason: String },

    #[error("Unknown region: '{region}'")]
    UnknownRegion { region: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Render error: {message}")]
    RenderError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Data,
    Configuration,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// 依嚴重程度決定 CLI 的結束碼
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl DashboardError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DashboardError::CsvError(_) | DashboardError::IoError(_) => ErrorCategory::Input,
            DashboardError::MissingColumn { .. }
            | DashboardError::MalformedRecord { .. }
            | DashboardError::UnknownRegion { .. } => ErrorCategory::Data,
            DashboardError::ConfigError { .. }
            | DashboardError::ConfigValidationError { .. }
            | DashboardError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            DashboardError::SerializationError(_) | DashboardError::RenderError { .. } => {
                ErrorCategory::Output
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Surfaced inside the affected panel, never fatal on its own.
            DashboardError::UnknownRegion { .. } => ErrorSeverity::Low,
            DashboardError::RenderError { .. } | DashboardError::SerializationError(_) => {
                ErrorSeverity::Medium
            }
            DashboardError::ConfigError { .. }
            | DashboardError::ConfigValidationError { .. }
            | DashboardError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            DashboardError::CsvError(_)
            | DashboardError::IoError(_)
            | DashboardError::MissingColumn { .. }
            | DashboardError::MalformedRecord { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            DashboardError::CsvError(_) => {
                "Check that the dataset is a valid comma-separated file".to_string()
            }
            DashboardError::IoError(_) => {
                "Check that the dataset path exists and the output directory is writable"
                    .to_string()
            }
            DashboardError::SerializationError(_) | DashboardError::RenderError { .. } => {
                "Re-run with --verbose to see which view failed to render".to_string()
            }
            DashboardError::MissingColumn { column } => format!(
                "Re-run the cleaning step so the CSV contains a '{}' column",
                column
            ),
            DashboardError::MalformedRecord { row, .. } => {
                format!("Fix or remove row {} in the dataset", row)
            }
            DashboardError::UnknownRegion { .. } => {
                "Pick one of the regions listed by the dataset, or 'All'".to_string()
            }
            DashboardError::ConfigError { .. }
            | DashboardError::ConfigValidationError { .. }
            | DashboardError::InvalidConfigValueError { .. } => {
                "Check the configuration file and command line flags".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => format!("Could not read the election dataset: {}", self),
            ErrorCategory::Data => format!("The election dataset is not usable: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::Output => format!("Could not produce the dashboard: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;
