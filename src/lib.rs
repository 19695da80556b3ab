pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod render;
pub mod utils;

pub use config::cli::LocalStorage;
#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::DashboardSettings;

pub use crate::core::aggregate::aggregate;
pub use crate::core::dataset::Dataset;
pub use crate::core::{engine::DashboardEngine, pipeline::DashboardPipeline};
pub use domain::model::{RegionFilter, RegionSummary};
pub use utils::error::{DashboardError, Result};
