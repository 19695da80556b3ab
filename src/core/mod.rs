pub mod aggregate;
pub mod charts;
pub mod colors;
pub mod dataset;
pub mod engine;
pub mod format;
pub mod pipeline;
pub mod views;

pub use crate::domain::model::{ConstituencyResult, RegionFilter, RegionSummary};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
