use crate::domain::view::{DashboardReport, RegionView};
use crate::utils::error::Result;

pub fn render_json(report: &DashboardReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub fn render_view_json(view: &RegionView) -> Result<String> {
    Ok(serde_json::to_string_pretty(view)?)
}
