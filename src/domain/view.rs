use crate::domain::model::{RegionFilter, RegionSummary};
use serde::{Deserialize, Serialize};

/// The four formatted scalar panels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryCards {
    pub seat_change: String,
    pub avg_majority: String,
    pub total_votes: String,
    pub turnout: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonutSlice {
    pub party: String,
    pub seats: usize,
    /// Share of the filtered seats, 0..=1.
    pub share: f64,
    /// Slice label, e.g. "63%".
    pub text: String,
    pub hover: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonutChart {
    /// Inner radius as a fraction of the outer radius.
    pub hole: f64,
    /// e.g. "650 Seats"
    pub center_label: String,
    pub slices: Vec<DonutSlice>,
}

/// Tile rectangle on a unit canvas (0..=1 on both axes).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const UNIT: Rect = Rect {
        x: 0.0,
        y: 0.0,
        width: 1.0,
        height: 1.0,
    };

    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreemapTile {
    pub result: String,
    pub seats: usize,
    pub hover: String,
    pub color: String,
    pub rect: Rect,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreemapChart {
    pub tiles: Vec<TreemapTile>,
}

/// Everything the page shows for one dropdown selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionView {
    pub filter: RegionFilter,
    pub summary: Option<RegionSummary>,
    pub cards: Option<SummaryCards>,
    pub donut: Option<DonutChart>,
    pub treemap: Option<TreemapChart>,
    /// Set when the recomputation failed; the panels show this instead.
    pub error: Option<String>,
}

impl RegionView {
    pub fn failed(filter: RegionFilter, error: impl Into<String>) -> Self {
        Self {
            filter,
            summary: None,
            cards: None,
            donut: None,
            treemap: None,
            error: Some(error.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionOption {
    pub value: String,
    pub label: String,
}

impl From<&RegionFilter> for RegionOption {
    fn from(filter: &RegionFilter) -> Self {
        Self {
            value: filter.value().to_string(),
            label: filter.label().to_string(),
        }
    }
}

/// Output of the transform phase; one view per dropdown option.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardReport {
    pub title: String,
    pub generated_at: chrono::DateTime<chrono::Utc>,
    pub options: Vec<RegionOption>,
    pub views: Vec<RegionView>,
}

impl DashboardReport {
    pub fn view(&self, filter: &RegionFilter) -> Option<&RegionView> {
        self.views.iter().find(|v| v.filter == *filter)
    }
}
