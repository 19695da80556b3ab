use serde::{Deserialize, Deserializer, Serialize};

/// Dropdown value meaning "no region filter".
pub const ALL_REGIONS_VALUE: &str = "All";
pub const ALL_REGIONS_LABEL: &str = "All Regions";

/// One row of the cleaned results file, one per constituency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstituencyResult {
    #[serde(rename = "Region")]
    pub region: String,
    #[serde(rename = "Winning Party")]
    pub winning_party: String,
    #[serde(rename = "Result")]
    pub result: String,
    #[serde(rename = "Majority", deserialize_with = "de_amount")]
    pub majority: f64,
    #[serde(rename = "Votes Cast", deserialize_with = "de_count")]
    pub votes_cast: u64,
    #[serde(rename = "Electorate", deserialize_with = "de_count")]
    pub electorate: u64,
}

impl ConstituencyResult {
    /// Seat did not change hands. The cleaned data labels results "X hold" or
    /// "X gain from Y"; there is no structured flag.
    pub fn is_hold(&self) -> bool {
        self.result.contains("hold")
    }

    pub fn changed_hands(&self) -> bool {
        !self.is_hold()
    }
}

/// Any finite, non-negative number.
fn de_amount<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(serde::de::Error::custom(format!(
            "expected a non-negative number, got '{}'",
            raw
        ))),
    }
}

/// Counts may be written as `1234` or `1234.0` by the cleaning step.
fn de_count<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let trimmed = raw.trim();
    if let Ok(value) = trimmed.parse::<u64>() {
        return Ok(value);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value >= 0.0 && value.fract() == 0.0 && value <= u64::MAX as f64 => {
            Ok(value as u64)
        }
        _ => Err(serde::de::Error::custom(format!(
            "expected a non-negative whole number, got '{}'",
            raw
        ))),
    }
}

/// Region selection. `All` is the sentinel for "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RegionFilter {
    #[default]
    All,
    Region(String),
}

impl RegionFilter {
    /// Parses a dropdown value; only the exact sentinel maps to `All`.
    pub fn from_selection(value: &str) -> Self {
        if value == ALL_REGIONS_VALUE {
            RegionFilter::All
        } else {
            RegionFilter::Region(value.to_string())
        }
    }

    pub fn value(&self) -> &str {
        match self {
            RegionFilter::All => ALL_REGIONS_VALUE,
            RegionFilter::Region(name) => name,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            RegionFilter::All => ALL_REGIONS_LABEL,
            RegionFilter::Region(name) => name,
        }
    }

    pub fn matches(&self, record: &ConstituencyResult) -> bool {
        match self {
            RegionFilter::All => true,
            RegionFilter::Region(name) => record.region == *name,
        }
    }
}

impl From<String> for RegionFilter {
    fn from(value: String) -> Self {
        RegionFilter::from_selection(&value)
    }
}

impl From<RegionFilter> for String {
    fn from(filter: RegionFilter) -> Self {
        filter.value().to_string()
    }
}

impl std::fmt::Display for RegionFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub name: String,
    pub count: usize,
}

/// Aggregates for one region selection.
///
/// Ratios are `None` when the filtered subset is empty (or, for turnout,
/// when the electorate sums to zero). Totals are `u128` so summing `u64`
/// rows cannot overflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionSummary {
    pub filter: RegionFilter,
    pub seat_count: usize,
    pub seat_change_count: usize,
    pub hold_count: usize,
    pub seat_change_fraction: Option<f64>,
    pub avg_majority: Option<f64>,
    pub total_votes: u128,
    pub total_electorate: u128,
    pub turnout: Option<f64>,
    /// Sorted by count descending, then name.
    pub party_seat_counts: Vec<CategoryCount>,
    /// Sorted by count descending, then name.
    pub result_category_counts: Vec<CategoryCount>,
}

impl RegionSummary {
    pub fn is_empty(&self) -> bool {
        self.seat_count == 0
    }

    pub fn party_seats(&self, party: &str) -> usize {
        find_count(&self.party_seat_counts, party)
    }

    pub fn result_seats(&self, result: &str) -> usize {
        find_count(&self.result_category_counts, result)
    }
}

fn find_count(counts: &[CategoryCount], name: &str) -> usize {
    counts
        .iter()
        .find(|c| c.name == name)
        .map(|c| c.count)
        .unwrap_or(0)
}
