use crate::core::dataset::Dataset;
use crate::domain::model::{CategoryCount, ConstituencyResult, RegionFilter, RegionSummary};
use crate::utils::error::Result;
use std::collections::HashMap;

/// Recomputes every dashboard metric for one region selection.
///
/// Pure: the same dataset and filter always give the same summary. A filter
/// naming a region that is not in the dataset is an error; an empty subset is
/// not, its ratios are simply `None`.
pub fn aggregate(dataset: &Dataset, filter: &RegionFilter) -> Result<RegionSummary> {
    dataset.check_filter(filter)?;

    let filtered: Vec<&ConstituencyResult> = dataset
        .records()
        .iter()
        .filter(|record| filter.matches(record))
        .collect();

    Ok(summarize(filter.clone(), &filtered))
}

/// Aggregates an already filtered subset.
pub fn summarize(filter: RegionFilter, records: &[&ConstituencyResult]) -> RegionSummary {
    let seat_count = records.len();
    let seat_change_count = records.iter().filter(|r| r.changed_hands()).count();
    let total_majority: f64 = records.iter().map(|r| r.majority).sum();
    let total_votes: u128 = records.iter().map(|r| u128::from(r.votes_cast)).sum();
    let total_electorate: u128 = records.iter().map(|r| u128::from(r.electorate)).sum();

    RegionSummary {
        filter,
        seat_count,
        seat_change_count,
        hold_count: seat_count - seat_change_count,
        seat_change_fraction: ratio(seat_change_count as f64, seat_count as f64),
        avg_majority: ratio(total_majority, seat_count as f64),
        total_votes,
        total_electorate,
        turnout: ratio(total_votes as f64, total_electorate as f64),
        party_seat_counts: count_by(records, |r| r.winning_party.as_str()),
        result_category_counts: count_by(records, |r| r.result.as_str()),
    }
}

fn ratio(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 {
        None
    } else {
        Some(numerator / denominator)
    }
}

/// Group-by-key count, largest group first; ties broken by name so the
/// output order never depends on hashing.
fn count_by<F>(records: &[&ConstituencyResult], key: F) -> Vec<CategoryCount>
where
    F: Fn(&ConstituencyResult) -> &str,
{
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for &record in records {
        *counts.entry(key(record)).or_insert(0) += 1;
    }

    let mut counts: Vec<CategoryCount> = counts
        .into_iter()
        .map(|(name, count)| CategoryCount {
            name: name.to_string(),
            count,
        })
        .collect();
    counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    counts
}
