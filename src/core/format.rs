//! Display formatting for the summary cards.

use crate::domain::model::RegionSummary;
use crate::domain::view::SummaryCards;

/// Shown in place of a metric that is undefined for an empty selection.
pub const NOT_AVAILABLE: &str = "n/a";

/// `1234567` → `"1,234,567"`
pub fn group_thousands(value: u128) -> String {
    group_digits(&value.to_string())
}

/// Rounds to a whole number (ties to even) and groups thousands.
pub fn format_rounded(value: f64) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    let rounded = format!("{:.0}", value);
    match rounded.strip_prefix('-') {
        Some(digits) => format!("-{}", group_digits(digits)),
        None => group_digits(&rounded),
    }
}

fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `0.333` → `"33%"`
pub fn percent_whole(fraction: f64) -> String {
    format!("{:.0}%", fraction * 100.0)
}

/// `0.6923` → `"69.2%"`
pub fn percent_one_decimal(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

/// `"{count} ({fraction:.0%})"`
pub fn seat_change_card(count: usize, fraction: Option<f64>) -> String {
    let share = fraction
        .map(percent_whole)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    format!("{} ({})", count, share)
}

pub fn summary_cards(summary: &RegionSummary) -> SummaryCards {
    SummaryCards {
        seat_change: seat_change_card(summary.seat_change_count, summary.seat_change_fraction),
        avg_majority: summary
            .avg_majority
            .map(format_rounded)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        total_votes: group_thousands(summary.total_votes),
        turnout: summary
            .turnout
            .map(percent_one_decimal)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
    }
}
