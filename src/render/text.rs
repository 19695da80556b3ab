use crate::domain::model::CategoryCount;
use crate::domain::view::RegionView;
use std::fmt::Write as _;

/// Terminal rendering of a single view.
pub fn render_text(view: &RegionView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Region: {}", view.filter.label());

    if let Some(error) = &view.error {
        let _ = writeln!(out, "Error: {}", error);
        return out;
    }

    if let Some(cards) = &view.cards {
        let _ = writeln!(out, "  Average MP Majority:      {}", cards.avg_majority);
        let _ = writeln!(out, "  Seats That Changed Party: {}", cards.seat_change);
        let _ = writeln!(out, "  Total Votes Cast:         {}", cards.total_votes);
        let _ = writeln!(out, "  Electorate Turnout:       {}", cards.turnout);
    }

    if let Some(summary) = &view.summary {
        write_counts(&mut out, "Seats by Party", &summary.party_seat_counts);
        write_counts(&mut out, "Seat Results", &summary.result_category_counts);
    }
    out
}

fn write_counts(out: &mut String, heading: &str, counts: &[CategoryCount]) {
    let _ = writeln!(out, "{}:", heading);
    let width = counts.iter().map(|c| c.name.chars().count()).max().unwrap_or(0);
    for count in counts {
        let _ = writeln!(out, "  {:<width$}  {:>4}", count.name, count.count, width = width);
    }
}
