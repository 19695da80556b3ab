use crate::core::colors::ColorScheme;
use crate::core::format::percent_whole;
use crate::domain::model::RegionSummary;
use crate::domain::view::{DonutChart, DonutSlice, Rect, TreemapChart, TreemapTile};

pub const DONUT_HOLE: f64 = 0.5;

fn hover_text(label: &str, seats: usize) -> String {
    format!("{} <br>{} Seats", label, seats)
}

/// Seat share by winning party.
pub fn donut_chart(summary: &RegionSummary, colors: &ColorScheme) -> DonutChart {
    let total = summary.seat_count;
    let slices = summary
        .party_seat_counts
        .iter()
        .map(|party| {
            let share = if total == 0 {
                0.0
            } else {
                party.count as f64 / total as f64
            };
            DonutSlice {
                party: party.name.clone(),
                seats: party.count,
                share,
                text: percent_whole(share),
                hover: hover_text(&party.name, party.count),
                color: colors.party_color(&party.name).to_string(),
            }
        })
        .collect();

    DonutChart {
        hole: DONUT_HOLE,
        center_label: format!("{} Seats", total),
        slices,
    }
}

/// Seats per result category, laid out on a unit canvas.
pub fn treemap_chart(summary: &RegionSummary, colors: &ColorScheme) -> TreemapChart {
    let values: Vec<f64> = summary
        .result_category_counts
        .iter()
        .map(|c| c.count as f64)
        .collect();
    let rects = squarify(&values, Rect::UNIT);

    let tiles = summary
        .result_category_counts
        .iter()
        .zip(rects)
        .map(|(category, rect)| TreemapTile {
            result: category.name.clone(),
            seats: category.count,
            hover: hover_text(&category.name, category.count),
            color: colors.result_color(&category.name).to_string(),
            rect,
        })
        .collect();

    TreemapChart { tiles }
}

/// Squarified treemap layout (Bruls, Huizing, van Wijk).
///
/// `values` should be sorted in descending order. Returns one rectangle per
/// value, in input order, whose areas are proportional to the values and
/// together fill `bounds`.
pub fn squarify(values: &[f64], bounds: Rect) -> Vec<Rect> {
    let total: f64 = values.iter().sum();
    if values.is_empty() || total <= 0.0 {
        return Vec::new();
    }

    let scale = bounds.area() / total;
    let areas: Vec<f64> = values.iter().map(|v| v * scale).collect();

    let mut rects = Vec::with_capacity(areas.len());
    let mut free = bounds;
    let mut start = 0;
    while start < areas.len() {
        let side = free.width.min(free.height);
        let mut end = start + 1;
        let mut best = worst_aspect(&areas[start..end], side);
        while end < areas.len() {
            let candidate = worst_aspect(&areas[start..=end], side);
            if candidate > best {
                break;
            }
            best = candidate;
            end += 1;
        }
        free = lay_row(&areas[start..end], free, &mut rects);
        start = end;
    }
    rects
}

fn worst_aspect(row: &[f64], side: f64) -> f64 {
    let sum: f64 = row.iter().sum();
    let max = row.iter().copied().fold(f64::MIN, f64::max);
    let min = row.iter().copied().fold(f64::MAX, f64::min);
    if sum <= 0.0 || min <= 0.0 || side <= 0.0 {
        return f64::INFINITY;
    }
    let sum2 = sum * sum;
    let side2 = side * side;
    (side2 * max / sum2).max(sum2 / (side2 * min))
}

/// Places `row` along the shorter side of `free` and returns what is left.
fn lay_row(row: &[f64], free: Rect, out: &mut Vec<Rect>) -> Rect {
    let sum: f64 = row.iter().sum();

    if free.width >= free.height {
        // column on the left edge
        let width = if free.height > 0.0 { sum / free.height } else { 0.0 };
        let mut y = free.y;
        for &area in row {
            let height = if width > 0.0 { area / width } else { 0.0 };
            out.push(Rect {
                x: free.x,
                y,
                width,
                height,
            });
            y += height;
        }
        Rect {
            x: free.x + width,
            y: free.y,
            width: (free.width - width).max(0.0),
            height: free.height,
        }
    } else {
        // row along the top edge
        let height = if free.width > 0.0 { sum / free.width } else { 0.0 };
        let mut x = free.x;
        for &area in row {
            let width = if height > 0.0 { area / height } else { 0.0 };
            out.push(Rect {
                x,
                y: free.y,
                width,
                height,
            });
            x += width;
        }
        Rect {
            x: free.x,
            y: free.y + height,
            width: free.width,
            height: (free.height - height).max(0.0),
        }
    }
}
