//! Self-contained dashboard page.
//!
//! Every dropdown option gets its own precomputed section; a few lines of
//! inline script show the section matching the current selection. No
//! external assets, so the file works offline.

use crate::domain::view::{DashboardReport, DonutChart, RegionView, SummaryCards, TreemapChart};
use crate::utils::error::{DashboardError, Result};
use std::fmt::Write as _;

const DONUT_SIZE: f64 = 320.0;
const TREEMAP_WIDTH: f64 = 640.0;
const TREEMAP_HEIGHT: f64 = 320.0;
/// Slices below this share get no inline label.
const MIN_LABEL_SHARE: f64 = 0.04;

const CARD_TITLES: [&str; 4] = [
    "Average MP Majority",
    "Seats That Changed Party",
    "Total Votes Cast",
    "Electorate Turnout",
];

const STYLE: &str = "\
body{font-family:system-ui,-apple-system,Segoe UI,Roboto,Ubuntu,Arial,sans-serif;margin:0;background:#f8f9fa;color:#212529}\
.container{max-width:1140px;margin:0 auto;padding:24px}\
h1{margin:0.4em 0}\
hr{border:0;border-top:1px solid #dee2e6;margin:16px 0}\
.filter{display:flex;max-width:380px}\
.filter label{padding:6px 12px;background:#e9ecef;border:1px solid #ced4da;border-right:0;border-radius:6px 0 0 6px}\
.filter select{flex:1;padding:6px;border:1px solid #ced4da;border-radius:0 6px 6px 0}\
.cards{display:grid;grid-template-columns:repeat(4,minmax(0,1fr));gap:12px}\
.card{background:#fff;border:1px solid #dee2e6;border-radius:6px}\
.card-body{padding:16px}\
.card-body h2{margin:8px 0 0}\
.card-header{padding:8px 16px;background:#f1f3f5;border-bottom:1px solid #dee2e6}\
.charts{display:grid;grid-template-columns:5fr 7fr;gap:12px;margin-block:10px}\
.error{color:#b02a37;font-weight:600}\
svg text{pointer-events:none}";

const SCRIPT: &str = "\
document.getElementById('RegionDropdown').addEventListener('change',function(e){\
document.querySelectorAll('section.view').forEach(function(s){s.hidden=s.dataset.region!==e.target.value;});\
});";

/// Escape text for HTML.
pub fn esc(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Hover text uses `<br>` line breaks; SVG tooltips want newlines.
fn tooltip(hover: &str) -> String {
    esc(&hover.replace(" <br>", "\n").replace("<br>", "\n"))
}

/// Black or white, whichever reads better on `background`.
fn label_color(background: &str) -> &'static str {
    let hex = background.trim_start_matches('#');
    let expanded: String = match hex.len() {
        3 => hex.chars().flat_map(|c| [c, c]).collect(),
        _ => hex.to_string(),
    };
    let channel = |i: usize| {
        expanded
            .get(i..i + 2)
            .and_then(|h| u8::from_str_radix(h, 16).ok())
            .map(f64::from)
    };
    match (channel(0), channel(2), channel(4)) {
        (Some(r), Some(g), Some(b)) if 0.299 * r + 0.587 * g + 0.114 * b < 150.0 => "#ffffff",
        _ => "#212529",
    }
}

pub fn render_html(report: &DashboardReport) -> Result<String> {
    let mut buf = String::with_capacity(64 * 1024);
    write_page(&mut buf, report).map_err(|e| DashboardError::RenderError {
        message: e.to_string(),
    })?;
    Ok(buf)
}

fn write_page(buf: &mut String, report: &DashboardReport) -> std::fmt::Result {
    write!(
        buf,
        "<!doctype html><html lang=\"en\"><head><meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width,initial-scale=1\">\
         <title>{title}</title><style>{STYLE}</style></head><body>\
         <div class=\"container\"><h1>{title}</h1><hr>",
        title = esc(&report.title),
    )?;

    buf.push_str("<div class=\"filter\"><label for=\"RegionDropdown\">Region</label><select id=\"RegionDropdown\">");
    for (i, option) in report.options.iter().enumerate() {
        write!(
            buf,
            "<option value=\"{}\"{}>{}</option>",
            esc(&option.value),
            if i == 0 { " selected" } else { "" },
            esc(&option.label)
        )?;
    }
    buf.push_str("</select></div><hr>");

    for (i, view) in report.views.iter().enumerate() {
        write_view(buf, view, i == 0)?;
    }

    write!(
        buf,
        "<p style=\"opacity:.6;font-size:.85em\">Generated {}</p></div><script>{SCRIPT}</script></body></html>",
        report.generated_at.format("%Y-%m-%d %H:%M UTC")
    )
}

fn write_view(buf: &mut String, view: &RegionView, visible: bool) -> std::fmt::Result {
    write!(
        buf,
        "<section class=\"view\" data-region=\"{}\"{}>",
        esc(view.filter.value()),
        if visible { "" } else { " hidden" }
    )?;

    if let Some(error) = &view.error {
        write!(buf, "<div class=\"card\"><div class=\"card-body error\">{}</div></div>", esc(error))?;
        return buf.write_str("</section>");
    }

    if let Some(cards) = &view.cards {
        write_cards(buf, cards)?;
    }

    buf.push_str("<div class=\"charts\">");
    buf.push_str("<div class=\"card\"><div class=\"card-header\">% Seats by Party</div><div class=\"card-body\">");
    if let Some(donut) = &view.donut {
        write_donut(buf, donut)?;
    }
    buf.push_str("</div></div>");
    buf.push_str("<div class=\"card\"><div class=\"card-header\">Seat Results Summary</div><div class=\"card-body\">");
    if let Some(treemap) = &view.treemap {
        write_treemap(buf, treemap)?;
    }
    buf.push_str("</div></div></div></section>");
    Ok(())
}

fn write_cards(buf: &mut String, cards: &SummaryCards) -> std::fmt::Result {
    let values = [
        &cards.avg_majority,
        &cards.seat_change,
        &cards.total_votes,
        &cards.turnout,
    ];
    buf.push_str("<div class=\"cards\">");
    for (title, value) in CARD_TITLES.iter().zip(values) {
        write!(
            buf,
            "<div class=\"card\"><div class=\"card-body\">{}<h2>{}</h2></div></div>",
            esc(title),
            esc(value)
        )?;
    }
    buf.write_str("</div>")
}

fn write_donut(buf: &mut String, donut: &DonutChart) -> std::fmt::Result {
    let c = DONUT_SIZE / 2.0;
    let outer = c - 4.0;
    let inner = outer * donut.hole;
    let radius = (outer + inner) / 2.0;
    let thickness = outer - inner;
    let circumference = 2.0 * std::f64::consts::PI * radius;

    write!(
        buf,
        "<svg viewBox=\"0 0 {s} {s}\" width=\"100%\" role=\"img\">",
        s = DONUT_SIZE
    )?;

    let mut offset = 0.0;
    for slice in &donut.slices {
        let length = slice.share * circumference;
        write!(
            buf,
            "<circle cx=\"{c:.2}\" cy=\"{c:.2}\" r=\"{radius:.2}\" fill=\"none\" stroke=\"{color}\" \
             stroke-width=\"{thickness:.2}\" stroke-dasharray=\"{length:.3} {circumference:.3}\" \
             stroke-dashoffset=\"{dash:.3}\" transform=\"rotate(-90 {c:.2} {c:.2})\">\
             <title>{title}</title></circle>",
            color = esc(&slice.color),
            dash = -offset,
            title = tooltip(&slice.hover),
        )?;

        if slice.share >= MIN_LABEL_SHARE {
            let angle = (offset + length / 2.0) / circumference * 2.0 * std::f64::consts::PI
                - std::f64::consts::FRAC_PI_2;
            write!(
                buf,
                "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" dominant-baseline=\"middle\" \
                 font-size=\"18\" fill=\"{}\">{}</text>",
                c + radius * angle.cos(),
                c + radius * angle.sin(),
                label_color(&slice.color),
                esc(&slice.text)
            )?;
        }
        offset += length;
    }

    write!(
        buf,
        "<text x=\"{c:.2}\" y=\"{c:.2}\" text-anchor=\"middle\" dominant-baseline=\"middle\" \
         font-size=\"20\" font-weight=\"bold\">{}</text></svg>",
        esc(&donut.center_label)
    )
}

fn write_treemap(buf: &mut String, treemap: &TreemapChart) -> std::fmt::Result {
    write!(
        buf,
        "<svg viewBox=\"0 0 {TREEMAP_WIDTH} {TREEMAP_HEIGHT}\" width=\"100%\" role=\"img\">"
    )?;
    for tile in &treemap.tiles {
        let x = tile.rect.x * TREEMAP_WIDTH;
        let y = tile.rect.y * TREEMAP_HEIGHT;
        let w = tile.rect.width * TREEMAP_WIDTH;
        let h = tile.rect.height * TREEMAP_HEIGHT;
        write!(
            buf,
            "<g><rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" rx=\"2\" \
             fill=\"{}\" stroke=\"#ffffff\" stroke-width=\"1\"><title>{}</title></rect>",
            x,
            y,
            w,
            h,
            esc(&tile.color),
            tooltip(&tile.hover)
        )?;
        // only label tiles big enough to hold the text
        if w >= 90.0 && h >= 36.0 {
            write!(
                buf,
                "<text x=\"{:.2}\" y=\"{:.2}\" font-size=\"14\" fill=\"{}\">{}</text>",
                x + 6.0,
                y + 20.0,
                label_color(&tile.color),
                esc(&tile.result)
            )?;
        }
        buf.push_str("</g>");
    }
    buf.write_str("</svg>")
}
