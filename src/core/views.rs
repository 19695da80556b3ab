use crate::core::aggregate::aggregate;
use crate::core::charts::{donut_chart, treemap_chart};
use crate::core::colors::ColorScheme;
use crate::core::dataset::Dataset;
use crate::core::format::summary_cards;
use crate::domain::model::RegionFilter;
use crate::domain::view::{DashboardReport, RegionOption, RegionView};

/// One recomputation cycle: filter, aggregate and build every panel for a
/// selection. Failures are captured in the view, never propagated, so one bad
/// selection cannot take the page down.
pub fn build_view(dataset: &Dataset, filter: &RegionFilter, colors: &ColorScheme) -> RegionView {
    match aggregate(dataset, filter) {
        Ok(summary) => {
            if summary.is_empty() {
                tracing::warn!("Selection '{}' matched no constituencies", filter);
            }
            RegionView {
                filter: filter.clone(),
                cards: Some(summary_cards(&summary)),
                donut: Some(donut_chart(&summary, colors)),
                treemap: Some(treemap_chart(&summary, colors)),
                summary: Some(summary),
                error: None,
            }
        }
        Err(e) => {
            tracing::warn!("❌ Could not build view for '{}': {}", filter, e);
            RegionView::failed(filter.clone(), e.user_friendly_message())
        }
    }
}

/// Precomputes a view for every dropdown option.
pub fn build_report(dataset: &Dataset, title: &str, colors: &ColorScheme) -> DashboardReport {
    let filters = dataset.region_options();
    let options = filters.iter().map(RegionOption::from).collect();
    let views = filters
        .iter()
        .map(|filter| build_view(dataset, filter, colors))
        .collect();

    DashboardReport {
        title: title.to_string(),
        generated_at: chrono::Utc::now(),
        options,
        views,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Region,Winning Party,Result,Majority,Votes Cast,Electorate
North,A,A hold,100,1000,2000
North,B,B gain,50,2000,2500
North,A,A hold,200,1500,2000
South,Labour,Lab hold,900,3000,4000
";

    #[test]
    fn test_view_for_north() {
        let dataset = Dataset::from_csv_bytes(SAMPLE.as_bytes()).unwrap();
        let view = build_view(
            &dataset,
            &RegionFilter::Region("North".to_string()),
            &ColorScheme::default(),
        );

        assert!(view.is_ok());
        let cards = view.cards.unwrap();
        assert_eq!(cards.seat_change, "1 (33%)");
        assert_eq!(cards.avg_majority, "117");
        assert_eq!(cards.total_votes, "4,500");
        assert_eq!(cards.turnout, "69.2%");
        assert_eq!(view.donut.unwrap().center_label, "3 Seats");
        assert_eq!(view.treemap.unwrap().tiles.len(), 2);
    }

    #[test]
    fn test_unknown_region_is_reported_in_view() {
        let dataset = Dataset::from_csv_bytes(SAMPLE.as_bytes()).unwrap();
        let view = build_view(
            &dataset,
            &RegionFilter::Region("Narnia".to_string()),
            &ColorScheme::default(),
        );

        assert!(!view.is_ok());
        assert!(view.cards.is_none());
        assert!(view.error.unwrap().contains("Narnia"));
    }

    #[test]
    fn test_report_has_view_per_option() {
        let dataset = Dataset::from_csv_bytes(SAMPLE.as_bytes()).unwrap();
        let report = build_report(&dataset, "Results", &ColorScheme::default());

        let values: Vec<&str> = report.options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["All", "North", "South"]);
        assert_eq!(report.options[0].label, "All Regions");
        assert_eq!(report.views.len(), 3);
        assert!(report.views.iter().all(RegionView::is_ok));

        let all = report.view(&RegionFilter::All).unwrap();
        assert_eq!(all.summary.as_ref().unwrap().seat_count, 4);
    }
}
