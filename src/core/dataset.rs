use crate::domain::model::{ConstituencyResult, RegionFilter, ALL_REGIONS_VALUE};
use crate::utils::error::{DashboardError, Result};
use std::io::Read;
use std::sync::Arc;

pub const REQUIRED_COLUMNS: [&str; 6] = [
    "Region",
    "Winning Party",
    "Result",
    "Majority",
    "Votes Cast",
    "Electorate",
];

/// Constituency results loaded once at startup.
///
/// Cloning is cheap and shares the same rows; there is no way to mutate a
/// dataset after it is built.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Arc<[ConstituencyResult]>,
    regions: Arc<[String]>,
}

impl Dataset {
    pub fn from_records(records: Vec<ConstituencyResult>) -> Self {
        let mut regions: Vec<String> = Vec::new();
        for record in &records {
            if !regions.iter().any(|r| *r == record.region) {
                if record.region == ALL_REGIONS_VALUE {
                    tracing::warn!(
                        "⚠️ Region '{}' has the same value as the all-regions option and cannot be selected on its own",
                        record.region
                    );
                }
                regions.push(record.region.clone());
            }
        }

        Self {
            records: records.into(),
            regions: regions.into(),
        }
    }

    pub fn from_csv_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_csv_reader(bytes)
    }

    /// Parses the cleaned results CSV. Unknown columns are ignored; a missing
    /// required column or an unparseable row is an error.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(DashboardError::MissingColumn {
                    column: column.to_string(),
                });
            }
        }

        let mut records = Vec::new();
        for (index, row) in rdr.deserialize::<ConstituencyResult>().enumerate() {
            // header is line 1
            let line = index + 2;
            let record = row.map_err(|e| DashboardError::MalformedRecord {
                row: line,
                reason: e.to_string(),
            })?;

            if record.electorate == 0 {
                return Err(DashboardError::MalformedRecord {
                    row: line,
                    reason: "Electorate must be greater than zero".to_string(),
                });
            }
            if record.votes_cast > record.electorate {
                tracing::warn!(
                    "⚠️ Row {}: votes cast ({}) exceed electorate ({}) in region '{}'",
                    line,
                    record.votes_cast,
                    record.electorate,
                    record.region
                );
            }

            records.push(record);
        }

        if records.is_empty() {
            tracing::warn!("Dataset contains a header but no constituency rows");
        }

        let dataset = Self::from_records(records);
        tracing::debug!(
            "Parsed {} constituencies across {} regions",
            dataset.len(),
            dataset.regions().len()
        );
        Ok(dataset)
    }

    pub fn records(&self) -> &[ConstituencyResult] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct regions in order of first appearance.
    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    pub fn contains_region(&self, name: &str) -> bool {
        self.regions.iter().any(|r| r == name)
    }

    /// Dropdown options: the "all regions" sentinel first, then every region.
    pub fn region_options(&self) -> Vec<RegionFilter> {
        std::iter::once(RegionFilter::All)
            .chain(self.regions.iter().cloned().map(RegionFilter::Region))
            .collect()
    }

    pub fn check_filter(&self, filter: &RegionFilter) -> Result<()> {
        match filter {
            RegionFilter::All => Ok(()),
            RegionFilter::Region(name) if self.contains_region(name) => Ok(()),
            RegionFilter::Region(name) => Err(DashboardError::UnknownRegion {
                region: name.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::aggregate::aggregate;
    use crate::core::colors::ColorScheme;
    use crate::core::format::summary_cards;
    use crate::core::views::build_view;
    use std::sync::Mutex;

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for LogBuffer {
        type Writer = LogBuffer;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn with_captured_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
        let buffer = LogBuffer::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(buffer.clone())
            .with_ansi(false)
            .finish();
        let value = tracing::subscriber::with_default(subscriber, f);
        let logs = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        (value, logs)
    }

    const SAMPLE: &str = "\
Constituency,Region,Winning Party,Result,Majority,Votes Cast,Electorate
Aberdeen North,Scotland,Scottish National Party,SNP hold,1760,32817,73224
Alyn and Deeside,Wales,Labour,Lab hold,8794,37882,74953
Aberdeen South,Scotland,Scottish National Party,SNP hold,3758,37446,72225
Bangor Aberconwy,Wales,Labour,Lab gain from Con,4896.0,39094,70954
";

    #[test]
    fn test_parse_sample() {
        let dataset = Dataset::from_csv_bytes(SAMPLE.as_bytes()).unwrap();

        assert_eq!(dataset.len(), 4);
        assert_eq!(dataset.regions(), ["Scotland", "Wales"]);
        assert_eq!(dataset.records()[3].majority, 4896.0);
        assert_eq!(dataset.records()[1].winning_party, "Labour");
    }

    #[test]
    fn test_region_options_start_with_sentinel() {
        let dataset = Dataset::from_csv_bytes(SAMPLE.as_bytes()).unwrap();
        let options = dataset.region_options();

        assert_eq!(options.len(), 3);
        assert_eq!(options[0], RegionFilter::All);
        assert_eq!(options[1], RegionFilter::Region("Scotland".to_string()));
        assert_eq!(options[2], RegionFilter::Region("Wales".to_string()));
    }

    #[test]
    fn test_missing_column_is_fatal() {
        let csv = "Region,Winning Party,Result,Majority,Votes Cast\nWales,Labour,Lab hold,1,2\n";
        let err = Dataset::from_csv_bytes(csv.as_bytes()).unwrap_err();

        match err {
            DashboardError::MissingColumn { column } => assert_eq!(column, "Electorate"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_malformed_number_reports_row() {
        let csv = "\
Region,Winning Party,Result,Majority,Votes Cast,Electorate
Wales,Labour,Lab hold,100,1000,2000
Wales,Labour,Lab hold,lots,1000,2000
";
        let err = Dataset::from_csv_bytes(csv.as_bytes()).unwrap_err();

        match err {
            DashboardError::MalformedRecord { row, .. } => assert_eq!(row, 3),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_negative_and_fractional_counts_rejected() {
        for bad in ["-5", "12.5"] {
            let csv = format!(
                "Region,Winning Party,Result,Majority,Votes Cast,Electorate\nWales,Labour,Lab hold,100,{},2000\n",
                bad
            );
            assert!(Dataset::from_csv_bytes(csv.as_bytes()).is_err(), "{} accepted", bad);
        }
    }

    #[test]
    fn test_invalid_majority_rejected() {
        for bad in ["-5", "NaN", "inf", "lots"] {
            let csv = format!(
                "Region,Winning Party,Result,Majority,Votes Cast,Electorate\nWales,Labour,Lab hold,{},1000,2000\n",
                bad
            );
            assert!(Dataset::from_csv_bytes(csv.as_bytes()).is_err(), "{} accepted", bad);
        }
    }

    #[test]
    fn test_fractional_majority_loads() {
        let csv = "\
Region,Winning Party,Result,Majority,Votes Cast,Electorate
North,A,A hold,100.5,1000,2000
North,A,A hold,1234.6,1000,2000
";
        let dataset = Dataset::from_csv_bytes(csv.as_bytes()).unwrap();

        assert_eq!(dataset.records()[0].majority, 100.5);
        let summary = aggregate(&dataset, &RegionFilter::All).unwrap();
        // (100.5 + 1234.6) / 2 = 667.55
        assert_eq!(summary_cards(&summary).avg_majority, "668");
    }

    #[test]
    fn test_huge_counts_load_and_recompute() {
        let csv = "\
Region,Winning Party,Result,Majority,Votes Cast,Electorate
North,A,A hold,1,10000000000000000000,10000000000000000000
North,B,B gain,1,10000000000000000000,10000000000000000000
";
        let dataset = Dataset::from_csv_bytes(csv.as_bytes()).unwrap();
        let view = build_view(&dataset, &RegionFilter::All, &ColorScheme::default());

        assert!(view.is_ok());
        let cards = view.cards.unwrap();
        assert_eq!(cards.total_votes, "20,000,000,000,000,000,000");
        assert_eq!(cards.turnout, "100.0%");
    }

    #[test]
    fn test_votes_above_electorate_load_with_warning() {
        let csv = "\
Region,Winning Party,Result,Majority,Votes Cast,Electorate
North,A,A hold,100,2500,2000
";
        let (dataset, logs) = with_captured_logs(|| Dataset::from_csv_bytes(csv.as_bytes()));
        let dataset = dataset.unwrap();

        assert_eq!(dataset.len(), 1);
        let summary = aggregate(&dataset, &RegionFilter::All).unwrap();
        assert!(summary.turnout.unwrap() > 1.0);
        assert_eq!(summary_cards(&summary).turnout, "125.0%");
        assert!(logs.contains("WARN"));
        assert!(logs.contains("exceed electorate"));
    }

    #[test]
    fn test_region_named_like_sentinel_warns() {
        let csv = "\
Region,Winning Party,Result,Majority,Votes Cast,Electorate
All,A,A hold,100,1000,2000
North,B,B hold,100,1000,2000
";
        let (dataset, logs) = with_captured_logs(|| Dataset::from_csv_bytes(csv.as_bytes()));
        let dataset = dataset.unwrap();

        assert_eq!(dataset.regions(), ["All", "North"]);
        assert!(logs.contains("WARN"));
        assert!(logs.contains("all-regions option"));
    }

    #[test]
    fn test_zero_electorate_rejected() {
        let csv = "Region,Winning Party,Result,Majority,Votes Cast,Electorate\nWales,Labour,Lab hold,1,0,0\n";
        assert!(matches!(
            Dataset::from_csv_bytes(csv.as_bytes()),
            Err(DashboardError::MalformedRecord { row: 2, .. })
        ));
    }

    #[test]
    fn test_header_only_is_empty_dataset() {
        let csv = "Region,Winning Party,Result,Majority,Votes Cast,Electorate\n";
        let dataset = Dataset::from_csv_bytes(csv.as_bytes()).unwrap();

        assert!(dataset.is_empty());
        assert_eq!(dataset.region_options(), vec![RegionFilter::All]);
    }

    #[test]
    fn test_check_filter() {
        let dataset = Dataset::from_csv_bytes(SAMPLE.as_bytes()).unwrap();

        assert!(dataset.check_filter(&RegionFilter::All).is_ok());
        assert!(dataset
            .check_filter(&RegionFilter::Region("Wales".to_string()))
            .is_ok());
        assert!(matches!(
            dataset.check_filter(&RegionFilter::Region("wales".to_string())),
            Err(DashboardError::UnknownRegion { .. })
        ));
    }

    #[test]
    fn test_clones_share_rows() {
        let dataset = Dataset::from_csv_bytes(SAMPLE.as_bytes()).unwrap();
        let shared = dataset.clone();
        assert!(std::ptr::eq(dataset.records(), shared.records()));
    }
}
