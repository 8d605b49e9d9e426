//! Loading and cleaning of the trade dataset.
//!
//! # CSV Format
//!
//! Header row required; columns are matched by name, in any order:
//! `year,port,type,commodity,unit,quantity,value`
//!
//! ```text
//! year,port,type,commodity,unit,quantity,value
//! 1780,London,import,Tea,lbs,100,50
//! ```
//!
//! Files ending in `.gz` are gunzipped on the fly.

use crate::error::LoadError;
use crate::record::{TradeRecord, REQUIRED_COLUMNS};
use csv::{ReaderBuilder, Trim};
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// The full, cleaned trade dataset. Immutable once constructed.
///
/// Every record satisfies `quantity != 0`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<TradeRecord>,
}

/// Row counts observed while building a [`Dataset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    pub rows_read: usize,
    pub zero_quantity_dropped: usize,
}

impl LoadReport {
    pub fn rows_kept(&self) -> usize {
        self.rows_read - self.zero_quantity_dropped
    }
}

impl Dataset {
    /// Load a dataset from a CSV file, or a gzipped CSV when the path ends in `.gz`.
    pub fn load_path<P: AsRef<Path>>(path: P) -> Result<(Self, LoadReport), LoadError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let gzipped = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"));
        log::info!(
            "[Trade Debug] loader: Reading {} ({})",
            path.display(),
            if gzipped { "gzip" } else { "plain" }
        );
        if gzipped {
            Self::from_reader(GzDecoder::new(BufReader::new(file)))
        } else {
            Self::from_reader(BufReader::new(file))
        }
    }

    /// Load a dataset from an in-memory CSV string.
    pub fn from_csv_str(csv_data: &str) -> Result<(Self, LoadReport), LoadError> {
        Self::from_reader(csv_data.as_bytes())
    }

    /// Parse every row of `reader`, then apply the zero-quantity cleaning rule.
    ///
    /// Loading is all-or-nothing: a missing column or a single unparsable row
    /// fails the whole load.
    pub fn from_reader<R: Read>(reader: R) -> Result<(Self, LoadReport), LoadError> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(LoadError::MissingColumn(column.to_string()));
            }
        }

        let mut records = Vec::new();
        for result in rdr.deserialize::<TradeRecord>() {
            let record = result.map_err(|e| {
                if e.is_io_error() {
                    LoadError::Csv(e)
                } else {
                    LoadError::Malformed {
                        line: e.position().map(|p| p.line()).unwrap_or_default(),
                        message: e.to_string(),
                    }
                }
            })?;
            records.push(record);
        }

        let (dataset, report) = Self::from_records(records);
        log::info!(
            "[Trade Debug] loader: Loaded {} records, dropped {} with zero quantity",
            report.rows_kept(),
            report.zero_quantity_dropped
        );
        Ok((dataset, report))
    }

    /// Build a dataset from already-parsed records, dropping zero-quantity rows.
    pub fn from_records(mut records: Vec<TradeRecord>) -> (Self, LoadReport) {
        let rows_read = records.len();
        records.retain(|r| r.quantity != 0.0);
        let report = LoadReport {
            rows_read,
            zero_quantity_dropped: rows_read - records.len(),
        };
        (Self { records }, report)
    }

    /// The bundled sample dataset.
    pub fn sample() -> Result<Self, LoadError> {
        Self::from_csv_str(crate::SAMPLE_CSV).map(|(dataset, _)| dataset)
    }

    pub fn records(&self) -> &[TradeRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TradeRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a TradeRecord;
    type IntoIter = std::slice::Iter<'a, TradeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("trade_core_{}_{}", std::process::id(), name))
    }

    #[test]
    fn load_sample_drops_zero_quantity_rows() {
        let (dataset, report) = Dataset::from_csv_str(crate::SAMPLE_CSV).unwrap();
        assert_eq!(report.rows_read, 18);
        assert_eq!(report.zero_quantity_dropped, 2);
        assert_eq!(dataset.len(), 16);
        assert!(
            dataset.iter().all(|r| r.quantity != 0.0),
            "No zero-quantity record may survive cleaning"
        );
    }

    #[test]
    fn load_example_scenario() {
        let csv = "\
year,port,type,commodity,unit,quantity,value
1780,London,import,Tea,lbs,100,50
1780,Bristol,export,Tea,lbs,0,30
1790,London,import,Tea,lbs,200,80
";
        let (dataset, report) = Dataset::from_csv_str(csv).unwrap();
        assert_eq!(report.zero_quantity_dropped, 1);
        assert_eq!(
            dataset.records(),
            &[
                TradeRecord::new(1780, "London", "import", "Tea", "lbs", 100.0, 50.0),
                TradeRecord::new(1790, "London", "import", "Tea", "lbs", 200.0, 80.0),
            ]
        );
    }

    #[test]
    fn columns_are_matched_by_name() {
        let csv = "\
commodity,value,quantity,unit,type,port,year,source
Sugar, 160 ,80,cwt,import,London,1765,ledger A
";
        let (dataset, _) = Dataset::from_csv_str(csv).unwrap();
        assert_eq!(
            dataset.records()[0],
            TradeRecord::new(1765, "London", "import", "Sugar", "cwt", 80.0, 160.0)
        );
    }

    #[test]
    fn missing_column_is_a_load_error() {
        let csv = "\
year,port,type,commodity,quantity,value
1780,London,import,Tea,100,50
";
        match Dataset::from_csv_str(csv) {
            Err(LoadError::MissingColumn(column)) => assert_eq!(column, "unit"),
            other => panic!("Expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn empty_source_is_a_load_error() {
        assert!(matches!(
            Dataset::from_csv_str(""),
            Err(LoadError::MissingColumn(_))
        ));
    }

    #[test]
    fn non_numeric_quantity_is_malformed() {
        let csv = "\
year,port,type,commodity,unit,quantity,value
1780,London,import,Tea,lbs,100,50
1781,London,import,Tea,lbs,lots,50
";
        match Dataset::from_csv_str(csv) {
            Err(LoadError::Malformed { line, .. }) => assert_eq!(line, 3),
            other => panic!("Expected Malformed, got {:?}", other),
        }
    }

    #[test]
    fn header_only_source_loads_empty() {
        let (dataset, report) =
            Dataset::from_csv_str("year,port,type,commodity,unit,quantity,value\n").unwrap();
        assert!(dataset.is_empty());
        assert_eq!(report.rows_read, 0);
    }

    #[test]
    fn load_path_reads_plain_and_gzip() {
        let plain = temp_path("plain.csv");
        std::fs::write(&plain, crate::SAMPLE_CSV).unwrap();

        let gz = temp_path("sample.csv.gz");
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(crate::SAMPLE_CSV.as_bytes()).unwrap();
        std::fs::write(&gz, encoder.finish().unwrap()).unwrap();

        let (from_plain, _) = Dataset::load_path(&plain).unwrap();
        let (from_gz, _) = Dataset::load_path(&gz).unwrap();
        assert_eq!(from_plain, from_gz, "Gzipped source should load identically");
        assert_eq!(from_gz.len(), 16);

        std::fs::remove_file(plain).ok();
        std::fs::remove_file(gz).ok();
    }

    #[test]
    fn load_path_missing_file_is_io_error() {
        let missing = temp_path("does-not-exist.csv");
        assert!(matches!(Dataset::load_path(missing), Err(LoadError::Io(_))));
    }
}
