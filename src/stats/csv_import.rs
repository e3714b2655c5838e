//! CSV Import
//!
//! Imports tour statistics exported as CSV. The header row names the columns
//! (`Data`, `Nome Tour`, `UV`, `Durata sessione media`, any order, extra
//! columns allowed). Lines are split on the delimiter without quote handling;
//! a line is dropped when it is shorter than the header or its `UV` field is
//! not an integer.

use std::path::Path;

use super::error::{ImportError, ImportResult};
use super::parse::parse_leading_int;
use super::types::{StatsRow, HEADER_AVG_TIME, HEADER_DATE, HEADER_NAME, HEADER_UV, REQUIRED_HEADERS};

/// Cap on the number of discarded lines kept in a report
const MAX_REPORTED_DISCARDS: usize = 100;

/// Why a data line was dropped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscardReason {
    /// Fewer fields than header columns
    TooFewFields { found: usize, expected: usize },
    /// `UV` is not an integer
    InvalidUv(String),
}

impl std::fmt::Display for DiscardReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiscardReason::TooFewFields { found, expected } => {
                write!(f, "{} fields, expected {}", found, expected)
            }
            DiscardReason::InvalidUv(value) => write!(f, "UV is not an integer: {:?}", value),
        }
    }
}

/// A data line that did not make it into the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscardedLine {
    /// 1-based line number in the source
    pub line: u64,
    pub reason: DiscardReason,
}

/// Result of a successful import
#[derive(Debug, Default)]
pub struct ImportReport {
    /// Accepted rows, in file order
    pub rows: Vec<StatsRow>,
    /// Number of data lines dropped
    pub rows_discarded: usize,
    /// Details for the first dropped lines
    pub discarded: Vec<DiscardedLine>,
}

/// Positions of the required columns in the header
#[derive(Debug, Clone, Copy)]
struct ColumnIndices {
    date: usize,
    name: usize,
    uv: usize,
    avg_time: usize,
}

impl ColumnIndices {
    fn from_headers(headers: &csv::StringRecord) -> ImportResult<Self> {
        for required in REQUIRED_HEADERS {
            if !headers.iter().any(|h| h == required) {
                return Err(ImportError::MissingColumn(required));
            }
        }

        // First occurrence wins when a column is repeated
        let position = |name: &str| headers.iter().position(|h| h == name).unwrap_or_default();

        Ok(Self {
            date: position(HEADER_DATE),
            name: position(HEADER_NAME),
            uv: position(HEADER_UV),
            avg_time: position(HEADER_AVG_TIME),
        })
    }
}

/// Statistics CSV importer
#[derive(Debug, Clone)]
pub struct StatsImporter {
    delimiter: u8,
}

impl Default for StatsImporter {
    fn default() -> Self {
        Self::new()
    }
}

impl StatsImporter {
    /// Create an importer for comma-separated files
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    /// Set the field delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Import a CSV file from disk
    pub fn import(&self, path: &Path) -> ImportResult<ImportReport> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        if !is_csv_file(&name, "") {
            return Err(ImportError::NotCsv);
        }

        let text = std::fs::read_to_string(path)?;
        self.import_str(&text)
    }

    /// Import CSV text
    pub fn import_str(&self, text: &str) -> ImportResult<ImportReport> {
        let text = text.trim();
        if text.lines().count() <= 1 {
            return Err(ImportError::Empty);
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .delimiter(self.delimiter)
            .quoting(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(text.as_bytes());

        let headers = reader.headers()?.clone();
        let columns = ColumnIndices::from_headers(&headers)?;

        let mut report = ImportReport::default();

        for result in reader.records() {
            let record = result?;
            let line = record.position().map(|p| p.line()).unwrap_or_default();

            match parse_record(&record, headers.len(), columns) {
                Ok(row) => report.rows.push(row),
                Err(reason) => {
                    tracing::debug!(line, %reason, "discarding CSV line");
                    report.rows_discarded += 1;
                    if report.discarded.len() < MAX_REPORTED_DISCARDS {
                        report.discarded.push(DiscardedLine { line, reason });
                    }
                }
            }
        }

        if report.rows.is_empty() {
            tracing::warn!(discarded = report.rows_discarded, "CSV import has no valid rows");
            return Err(ImportError::NoValidRows);
        }

        tracing::info!(
            rows = report.rows.len(),
            discarded = report.rows_discarded,
            "Imported statistics CSV"
        );

        Ok(report)
    }
}

fn parse_record(
    record: &csv::StringRecord,
    header_len: usize,
    columns: ColumnIndices,
) -> Result<StatsRow, DiscardReason> {
    if record.len() < header_len {
        return Err(DiscardReason::TooFewFields {
            found: record.len(),
            expected: header_len,
        });
    }

    let field = |idx: usize| record.get(idx).unwrap_or_default();

    let uv = parse_leading_int(field(columns.uv))
        .ok_or_else(|| DiscardReason::InvalidUv(field(columns.uv).to_string()))?;

    Ok(StatsRow {
        date: field(columns.date).to_string(),
        name: field(columns.name).to_string(),
        uv,
        avg_time: field(columns.avg_time).to_string(),
    })
}

/// Check a picked file by MIME type or extension
pub fn is_csv_file(name: &str, mime: &str) -> bool {
    mime.contains("csv") || name.to_ascii_lowercase().ends_with(".csv")
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Data,Nome Tour,UV,Durata sessione media";

    #[test]
    fn test_simple_import() {
        let csv_data = format!(
            "{HEADER}
2023-10-20,Casa Campione A,45,185s
2023-10-21,Casa Campione B,60,210s"
        );

        let report = StatsImporter::new().import_str(&csv_data).unwrap();

        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.rows_discarded, 0);
        assert_eq!(
            report.rows[0],
            StatsRow::new("2023-10-20", "Casa Campione A", 45, "185s")
        );
    }

    #[test]
    fn test_columns_matched_by_name() {
        let csv_data = "UV, Durata sessione media ,Extra,Nome Tour,Data
75,240s,x,Showroom Principale,2023-10-22";

        let report = StatsImporter::new().import_str(csv_data).unwrap();

        assert_eq!(
            report.rows,
            vec![StatsRow::new("2023-10-22", "Showroom Principale", 75, "240s")]
        );
    }

    #[test]
    fn test_invalid_lines_discarded() {
        let csv_data = format!(
            "{HEADER}\r
2023-10-20,Casa Campione A,45,185s\r
2023-10-21,Casa Campione B,molti,210s\r
2023-10-22,Showroom Principale\r
2023-10-23,Casa Campione A,55 visite,190s\r
2023-10-24,Casa Campione B,,220s\r
2023-10-25,Showroom Principale,95,260s,extra"
        );

        let report = StatsImporter::new().import_str(&csv_data).unwrap();

        let uvs: Vec<i64> = report.rows.iter().map(|r| r.uv).collect();
        assert_eq!(uvs, vec![45, 55, 95]);
        assert_eq!(report.rows_discarded, 3);
        assert_eq!(
            report.discarded[0],
            DiscardedLine {
                line: 3,
                reason: DiscardReason::InvalidUv("molti".to_string()),
            }
        );
        assert_eq!(
            report.discarded[1].reason,
            DiscardReason::TooFewFields { found: 2, expected: 4 }
        );
    }

    #[test]
    fn test_quotes_are_not_special() {
        let csv_data = format!(
            "{HEADER}
2023-10-20,\"Casa, Campione\",45,185s"
        );

        // The quoted comma splits the name, pushing "Campione\"" into the UV slot
        let result = StatsImporter::new().import_str(&csv_data);
        assert!(matches!(result, Err(ImportError::NoValidRows)));
    }

    #[test]
    fn test_empty_file() {
        assert!(matches!(
            StatsImporter::new().import_str(""),
            Err(ImportError::Empty)
        ));
        assert!(matches!(
            StatsImporter::new().import_str(&format!("\n{HEADER}\n\n")),
            Err(ImportError::Empty)
        ));
    }

    #[test]
    fn test_missing_column() {
        let csv_data = "Data,Nome Tour,Durata sessione media
2023-10-20,Casa Campione A,185s";

        match StatsImporter::new().import_str(csv_data) {
            Err(ImportError::MissingColumn(col)) => assert_eq!(col, "UV"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_no_valid_rows() {
        let csv_data = format!(
            "{HEADER}
2023-10-20,Casa Campione A,n/d,185s"
        );

        assert!(matches!(
            StatsImporter::new().import_str(&csv_data),
            Err(ImportError::NoValidRows)
        ));
    }

    #[test]
    fn test_semicolon_delimiter() {
        let csv_data = "Data;Nome Tour;UV;Durata sessione media
2023-10-20;Casa Campione A;45;185s";

        let report = StatsImporter::new()
            .with_delimiter(b';')
            .import_str(csv_data)
            .unwrap();

        assert_eq!(report.rows.len(), 1);
    }

    #[test]
    fn test_is_csv_file() {
        assert!(is_csv_file("stats.csv", ""));
        assert!(is_csv_file("STATS.CSV", ""));
        assert!(is_csv_file("export", "text/csv"));
        assert!(!is_csv_file("stats.xlsx", "application/vnd.ms-excel"));
    }

    #[test]
    fn test_import_from_path() {
        let dir = tempfile::tempdir().unwrap();

        let path = dir.path().join("statistiche.csv");
        std::fs::write(&path, format!("{HEADER}\n2023-10-20,Casa Campione A,45,185s\n")).unwrap();
        assert_eq!(StatsImporter::new().import(&path).unwrap().rows.len(), 1);

        let path = dir.path().join("statistiche.txt");
        std::fs::write(&path, "irrelevant").unwrap();
        assert!(matches!(
            StatsImporter::new().import(&path),
            Err(ImportError::NotCsv)
        ));

        let missing = dir.path().join("mancante.csv");
        assert!(matches!(
            StatsImporter::new().import(&missing),
            Err(ImportError::Read(_))
        ));
    }
}
