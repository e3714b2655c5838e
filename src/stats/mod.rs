//! Visitor Statistics
//!
//! This module provides everything behind the statistics view:
//!
//! - **types**: Core data structures (StatsRow, Kpis, ChartPoint, DateRange)
//! - **csv_import**: CSV file import with header validation
//! - **summary**: KPI aggregation, chart series, ordering and formatting
//! - **export**: CSV export of the table
//! - **sample**: Built-in sample rows
//! - **error**: Error types
//!
//! # Example
//!
//! ```rust
//! use intermobil::stats::{StatsImporter, StatsSnapshot, SummaryOptions, format_duration};
//!
//! let csv = "Data,Nome Tour,UV,Durata sessione media
//! 2023-10-20,Casa Campione A,45,185s
//! 2023-10-21,Casa Campione B,60,210s";
//!
//! let report = StatsImporter::new().import_str(csv).unwrap();
//! let snapshot = StatsSnapshot::build(&report.rows, &SummaryOptions::default());
//!
//! assert_eq!(snapshot.kpis.unique_visitors, 105);
//! assert_eq!(format_duration(snapshot.kpis.average_seconds), "3m 18s");
//! assert_eq!(snapshot.table[0].date, "2023-10-21");
//! ```

pub mod csv_import;
pub mod error;
pub mod export;
pub mod parse;
pub mod sample;
pub mod summary;
pub mod types;

pub use csv_import::{is_csv_file, DiscardReason, DiscardedLine, ImportReport, StatsImporter};
pub use error::{ImportError, ImportResult};
pub use export::{to_csv_string, write_csv, write_csv_with_delimiter};
pub use parse::{parse_leading_int, parse_seconds};
pub use sample::sample_rows;
pub use summary::{
    chart_series, compute_kpis, format_count, format_duration, short_date_label,
    sort_by_date_desc, StatsSnapshot, SummaryOptions, DEFAULT_CHART_WINDOW,
    DEFAULT_TOTAL_REQUESTS,
};
pub use types::{parse_date, ChartPoint, DateRange, Kpis, StatsRow, REQUIRED_HEADERS};
