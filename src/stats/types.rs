//! Statistics data types
//!
//! Core data structures for the visitor statistics view:
//! - [`StatsRow`]: one line of the detail table
//! - [`Kpis`]: the four summary cards
//! - [`ChartPoint`]: one sample of the visitor chart
//! - [`DateRange`]: optional inclusive date bounds

use chrono::NaiveDate;
use serde::Serialize;

use super::parse::parse_seconds;
use super::summary::DEFAULT_TOTAL_REQUESTS;

/// Column headers of the statistics CSV, in export order.
pub const HEADER_DATE: &str = "Data";
pub const HEADER_NAME: &str = "Nome Tour";
pub const HEADER_UV: &str = "UV";
pub const HEADER_AVG_TIME: &str = "Durata sessione media";

/// All columns an import must provide.
pub const REQUIRED_HEADERS: [&str; 4] = [HEADER_DATE, HEADER_NAME, HEADER_UV, HEADER_AVG_TIME];

/// Date formats accepted when comparing rows by calendar date
const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%d/%m/%Y", "%d-%m-%Y"];

/// A single row of tour statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsRow {
    /// Day the figures refer to, as written in the source (usually `YYYY-MM-DD`)
    #[serde(rename = "Data")]
    pub date: String,
    /// Tour name
    #[serde(rename = "Nome Tour")]
    pub name: String,
    /// Unique visitors
    #[serde(rename = "UV")]
    pub uv: i64,
    /// Average session duration, e.g. `"210s"`
    #[serde(rename = "Durata sessione media")]
    pub avg_time: String,
}

impl StatsRow {
    /// Create a new row
    pub fn new(date: &str, name: &str, uv: i64, avg_time: &str) -> Self {
        Self {
            date: date.to_string(),
            name: name.to_string(),
            uv,
            avg_time: avg_time.to_string(),
        }
    }

    /// Calendar date of this row, if the date string is recognizable
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        parse_date(&self.date)
    }

    /// Average session duration in seconds (0 when unparsable)
    pub fn seconds(&self) -> f64 {
        parse_seconds(&self.avg_time)
    }
}

/// Parse a date string using the formats the dashboard understands
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

/// Summary figures shown on the KPI cards
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Kpis {
    /// Distinct tour names
    pub total_tours: usize,
    /// Sum of unique visitors
    pub unique_visitors: i64,
    /// Mean session duration in seconds
    pub average_seconds: f64,
    /// Information requests (not part of the CSV)
    pub total_requests: u64,
}

impl Default for Kpis {
    fn default() -> Self {
        Self {
            total_tours: 0,
            unique_visitors: 0,
            average_seconds: 0.0,
            total_requests: DEFAULT_TOTAL_REQUESTS,
        }
    }
}

/// One sample of the visitor chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    /// Short `MM/DD` label
    pub label: String,
    pub uv: i64,
    /// Average session duration in seconds
    pub avg_time: f64,
}

/// Inclusive date bounds; an unset bound does not filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    /// Range with both bounds
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
        }
    }

    /// True when neither bound is set
    pub fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// Check whether a row falls inside the range.
    ///
    /// Rows with an unrecognizable date only pass an unbounded range.
    pub fn contains(&self, row: &StatsRow) -> bool {
        if self.is_unbounded() {
            return true;
        }
        let Some(date) = row.calendar_date() else {
            return false;
        };
        self.from.map_or(true, |from| date >= from) && self.to.map_or(true, |to| date <= to)
    }
}
