//! Aggregation of statistics rows into what the dashboard displays.

use std::cmp::Ordering;
use std::collections::HashSet;

use super::types::{ChartPoint, DateRange, Kpis, StatsRow};

/// Default number of rows plotted on the chart
pub const DEFAULT_CHART_WINDOW: usize = 30;

/// Default static figure for the requests card
pub const DEFAULT_TOTAL_REQUESTS: u64 = 5;

/// Settings that shape a [`StatsSnapshot`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryOptions {
    /// Number of trailing rows plotted
    pub chart_window: usize,
    /// Figure shown on the requests card
    pub total_requests: u64,
    /// Rows outside this range are ignored
    pub range: DateRange,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            chart_window: DEFAULT_CHART_WINDOW,
            total_requests: DEFAULT_TOTAL_REQUESTS,
            range: DateRange::default(),
        }
    }
}

/// Everything the statistics view renders, derived from one set of rows
#[derive(Debug, Clone, PartialEq)]
pub struct StatsSnapshot {
    pub kpis: Kpis,
    /// Trailing rows in input order
    pub chart: Vec<ChartPoint>,
    /// All rows, newest first
    pub table: Vec<StatsRow>,
}

impl StatsSnapshot {
    /// Build a snapshot from rows in input order
    pub fn build(rows: &[StatsRow], options: &SummaryOptions) -> Self {
        let rows: Vec<StatsRow> = rows
            .iter()
            .filter(|row| options.range.contains(row))
            .cloned()
            .collect();

        let kpis = compute_kpis(&rows, options.total_requests);
        let chart = chart_series(&rows, options.chart_window);

        let mut table = rows;
        sort_by_date_desc(&mut table);

        Self { kpis, chart, table }
    }
}

/// Compute the KPI figures for a set of rows
pub fn compute_kpis(rows: &[StatsRow], total_requests: u64) -> Kpis {
    let tours: HashSet<&str> = rows.iter().map(|r| r.name.as_str()).collect();

    // Clamps instead of wrapping on absurd UV values
    let unique_visitors = rows.iter().map(|r| r.uv).fold(0i64, i64::saturating_add);

    let average_seconds = if rows.is_empty() {
        0.0
    } else {
        rows.iter().map(StatsRow::seconds).sum::<f64>() / rows.len() as f64
    };

    Kpis {
        total_tours: tours.len(),
        unique_visitors,
        average_seconds,
        total_requests,
    }
}

/// Chart samples for the last `window` rows, keeping input order
pub fn chart_series(rows: &[StatsRow], window: usize) -> Vec<ChartPoint> {
    let start = rows.len().saturating_sub(window);
    rows[start..]
        .iter()
        .map(|row| ChartPoint {
            label: short_date_label(&row.date),
            uv: row.uv,
            avg_time: row.seconds(),
        })
        .collect()
}

/// Sort rows newest first.
///
/// Rows whose date cannot be parsed go last; equal dates keep their order.
pub fn sort_by_date_desc(rows: &mut [StatsRow]) {
    rows.sort_by(|a, b| match (a.calendar_date(), b.calendar_date()) {
        (Some(da), Some(db)) => db.cmp(&da),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

/// `2023-10-20` → `10/20`: drop the year, turn the first dash into a slash
pub fn short_date_label(date: &str) -> String {
    let rest: String = date.chars().skip(5).collect();
    rest.replacen('-', "/", 1)
}

/// Format seconds as `"{m}m {s}s"`.
///
/// Seconds are rounded first so that 119.6 reads `2m 0s`.
pub fn format_duration(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "0m 0s".to_string();
    }
    let total = seconds.round() as u64;
    format!("{}m {}s", total / 60, total % 60)
}

/// Group digits with dots, the Italian way: `1234567` → `1.234.567`
pub fn format_count(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::sample::sample_rows;
    use chrono::NaiveDate;

    #[test]
    fn test_sample_kpis() {
        let kpis = compute_kpis(&sample_rows(), DEFAULT_TOTAL_REQUESTS);

        assert_eq!(kpis.total_tours, 3);
        assert_eq!(kpis.unique_visitors, 745);
        assert!((kpis.average_seconds - 222.0).abs() < 1e-9);
        assert_eq!(format_duration(kpis.average_seconds), "3m 42s");
        assert_eq!(kpis.total_requests, 5);
    }

    #[test]
    fn test_empty_kpis() {
        let kpis = compute_kpis(&[], 5);
        assert_eq!(kpis.total_tours, 0);
        assert_eq!(kpis.unique_visitors, 0);
        assert_eq!(format_duration(kpis.average_seconds), "0m 0s");
    }

    #[test]
    fn test_unparsable_time_counts_as_zero() {
        let rows = vec![
            StatsRow::new("2023-10-20", "A", 10, "100s"),
            StatsRow::new("2023-10-21", "A", 20, "n/d"),
        ];
        let kpis = compute_kpis(&rows, 0);
        assert_eq!(kpis.total_tours, 1);
        assert_eq!(kpis.unique_visitors, 30);
        assert_eq!(kpis.average_seconds, 50.0);
    }

    #[test]
    fn test_unique_visitors_saturate() {
        let rows = vec![
            StatsRow::new("2023-10-20", "A", i64::MAX, "10s"),
            StatsRow::new("2023-10-21", "B", 1, "10s"),
        ];
        let kpis = compute_kpis(&rows, 5);
        assert_eq!(kpis.unique_visitors, i64::MAX);

        let snapshot = StatsSnapshot::build(&rows, &SummaryOptions::default());
        assert_eq!(snapshot.kpis.unique_visitors, i64::MAX);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0.0), "0m 0s");
        assert_eq!(format_duration(59.4), "0m 59s");
        assert_eq!(format_duration(185.0), "3m 5s");
        assert_eq!(format_duration(119.6), "2m 0s");
        assert_eq!(format_duration(f64::NAN), "0m 0s");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(745), "745");
        assert_eq!(format_count(1000), "1.000");
        assert_eq!(format_count(1234567), "1.234.567");
        assert_eq!(format_count(-12345), "-12.345");
    }

    #[test]
    fn test_sort_desc_with_unparsable_dates() {
        let mut rows = vec![
            StatsRow::new("2023-10-21", "A", 1, "1s"),
            StatsRow::new("n/d", "B", 2, "1s"),
            StatsRow::new("2023-10-23", "C", 3, "1s"),
            StatsRow::new("2023-10-21", "D", 4, "1s"),
        ];
        sort_by_date_desc(&mut rows);

        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["C", "A", "D", "B"]);
    }

    #[test]
    fn test_chart_series_keeps_input_order() {
        let rows: Vec<StatsRow> = (1..=35)
            .map(|day| {
                let date = NaiveDate::from_ymd_opt(2023, 12, 1).unwrap()
                    + chrono::Duration::days(35 - day);
                StatsRow::new(&date.format("%Y-%m-%d").to_string(), "A", day, "60s")
            })
            .collect();

        let chart = chart_series(&rows, 30);
        assert_eq!(chart.len(), 30);
        assert_eq!(chart[0].uv, 6);
        assert_eq!(chart[29].uv, 35);
        assert_eq!(chart[29].label, "12/01");
        assert_eq!(chart[29].avg_time, 60.0);
    }

    #[test]
    fn test_short_date_label() {
        assert_eq!(short_date_label("2023-10-20"), "10/20");
        assert_eq!(short_date_label("2023"), "");
        assert_eq!(short_date_label("20/10/2023"), "/2023");
    }

    #[test]
    fn test_snapshot() {
        let snapshot = StatsSnapshot::build(&sample_rows(), &SummaryOptions::default());

        assert_eq!(snapshot.table.len(), 10);
        assert_eq!(snapshot.table[0].date, "2023-10-29");
        assert_eq!(snapshot.table[9].date, "2023-10-20");
        assert_eq!(snapshot.chart[0].label, "10/20");
        assert_eq!(
            snapshot.kpis.unique_visitors,
            snapshot.table.iter().map(|r| r.uv).sum::<i64>()
        );
    }

    #[test]
    fn test_snapshot_with_range() {
        let options = SummaryOptions {
            range: DateRange::new(
                NaiveDate::from_ymd_opt(2023, 10, 25).unwrap(),
                NaiveDate::from_ymd_opt(2023, 10, 27).unwrap(),
            ),
            ..SummaryOptions::default()
        };
        let snapshot = StatsSnapshot::build(&sample_rows(), &options);

        let dates: Vec<&str> = snapshot.table.iter().map(|r| r.date.as_str()).collect();
        assert_eq!(dates, vec!["2023-10-27", "2023-10-26", "2023-10-25"]);
        assert_eq!(snapshot.kpis.unique_visitors, 95 + 65 + 110);
        assert_eq!(snapshot.chart.len(), 3);
    }
}
