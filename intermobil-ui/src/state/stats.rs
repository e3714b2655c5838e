//! Statistics View State
//!
//! Rows of the statistics view and the date filter. The view owns this
//! state, so leaving it and coming back starts again from the sample data.

use chrono::NaiveDate;
use leptos::*;

use intermobil::stats::{sample_rows, ImportResult, StatsImporter, StatsSnapshot, SummaryOptions};
use intermobil::{DateRange, StatsRow};

/// Reactive state of the statistics view
#[derive(Clone, Copy)]
pub struct StatsState {
    /// Current rows, in the order they were loaded
    pub rows: RwSignal<Vec<StatsRow>>,
    /// Date filter
    pub range: RwSignal<DateRange>,
    /// KPIs, chart series and sorted table
    pub snapshot: Memo<StatsSnapshot>,
}

impl StatsState {
    /// Create the state, seeded with the sample rows
    pub fn new(options: SummaryOptions) -> Self {
        let rows = create_rw_signal(sample_rows());
        let range = create_rw_signal(options.range);

        let snapshot = create_memo(move |_| {
            let options = SummaryOptions {
                range: range.get(),
                ..options
            };
            rows.with(|rows| StatsSnapshot::build(rows, &options))
        });

        Self {
            rows,
            range,
            snapshot,
        }
    }

    /// Replace the rows with the content of a CSV file.
    ///
    /// On error the current rows are kept.
    pub fn apply_import(&self, text: &str) -> ImportResult<usize> {
        let report = StatsImporter::new().import_str(text)?;
        let count = report.rows.len();
        self.rows.set(report.rows);
        Ok(count)
    }

    pub fn set_from(&self, date: Option<NaiveDate>) {
        self.range.update(|r| r.from = date);
    }

    pub fn set_to(&self, date: Option<NaiveDate>) {
        self.range.update(|r| r.to = date);
    }
}

/// Parse the value of an `<input type="date">`; empty means unset
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Data,Nome Tour,UV,Durata sessione media";

    #[test]
    fn test_import_replaces_rows() {
        let runtime = create_runtime();
        let state = StatsState::new(SummaryOptions::default());

        assert_eq!(state.snapshot.get().table.len(), 10);

        let csv = format!("{HEADER}\n2024-01-01,Casa Campione A,5,60s\n2024-01-02,Casa Campione B,7,120s");
        assert_eq!(state.apply_import(&csv).unwrap(), 2);

        let snapshot = state.snapshot.get();
        assert_eq!(snapshot.table[0].date, "2024-01-02");
        assert_eq!(snapshot.kpis.unique_visitors, 12);

        runtime.dispose();
    }

    #[test]
    fn test_failed_import_keeps_rows() {
        let runtime = create_runtime();
        let state = StatsState::new(SummaryOptions::default());

        assert!(state.apply_import("Data,Nome Tour,UV\n2024-01-01,A,5").is_err());
        assert_eq!(state.rows.get().len(), 10);
        assert_eq!(state.snapshot.get().kpis.unique_visitors, 745);

        runtime.dispose();
    }

    #[test]
    fn test_date_filter() {
        let runtime = create_runtime();
        let state = StatsState::new(SummaryOptions::default());

        state.set_from(parse_date_input("2023-10-28"));
        assert_eq!(state.snapshot.get().table.len(), 2);

        state.set_from(parse_date_input(""));
        assert_eq!(state.snapshot.get().table.len(), 10);

        runtime.dispose();
    }
}
