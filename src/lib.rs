//! # Intermobil
//!
//! Administration dashboard for the Intermobil virtual tour showcase: a
//! navigation shell, a gallery of virtual tours and a statistics view fed by
//! CSV exports.
//!
//! This crate holds the platform-independent part of the dashboard and the
//! `intermobil-cli` tool. The browser application lives in `intermobil-ui`.
//!
//! ## Modules
//!
//! - [`stats`]: Statistics rows, CSV import, KPI aggregation and export
//! - [`chart`]: Geometry of the visitor chart
//! - [`dashboard`]: Views, theme and tour catalog
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust
//! use intermobil::stats::*;
//!
//! let rows = sample_rows();
//! let snapshot = StatsSnapshot::build(&rows, &SummaryOptions::default());
//!
//! assert_eq!(snapshot.kpis.total_tours, 3);
//! assert_eq!(format_count(snapshot.kpis.unique_visitors), "745");
//! assert_eq!(format_duration(snapshot.kpis.average_seconds), "3m 42s");
//! ```

pub mod chart;
pub mod config;
pub mod dashboard;
pub mod stats;

// Re-export top-level types for convenience
pub use stats::{
    ChartPoint, DateRange, ImportError, ImportReport, ImportResult, Kpis, StatsImporter, StatsRow,
    StatsSnapshot, SummaryOptions,
};

pub use chart::ChartLayout;

pub use dashboard::{ShellState, Theme, TourCard, View};

pub use config::{generate_default_config, Config, ConfigError, DashboardConfig, LoggingConfig};
