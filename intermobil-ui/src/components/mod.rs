//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod icons;
pub mod sidebar;
pub mod header;
pub mod tour_card;
pub mod kpi_card;
pub mod stats_table;
pub mod chart;

pub use sidebar::Sidebar;
pub use header::Header;
pub use tour_card::TourCard;
pub use kpi_card::KpiCard;
pub use stats_table::StatsTable;
pub use chart::VisitorChart;
