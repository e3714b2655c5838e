//! Dashboard shell
//!
//! Navigation state and static content shared by the UI and the CLI.

pub mod catalog;
pub mod shell;

pub use catalog::{TourCard, DEMO_TOURS, MAIN_TOUR};
pub use shell::{ShellState, Theme, View};
