//! State Management
//!
//! Global shell state and the statistics view state.

pub mod global;
pub mod stats;

pub use global::{alert, provide_global_state, use_global_state, GlobalState};
pub use stats::{parse_date_input, StatsState};
