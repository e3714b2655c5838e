//! Pages
//!
//! Top-level components for each sidebar view.

pub mod tour;
pub mod stats;
pub mod placeholder;

pub use tour::Tour;
pub use stats::Stats;
pub use placeholder::Placeholder;
