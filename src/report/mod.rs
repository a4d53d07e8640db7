//! Reporting: chart rendering and structured dumps.

pub mod chart;
pub mod json;

// Re-export commonly used items
pub use chart::{render_histogram, render_line_chart, LineStyle, TimeAxis};
pub use json::{persist, to_pretty_json, write_json};
