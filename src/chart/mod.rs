//! PNG chart rendering over the benchmark data set.
//!
//! Thin glue over plotters, one file per chart kind:
//! - Hilbert curve heatmap of per-iteration comparison counts
//! - Grouped comparison bar chart (per alphabet, average case)
//! - Alphabet-size impact line chart (log-log)

pub mod comparison;
pub mod heatmap;
pub mod palette;
pub mod scaling;

pub use comparison::render_comparison_chart;
pub use heatmap::render_heatmap;
pub use scaling::render_scaling_chart;
