//! Metron - benchmark chart generation from CSV timing data.
//!
//! This library turns per-iteration comparison counts recorded by an external
//! benchmarking program into chart-ready data:
//! - Distribution-preserving quantile resampling of numeric series
//! - Hilbert curve placement of series onto square grids for heatmaps
//! - Typed run keys and CSV loading for the benchmark data set
//! - PNG chart rendering (bar, line, heatmap) via plotters

pub mod bench;
pub mod chart;
pub mod config;
pub mod hilbert;
pub mod resample;
