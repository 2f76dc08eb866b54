//! Benchmark data set access.
//!
//! This module provides:
//! - Typed run keys parsed from the fixed dot-delimited file naming schema
//! - CSV loading of per-iteration comparison counts
//! - Directory scanning into per-run summaries

pub mod catalog;
pub mod key;
pub mod series;

pub use catalog::{scan_runs, RunSummary};
pub use key::{Algorithm, Alphabet, CaseKind, KeyError, RunKey, SizeClass};
pub use series::{load_comparison_series, SeriesError};
