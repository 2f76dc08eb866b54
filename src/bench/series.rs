//! CSV loading of per-iteration comparison counts.
//!
//! Each row of a run file carries counts of successful and unsuccessful
//! character comparisons for one benchmark iteration. Charts consume the
//! per-row total.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors from loading a comparison series.
#[derive(Debug, Error)]
pub enum SeriesError {
    #[error("failed to read CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// One benchmark iteration as recorded by the measuring program.
#[derive(Debug, Clone, Copy, Deserialize)]
struct ComparisonRow {
    successful_comparisons: u64,
    unsuccessful_comparisons: u64,
}

impl ComparisonRow {
    fn total(self) -> f64 {
        (self.successful_comparisons + self.unsuccessful_comparisons) as f64
    }
}

/// Read the per-iteration total comparison counts from CSV data.
pub fn read_comparison_series<R: Read>(reader: R) -> Result<Vec<f64>, SeriesError> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut series = Vec::new();
    for row in rdr.deserialize::<ComparisonRow>() {
        series.push(row?.total());
    }
    Ok(series)
}

/// Load the per-iteration total comparison counts from a run file.
pub fn load_comparison_series<P: AsRef<Path>>(path: P) -> Result<Vec<f64>, SeriesError> {
    let mut rdr = csv::Reader::from_path(path)?;
    let mut series = Vec::new();
    for row in rdr.deserialize::<ComparisonRow>() {
        series.push(row?.total());
    }
    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
successful_comparisons,unsuccessful_comparisons
10,5
0,0
3,17
";

    #[test]
    fn test_read_series() {
        let series = read_comparison_series(SAMPLE.as_bytes()).unwrap();
        assert_eq!(series, vec![15.0, 0.0, 20.0]);
    }

    #[test]
    fn test_read_empty_file() {
        let series =
            read_comparison_series("successful_comparisons,unsuccessful_comparisons\n".as_bytes())
                .unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let data = "\
iteration,successful_comparisons,unsuccessful_comparisons
0,1,2
1,3,4
";
        let series = read_comparison_series(data.as_bytes()).unwrap();
        assert_eq!(series, vec![3.0, 7.0]);
    }

    #[test]
    fn test_malformed_row_is_an_error() {
        let data = "\
successful_comparisons,unsuccessful_comparisons
1,not_a_number
";
        assert!(read_comparison_series(data.as_bytes()).is_err());
    }
}
