//! Distribution-preserving resampling of numeric series.
//!
//! Maps a series of length N to a series of length M by sampling the
//! empirical quantile function of the input, so the output approximates the
//! input's distribution shape instead of interpolating the raw sequence.

use thiserror::Error;

/// Errors from [`resample_distribution`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResampleError {
    /// The requested output length was zero.
    #[error("resample target length must be at least 1")]
    ZeroTarget,
}

/// Resample `data` to exactly `target_len` values, preserving its empirical
/// distribution.
///
/// The input is sorted ascending and paired with cumulative probabilities
/// `i / (N - 1)` (a single-point input maps to the constant probability 0).
/// The output is the linear interpolation of `target_len` evenly spaced
/// quantiles in `[0, 1]` against those (probability, value) pairs.
///
/// An empty input yields an empty output. A zero `target_len` is an error;
/// no partial output is produced.
pub fn resample_distribution(data: &[f64], target_len: usize) -> Result<Vec<f64>, ResampleError> {
    if target_len == 0 {
        return Err(ResampleError::ZeroTarget);
    }
    if data.is_empty() {
        return Ok(Vec::new());
    }

    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);
    let n = sorted.len();

    if n == 1 {
        return Ok(vec![sorted[0]; target_len]);
    }

    let last = n - 1;
    let out = (0..target_len)
        .map(|k| {
            // Target quantile in [0, 1]; a single output point samples the minimum.
            let q = if target_len == 1 {
                0.0
            } else {
                k as f64 / (target_len - 1) as f64
            };

            // Position of q on the sorted axis: q * (N - 1) lands between two
            // adjacent order statistics.
            let pos = q * last as f64;
            let lo = pos.floor() as usize;
            if lo >= last {
                sorted[last]
            } else {
                let frac = pos - lo as f64;
                sorted[lo] + (sorted[lo + 1] - sorted[lo]) * frac
            }
        })
        .collect();

    Ok(out)
}
