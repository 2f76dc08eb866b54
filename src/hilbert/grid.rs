//! Placement of scalar series onto square grids along the Hilbert curve.
//!
//! A [`HilbertGrid`] holds one `f64` per cell of a `2^p x 2^p` grid. Values
//! are assigned in curve order, so consecutive entries of the input series
//! stay spatially adjacent on the grid.

use log::debug;

use crate::hilbert::curve::{d2xy, order_for_cells, side_for_order};
use crate::resample::{resample_distribution, ResampleError};

/// How a series is laid out over the curve cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillMode {
    /// Assign value k to curve coordinate k; cells beyond the series length
    /// stay zero.
    Direct,
    /// Resample the series (distribution-preserving) to exactly the number
    /// of curve cells, so the full grid is covered.
    Stretch,
}

/// Configurable cap on the grid resolution.
///
/// The curve order derived from the series length is reduced by
/// `order_offset` but never below `min_order`. This replaces the hidden
/// "reduce p by a constant" tuning of typical heatmap scripts with explicit
/// configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolutionCap {
    pub order_offset: u32,
    pub min_order: u32,
}

impl ResolutionCap {
    /// No reduction; the grid is exactly large enough for the series.
    pub const NONE: Self = Self {
        order_offset: 0,
        min_order: 1,
    };

    pub fn new(order_offset: u32) -> Self {
        Self {
            order_offset,
            min_order: 1,
        }
    }

    fn apply(self, order: u32) -> u32 {
        order.saturating_sub(self.order_offset).max(self.min_order)
    }
}

impl Default for ResolutionCap {
    fn default() -> Self {
        Self::NONE
    }
}

/// Square grid of scalar values laid out along the Hilbert curve.
#[derive(Debug, Clone)]
pub struct HilbertGrid {
    order: u32,
    side: u32,
    /// Row-major cell values, indexed as `y * side + x`.
    cells: Vec<f64>,
}

impl HilbertGrid {
    /// Build a grid from a series of scalar values.
    ///
    /// In [`FillMode::Stretch`] the resolution cap is applied and the series
    /// is resampled to cover every cell. In [`FillMode::Direct`] the cap is
    /// ignored where it would shrink the grid below the series length: the
    /// order is always large enough to hold every value, so no data is
    /// truncated.
    ///
    /// An empty series yields a zero-filled grid at `cap.min_order`.
    pub fn from_series(
        values: &[f64],
        mode: FillMode,
        cap: ResolutionCap,
    ) -> Result<Self, ResampleError> {
        let fitted_order = order_for_cells(values.len());
        let order = match mode {
            FillMode::Stretch => cap.apply(fitted_order),
            // Direct placement must fit every value (never truncate).
            FillMode::Direct => cap.apply(fitted_order).max(fitted_order),
        };

        let side = side_for_order(order);
        let cell_count = (side as usize) * (side as usize);
        let mut grid = Self {
            order,
            side,
            cells: vec![0.0; cell_count],
        };

        if values.is_empty() {
            return Ok(grid);
        }

        debug!(
            "mapping {} values onto {}x{} grid (order {order}, {mode:?})",
            values.len(),
            side,
            side
        );

        match mode {
            FillMode::Direct => {
                for (d, &v) in values.iter().enumerate() {
                    let (x, y) = d2xy(side, d as u32);
                    grid.cells[(y * side + x) as usize] = v;
                }
            }
            FillMode::Stretch => {
                let resampled = resample_distribution(values, cell_count)?;
                for (d, &v) in resampled.iter().enumerate() {
                    let (x, y) = d2xy(side, d as u32);
                    grid.cells[(y * side + x) as usize] = v;
                }
            }
        }

        Ok(grid)
    }

    /// Curve order `p`; the side length is `2^p`.
    #[inline]
    pub fn order(&self) -> u32 {
        self.order
    }

    /// Grid side length.
    #[inline]
    pub fn side(&self) -> u32 {
        self.side
    }

    /// Value at grid coordinate (x, y).
    #[inline]
    pub fn value(&self, x: u32, y: u32) -> f64 {
        self.cells[(y * self.side + x) as usize]
    }

    /// Row-major cell values.
    #[inline]
    pub fn cells(&self) -> &[f64] {
        &self.cells
    }

    /// Largest cell value, or 0.0 for an all-zero grid.
    pub fn max_value(&self) -> f64 {
        self.cells.iter().copied().fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_series_yields_zero_grid() {
        let grid = HilbertGrid::from_series(&[], FillMode::Stretch, ResolutionCap::NONE).unwrap();
        assert_eq!(grid.side(), 2);
        assert!(grid.cells().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_direct_fill_order_two() {
        // 10 values on a 4x4 grid: the first 10 curve cells carry the values
        // in order, the remaining 6 stay zero.
        let values: Vec<f64> = (1..=10).map(f64::from).collect();
        let grid = HilbertGrid::from_series(&values, FillMode::Direct, ResolutionCap::NONE).unwrap();

        assert_eq!(grid.order(), 2);
        assert_eq!(grid.side(), 4);

        for (d, &v) in values.iter().enumerate() {
            let (x, y) = d2xy(4, d as u32);
            assert_eq!(grid.value(x, y), v, "wrong value at curve distance {d}");
        }

        let zeros = grid.cells().iter().filter(|&&v| v == 0.0).count();
        assert_eq!(zeros, 6);
    }

    #[test]
    fn test_stretch_covers_every_cell() {
        let values: Vec<f64> = (1..=10).map(f64::from).collect();
        let grid =
            HilbertGrid::from_series(&values, FillMode::Stretch, ResolutionCap::NONE).unwrap();

        assert_eq!(grid.side(), 4);
        // All input values are >= 1, so the resampled grid has no zero cells.
        assert!(grid.cells().iter().all(|&v| v >= 1.0));
        assert_eq!(grid.max_value(), 10.0);
    }

    #[test]
    fn test_grid_fits_series_length() {
        for n in [0usize, 1, 3, 4, 5, 16, 17, 100, 1023] {
            let values = vec![1.0; n];
            let grid =
                HilbertGrid::from_series(&values, FillMode::Direct, ResolutionCap::NONE).unwrap();
            let cells = (grid.side() as usize) * (grid.side() as usize);
            assert!(cells >= n, "grid too small for n={n}");
        }
    }

    #[test]
    fn test_resolution_cap_shrinks_stretch_grid() {
        let values = vec![2.0; 4096]; // fits order 6 exactly
        let cap = ResolutionCap::new(4);
        let grid = HilbertGrid::from_series(&values, FillMode::Stretch, cap).unwrap();

        assert_eq!(grid.order(), 2);
        // Compressed, not truncated: every cell still carries the value.
        assert!(grid.cells().iter().all(|&v| (v - 2.0).abs() < 1e-9));
    }

    #[test]
    fn test_resolution_cap_never_truncates_direct_fill() {
        let values = vec![1.0; 64];
        let cap = ResolutionCap::new(10);
        let grid = HilbertGrid::from_series(&values, FillMode::Direct, cap).unwrap();

        let cells = (grid.side() as usize) * (grid.side() as usize);
        assert!(cells >= values.len());
        assert_eq!(grid.cells().iter().filter(|&&v| v == 1.0).count(), 64);
    }

    #[test]
    fn test_cap_floor_is_min_order() {
        let values = vec![1.0, 2.0, 3.0];
        let cap = ResolutionCap::new(8);
        let grid = HilbertGrid::from_series(&values, FillMode::Stretch, cap).unwrap();
        assert_eq!(grid.order(), 1);
    }
}
