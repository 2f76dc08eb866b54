//! Hilbert curve algorithms and grid mapping.
//!
//! This module provides:
//! - Core Hilbert curve coordinate transformation algorithms
//! - Placement of scalar series onto square grids along the curve

pub mod curve;
pub mod grid;

pub use curve::{d2xy, order_for_cells, side_for_order, xy2d};
pub use grid::{FillMode, HilbertGrid, ResolutionCap};
