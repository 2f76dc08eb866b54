//! Hilbert curve heatmap rendering.
//!
//! Shades every grid cell with the mako palette, normalized to the grid
//! maximum, and draws the cells as filled rectangles. Cell shading is
//! parallelized with rayon; the drawing pass itself is sequential.

use std::path::Path;

use anyhow::{Context, Result};
use plotters::prelude::*;
use rayon::prelude::*;

use crate::chart::palette;
use crate::hilbert::HilbertGrid;

/// Output image edge length in pixels.
const IMAGE_SIZE: u32 = 900;

/// Render `grid` as a square heatmap PNG at `out_path`.
pub fn render_heatmap(grid: &HilbertGrid, title: &str, out_path: &Path) -> Result<()> {
    let side = grid.side();
    let max = grid.max_value();

    // Shade all cells up front; an all-zero grid maps uniformly to the dark
    // end of the palette.
    let colors: Vec<RGBColor> = grid
        .cells()
        .par_iter()
        .map(|&v| {
            let t = if max > 0.0 { v / max } else { 0.0 };
            palette::mako(t)
        })
        .collect();

    let root = BitMapBackend::new(out_path, (IMAGE_SIZE, IMAGE_SIZE)).into_drawing_area();
    root.fill(&WHITE)?;

    let side = side as i32;
    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 26))
        .margin(16)
        .build_cartesian_2d(0..side, 0..side)?;

    chart.draw_series((0..side * side).map(|idx| {
        let x = idx % side;
        let y = idx / side;
        Rectangle::new(
            [(x, y), (x + 1, y + 1)],
            colors[idx as usize].filled(),
        )
    }))?;

    root.present()
        .with_context(|| format!("failed to write {}", out_path.display()))?;
    Ok(())
}
