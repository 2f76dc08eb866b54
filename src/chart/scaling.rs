//! Alphabet-size impact line chart.
//!
//! Total comparisons against alphabet symbol count, large texts and average
//! case only, one series per algorithm on log-log axes.

use std::path::Path;

use anyhow::{Context, Result};
use log::warn;
use plotters::prelude::*;

use crate::bench::{Algorithm, CaseKind, RunSummary, SizeClass};
use crate::chart::palette::SERIES_COLORS;

const IMAGE_WIDTH: u32 = 1000;
const IMAGE_HEIGHT: u32 = 640;

/// Render the alphabet-size impact chart to `out_path`.
pub fn render_scaling_chart(summaries: &[RunSummary], out_path: &Path) -> Result<()> {
    // One point per (algorithm, alphabet) pair.
    let points: Vec<(Algorithm, f64, f64)> = summaries
        .iter()
        .filter(|s| s.key.size == SizeClass::Large && s.key.case == CaseKind::Average)
        .map(|s| {
            (
                s.key.algorithm,
                f64::from(s.key.alphabet.symbol_count()),
                s.total_comparisons,
            )
        })
        .collect();
    if points.is_empty() {
        warn!("no large average-case runs found, skipping scaling chart");
        return Ok(());
    }

    let y_min = points.iter().map(|p| p.2).fold(f64::MAX, f64::min).max(1.0) / 2.0;
    let y_max = points.iter().map(|p| p.2).fold(1.0f64, f64::max) * 2.0;

    let root = BitMapBackend::new(out_path, (IMAGE_WIDTH, IMAGE_HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Algorithm Performance vs. Alphabet Size (Large Texts, Average Case)",
            ("sans-serif", 24),
        )
        .margin(18)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(
            (1.5f64..320.0f64).log_scale(),
            (y_min..y_max).log_scale(),
        )?;

    chart
        .configure_mesh()
        .x_desc("Alphabet Size (log scale)")
        .y_desc("Total Comparisons (log scale)")
        .x_label_formatter(&|v: &f64| format!("{}", v.round() as u64))
        .draw()?;

    for (algo_idx, &algorithm) in Algorithm::ALL.iter().enumerate() {
        let color = SERIES_COLORS[algo_idx];

        let mut line: Vec<(f64, f64)> = points
            .iter()
            .filter(|p| p.0 == algorithm)
            .map(|p| (p.1, p.2))
            .collect();
        if line.is_empty() {
            continue;
        }
        line.sort_by(|a, b| a.0.total_cmp(&b.0));

        chart
            .draw_series(LineSeries::new(line.iter().copied(), color.stroke_width(2)))?
            .label(algorithm.label())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 18, y)], color.stroke_width(2))
            });

        chart.draw_series(
            line.iter()
                .map(|&(x, y)| Circle::new((x, y), 4, color.filled())),
        )?;
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.85))
        .border_style(BLACK)
        .draw()?;

    root.present()
        .with_context(|| format!("failed to write {}", out_path.display()))?;
    Ok(())
}
