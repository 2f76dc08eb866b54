//! Grouped comparison bar chart.
//!
//! One facet per alphabet, average case only: bars grouped by text size and
//! colored per algorithm, with a log-scale y axis so the brute-force bars do
//! not flatten everything else.

use std::path::Path;

use anyhow::{Context, Result};
use log::warn;
use plotters::prelude::*;

use crate::bench::{Algorithm, Alphabet, CaseKind, RunSummary, SizeClass};
use crate::chart::palette::SERIES_COLORS;

const IMAGE_WIDTH: u32 = 1200;
const IMAGE_HEIGHT: u32 = 900;

const BAR_HALF_WIDTH: f64 = 0.11;
const BAR_SPACING: f64 = 0.26;

/// Render the per-alphabet comparison bar chart to `out_path`.
pub fn render_comparison_chart(summaries: &[RunSummary], out_path: &Path) -> Result<()> {
    let average: Vec<&RunSummary> = summaries
        .iter()
        .filter(|s| s.key.case == CaseKind::Average)
        .collect();
    if average.is_empty() {
        warn!("no average-case runs found, skipping comparison chart");
        return Ok(());
    }

    let root = BitMapBackend::new(out_path, (IMAGE_WIDTH, IMAGE_HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled(
        "Average Case Character Comparisons by Algorithm and Alphabet",
        ("sans-serif", 30),
    )?;

    let facets = root.split_evenly((2, 2));

    for (facet_idx, (&alphabet, area)) in Alphabet::ALL.iter().zip(facets.iter()).enumerate() {
        let lookup = |size: SizeClass, algorithm: Algorithm| -> Option<f64> {
            average
                .iter()
                .find(|s| {
                    s.key.alphabet == alphabet
                        && s.key.size == size
                        && s.key.algorithm == algorithm
                })
                .map(|s| s.total_comparisons)
        };

        // Facets do not share a y axis; each scales to its own maximum.
        let mut y_max = 1.0f64;
        for &size in &SizeClass::ALL {
            for &algorithm in &Algorithm::ALL {
                if let Some(v) = lookup(size, algorithm) {
                    y_max = y_max.max(v);
                }
            }
        }
        let y_max = y_max * 2.0;

        let mut chart = ChartBuilder::on(area)
            .caption(format!("Alphabet: {alphabet}"), ("sans-serif", 22))
            .margin(14)
            .x_label_area_size(36)
            .y_label_area_size(64)
            .build_cartesian_2d(-0.5f64..1.5f64, (1.0f64..y_max).log_scale())?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(5)
            .x_label_formatter(&|v: &f64| {
                let idx = v.round();
                if (v - idx).abs() > 0.05 {
                    return String::new();
                }
                match idx as i64 {
                    0 => SizeClass::Small.token().to_string(),
                    1 => SizeClass::Large.token().to_string(),
                    _ => String::new(),
                }
            })
            .y_desc("Total Comparisons")
            .draw()?;

        for (algo_idx, &algorithm) in Algorithm::ALL.iter().enumerate() {
            let color = SERIES_COLORS[algo_idx];
            let offset = (algo_idx as f64 - 1.0) * BAR_SPACING;

            let bars = SizeClass::ALL.iter().enumerate().filter_map(|(i, &size)| {
                let value = lookup(size, algorithm)?;
                let center = i as f64 + offset;
                Some(Rectangle::new(
                    [
                        (center - BAR_HALF_WIDTH, 1.0),
                        (center + BAR_HALF_WIDTH, value.max(1.0)),
                    ],
                    color.filled(),
                ))
            });

            let series = chart.draw_series(bars)?;
            if facet_idx == 0 {
                series.label(algorithm.label()).legend(move |(x, y)| {
                    Rectangle::new([(x, y - 5), (x + 16, y + 5)], color.filled())
                });
            }
        }

        if facet_idx == 0 {
            chart
                .configure_series_labels()
                .background_style(WHITE.mix(0.85))
                .border_style(BLACK)
                .draw()?;
        }
    }

    root.present()
        .with_context(|| format!("failed to write {}", out_path.display()))?;
    Ok(())
}
