//! Metron - benchmark chart generator.
//!
//! Reads CSV comparison data produced by an external benchmarking program and
//! renders the comparison bar chart, the alphabet-size impact chart, and
//! Hilbert curve heatmaps for the heavyweight runs.

#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use env_logger::Env;
use log::{info, warn};

use metron::bench::{load_comparison_series, scan_runs, CaseKind, RunSummary, SizeClass};
use metron::chart::{render_comparison_chart, render_heatmap, render_scaling_chart};
use metron::config::ChartConfig;
use metron::hilbert::{FillMode, HilbertGrid, ResolutionCap};

#[derive(Debug, Parser)]
#[command(name = "metron", version, about = "Generate benchmark charts from CSV timing data")]
struct Args {
    /// Directory holding the benchmark run CSV files.
    #[arg(long, default_value = "out")]
    data_dir: PathBuf,

    /// Directory chart PNGs are written to.
    #[arg(long, default_value = "assets")]
    assets_dir: PathBuf,

    /// Heatmap resolution cap: the curve order derived from the series
    /// length is reduced by this many levels (each level halves the side).
    #[arg(long, default_value_t = 4)]
    heatmap_order_offset: u32,

    /// Skip heatmap generation.
    #[arg(long)]
    no_heatmaps: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = ChartConfig {
        data_dir: args.data_dir,
        assets_dir: args.assets_dir,
        heatmap_cap: ResolutionCap::new(args.heatmap_order_offset),
    };

    let summaries = scan_runs(config.data_dir())?;
    if summaries.is_empty() {
        bail!(
            "no usable run files found in {}",
            config.data_dir().display()
        );
    }

    fs::create_dir_all(&config.assets_dir)
        .with_context(|| format!("failed to create {}", config.assets_dir.display()))?;

    let comparison_path = config.chart_path("comparison_chart.png");
    render_comparison_chart(&summaries, &comparison_path)?;
    info!("saved {}", comparison_path.display());

    let scaling_path = config.chart_path("alphabet_size_impact.png");
    render_scaling_chart(&summaries, &scaling_path)?;
    info!("saved {}", scaling_path.display());

    if !args.no_heatmaps {
        fs::create_dir_all(config.heatmap_dir())
            .with_context(|| format!("failed to create {}", config.heatmap_dir().display()))?;
        generate_heatmaps(&config, &summaries)?;
    }

    Ok(())
}

/// Generate a heatmap for every large-text worst and average case run.
fn generate_heatmaps(config: &ChartConfig, summaries: &[RunSummary]) -> Result<()> {
    let heavyweight = summaries.iter().filter(|s| {
        s.key.size == SizeClass::Large
            && matches!(s.key.case, CaseKind::Worst | CaseKind::Average)
    });

    for summary in heavyweight {
        let series = load_comparison_series(&summary.path)
            .with_context(|| format!("failed to reload {}", summary.path.display()))?;
        if series.is_empty() {
            warn!("{} has no rows, skipping heatmap", summary.path.display());
            continue;
        }

        let grid = HilbertGrid::from_series(&series, FillMode::Stretch, config.heatmap_cap)?;
        let title = format!("Heatmap of Text Access: {}", summary.key);
        let path = config.heatmap_path(&summary.key.file_stem());

        render_heatmap(&grid, &title, &path)?;
        info!("saved {}", path.display());
    }

    Ok(())
}
