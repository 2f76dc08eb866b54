//! Explicit chart-generation configuration.
//!
//! Paths and tuning that older scripts kept as module-level constants are
//! carried here and passed down, so the algorithmic functions stay pure and
//! testable independent of the file-system layout.

use std::path::{Path, PathBuf};

use crate::hilbert::ResolutionCap;

/// Configuration for one chart-generation invocation.
#[derive(Debug, Clone)]
pub struct ChartConfig {
    /// Directory holding the benchmark run CSV files.
    pub data_dir: PathBuf,
    /// Directory chart PNGs are written to.
    pub assets_dir: PathBuf,
    /// Resolution cap applied to heatmap grids.
    pub heatmap_cap: ResolutionCap,
}

impl ChartConfig {
    /// Subdirectory of the assets dir that receives the heatmaps.
    pub fn heatmap_dir(&self) -> PathBuf {
        self.assets_dir.join("heatmaps")
    }

    /// Output path for a heatmap with the given file stem.
    pub fn heatmap_path(&self, stem: &str) -> PathBuf {
        self.heatmap_dir().join(format!("{stem}_heatmap.png"))
    }

    /// Output path for a top-level chart.
    pub fn chart_path(&self, name: &str) -> PathBuf {
        self.assets_dir.join(name)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_paths() {
        let config = ChartConfig {
            data_dir: PathBuf::from("out"),
            assets_dir: PathBuf::from("assets"),
            heatmap_cap: ResolutionCap::new(4),
        };

        assert_eq!(
            config.heatmap_path("dna.large.kmp.worst"),
            PathBuf::from("assets/heatmaps/dna.large.kmp.worst_heatmap.png")
        );
        assert_eq!(
            config.chart_path("comparison_chart.png"),
            PathBuf::from("assets/comparison_chart.png")
        );
    }
}
