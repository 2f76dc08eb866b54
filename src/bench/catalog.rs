//! Directory scanning into per-run summaries.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{info, warn};

use crate::bench::key::RunKey;
use crate::bench::series::load_comparison_series;

/// Aggregate of one run file: its key and the summed comparison count.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub key: RunKey,
    pub path: PathBuf,
    pub total_comparisons: f64,
}

/// Scan `data_dir` for run files and summarize each.
///
/// Files whose names do not match the schema or whose contents fail to parse
/// are skipped with a warning; a run of the tool is never aborted by one bad
/// file.
pub fn scan_runs(data_dir: &Path) -> Result<Vec<RunSummary>> {
    let pattern = data_dir.join("*.csv");
    let pattern = pattern
        .to_str()
        .with_context(|| format!("non-UTF-8 data directory: {}", data_dir.display()))?;

    let mut summaries = Vec::new();
    for entry in glob::glob(pattern).context("invalid glob pattern")? {
        let path = match entry {
            Ok(p) => p,
            Err(e) => {
                warn!("skipping unreadable entry: {e}");
                continue;
            }
        };

        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            warn!("skipping non-UTF-8 file name: {}", path.display());
            continue;
        };

        let key = match RunKey::from_file_stem(stem) {
            Ok(k) => k,
            Err(e) => {
                warn!("skipping {}: {e}", path.display());
                continue;
            }
        };

        let series = match load_comparison_series(&path) {
            Ok(s) => s,
            Err(e) => {
                warn!("skipping {}: {e}", path.display());
                continue;
            }
        };

        summaries.push(RunSummary {
            key,
            path,
            total_comparisons: series.iter().sum(),
        });
    }

    info!(
        "found {} run files under {}",
        summaries.len(),
        data_dir.display()
    );
    Ok(summaries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_run(dir: &Path, name: &str, body: &str) {
        fs::write(dir.join(name), body).unwrap();
    }

    #[test]
    fn test_scan_skips_bad_files() {
        let dir = std::env::temp_dir().join(format!("metron-catalog-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();

        write_run(
            &dir,
            "dna.large.kmp.average.csv",
            "successful_comparisons,unsuccessful_comparisons\n2,3\n5,0\n",
        );
        write_run(&dir, "not-a-run.csv", "whatever\n1\n");
        write_run(&dir, "readme.txt", "ignored entirely\n");

        let summaries = scan_runs(&dir).unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].key.file_stem(), "dna.large.kmp.average");
        assert!((summaries[0].total_comparisons - 10.0).abs() < 1e-9);

        fs::remove_dir_all(&dir).unwrap();
    }
}
