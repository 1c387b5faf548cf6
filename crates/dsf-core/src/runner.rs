//! Sequential fetch → organize → write-info pipeline over the catalog.
//!
//! Each dataset is processed to completion before the next begins; a
//! failure in one dataset is logged and never aborts the run. The only
//! state carried across iterations is the success counter.

use crate::catalog::{self, DatasetSpec};
use crate::info;
use crate::organize;
use crate::source::DatasetSource;
use anyhow::Result;
use std::path::Path;

/// Outcome of one full run over the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub succeeded: usize,
    pub total: usize,
}

/// Process every catalog entry in declaration order. No retries, no
/// concurrency.
pub fn run_all(source: &dyn DatasetSource, output_root: &Path) -> Result<RunSummary> {
    organize::ensure_output_root(output_root)?;

    let mut succeeded = 0usize;
    for spec in catalog::BUILTIN.iter() {
        println!("Processing dataset: {}", spec.id);
        if process_dataset(source, output_root, spec) {
            succeeded += 1;
            println!("  Done: {}", spec.name);
        } else {
            println!("  Failed: {}", spec.name);
        }
    }

    let summary = RunSummary {
        succeeded,
        total: catalog::BUILTIN.len(),
    };
    println!(
        "Summary: {}/{} datasets processed successfully",
        summary.succeeded, summary.total
    );
    Ok(summary)
}

/// One dataset's linear pipeline. Returns true when fetch and organize both
/// succeeded; a fault while writing the info record is logged but does not
/// undo the success.
fn process_dataset(source: &dyn DatasetSource, output_root: &Path, spec: &DatasetSpec) -> bool {
    println!("  Downloading {} ({})", spec.name, spec.remote_id);
    let source_dir = match source.fetch(spec.remote_id) {
        Ok(path) => path,
        Err(e) => {
            tracing::warn!(dataset = spec.id, "fetch failed: {}", e);
            println!("  Error downloading {}: {}", spec.name, e);
            return false;
        }
    };

    let dataset_dir = output_root.join(spec.id);
    let copied = match organize::organize(&source_dir, &dataset_dir) {
        Ok(files) => files,
        Err(e) => {
            tracing::warn!(dataset = spec.id, "organize failed: {}", e);
            println!("  Error organizing {}: {}", spec.name, e);
            return false;
        }
    };
    println!("  Copied {} file(s)", copied.len());

    match info::write_info(&dataset_dir, spec) {
        Ok(info) => println!(
            "  Wrote {} listing {} file(s)",
            info::INFO_FILE_NAME,
            info.files.len()
        ),
        Err(e) => {
            tracing::warn!(dataset = spec.id, "info write failed: {:#}", e);
            println!("  Error writing info for {}: {:#}", spec.name, e);
        }
    }
    true
}
