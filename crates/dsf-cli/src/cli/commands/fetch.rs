//! `dsf fetch` – download and organize every configured dataset.

use anyhow::Result;
use dsf_core::config::DsfConfig;
use dsf_core::kaggle::KaggleClient;
use dsf_core::runner;

/// Full run over the catalog. Per-dataset failures are reported as they
/// happen and do not change the exit code. A missing download capability
/// (no Kaggle credentials) is reported once and the run is skipped.
pub fn run_fetch(cfg: &DsfConfig) -> Result<()> {
    let client = match KaggleClient::from_config(cfg) {
        Ok(client) => client,
        Err(e) => {
            tracing::warn!("download client unavailable: {:#}", e);
            println!("Download client unavailable: {:#}", e);
            println!(
                "Set KAGGLE_USERNAME and KAGGLE_KEY (or create ~/.kaggle/kaggle.json) and retry."
            );
            return Ok(());
        }
    };

    println!("Dataset directory: {}", cfg.output_root.display());
    let summary = runner::run_all(&client, &cfg.output_root)?;
    if summary.succeeded == 0 {
        println!("No datasets were downloaded. Check your Kaggle credentials.");
    }
    Ok(())
}
