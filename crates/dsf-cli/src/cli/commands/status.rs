//! `dsf status` – report what is present under the output root.

use anyhow::Result;
use dsf_core::catalog;
use dsf_core::config::DsfConfig;
use dsf_core::info;

pub fn run_status(cfg: &DsfConfig) -> Result<()> {
    println!("{:<18} {:<8} {}", "ID", "FILES", "DOWNLOADED AT");
    for spec in catalog::BUILTIN.iter() {
        let dataset_dir = cfg.output_root.join(spec.id);
        if !dataset_dir.is_dir() {
            println!("{:<18} {:<8} -", spec.id, "-");
            continue;
        }
        let files = info::list_data_files(&dataset_dir)?;
        let downloaded_at = info::read_info(&dataset_dir)?
            .map(|i| i.downloaded_at)
            .unwrap_or_else(|| "-".to_string());
        println!("{:<18} {:<8} {}", spec.id, files.len(), downloaded_at);
    }
    Ok(())
}
