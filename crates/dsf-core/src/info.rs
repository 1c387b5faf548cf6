//! Per-dataset metadata record (`dataset_info.json`).

use crate::catalog::DatasetSpec;
use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const INFO_FILE_NAME: &str = "dataset_info.json";

/// Provenance record written next to the copied data files. Written once
/// per run, overwriting any previous record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    pub kaggle_id: String,
    /// RFC 3339 UTC timestamp of the run that wrote this record.
    pub downloaded_at: String,
    /// Data filenames present in the dataset directory, sorted.
    pub files: Vec<String>,
}

/// List the regular data files currently in `dataset_dir`, sorted by name,
/// excluding the info file itself. A missing directory yields an empty list.
pub fn list_data_files(dataset_dir: &Path) -> Result<Vec<String>> {
    let mut files = Vec::new();
    if dataset_dir.is_dir() {
        let entries = fs::read_dir(dataset_dir)
            .with_context(|| format!("list {}", dataset_dir.display()))?;
        for entry in entries {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                if name != INFO_FILE_NAME {
                    files.push(name.to_string());
                }
            }
        }
    }
    files.sort();
    Ok(files)
}

/// Build the info record for one dataset and overwrite
/// `{dataset_dir}/dataset_info.json` with its pretty-printed JSON.
pub fn write_info(dataset_dir: &Path, spec: &DatasetSpec) -> Result<DatasetInfo> {
    let info = DatasetInfo {
        id: spec.id.to_string(),
        name: spec.name.to_string(),
        description: spec.description.to_string(),
        kaggle_id: spec.remote_id.to_string(),
        downloaded_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        files: list_data_files(dataset_dir)?,
    };

    let path = dataset_dir.join(INFO_FILE_NAME);
    let json = serde_json::to_string_pretty(&info)?;
    fs::write(&path, json).with_context(|| format!("write {}", path.display()))?;
    Ok(info)
}

/// Read a previously written info record, if any.
pub fn read_info(dataset_dir: &Path) -> Result<Option<DatasetInfo>> {
    let path = dataset_dir.join(INFO_FILE_NAME);
    if !path.exists() {
        return Ok(None);
    }
    let data = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let info = serde_json::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(Some(info))
}
