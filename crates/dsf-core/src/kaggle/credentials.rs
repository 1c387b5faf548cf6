//! Kaggle API credentials: env vars first, then `~/.kaggle/kaggle.json`.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Username/key pair for HTTP basic auth against the Kaggle API.
#[derive(Debug, Clone, Deserialize)]
pub struct KaggleCredentials {
    pub username: String,
    pub key: String,
}

impl KaggleCredentials {
    /// Discover credentials: `KAGGLE_USERNAME`/`KAGGLE_KEY` if both are set
    /// and non-empty, otherwise the standard `~/.kaggle/kaggle.json` file.
    /// An error here means the download capability is unavailable.
    pub fn discover() -> Result<Self> {
        if let (Ok(username), Ok(key)) = (env::var("KAGGLE_USERNAME"), env::var("KAGGLE_KEY")) {
            if !username.is_empty() && !key.is_empty() {
                return Ok(Self { username, key });
            }
        }

        let path = credentials_file()?;
        if !path.exists() {
            bail!(
                "no Kaggle credentials: set KAGGLE_USERNAME/KAGGLE_KEY or create {}",
                path.display()
            );
        }
        let data =
            fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
        Self::from_json(&data).with_context(|| format!("parse {}", path.display()))
    }

    /// Parse the `kaggle.json` format: `{"username": "...", "key": "..."}`.
    pub fn from_json(data: &str) -> Result<Self> {
        let creds: Self = serde_json::from_str(data)?;
        if creds.username.is_empty() || creds.key.is_empty() {
            bail!("credentials have an empty username or key");
        }
        Ok(creds)
    }
}

fn credentials_file() -> Result<PathBuf> {
    let home = env::var_os("HOME")
        .map(PathBuf::from)
        .context("HOME is not set")?;
    Ok(home.join(".kaggle").join("kaggle.json"))
}
