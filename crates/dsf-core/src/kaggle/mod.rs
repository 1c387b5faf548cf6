//! Kaggle download client: the concrete `DatasetSource`.
//!
//! Talks to the public dataset download endpoint with HTTP basic auth and
//! caches extracted archives under the cache dir, so re-runs that already
//! hold a dataset skip the network entirely.

mod archive;
mod credentials;

pub use credentials::KaggleCredentials;

use crate::config::DsfConfig;
use crate::source::{DatasetSource, FetchError};
use std::fs;
use std::io::{Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub struct KaggleClient {
    credentials: KaggleCredentials,
    api_base: String,
    cache_dir: PathBuf,
}

impl KaggleClient {
    pub fn new(
        credentials: KaggleCredentials,
        api_base: impl Into<String>,
        cache_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            credentials,
            api_base: api_base.into(),
            cache_dir: cache_dir.into(),
        }
    }

    /// Build a client from discovered credentials and the configured cache
    /// and API locations. Fails only when no credentials can be found.
    pub fn from_config(cfg: &DsfConfig) -> anyhow::Result<Self> {
        let credentials = KaggleCredentials::discover()?;
        let cache_dir = cfg.resolve_cache_dir()?;
        Ok(Self::new(credentials, cfg.api_base.clone(), cache_dir))
    }

    /// URL of the archive download endpoint for one dataset.
    fn download_url(&self, remote_id: &str) -> String {
        format!(
            "{}/datasets/download/{}",
            self.api_base.trim_end_matches('/'),
            remote_id
        )
    }

    /// Remote ids are `owner/slug`; keep that shape on disk.
    fn dataset_cache_dir(&self, remote_id: &str) -> PathBuf {
        self.cache_dir.join("datasets").join(remote_id)
    }

    /// GET the archive into `out`, following redirects. The endpoint
    /// redirects to blob storage, so auth goes in as basic credentials on
    /// the initial request.
    fn download_archive(
        &self,
        url: &str,
        out: &mut fs::File,
        out_path: &Path,
    ) -> Result<(), FetchError> {
        let mut write_err: Option<std::io::Error> = None;

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.username(&self.credentials.username)?;
        easy.password(&self.credentials.key)?;
        easy.connect_timeout(Duration::from_secs(30))?;
        easy.timeout(Duration::from_secs(3600))?;

        let perform_result;
        {
            let out = &mut *out;
            let write_err = &mut write_err;
            let mut transfer = easy.transfer();
            transfer.write_function(move |data| match out.write_all(data) {
                Ok(()) => Ok(data.len()),
                Err(e) => {
                    *write_err = Some(e);
                    Ok(0) // abort transfer
                }
            })?;
            perform_result = transfer.perform();
        }

        // A failed disk write surfaces as a curl write error; report the
        // underlying i/o fault instead.
        if let Some(e) = write_err {
            return Err(FetchError::io(out_path, e));
        }
        perform_result?;

        let code = easy.response_code()?;
        if !(200..300).contains(&code) {
            return Err(FetchError::Http(code));
        }
        Ok(())
    }
}

impl DatasetSource for KaggleClient {
    fn fetch(&self, remote_id: &str) -> Result<PathBuf, FetchError> {
        let dataset_dir = self.dataset_cache_dir(remote_id);
        if dir_has_entries(&dataset_dir)? {
            tracing::debug!("cache hit for {} at {}", remote_id, dataset_dir.display());
            return Ok(dataset_dir);
        }

        fs::create_dir_all(&self.cache_dir).map_err(|e| FetchError::io(&self.cache_dir, e))?;

        let url = self.download_url(remote_id);
        tracing::info!("downloading {} from {}", remote_id, url);

        let mut archive_file = tempfile::Builder::new()
            .prefix("dsf_download_")
            .tempfile_in(&self.cache_dir)
            .map_err(|e| FetchError::io(&self.cache_dir, e))?;
        let archive_path = archive_file.path().to_path_buf();
        self.download_archive(&url, archive_file.as_file_mut(), &archive_path)?;

        archive_file
            .as_file_mut()
            .seek(SeekFrom::Start(0))
            .map_err(|e| FetchError::io(&archive_path, e))?;

        // Extract into a staging dir first, then move it into place, so an
        // interrupted extraction never looks like a cache hit.
        let staging = tempfile::Builder::new()
            .prefix("dsf_extract_")
            .tempdir_in(&self.cache_dir)
            .map_err(|e| FetchError::io(&self.cache_dir, e))?;
        archive::extract_zip(archive_file.as_file_mut(), staging.path())?;

        if let Some(parent) = dataset_dir.parent() {
            fs::create_dir_all(parent).map_err(|e| FetchError::io(parent, e))?;
        }
        // A leftover empty dir from an interrupted run is replaced.
        let _ = fs::remove_dir(&dataset_dir);
        fs::rename(staging.into_path(), &dataset_dir)
            .map_err(|e| FetchError::io(&dataset_dir, e))?;

        tracing::info!("downloaded {} to {}", remote_id, dataset_dir.display());
        Ok(dataset_dir)
    }
}

fn dir_has_entries(dir: &Path) -> Result<bool, FetchError> {
    if !dir.is_dir() {
        return Ok(false);
    }
    let mut entries = fs::read_dir(dir).map_err(|e| FetchError::io(dir, e))?;
    Ok(entries.next().is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(cache_dir: &Path) -> KaggleClient {
        let creds = KaggleCredentials::from_json(r#"{"username": "u", "key": "k"}"#).unwrap();
        KaggleClient::new(creds, "https://www.kaggle.com/api/v1", cache_dir)
    }

    #[test]
    fn download_url_joins_api_base_and_remote_id() {
        let dir = tempfile::tempdir().unwrap();
        let client = test_client(dir.path());
        assert_eq!(
            client.download_url("prasad22/retail-transactions-dataset"),
            "https://www.kaggle.com/api/v1/datasets/download/prasad22/retail-transactions-dataset"
        );
    }

    #[test]
    fn download_url_trims_trailing_slash() {
        let dir = tempfile::tempdir().unwrap();
        let creds = KaggleCredentials::from_json(r#"{"username": "u", "key": "k"}"#).unwrap();
        let client = KaggleClient::new(creds, "http://localhost:8080/api/v1/", dir.path());
        assert_eq!(
            client.download_url("a/b"),
            "http://localhost:8080/api/v1/datasets/download/a/b"
        );
    }

    #[test]
    fn cache_dir_keeps_owner_slug_layout() {
        let dir = tempfile::tempdir().unwrap();
        let client = test_client(dir.path());
        assert_eq!(
            client.dataset_cache_dir("crawford/weekly-sales-transactions"),
            dir.path()
                .join("datasets")
                .join("crawford/weekly-sales-transactions")
        );
    }

    #[test]
    fn fetch_returns_cached_dir_without_network() {
        let dir = tempfile::tempdir().unwrap();
        let creds = KaggleCredentials::from_json(r#"{"username": "u", "key": "k"}"#).unwrap();
        let client = KaggleClient::new(creds, "http://127.0.0.1:1/api/v1", dir.path());
        let cached = client.dataset_cache_dir("a/b");
        fs::create_dir_all(&cached).unwrap();
        fs::write(cached.join("sales.csv"), b"a,b\n").unwrap();

        // An unroutable api_base would make any network attempt fail, so a
        // successful fetch proves the cache short-circuit.
        let got = client.fetch("a/b").unwrap();
        assert_eq!(got, cached);
    }
}
