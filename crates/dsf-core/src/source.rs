//! Download capability seam between the runner and concrete clients.
//!
//! The runner only depends on this trait and does not know about Kaggle or
//! any other specific backend; tests substitute a stub so no network is
//! touched.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure while fetching one dataset from the remote catalog. Converted
/// into a per-dataset failure by the runner; never aborts the whole run.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("transfer failed: {0}")]
    Curl(#[from] curl::Error),
    #[error("server returned HTTP {0}")]
    Http(u32),
    #[error("bad archive: {0}")]
    Archive(#[from] zip::result::ZipError),
    #[error("archive entry has an unsafe path: {0}")]
    UnsafePath(String),
    #[error("i/o error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FetchError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Capability that turns a remote dataset id into a local directory holding
/// the fetched files. Credentials and transport are entirely the
/// implementation's concern.
pub trait DatasetSource {
    fn fetch(&self, remote_id: &str) -> Result<PathBuf, FetchError>;
}
