//! File organization: copy fetched files into the per-dataset directory.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure while copying fetched files into the output tree. Converted into
/// a per-dataset failure by the runner.
#[derive(Debug, Error)]
pub enum OrganizeError {
    #[error("download directory is missing: {0}")]
    MissingSource(PathBuf),
    #[error("i/o error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl OrganizeError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Create the base output directory (and parents). Idempotent.
pub fn ensure_output_root(root: &Path) -> Result<(), OrganizeError> {
    fs::create_dir_all(root).map_err(|e| OrganizeError::io(root, e))
}

/// Copy every regular file directly under `source_dir` into `dataset_dir`,
/// keeping filenames and source modification times. Subdirectories are not
/// recursed into. Same-named files are overwritten so re-runs converge on
/// the same tree. Files copied before a fault are left in place.
///
/// Returns the copied filenames, sorted.
pub fn organize(source_dir: &Path, dataset_dir: &Path) -> Result<Vec<String>, OrganizeError> {
    if !source_dir.is_dir() {
        return Err(OrganizeError::MissingSource(source_dir.to_path_buf()));
    }
    fs::create_dir_all(dataset_dir).map_err(|e| OrganizeError::io(dataset_dir, e))?;

    let mut copied = Vec::new();
    for entry in fs::read_dir(source_dir).map_err(|e| OrganizeError::io(source_dir, e))? {
        let entry = entry.map_err(|e| OrganizeError::io(source_dir, e))?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| OrganizeError::io(&path, e))?;
        if !file_type.is_file() {
            continue;
        }

        let target = dataset_dir.join(entry.file_name());
        copy_with_mtime(&path, &target)?;
        tracing::debug!("copied {}", target.display());
        if let Some(name) = entry.file_name().to_str() {
            copied.push(name.to_string());
        }
    }

    copied.sort();
    Ok(copied)
}

/// `fs::copy` keeps permissions but not timestamps; carry the source
/// modification time over as well.
fn copy_with_mtime(source: &Path, target: &Path) -> Result<(), OrganizeError> {
    fs::copy(source, target).map_err(|e| OrganizeError::io(target, e))?;
    let modified = fs::metadata(source)
        .and_then(|m| m.modified())
        .map_err(|e| OrganizeError::io(source, e))?;
    let file = fs::OpenOptions::new()
        .write(true)
        .open(target)
        .map_err(|e| OrganizeError::io(target, e))?;
    file.set_modified(modified)
        .map_err(|e| OrganizeError::io(target, e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copies_all_regular_files() {
        let source = tempfile::tempdir().unwrap();
        let target = tempfile::tempdir().unwrap();
        fs::write(source.path().join("a.csv"), b"1").unwrap();
        fs::write(source.path().join("b.csv"), b"2").unwrap();

        let copied = organize(source.path(), &target.path().join("ds")).unwrap();
        assert_eq!(copied, ["a.csv", "b.csv"]);
        assert_eq!(fs::read(target.path().join("ds/a.csv")).unwrap(), b"1");
        assert_eq!(fs::read(target.path().join("ds/b.csv")).unwrap(), b"2");
    }

    #[test]
    fn skips_subdirectories() {
        let source = tempfile::tempdir().unwrap();
        let target = tempfile::tempdir().unwrap();
        fs::write(source.path().join("sales.csv"), b"x").unwrap();
        fs::create_dir(source.path().join("extra")).unwrap();
        fs::write(source.path().join("extra/nested.csv"), b"y").unwrap();

        let dataset_dir = target.path().join("ds");
        let copied = organize(source.path(), &dataset_dir).unwrap();
        assert_eq!(copied, ["sales.csv"]);
        assert!(!dataset_dir.join("extra").exists());
        assert!(!dataset_dir.join("nested.csv").exists());
    }

    #[test]
    fn missing_source_is_an_error() {
        let target = tempfile::tempdir().unwrap();
        let err = organize(Path::new("/nonexistent/source"), target.path()).unwrap_err();
        assert!(matches!(err, OrganizeError::MissingSource(_)));
    }

    #[test]
    fn empty_source_copies_nothing() {
        let source = tempfile::tempdir().unwrap();
        let target = tempfile::tempdir().unwrap();
        let copied = organize(source.path(), &target.path().join("ds")).unwrap();
        assert!(copied.is_empty());
    }

    #[test]
    fn rerun_overwrites_without_duplicating() {
        let source = tempfile::tempdir().unwrap();
        let target = tempfile::tempdir().unwrap();
        let dataset_dir = target.path().join("ds");
        fs::write(source.path().join("a.csv"), b"old").unwrap();
        organize(source.path(), &dataset_dir).unwrap();

        fs::write(source.path().join("a.csv"), b"new").unwrap();
        let copied = organize(source.path(), &dataset_dir).unwrap();
        assert_eq!(copied, ["a.csv"]);
        assert_eq!(fs::read(dataset_dir.join("a.csv")).unwrap(), b"new");
        assert_eq!(fs::read_dir(&dataset_dir).unwrap().count(), 1);
    }

    #[test]
    fn preserves_modification_time() {
        let source = tempfile::tempdir().unwrap();
        let target = tempfile::tempdir().unwrap();
        let src_file = source.path().join("a.csv");
        fs::write(&src_file, b"1").unwrap();
        let old = std::time::SystemTime::now() - std::time::Duration::from_secs(86_400);
        fs::File::options()
            .write(true)
            .open(&src_file)
            .unwrap()
            .set_modified(old)
            .unwrap();

        let dataset_dir = target.path().join("ds");
        organize(source.path(), &dataset_dir).unwrap();

        let src_mtime = fs::metadata(&src_file).unwrap().modified().unwrap();
        let dst_mtime = fs::metadata(dataset_dir.join("a.csv"))
            .unwrap()
            .modified()
            .unwrap();
        assert_eq!(src_mtime, dst_mtime);
    }
}
