//! ZIP extraction for downloaded dataset archives.

use crate::source::FetchError;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Extract every entry of a ZIP archive into `target_dir`, preserving the
/// directory structure from the archive. Entries whose names would escape
/// the target directory are rejected.
pub fn extract_zip<R>(reader: R, target_dir: &Path) -> Result<(), FetchError>
where
    R: io::Read + io::Seek,
{
    let mut archive = zip::ZipArchive::new(reader)?;

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;

        let rel_path = match entry.enclosed_name() {
            Some(p) => p.to_path_buf(),
            None => return Err(FetchError::UnsafePath(entry.name().to_string())),
        };
        let out_path = target_dir.join(rel_path);

        if entry.is_dir() {
            fs::create_dir_all(&out_path).map_err(|e| FetchError::io(&out_path, e))?;
        } else {
            if let Some(parent) = out_path.parent() {
                fs::create_dir_all(parent).map_err(|e| FetchError::io(parent, e))?;
            }
            let file = fs::File::create(&out_path).map_err(|e| FetchError::io(&out_path, e))?;
            let mut writer = io::BufWriter::new(file);
            io::copy(&mut entry, &mut writer).map_err(|e| FetchError::io(&out_path, e))?;
            writer.flush().map_err(|e| FetchError::io(&out_path, e))?;
        }
    }

    Ok(())
}
