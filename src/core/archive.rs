//! ZIP expansion into a scratch directory.

use std::{fs, io, path::Path};

use zip::ZipArchive;

use super::error::{ExtractError, ExtractResult};

/// Expand every entry of the archive at `zip_path` into `dest`.
///
/// Entry names that would escape `dest` are rejected by the zip reader.
pub fn expand_zip(zip_path: &Path, dest: &Path) -> ExtractResult<()> {
    fs::create_dir_all(dest).map_err(|e| ExtractError::io(dest, e))?;

    let file = fs::File::open(zip_path).map_err(|e| ExtractError::io(zip_path, e))?;
    let mut archive =
        ZipArchive::new(file).map_err(|e| ExtractError::io(zip_path, io::Error::other(e)))?;
    archive
        .extract(dest)
        .map_err(|e| ExtractError::io(zip_path, io::Error::other(e)))?;

    Ok(())
}
