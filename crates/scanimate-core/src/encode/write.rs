//! Writing encoded rasters to disk.
//!
//! The raster is fully encoded in memory first, written to a hidden sibling
//! file and then renamed over the target. A failed encode never touches the
//! target, and a failed write never leaves a truncated PNG under the final
//! name.

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::{encode_png, EncodeError};
use crate::Raster;

/// Errors that can occur while writing an output file.
#[derive(Debug, Error)]
pub enum WriteError {
    /// The raster could not be encoded.
    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// The file could not be created, written or moved into place.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The target path has no file name component.
    #[error("Not a file path: {0}")]
    NotAFile(PathBuf),
}

/// Encode `raster` as PNG and write it to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns `WriteError::Encode` if encoding fails (nothing is written), and
/// `WriteError::Io` if the directory is missing or not writable.
pub fn write_png(raster: &Raster, path: impl AsRef<Path>) -> Result<(), WriteError> {
    let path = path.as_ref();
    let tmp = staging_path(path)?;
    let bytes = encode_png(raster)?;

    if let Err(e) = std::fs::write(&tmp, &bytes) {
        let _ = std::fs::remove_file(&tmp);
        return Err(e.into());
    }
    if let Err(e) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(e.into());
    }

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "wrote png");
    Ok(())
}

/// `dir/.name.tmp` next to `dir/name`.
fn staging_path(path: &Path) -> Result<PathBuf, WriteError> {
    let name = path
        .file_name()
        .ok_or_else(|| WriteError::NotAFile(path.to_path_buf()))?;
    let mut tmp_name = OsString::from(".");
    tmp_name.push(name);
    tmp_name.push(".tmp");
    Ok(path.with_file_name(tmp_name))
}
