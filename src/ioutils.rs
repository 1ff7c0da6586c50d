use std::path::Path;

use crate::error::{Error, Result};

/// Converts a path to a string slice, failing on invalid Unicode.
pub fn path_to_str(path: &Path) -> Result<&str> {
    path.to_str().ok_or_else(|| Error::ProcessError {
        source_path: path.display().to_string(),
        e: "path contains invalid Unicode".to_string(),
    })
}

pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    std::fs::create_dir_all(dest_path.as_ref()).map_err(Error::IoError)
}

/// Write content to a file, creating parent directories if needed.
pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        create_dir_all(parent)?;
    }
    std::fs::write(dest_path, content).map_err(Error::IoError)
}

/// Copy a file, creating parent directories of the destination if needed.
pub fn copy_file<P: AsRef<Path>>(source_path: P, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        create_dir_all(parent)?;
    }
    std::fs::copy(source_path.as_ref(), dest_path).map(|_| ()).map_err(Error::IoError)
}
