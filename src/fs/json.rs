//! JSON file operations
//!
//! Typed reads and atomic text writes for the data directory.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::errors::{Result, TallerError};
use crate::schemas::Settings;

use super::paths::get_settings_path;

/// Read a JSON file into `T`.
///
/// # Errors
/// * `NotFound` - If the file does not exist
/// * `InvalidJson` - If the file contains invalid JSON or does not match `T`
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            TallerError::NotFound(format!("File not found: {}", path.display()))
        } else {
            TallerError::Io(e)
        }
    })?;

    serde_json::from_str(&content).map_err(|e| {
        TallerError::InvalidJson(format!("Invalid JSON in file {}: {}", path.display(), e))
    })
}

/// Read a file as text, None when it does not exist.
pub fn read_text_if_exists(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(TallerError::Io(e)),
    }
}

/// Write text to a file atomically: write to a temp file, then rename.
///
/// The parent directory is created if needed.
pub fn write_text_atomic(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("json.tmp");
    let mut file = fs::File::create(&temp_path)?;
    file.write_all(content.as_bytes())?;
    file.write_all(b"\n")?;
    file.sync_all()?;
    drop(file);

    fs::rename(&temp_path, path)?;

    Ok(())
}

/// Read settings.json from a data directory.
///
/// Returns defaults if the file doesn't exist.
pub fn read_settings(data_dir: &Path) -> Result<Settings> {
    let path = get_settings_path(data_dir);
    if !path.exists() {
        return Ok(Settings::default());
    }
    read_json(&path)
}
