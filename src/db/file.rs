use std::path::{Path, PathBuf};

use crate::error::{Result, TrackerError};

use super::expense::Expense;

const EMPTY_DOCUMENT: &str = "[]";

/// Creates the parent directory and an empty document if the file doesn't exist yet.
/// Returns whether a new file was created.
pub fn ensure_exists(path: &Path) -> Result<bool> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|err| TrackerError::io(parent, err))?;
    }
    if path.exists() {
        return Ok(false);
    }
    std::fs::write(path, EMPTY_DOCUMENT).map_err(|err| TrackerError::io(path, err))?;
    log::info!("Created new expenses file: {}", path.display());
    Ok(true)
}

pub fn load(path: &Path) -> Result<Vec<Expense>> {
    let content = std::fs::read_to_string(path).map_err(|err| {
        log::error!("Error reading expenses file {}: {}", path.display(), err);
        TrackerError::io(path, err)
    })?;
    serde_json::from_str(&content).map_err(|err| {
        log::error!("Corrupted JSON file {}: {}", path.display(), err);
        TrackerError::StorageCorrupted {
            path: path.to_path_buf(),
            source: err,
        }
    })
}

pub fn save(expenses: &[Expense], path: &Path) -> Result<()> {
    let content = serde_json::to_string_pretty(expenses).map_err(|err| {
        TrackerError::io(path, std::io::Error::new(std::io::ErrorKind::InvalidData, err))
    })?;

    // First write to temporary file so we don't lose data if writing fails halfway
    let tmppath = temp_path(path);
    std::fs::write(&tmppath, content).map_err(|err| {
        log::error!("Error writing expenses file {}: {}", tmppath.display(), err);
        TrackerError::io(&tmppath, err)
    })?;

    // Ok, writing succeeded, let's now replace the real file with the tmpfile
    std::fs::rename(&tmppath, path).map_err(|err| {
        log::error!("Error replacing expenses file {}: {}", path.display(), err);
        TrackerError::io(path, err)
    })?;

    log::info!("Saved {} expenses to {}", expenses.len(), path.display());
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut filename = path.file_name().unwrap_or_default().to_os_string();
    filename.push(".tmp");
    path.with_file_name(filename)
}
