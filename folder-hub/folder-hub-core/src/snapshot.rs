//! JSON snapshot files.
//!
//! A snapshot file holds a JSON array of folders. Loading and saving are the
//! only places the crate touches the filesystem.

use crate::folder::Folder;
use anyhow::{Context, Result};
use std::path::Path;

/// Parse a snapshot from an in-memory JSON document.
pub fn parse_snapshot(json: &str) -> Result<Vec<Folder>> {
    let folders: Vec<Folder> = serde_json::from_str(json)?;
    Ok(folders)
}

/// Read a snapshot file.
pub fn load_snapshot(path: impl AsRef<Path>) -> Result<Vec<Folder>> {
    let path = path.as_ref();
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("reading snapshot {}", path.display()))?;
    let folders =
        parse_snapshot(&data).with_context(|| format!("parsing snapshot {}", path.display()))?;
    tracing::debug!(path = %path.display(), folders = folders.len(), "loaded snapshot");
    Ok(folders)
}

/// Write `folders` as pretty JSON, creating parent directories as needed.
pub fn save_snapshot(path: impl AsRef<Path>, folders: &[Folder]) -> Result<()> {
    let path = path.as_ref();
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }
    let data = serde_json::to_string_pretty(folders)?;
    std::fs::write(path, data).with_context(|| format!("writing snapshot {}", path.display()))?;
    tracing::debug!(path = %path.display(), folders = folders.len(), "saved snapshot");
    Ok(())
}
