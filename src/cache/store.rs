// Snapshot store for reading and writing the cached feed.
// Handles JSON serialization and atomic filesystem writes.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, TemblorError};
use crate::feed::Snapshot;

/// Owns the on-disk snapshot file. No other component touches the path.
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the snapshot file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the cached snapshot.
    ///
    /// Returns `None` only when no cache file exists. A file that is present
    /// but unparsable is a [`TemblorError::CacheCorrupt`] error, never an
    /// absent cache.
    pub fn read(&self) -> Result<Option<Snapshot>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.path)?;
        let snapshot =
            serde_json::from_str(&contents).map_err(|source| TemblorError::CacheCorrupt {
                path: self.path.clone(),
                source,
            })?;
        debug!(path = %self.path.display(), "snapshot read");
        Ok(Some(snapshot))
    }

    /// Write the snapshot, replacing any previous cache file in full.
    pub fn write(&self, snapshot: &Snapshot) -> Result<()> {
        let json = serde_json::to_string_pretty(snapshot)?;
        write_text(&self.path, &json)?;
        debug!(path = %self.path.display(), "snapshot written");
        Ok(())
    }
}

/// Write raw text atomically: temp file, flush, rename over the target.
/// A reader racing the rename sees either the old or the new content in
/// full, never a partial write.
pub fn write_text(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("tmp");
    let mut file = fs::File::create(&temp_path)?;
    file.write_all(text.as_bytes())?;
    file.sync_all()?;
    fs::rename(&temp_path, path)?;

    Ok(())
}
