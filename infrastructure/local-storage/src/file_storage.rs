use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use business::domain::cart::storage::LocalStorage;
use business::domain::errors::RepositoryError;

/// Client storage kept as a single JSON object file, one entry per key.
///
/// The whole file is read once on open and rewritten on every change, via a
/// sibling temp file and a rename so a crash never leaves half a document.
pub struct FileLocalStorage {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileLocalStorage {
    /// Opens the storage file. A missing or unreadable file starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = Self::load(&path);
        Self {
            path,
            entries: Mutex::new(entries),
        }
    }

    fn load(path: &Path) -> BTreeMap<String, String> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "No local storage file, starting empty");
                return BTreeMap::new();
            }
        };

        serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "Local storage file is corrupt, starting empty");
            BTreeMap::new()
        })
    }

    fn flush(&self, entries: &BTreeMap<String, String>) -> Result<(), RepositoryError> {
        let json =
            serde_json::to_string_pretty(entries).map_err(|_| RepositoryError::Serialization)?;

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json).map_err(|e| {
            tracing::error!(path = %tmp.display(), error = %e, "Failed to write local storage");
            RepositoryError::Persistence
        })?;
        fs::rename(&tmp, &self.path).map_err(|e| {
            tracing::error!(path = %self.path.display(), error = %e, "Failed to replace local storage");
            RepositoryError::Persistence
        })
    }
}

impl LocalStorage for FileLocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), RepositoryError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| RepositoryError::Persistence)?;
        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), RepositoryError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| RepositoryError::Persistence)?;
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.flush(&entries)
    }
}
