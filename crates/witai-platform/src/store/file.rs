//! JSON-file backed store.
//!
//! The whole map is held in memory and rewritten on every mutation using an
//! atomic write (write to `.tmp`, then rename). A file that does not hold a
//! JSON map is moved aside to `.corrupt` and the store starts empty.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use witai_common::StoreError;

use super::KeyValueStore;

/// Store persisted as a flat JSON object of strings.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    items: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`. A missing file is an empty store; the file
    /// is only created on the first write.
    ///
    /// Unparseable contents are moved to [`FileStore::corrupt_path`] and the
    /// store opens empty. Fails with [`StoreError::Corrupt`] only if the
    /// file cannot be moved aside.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let items = if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| {
                StoreError::Read(format!("failed to read {}: {e}", path.display()))
            })?;
            if content.trim().is_empty() {
                BTreeMap::new()
            } else {
                match serde_json::from_str(&content) {
                    Ok(items) => items,
                    Err(e) => {
                        quarantine(&path, &e)?;
                        BTreeMap::new()
                    }
                }
            }
        } else {
            BTreeMap::new()
        };

        debug!(path = %path.display(), entries = items.len(), "Store opened");
        Ok(Self { path, items })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Where unparseable contents of the store at `path` are moved.
    pub fn corrupt_path(path: &Path) -> PathBuf {
        path.with_extension("json.corrupt")
    }

    /// Write `items` to disk, then adopt them as the current contents.
    fn commit(&mut self, items: BTreeMap<String, String>) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&items)
            .map_err(|e| StoreError::Write(format!("failed to serialize store: {e}")))?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                StoreError::Write(format!(
                    "failed to create store directory {}: {e}",
                    parent.display()
                ))
            })?;
        }

        let tmp_path = self.path.with_extension("json.tmp");
        std::fs::write(&tmp_path, &json).map_err(|e| {
            StoreError::Write(format!("failed to write {}: {e}", tmp_path.display()))
        })?;

        if let Err(e) = std::fs::rename(&tmp_path, &self.path) {
            // Rename failed; fall back to a direct write (Windows compat)
            warn!("atomic rename failed ({e}), falling back to direct write");
            std::fs::write(&self.path, &json).map_err(|e2| {
                StoreError::Write(format!("failed to write {}: {e2}", self.path.display()))
            })?;
            let _ = std::fs::remove_file(&tmp_path);
        }

        self.items = items;
        debug!(path = %self.path.display(), "Store saved to disk");
        Ok(())
    }
}

/// Move an unparseable store file aside so the store can start over.
fn quarantine(path: &Path, error: &serde_json::Error) -> Result<(), StoreError> {
    let backup = FileStore::corrupt_path(path);
    warn!(
        path = %path.display(),
        backup = %backup.display(),
        "Store file is corrupt ({error}); moving it aside and starting empty"
    );
    std::fs::rename(path, &backup).map_err(|e| {
        StoreError::Corrupt(format!(
            "{}: {error}; could not move it to {}: {e}",
            path.display(),
            backup.display()
        ))
    })
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut items = self.items.clone();
        items.insert(key.to_string(), value.to_string());
        self.commit(items)
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StoreError> {
        if !self.items.contains_key(key) {
            return Ok(());
        }
        let mut items = self.items.clone();
        items.remove(key);
        self.commit(items)
    }
}
