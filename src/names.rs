//! Display-name cache keyed by player identity.
//!
//! Names only decorate messages. Nothing here takes part in game state: a game
//! is fully described by its payload, and an unknown identity simply renders
//! as its number.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::NameStoreError;

pub struct NameStore {
    path: PathBuf,
    names: HashMap<i64, String>,
}

impl NameStore {
    /// Open the cache at `path`. A missing file gives an empty cache.
    pub fn open(path: &Path) -> Result<Self, NameStoreError> {
        let names: HashMap<i64, String> = if path.exists() {
            let json = fs::read_to_string(path).map_err(|e| NameStoreError::Read {
                path: path.to_path_buf(),
                source: e,
            })?;
            serde_json::from_str(&json).map_err(|e| NameStoreError::Parse {
                path: path.to_path_buf(),
                source: e,
            })?
        } else {
            HashMap::new()
        };
        tracing::debug!(path = %path.display(), entries = names.len(), "name cache opened");
        Ok(NameStore {
            path: path.to_path_buf(),
            names,
        })
    }

    /// Cache that is never written anywhere
    pub fn in_memory() -> Self {
        NameStore {
            path: PathBuf::new(),
            names: HashMap::new(),
        }
    }

    pub fn get(&self, id: i64) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    /// Name to show for `id`, the id itself when unknown
    pub fn display(&self, id: i64) -> String {
        self.get(id)
            .map(str::to_string)
            .unwrap_or_else(|| id.to_string())
    }

    pub fn set(&mut self, id: i64, name: impl Into<String>) {
        self.names.insert(id, name.into());
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Write the cache to disk via a temporary file and a rename.
    pub fn save(&self) -> Result<(), NameStoreError> {
        if self.path.as_os_str().is_empty() {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(&self.names)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;

        tracing::debug!(path = %self.path.display(), entries = self.names.len(), "name cache saved");
        Ok(())
    }
}
