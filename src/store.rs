//! Persistent key-value store for UI state.
//!
//! A flat JSON object on disk. Keys are plain strings, values are any JSON
//! value. A missing key means "use the default", so callers never need to
//! seed the file.

use std::collections::BTreeMap;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tempfile::NamedTempFile;

/// Well-known keys written by the session controller.
pub mod keys {
    pub const TEXT_SIMPLE: &str = "text_simple";
    pub const TEXT_ADVANCED: &str = "text_advanced";
    pub const PERCENT: &str = "percent";
    pub const INTERVAL: &str = "interval";
    pub const MODE: &str = "mode";
    pub const THEME: &str = "theme";
}

/// Errors from loading or saving the store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Could not determine data directory")]
    NoDataDir,

    #[error("Failed to access state file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode state: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Environment variable that overrides the state file location.
pub const STATE_ENV: &str = "TMIX_STATE";

/// JSON-file backed key-value store.
#[derive(Debug, Clone)]
pub struct StateStore {
    path: Option<PathBuf>,
    entries: BTreeMap<String, Value>,
}

impl StateStore {
    /// Default location: `<data dir>/tmix/state.json`, or `TMIX_STATE`.
    pub fn default_path() -> Result<PathBuf, StoreError> {
        if let Some(path) = std::env::var_os(STATE_ENV) {
            return Ok(PathBuf::from(path));
        }
        let dir = dirs::data_dir().ok_or(StoreError::NoDataDir)?;
        Ok(dir.join("tmix").join("state.json"))
    }

    /// Open the store at `path`.
    ///
    /// A missing or empty file gives an empty store. A file that does not
    /// parse is logged and treated as empty; the next save replaces it.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => BTreeMap::new(),
            Ok(content) => match serde_json::from_str(&content) {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable state file");
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => return Err(StoreError::Io { path, source }),
        };

        Ok(Self {
            path: Some(path),
            entries,
        })
    }

    /// A store that never touches disk.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            entries: BTreeMap::new(),
        }
    }

    /// Backing file, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Typed read. Missing keys and values of the wrong shape both give `None`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.entries.get(key)?;
        match serde_json::from_value(value.clone()) {
            Ok(v) => Some(v),
            Err(e) => {
                tracing::debug!(key, error = %e, "state value has unexpected shape");
                None
            }
        }
    }

    /// Typed write. Takes effect on disk at the next [`StateStore::save`].
    pub fn set<T: Serialize>(&mut self, key: &str, value: T) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), serde_json::to_value(value)?);
        Ok(())
    }

    /// Drop a key, returning whether it existed.
    pub fn remove(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    /// Whether the store has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write atomically through a temp file in the same directory.
    pub fn save(&self) -> Result<(), StoreError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let io_err = |source| StoreError::Io {
            path: path.clone(),
            source,
        };

        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent).map_err(io_err)?;

        let temp = NamedTempFile::new_in(parent).map_err(io_err)?;
        {
            let mut writer = BufWriter::new(temp.as_file());
            serde_json::to_writer_pretty(&mut writer, &self.entries)?;
            writer.flush().map_err(io_err)?;
        }
        temp.persist(path).map_err(|e| io_err(e.error))?;

        tracing::debug!(path = %path.display(), entries = self.entries.len(), "saved state");
        Ok(())
    }
}
