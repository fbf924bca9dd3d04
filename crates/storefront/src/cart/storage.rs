//! Durable storage slots for the cart.
//!
//! A slot is a named string value that survives page views, the way a
//! browser's local storage does. The cart is always read and written as one
//! whole serialized value; there are no partial updates.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors from reading, writing, or decoding a storage slot.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem operation failed.
    #[error("storage I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Slot content could not be parsed as a cart.
    #[error("stored cart is corrupt: {0}")]
    Corrupt(#[source] serde_json::Error),

    /// Slot file is not valid UTF-8.
    #[error("stored cart at {} is not valid UTF-8: {source}", path.display())]
    Encoding {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Cart could not be serialized.
    #[error("failed to serialize cart: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Slot name is not usable as a key.
    #[error("invalid slot name: {0:?}")]
    InvalidSlot(String),
}

impl StorageError {
    /// Whether the slot was read but its content is unusable.
    #[must_use]
    pub const fn is_corrupt(&self) -> bool {
        matches!(self, Self::Corrupt(_) | Self::Encoding { .. })
    }
}

/// A key/value store holding whole serialized values.
pub trait CartStorage {
    /// Read the value stored under `key`, or `None` if the slot is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn read_slot(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn write_slot(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: CartStorage + ?Sized> CartStorage for &mut S {
    fn read_slot(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read_slot(key)
    }

    fn write_slot(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write_slot(key, value)
    }
}

impl<S: CartStorage + ?Sized> CartStorage for Box<S> {
    fn read_slot(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read_slot(key)
    }

    fn write_slot(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write_slot(key, value)
    }
}

// =============================================================================
// In-memory storage
// =============================================================================

/// Ephemeral storage, used in tests and for previews.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: HashMap<String, String>,
}

impl MemoryStorage {
    /// Create empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create storage with one pre-populated slot.
    #[must_use]
    pub fn with_slot(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut slots = HashMap::new();
        slots.insert(key.into(), value.into());
        Self { slots }
    }

    /// Raw slot contents, for inspecting exactly what was persisted.
    #[must_use]
    pub fn slot(&self, key: &str) -> Option<&str> {
        self.slots.get(key).map(String::as_str)
    }
}

impl CartStorage for MemoryStorage {
    fn read_slot(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slots.get(key).cloned())
    }

    fn write_slot(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

// =============================================================================
// File storage
// =============================================================================

/// One JSON file per slot under a profile directory.
///
/// Writes go to a sibling temp file which is then renamed over the slot
/// file, so readers see either the old or the new value.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Create file storage rooted at `dir`. The directory is created lazily
    /// on first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The profile directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StorageError::InvalidSlot(key.to_owned()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl CartStorage for FileStorage {
    fn read_slot(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.slot_path(key)?;
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(StorageError::Io { path, source }),
        };
        String::from_utf8(bytes)
            .map(Some)
            .map_err(|source| StorageError::Encoding { path, source })
    }

    fn write_slot(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.slot_path(key)?;
        fs::create_dir_all(&self.dir).map_err(|source| StorageError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).map_err(|source| StorageError::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &path).map_err(|source| StorageError::Io { path, source })?;

        Ok(())
    }
}
