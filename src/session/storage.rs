use crate::error::AppError;
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use tracing::debug;

/// Persistent key/value storage of the host (browser local storage or a file)
pub trait LocalStorage: Send + Sync {
    /// Value stored under `key`
    fn get_item(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`
    fn set_item(&self, key: &str, value: &str) -> Result<(), AppError>;

    /// Removes `key`; removing a missing key is not an error
    fn remove_item(&self, key: &str) -> Result<(), AppError>;
}

/// In-process [`LocalStorage`]
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<BTreeMap<String, String>>,
}

impl MemoryStorage {
    /// Creates an empty storage
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl LocalStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), AppError> {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
        Ok(())
    }
}

/// [`LocalStorage`] persisted as a JSON object in a file
///
/// The file is rewritten on every mutation. A missing file is an empty storage.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    items: Mutex<BTreeMap<String, String>>,
}

impl FileStorage {
    /// Opens (or lazily creates) the storage file at `path`
    pub fn open(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref().to_path_buf();
        let items = match fs::read_to_string(&path) {
            Ok(raw) if raw.trim().is_empty() => BTreeMap::new(),
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        debug!("Opened storage {} with {} keys", path.display(), items.len());
        Ok(Self {
            path,
            items: Mutex::new(items),
        })
    }

    /// Location of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, items: &BTreeMap<String, String>) -> Result<(), AppError> {
        let raw = serde_json::to_string_pretty(items)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl LocalStorage for FileStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), AppError> {
        let mut items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        items.insert(key.to_string(), value.to_string());
        self.persist(&items)
    }

    fn remove_item(&self, key: &str) -> Result<(), AppError> {
        let mut items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        if items.remove(key).is_none() {
            return Ok(());
        }
        self.persist(&items)
    }
}
