//! Key-Value Storage
//!
//! String-keyed, string-valued persistence used by the todo store.
//! The browser implementation sits on `window.localStorage`; the in-memory
//! one backs tests and is the fallback when no browser storage exists.

use std::cell::RefCell;
use std::collections::HashMap;

/// Storage-level errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    Unavailable(String),
    Read(String),
    Write(String),
    Serialize(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Unavailable(msg) => write!(f, "Storage unavailable: {}", msg),
            StorageError::Read(msg) => write!(f, "Read failed: {}", msg),
            StorageError::Write(msg) => write!(f, "Write failed: {}", msg),
            StorageError::Serialize(msg) => write!(f, "Serialization failed: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

pub type StorageResult<T> = Result<T, StorageError>;

/// Core key-value trait
pub trait KeyValueStore {
    /// Read the value stored under `key`, `None` if absent
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Overwrite the value stored under `key`
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// `window.localStorage`
pub struct BrowserStorage {
    inner: web_sys::Storage,
}

impl BrowserStorage {
    /// Grab the page's local storage
    pub fn local() -> StorageResult<Self> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        let inner = window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))?;
        Ok(Self { inner })
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.inner
            .get_item(key)
            .map_err(|e| StorageError::Read(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.inner
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }
}

/// Volatile storage living for the page session only
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage.entries.borrow_mut().insert(key.to_string(), value.to_string());
        storage
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Either backend, chosen once at startup
pub enum AppStorage {
    Browser(BrowserStorage),
    Memory(MemoryStorage),
}

impl AppStorage {
    /// Prefer localStorage, fall back to memory when the browser refuses
    pub fn detect() -> Self {
        match BrowserStorage::local() {
            Ok(storage) => AppStorage::Browser(storage),
            Err(e) => {
                log::warn!("[STORAGE] {}, todos will not survive a reload", e);
                AppStorage::Memory(MemoryStorage::new())
            }
        }
    }
}

impl KeyValueStore for AppStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        match self {
            AppStorage::Browser(s) => s.get(key),
            AppStorage::Memory(s) => s.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        match self {
            AppStorage::Browser(s) => s.set(key, value),
            AppStorage::Memory(s) => s.set(key, value),
        }
    }
}
