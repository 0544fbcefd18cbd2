//! Durable key-value storage for the persisted session record.
//!
//! The browser keeps the record in `window.localStorage`; [`MemoryStorage`] stands in for it
//! in tests and on pages where local storage is unavailable.

use wasm_bindgen::JsValue;

pub mod local;
pub mod memory;

pub use local::LocalStorage;
pub use memory::MemoryStorage;

/// Key holding the identity label of the logged-in user.
pub const KEY_IDENTITY: &str = "username";
/// Key holding the role label of the logged-in user.
pub const KEY_ROLE: &str = "userType";

/// Errors raised by a [`SessionStorage`] backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage is not available")]
    Unavailable,
    #[error("web-sys error: {0}")]
    WebSys(String),
}

impl From<JsValue> for StorageError {
    fn from(value: JsValue) -> Self {
        StorageError::WebSys(
            value
                .as_string()
                .unwrap_or_else(|| format!("{value:?}")),
        )
    }
}

impl From<StorageError> for JsValue {
    fn from(err: StorageError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Trait for reading and erasing the persisted session record.
///
/// Handles are cheap to clone and every clone addresses the same underlying store, so the
/// reflector and the logout handler it installs can each hold one.
pub trait SessionStorage: Clone {
    /// Retrieves a stored value by key.
    ///
    /// # Returns
    /// * `Ok(Some(value))` if the key exists in storage
    /// * `Ok(None)` if the key does not exist
    /// * `Err(StorageError)` if the backend could not be read
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores a key-value pair, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes a stored value by key. Removing a key that does not exist succeeds.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Enum for selecting the storage backend at runtime.
#[derive(Debug, Clone)]
pub enum SessionStorageType {
    LocalStorage(LocalStorage),
    Memory(MemoryStorage),
}

impl SessionStorageType {
    /// `window.localStorage` when the page can use it, otherwise an empty in-memory store.
    pub fn detect() -> Self {
        if LocalStorage::is_available() {
            SessionStorageType::LocalStorage(LocalStorage::new())
        } else {
            SessionStorageType::Memory(MemoryStorage::new())
        }
    }
}

impl SessionStorage for SessionStorageType {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self {
            SessionStorageType::LocalStorage(storage) => storage.get(key),
            SessionStorageType::Memory(storage) => storage.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        match self {
            SessionStorageType::LocalStorage(storage) => storage.set(key, value),
            SessionStorageType::Memory(storage) => storage.set(key, value),
        }
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        match self {
            SessionStorageType::LocalStorage(storage) => storage.remove(key),
            SessionStorageType::Memory(storage) => storage.remove(key),
        }
    }
}
