use super::{SessionStorage, StorageError};
use web_sys::Storage;
#[cfg(feature = "tracing")]
use tracing::error;

/// [`SessionStorage`] backed by the origin-scoped `window.localStorage`.
///
/// Keys are used verbatim so the record stays readable by the page's login form.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        LocalStorage
    }

    /// Returns `true` if the current window exposes local storage.
    pub fn is_available() -> bool {
        LocalStorage.local_storage().is_ok()
    }

    fn local_storage(&self) -> Result<Storage, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) => Err(StorageError::Unavailable),
            Err(e) => {
                #[cfg(feature = "tracing")]
                error!("Could not find local storage: {e:?}");
                Err(e.into())
            }
        }
    }
}

impl SessionStorage for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let local_storage = self.local_storage()?;
        local_storage.get_item(key).map_err(|e| {
            #[cfg(feature = "tracing")]
            error!("Could not get item from local storage: {e:?}");
            e.into()
        })
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let local_storage = self.local_storage()?;
        local_storage.set_item(key, value).map_err(|e| {
            #[cfg(feature = "tracing")]
            error!("Could not set item in local storage");
            e.into()
        })
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let local_storage = self.local_storage()?;
        local_storage.remove_item(key).map_err(|e| {
            #[cfg(feature = "tracing")]
            error!("Could not remove item from local storage");
            e.into()
        })
    }
}
