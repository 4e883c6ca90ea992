//! Browser `localStorage` adapter.
//!
//! The handle is a unit struct that looks up `window.localStorage` on every
//! call, so it stays `Send + Sync` and can live inside reactive signals.
//! Outside the hydrated client there is no browser storage and every call
//! reports [`StorageError::Unavailable`].

use hotel_admin_core::{KeyValueStore, Result, StorageError};

/// The origin's `localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
impl BrowserStorage {
    fn local_storage() -> std::result::Result<web_sys::Storage, StorageError> {
        let window = web_sys::window().ok_or_else(|| StorageError::Unavailable {
            reason: "no window".to_string(),
        })?;
        window
            .local_storage()
            .map_err(|e| StorageError::Unavailable {
                reason: format!("{e:?}"),
            })?
            .ok_or_else(|| StorageError::Unavailable {
                reason: "localStorage is disabled".to_string(),
            })
    }
}

#[cfg(feature = "hydrate")]
impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let value = Self::local_storage()?
            .get_item(key)
            .map_err(|e| StorageError::ReadFailed {
                key: key.to_string(),
                reason: format!("{e:?}"),
            })?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::local_storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::WriteFailed {
                key: key.to_string(),
                reason: format!("{e:?}"),
            })?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Self::local_storage()?
            .remove_item(key)
            .map_err(|e| StorageError::RemoveFailed {
                key: key.to_string(),
                reason: format!("{e:?}"),
            })?;
        Ok(())
    }
}

#[cfg(not(feature = "hydrate"))]
fn unavailable() -> StorageError {
    StorageError::Unavailable {
        reason: "browser storage is only reachable from the client".to_string(),
    }
}

#[cfg(not(feature = "hydrate"))]
impl KeyValueStore for BrowserStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(unavailable().into())
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(unavailable().into())
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(unavailable().into())
    }
}
