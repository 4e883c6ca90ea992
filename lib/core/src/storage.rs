//! Durable string key-value storage.
//!
//! Models the per-origin browser store: synchronous, string keys and
//! string values, shared by every tab of the same origin with last writer
//! wins semantics.

use crate::error::Result;
use std::fmt;

/// Errors from key-value storage operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The backing store cannot be reached (disabled, private mode, no window).
    Unavailable { reason: String },
    /// Reading a key failed.
    ReadFailed { key: String, reason: String },
    /// Writing a key failed (quota exceeded, storage disabled).
    WriteFailed { key: String, reason: String },
    /// Removing a key failed.
    RemoveFailed { key: String, reason: String },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable { reason } => write!(f, "storage unavailable: {reason}"),
            Self::ReadFailed { key, reason } => {
                write!(f, "failed to read '{key}': {reason}")
            }
            Self::WriteFailed { key, reason } => {
                write!(f, "failed to write '{key}': {reason}")
            }
            Self::RemoveFailed { key, reason } => {
                write!(f, "failed to remove '{key}': {reason}")
            }
        }
    }
}

impl std::error::Error for StorageError {}

/// A synchronous string key-value store.
///
/// Implementations must make `remove` idempotent: removing an absent key
/// succeeds.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the write is rejected.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes `key` from the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be modified.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}
