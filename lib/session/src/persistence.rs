//! Durable persistence of the session.
//!
//! Two string keys hold the session: a flag that must read exactly
//! `"true"` and the JSON-serialized user. Loading fails closed: anything
//! short of a well-formed pair reads as "no session", and an unparseable
//! user record is purged so it cannot be picked up again.

use hotel_admin_core::{KeyValueStore, Result};

use crate::error::PersistenceError;
use crate::user::User;

/// Default key for the authenticated flag.
pub const AUTHENTICATED_KEY: &str = "isAuthenticated";

/// Default key for the serialized user record.
pub const CURRENT_USER_KEY: &str = "currentUser";

/// The only flag value that allows a restore.
pub const AUTHENTICATED_MARKER: &str = "true";

/// Names of the two storage keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    /// Key holding the authenticated flag.
    pub authenticated: String,
    /// Key holding the serialized user.
    pub current_user: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            authenticated: AUTHENTICATED_KEY.to_string(),
            current_user: CURRENT_USER_KEY.to_string(),
        }
    }
}

/// Reads and writes the session through a [`KeyValueStore`].
#[derive(Debug, Clone)]
pub struct SessionPersistence<S> {
    store: S,
    keys: StorageKeys,
}

impl<S: KeyValueStore> SessionPersistence<S> {
    /// Creates a persistence adapter using the default keys.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::with_keys(store, StorageKeys::default())
    }

    /// Creates a persistence adapter using custom keys.
    #[must_use]
    pub fn with_keys(store: S, keys: StorageKeys) -> Self {
        Self { store, keys }
    }

    /// Writes `user` and the authenticated flag.
    ///
    /// The user is written before the flag, so a failed write never leaves
    /// a flag pointing at a missing record. On failure both keys are
    /// cleared on a best-effort basis, so a stale session from an earlier
    /// login cannot be restored on the next reload.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or either write fails.
    pub fn save(&self, user: &User) -> Result<(), PersistenceError> {
        let serialized =
            serde_json::to_string(user).map_err(|e| PersistenceError::Serialize {
                reason: e.to_string(),
            })?;

        if let Err(e) = self.write(&serialized) {
            if let Err(clear_err) = self.clear() {
                tracing::warn!(error = %clear_err, "Failed to clear session after write failure");
            }
            return Err(e);
        }
        Ok(())
    }

    fn write(&self, serialized: &str) -> Result<(), PersistenceError> {
        self.store
            .set(&self.keys.current_user, serialized)
            .map_err(|e| PersistenceError::Storage {
                reason: e.to_string(),
            })?;
        self.store
            .set(&self.keys.authenticated, AUTHENTICATED_MARKER)
            .map_err(|e| PersistenceError::Storage {
                reason: e.to_string(),
            })?;
        Ok(())
    }

    /// Reads the persisted session.
    ///
    /// Returns `None` when the flag is absent or not exactly `"true"`, when
    /// the user key is absent, or when storage cannot be read. If the user
    /// record does not parse, both keys are removed before returning `None`.
    pub fn load(&self) -> Option<User> {
        let flag = match self.store.get(&self.keys.authenticated) {
            Ok(flag) => flag,
            Err(e) => {
                tracing::warn!(error = %e, key = %self.keys.authenticated, "Failed to read session flag");
                return None;
            }
        };
        if flag.as_deref() != Some(AUTHENTICATED_MARKER) {
            return None;
        }

        let raw = match self.store.get(&self.keys.current_user) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(error = %e, key = %self.keys.current_user, "Failed to read session user");
                return None;
            }
        };

        match serde_json::from_str::<User>(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!(error = %e, "Purging unparseable persisted session");
                if let Err(clear_err) = self.clear() {
                    tracing::warn!(error = %clear_err, "Failed to purge persisted session");
                }
                None
            }
        }
    }

    /// Removes both keys. Removing absent keys succeeds.
    ///
    /// Both removals are attempted even if the first one fails.
    ///
    /// # Errors
    ///
    /// Returns the first removal error.
    pub fn clear(&self) -> Result<(), PersistenceError> {
        let flag = self.store.remove(&self.keys.authenticated);
        let user = self.store.remove(&self.keys.current_user);
        flag.and(user).map_err(|e| PersistenceError::Storage {
            reason: e.to_string(),
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotel_admin_core::{MemoryStore, StorageError};

    fn admin() -> User {
        User::new("admin", "admin@hotel.com", "Administrator", "full")
    }

    fn persistence() -> (MemoryStore, SessionPersistence<MemoryStore>) {
        let storage = MemoryStore::new();
        (storage.clone(), SessionPersistence::new(storage))
    }

    #[test]
    fn save_writes_both_keys() {
        let (storage, persistence) = persistence();
        persistence.save(&admin()).expect("save");

        assert_eq!(
            storage.get(AUTHENTICATED_KEY).expect("get"),
            Some("true".to_string())
        );
        let raw = storage
            .get(CURRENT_USER_KEY)
            .expect("get")
            .expect("user key present");
        assert!(raw.contains("\"accessScope\":\"full\""));
    }

    #[test]
    fn load_after_save_returns_equal_user() {
        let (_, persistence) = persistence();
        let users = [
            admin(),
            User::new("", "", "", ""),
            User::new("Zoë", "zoe@hotel.com", "Front Desk", "rooms,guests"),
            User::new("quote\"d", "a\\b@hotel.com", "{role}", "[scope]"),
        ];
        for user in users {
            persistence.save(&user).expect("save");
            assert_eq!(persistence.load(), Some(user));
        }
    }

    #[test]
    fn load_without_flag_ignores_user_key() {
        let storage = MemoryStore::with_entries([(
            CURRENT_USER_KEY,
            r#"{"username":"admin","email":"a@b","role":"r","accessScope":"s"}"#,
        )]);
        let persistence = SessionPersistence::new(storage.clone());
        assert_eq!(persistence.load(), None);
        // A missing flag is not corruption.
        assert!(storage.contains(CURRENT_USER_KEY));
    }

    #[test]
    fn load_requires_exact_true_marker() {
        for flag in ["TRUE", "1", "yes", " true", ""] {
            let storage = MemoryStore::with_entries([
                (AUTHENTICATED_KEY, flag),
                (
                    CURRENT_USER_KEY,
                    r#"{"username":"admin","email":"a@b","role":"r","accessScope":"s"}"#,
                ),
            ]);
            assert_eq!(SessionPersistence::new(storage).load(), None, "flag {flag:?}");
        }
    }

    #[test]
    fn load_with_flag_but_no_user_is_none() {
        let storage = MemoryStore::with_entries([(AUTHENTICATED_KEY, "true")]);
        assert_eq!(SessionPersistence::new(storage).load(), None);
    }

    #[test]
    fn load_purges_unparseable_user() {
        for raw in ["not-json", "{", "null", r#"{"username":"admin"}"#, "[]"] {
            let storage = MemoryStore::with_entries([
                (AUTHENTICATED_KEY, "true"),
                (CURRENT_USER_KEY, raw),
            ]);
            let persistence = SessionPersistence::new(storage.clone());

            assert_eq!(persistence.load(), None, "raw {raw:?}");
            assert!(storage.is_empty(), "raw {raw:?}");
            assert_eq!(persistence.load(), None);
        }
    }

    #[test]
    fn clear_is_idempotent() {
        let (storage, persistence) = persistence();
        persistence.save(&admin()).expect("save");
        persistence.clear().expect("first clear");
        persistence.clear().expect("second clear");
        assert!(storage.is_empty());
        assert_eq!(persistence.load(), None);
    }

    #[test]
    fn custom_keys_are_used() {
        let storage = MemoryStore::new();
        let keys = StorageKeys {
            authenticated: "hotel.auth".to_string(),
            current_user: "hotel.user".to_string(),
        };
        let persistence = SessionPersistence::with_keys(storage.clone(), keys);
        persistence.save(&admin()).expect("save");

        assert!(storage.contains("hotel.auth"));
        assert!(storage.contains("hotel.user"));
        assert!(!storage.contains(AUTHENTICATED_KEY));
        assert_eq!(persistence.load(), Some(admin()));
    }

    /// Accepts writes to every key except one.
    struct RejectingStore {
        inner: MemoryStore,
        rejected_key: &'static str,
    }

    impl KeyValueStore for RejectingStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if key == self.rejected_key {
                return Err(StorageError::WriteFailed {
                    key: key.to_string(),
                    reason: "quota exceeded".to_string(),
                }
                .into());
            }
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            self.inner.remove(key)
        }
    }

    #[test]
    fn failed_flag_write_leaves_nothing_restorable() {
        let inner = MemoryStore::new();
        let store = RejectingStore {
            inner: inner.clone(),
            rejected_key: AUTHENTICATED_KEY,
        };
        let persistence = SessionPersistence::new(store);

        assert!(persistence.save(&admin()).is_err());
        assert!(inner.is_empty());
        assert_eq!(persistence.load(), None);
    }

    #[test]
    fn failed_user_write_drops_stale_session() {
        let inner = MemoryStore::with_entries([
            (AUTHENTICATED_KEY, "true"),
            (
                CURRENT_USER_KEY,
                r#"{"username":"old","email":"old@hotel.com","role":"Staff","accessScope":"rooms"}"#,
            ),
        ]);
        let persistence = SessionPersistence::new(RejectingStore {
            inner: inner.clone(),
            rejected_key: CURRENT_USER_KEY,
        });

        assert!(persistence.save(&admin()).is_err());
        assert_eq!(persistence.load(), None);
    }
}
