//! Session state and its store.
//!
//! A session is either unauthenticated or authenticated with a user; the
//! enum makes "flag without user" unrepresentable. [`SessionStore`] is the
//! only place a session changes, through `login`, `logout` and `restore`.

use hotel_admin_core::KeyValueStore;

use crate::persistence::SessionPersistence;
use crate::user::User;

/// The session held for the lifetime of a page load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    /// No one is signed in.
    #[default]
    Unauthenticated,
    /// A user is signed in.
    Authenticated { user: User },
}

impl Session {
    /// Returns true if a user is signed in.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    /// Returns the signed-in user, if any.
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated { user } => Some(user),
            Self::Unauthenticated => None,
        }
    }
}

/// Single source of truth for the session.
///
/// Readers get `&Session`; writers go through the three transitions, each
/// of which replaces the whole session at once.
#[derive(Debug)]
pub struct SessionStore<S> {
    session: Session,
    persistence: SessionPersistence<S>,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Creates an unauthenticated store. Call [`restore`](Self::restore)
    /// (normally through the loading gate) to pick up a persisted session.
    #[must_use]
    pub fn new(persistence: SessionPersistence<S>) -> Self {
        Self {
            session: Session::Unauthenticated,
            persistence,
        }
    }

    /// Returns the current session.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Returns true if a user is signed in.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Returns the signed-in user, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<&User> {
        self.session.user()
    }

    /// Signs `user` in and persists the session.
    ///
    /// The credential check has already happened by the time this is
    /// called. A failed write is logged and the session stays valid in
    /// memory; it just won't survive a reload.
    pub fn login(&mut self, user: User) {
        if let Err(e) = self.persistence.save(&user) {
            tracing::warn!(
                error = %e,
                username = user.username(),
                "Session not persisted, continuing in memory"
            );
        }
        tracing::debug!(username = user.username(), "Logged in");
        self.session = Session::Authenticated { user };
    }

    /// Signs out and clears persisted state. The route guard then sends
    /// the page to the login view. Calling it while signed out changes
    /// nothing observable.
    pub fn logout(&mut self) {
        if let Some(user) = self.session.user() {
            tracing::debug!(username = user.username(), "Logged out");
        }
        self.session = Session::Unauthenticated;
        if let Err(e) = self.persistence.clear() {
            tracing::warn!(error = %e, "Failed to clear persisted session");
        }
    }

    /// Adopts a persisted session, if one loads.
    ///
    /// Equivalent to `login` for state purposes but never writes back. A
    /// live session is left alone. Returns true if the store is
    /// authenticated afterwards.
    pub fn restore(&mut self) -> bool {
        if self.session.is_authenticated() {
            return true;
        }
        match self.persistence.load() {
            Some(user) => {
                tracing::debug!(username = user.username(), "Restored persisted session");
                self.session = Session::Authenticated { user };
                true
            }
            None => false,
        }
    }
}
