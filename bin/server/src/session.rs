//! Reactive session context for the view layer.
//!
//! Wraps the session store and loading gate in signals and hands them to
//! components through Leptos context. Components read the session and call
//! `login`/`logout`; none of them reach storage directly.

use hotel_admin_session::{Screen, SessionGate, SessionPersistence, SessionStore, User};
use leptos::prelude::*;

use crate::storage::BrowserStorage;

/// Shared handle to the page's session.
#[derive(Debug, Clone, Copy)]
pub struct SessionContext {
    store: RwSignal<SessionStore<BrowserStorage>>,
    gate: RwSignal<SessionGate>,
}

impl SessionContext {
    fn new() -> Self {
        Self {
            store: RwSignal::new(SessionStore::new(SessionPersistence::new(BrowserStorage))),
            gate: RwSignal::new(SessionGate::new()),
        }
    }

    /// Reads the persisted session and releases the gate. Runs once, from
    /// the first client-side effect.
    pub fn open_gate(&self) {
        let gate = self.gate;
        self.store.update(|store| {
            gate.update(|gate| {
                gate.open(store);
            });
        });
    }

    /// What to show for `location`.
    pub fn screen(&self, location: &str) -> Screen {
        self.gate
            .with(|gate| self.store.with(|store| gate.screen(store.session(), location)))
    }

    /// Returns the signed-in user, if any.
    pub fn current_user(&self) -> Option<User> {
        self.store.with(|store| store.current_user().cloned())
    }

    /// Signs `user` in.
    pub fn login(&self, user: User) {
        self.store.update(|store| store.login(user));
    }

    /// Signs out. The guarded view redirects to the login page.
    pub fn logout(&self) {
        self.store.update(SessionStore::logout);
    }
}

/// Creates the session context and provides it to descendants.
pub fn provide_session_context() -> SessionContext {
    let session = SessionContext::new();
    provide_context(session);
    session
}

/// Returns the session context provided by `App`.
pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}
