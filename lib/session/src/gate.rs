//! Session-loading gate.
//!
//! Until the persisted session has been read, nothing but a loading
//! indicator may be rendered: no route is evaluated and no protected
//! content shows. The gate opens once per page load and never re-arms.

use hotel_admin_core::KeyValueStore;

use crate::guard::{self, GuardDecision};
use crate::route::{AppRoute, Navigation};
use crate::session::{Session, SessionStore};

/// What the top-level view should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Neutral loading indicator.
    Loading,
    /// Render this route.
    Render(AppRoute),
    /// Show the loading indicator while navigating away.
    Redirect(Navigation),
}

/// Holds rendering until the persisted session has been applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionGate {
    ready: bool,
}

impl SessionGate {
    /// Creates a closed gate.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true once the gate has opened.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Restores the persisted session into `store` and opens the gate.
    ///
    /// Only the first call reads storage; later calls return false without
    /// touching the store. Returns true if this call restored a session.
    pub fn open<S: KeyValueStore>(&mut self, store: &mut SessionStore<S>) -> bool {
        if self.ready {
            return false;
        }
        let restored = store.restore();
        self.ready = true;
        tracing::debug!(restored, "Session gate opened");
        restored
    }

    /// Decides what to show for `location` given the current session.
    #[must_use]
    pub fn screen(&self, session: &Session, location: &str) -> Screen {
        if !self.ready {
            return Screen::Loading;
        }
        match guard::resolve_path(session.is_authenticated(), location) {
            GuardDecision::Render(route) => Screen::Render(route),
            GuardDecision::Redirect(nav) => Screen::Redirect(nav),
        }
    }
}
