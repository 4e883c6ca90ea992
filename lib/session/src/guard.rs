//! Route guarding.
//!
//! The reachable view is a pure function of `(authenticated, requested
//! path)`. Unknown paths follow the session: unauthenticated visitors go
//! to the login view, authenticated users fall back to the dashboard. No
//! protected route is ever rendered without a session.

use crate::route::{AppRoute, Navigation, RequestedPath};

/// The guard's verdict for one navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render this route in place.
    Render(AppRoute),
    /// Go elsewhere, replacing the current history entry.
    Redirect(Navigation),
}

impl GuardDecision {
    fn redirect(to: AppRoute) -> Self {
        Self::Redirect(Navigation::replace(to))
    }
}

/// Decides what to do with a classified request.
#[must_use]
pub fn resolve(authenticated: bool, requested: &RequestedPath) -> GuardDecision {
    let decision = match (authenticated, requested) {
        (false, RequestedPath::Known(AppRoute::Login)) => GuardDecision::Render(AppRoute::Login),
        (false, _) => GuardDecision::redirect(AppRoute::Login),
        (true, RequestedPath::Known(AppRoute::Login) | RequestedPath::Root) => {
            GuardDecision::redirect(AppRoute::Dashboard)
        }
        (true, RequestedPath::Unknown(_)) => GuardDecision::redirect(AppRoute::Dashboard),
        (true, RequestedPath::Known(route)) => GuardDecision::Render(*route),
    };

    if let GuardDecision::Redirect(nav) = &decision {
        tracing::debug!(requested = ?requested, to = %nav.to, authenticated, "Route guard redirect");
    }
    decision
}

/// Classifies `location` and resolves it.
#[must_use]
pub fn resolve_path(authenticated: bool, location: &str) -> GuardDecision {
    resolve(authenticated, &RequestedPath::parse(location))
}
