//! Route table for the dashboard.
//!
//! `/login` is the only public view. `/` is redirect-only and every other
//! known path belongs to the authenticated shell.

use std::fmt;

/// A view the router can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppRoute {
    /// Public login form.
    Login,
    /// Default authenticated landing view.
    Dashboard,
    Rooms,
    Guests,
    Notifications,
    Feedback,
    Settings,
    ConfigureDisplay,
    Calendar,
    Users,
    CleanRequests,
    TechnicalIssues,
}

impl AppRoute {
    /// Every renderable route, login first.
    pub const ALL: [AppRoute; 12] = [
        Self::Login,
        Self::Dashboard,
        Self::Rooms,
        Self::Guests,
        Self::Notifications,
        Self::Feedback,
        Self::Settings,
        Self::ConfigureDisplay,
        Self::Calendar,
        Self::Users,
        Self::CleanRequests,
        Self::TechnicalIssues,
    ];

    /// Returns the URL path of this route.
    #[must_use]
    pub const fn path(&self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Dashboard => "/dashboard",
            Self::Rooms => "/rooms",
            Self::Guests => "/guests",
            Self::Notifications => "/notifications",
            Self::Feedback => "/feedback",
            Self::Settings => "/settings",
            Self::ConfigureDisplay => "/configure-display",
            Self::Calendar => "/calendar",
            Self::Users => "/users",
            Self::CleanRequests => "/clean-requests",
            Self::TechnicalIssues => "/technical-issues",
        }
    }

    /// Returns the heading shown in the shell header.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Login => "Sign In",
            Self::Dashboard => "Dashboard",
            Self::Rooms => "Rooms Management",
            Self::Guests => "Guest Management",
            Self::Notifications => "Notifications",
            Self::Feedback => "Feedback & Reviews",
            Self::Settings => "Settings",
            Self::ConfigureDisplay => "Configure Display",
            Self::Calendar => "Calendar",
            Self::Users => "User Management",
            Self::CleanRequests => "Clean Requests",
            Self::TechnicalIssues => "Technical Issues",
        }
    }

    /// Returns true if this route requires an authenticated session.
    #[must_use]
    pub const fn is_protected(&self) -> bool {
        !matches!(self, Self::Login)
    }

    /// Looks up the route whose path is exactly `path`.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|route| route.path() == path)
    }
}

impl fmt::Display for AppRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// A location as requested by the browser, classified against the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestedPath {
    /// `/`, which is never rendered directly.
    Root,
    /// A path in the route table.
    Known(AppRoute),
    /// Anything else.
    Unknown(String),
}

impl RequestedPath {
    /// Classifies a location.
    ///
    /// Query and fragment text are ignored and a single trailing slash is
    /// stripped, so `/dashboard/?tab=1` is `Known(Dashboard)`.
    #[must_use]
    pub fn parse(location: &str) -> Self {
        let path = location
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim();

        if path.is_empty() || path == "/" {
            return Self::Root;
        }

        let trimmed = path.strip_suffix('/').unwrap_or(path);
        match AppRoute::from_path(trimmed) {
            Some(route) => Self::Known(route),
            None => Self::Unknown(path.to_string()),
        }
    }
}

/// A navigation the router should perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
    /// Where to go.
    pub to: AppRoute,
    /// Replace the current history entry instead of pushing a new one.
    pub replace: bool,
}

impl Navigation {
    /// A history-replacing navigation, used for every redirect.
    #[must_use]
    pub const fn replace(to: AppRoute) -> Self {
        Self { to, replace: true }
    }

}

/// A sidebar entry in the authenticated shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    /// Target route.
    pub route: AppRoute,
    /// Sidebar label.
    pub label: &'static str,
}

impl NavItem {
    /// Main sidebar entries, top to bottom.
    pub const PRIMARY: [NavItem; 6] = [
        NavItem::new(AppRoute::Dashboard),
        NavItem::new(AppRoute::Rooms),
        NavItem::new(AppRoute::Guests),
        NavItem::new(AppRoute::ConfigureDisplay),
        NavItem::new(AppRoute::Users),
        NavItem::new(AppRoute::Feedback),
    ];

    /// Entry pinned below the divider.
    pub const SETTINGS: NavItem = NavItem::new(AppRoute::Settings);

    const fn new(route: AppRoute) -> Self {
        Self {
            route,
            label: route.title(),
        }
    }

    /// Returns true if this entry points at `current`.
    #[must_use]
    pub fn is_active(&self, current: AppRoute) -> bool {
        self.route == current
    }
}
