//! Page components for the application.
//!
//! Pages read the signed-in user from the session context; none of them
//! touch persisted state.

pub mod dashboard;
pub mod login;
pub mod section;
pub mod settings;

// Re-export all page components for convenient access
pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use section::SectionPage;
pub use settings::SettingsPage;
