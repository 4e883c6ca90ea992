//! Client-side session lifecycle for the hotel admin dashboard.
//!
//! This crate provides:
//! - The signed-in user record (`User`)
//! - The two-state session and its store (`Session`, `SessionStore`)
//! - Durable persistence of the session (`SessionPersistence`)
//! - The route table and the guard deciding which view is reachable
//!   (`AppRoute`, `guard::resolve`)
//! - The loading gate that holds rendering until the persisted session
//!   has been read (`SessionGate`, `Screen`)
//! - The demo credential check behind the login form
//!
//! Nothing here touches the DOM: storage is reached through
//! [`hotel_admin_core::KeyValueStore`], so every piece runs under plain
//! `cargo test` against a [`hotel_admin_core::MemoryStore`].
//!
//! # Example
//!
//! ```
//! use hotel_admin_core::MemoryStore;
//! use hotel_admin_session::{
//!     AppRoute, Screen, SessionGate, SessionPersistence, SessionStore, User,
//! };
//!
//! let storage = MemoryStore::new();
//! let mut store = SessionStore::new(SessionPersistence::new(storage.clone()));
//! let mut gate = SessionGate::new();
//!
//! // Nothing is rendered until the gate has read storage.
//! assert_eq!(gate.screen(store.session(), "/dashboard"), Screen::Loading);
//! gate.open(&mut store);
//! assert!(matches!(gate.screen(store.session(), "/dashboard"), Screen::Redirect(_)));
//!
//! store.login(User::new("admin", "admin@hotel.com", "Administrator", "full"));
//! assert_eq!(
//!     gate.screen(store.session(), "/dashboard"),
//!     Screen::Render(AppRoute::Dashboard),
//! );
//! ```

pub mod credentials;
pub mod error;
pub mod gate;
pub mod guard;
pub mod persistence;
pub mod route;
pub mod session;
pub mod user;

// Re-export main types at crate root
pub use error::{CredentialError, PersistenceError};
pub use gate::{Screen, SessionGate};
pub use guard::GuardDecision;
pub use persistence::{SessionPersistence, StorageKeys};
pub use route::{AppRoute, NavItem, Navigation, RequestedPath};
pub use session::{Session, SessionStore};
pub use user::User;
