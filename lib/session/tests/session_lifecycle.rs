//! End-to-end session lifecycle: reload, login, navigation, logout.

use hotel_admin_core::{KeyValueStore, MemoryStore, Result, StorageError};
use hotel_admin_session::persistence::{AUTHENTICATED_KEY, CURRENT_USER_KEY};
use hotel_admin_session::{
    AppRoute, Navigation, Screen, SessionGate, SessionPersistence, SessionStore, User, credentials,
};

const ADMIN_JSON: &str =
    r#"{"username":"admin","email":"admin@hotel.com","role":"Administrator","accessScope":"full"}"#;

/// A page load against shared origin storage.
struct Page<S: KeyValueStore> {
    store: SessionStore<S>,
    gate: SessionGate,
    location: String,
}

impl<S: KeyValueStore> Page<S> {
    fn load(storage: S, location: &str) -> Self {
        Self {
            store: SessionStore::new(SessionPersistence::new(storage)),
            gate: SessionGate::new(),
            location: location.to_string(),
        }
    }

    fn screen(&self) -> Screen {
        self.gate.screen(self.store.session(), &self.location)
    }

    fn mount(&mut self) {
        self.gate.open(&mut self.store);
    }

    /// Follows redirects until a route renders and returns it.
    fn settle(&mut self) -> AppRoute {
        loop {
            match self.screen() {
                Screen::Loading => panic!("gate still closed"),
                Screen::Render(route) => return route,
                Screen::Redirect(nav) => {
                    assert!(nav.replace, "guard redirects must replace history");
                    self.location = nav.to.path().to_string();
                }
            }
        }
    }

    /// Follows a link to `route`.
    fn visit(&mut self, route: AppRoute) -> AppRoute {
        self.location = route.path().to_string();
        self.settle()
    }
}

#[test]
fn fresh_load_shows_loading_then_login() {
    let mut page = Page::load(MemoryStore::new(), "/dashboard");

    assert_eq!(page.screen(), Screen::Loading);
    page.mount();
    assert_eq!(page.settle(), AppRoute::Login);
}

#[test]
fn persisted_session_lands_on_dashboard_with_username() {
    let storage =
        MemoryStore::with_entries([(AUTHENTICATED_KEY, "true"), (CURRENT_USER_KEY, ADMIN_JSON)]);
    let mut page = Page::load(storage.clone(), "/");

    page.mount();

    assert_eq!(page.settle(), AppRoute::Dashboard);
    let user = page.store.current_user().expect("restored user");
    assert_eq!(user.username(), "admin");
    // Restore does not write back.
    assert_eq!(
        storage.get(CURRENT_USER_KEY).expect("get").as_deref(),
        Some(ADMIN_JSON)
    );
}

#[test]
fn authenticated_visit_to_login_redirects_to_dashboard() {
    let storage =
        MemoryStore::with_entries([(AUTHENTICATED_KEY, "true"), (CURRENT_USER_KEY, ADMIN_JSON)]);
    let mut page = Page::load(storage, "/login");
    page.mount();

    assert_eq!(
        page.screen(),
        Screen::Redirect(Navigation::replace(AppRoute::Dashboard))
    );
    assert_eq!(page.settle(), AppRoute::Dashboard);
}

#[test]
fn logout_from_settings_survives_reload() {
    let storage = MemoryStore::new();
    let mut page = Page::load(storage.clone(), "/login");
    page.mount();
    assert_eq!(page.settle(), AppRoute::Login);

    let user = credentials::authenticate("admin@email.com", "password").expect("demo login");
    page.store.login(user);
    assert_eq!(page.visit(AppRoute::Settings), AppRoute::Settings);

    page.store.logout();
    assert_eq!(
        page.screen(),
        Screen::Redirect(Navigation::replace(AppRoute::Login))
    );
    assert_eq!(page.settle(), AppRoute::Login);
    assert!(!storage.contains(AUTHENTICATED_KEY));
    assert!(!storage.contains(CURRENT_USER_KEY));

    let mut reloaded = Page::load(storage, "/settings");
    reloaded.mount();
    assert!(!reloaded.store.is_authenticated());
    assert_eq!(reloaded.settle(), AppRoute::Login);
}

#[test]
fn corrupt_user_record_falls_back_to_login() {
    let storage =
        MemoryStore::with_entries([(AUTHENTICATED_KEY, "true"), (CURRENT_USER_KEY, "not-json")]);
    let mut page = Page::load(storage.clone(), "/dashboard");

    page.mount();

    assert!(!page.store.is_authenticated());
    assert!(storage.is_empty());
    assert_eq!(page.settle(), AppRoute::Login);
}

#[test]
fn unknown_paths_follow_session_state() {
    let mut signed_out = Page::load(MemoryStore::new(), "/reports");
    signed_out.mount();
    assert_eq!(signed_out.settle(), AppRoute::Login);

    let storage =
        MemoryStore::with_entries([(AUTHENTICATED_KEY, "true"), (CURRENT_USER_KEY, ADMIN_JSON)]);
    let mut signed_in = Page::load(storage, "/reports");
    signed_in.mount();
    assert_eq!(signed_in.settle(), AppRoute::Dashboard);
}

/// Storage with writes disabled, as with a full quota.
#[derive(Default)]
struct ReadOnlyStore {
    inner: MemoryStore,
}

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::WriteFailed {
            key: key.to_string(),
            reason: "quota exceeded".to_string(),
        }
        .into())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove(key)
    }
}

#[test]
fn write_failure_keeps_in_memory_session_only() {
    let storage = ReadOnlyStore::default();
    let inner = storage.inner.clone();
    let mut page = Page::load(storage, "/login");
    page.mount();

    page.store.login(User::new("admin", "admin@hotel.com", "Administrator", "full"));

    assert!(page.store.is_authenticated());
    assert_eq!(page.settle(), AppRoute::Dashboard);

    let mut reloaded = Page::load(
        ReadOnlyStore {
            inner: inner.clone(),
        },
        "/dashboard",
    );
    reloaded.mount();
    assert_eq!(reloaded.settle(), AppRoute::Login);
    assert!(inner.is_empty());
}

#[test]
fn tabs_do_not_share_in_memory_state() {
    let storage =
        MemoryStore::with_entries([(AUTHENTICATED_KEY, "true"), (CURRENT_USER_KEY, ADMIN_JSON)]);
    let mut first = Page::load(storage.clone(), "/dashboard");
    let mut second = Page::load(storage.clone(), "/dashboard");
    first.mount();
    second.mount();

    first.store.logout();

    assert!(!first.store.is_authenticated());
    assert!(second.store.is_authenticated());
    assert!(storage.is_empty());
}
