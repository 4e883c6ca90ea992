//! Settings page component.

use leptos::prelude::*;

use crate::app::LogoutButton;
use crate::session::use_session;

/// Profile details for the signed-in user and the account actions.
#[component]
pub fn SettingsPage() -> impl IntoView {
    let session = use_session();

    view! {
        <div class="settings-page">
            <section class="settings-section">
                <h2>"Profile"</h2>
                {move || {
                    session.current_user().map(|user| view! {
                        <div class="setting-row">
                            <label>"Username"</label>
                            <span>{user.username().to_string()}</span>
                        </div>
                        <div class="setting-row">
                            <label>"Email"</label>
                            <span>{user.email().to_string()}</span>
                        </div>
                        <div class="setting-row">
                            <label>"Role"</label>
                            <span>{user.role().to_string()}</span>
                        </div>
                        <div class="setting-row">
                            <label>"Access Scope"</label>
                            <span>{user.access_scope().to_string()}</span>
                        </div>
                    })
                }}
            </section>

            <section class="settings-section">
                <h2>"Account"</h2>
                <LogoutButton/>
            </section>
        </div>
    }
}
