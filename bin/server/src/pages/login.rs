//! Login page component.

use hotel_admin_session::credentials::{self, DEMO_EMAIL, DEMO_PASSWORD};
use leptos::prelude::*;

use crate::session::use_session;

/// Login form. A successful sign-in updates the session and the route
/// guard moves on to the dashboard.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match credentials::authenticate(&email.get_untracked(), &password.get_untracked()) {
            Ok(user) => {
                set_error.set(None);
                session.login(user);
            }
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    view! {
        <div class="login-page">
            <div class="login-box">
                <h1>"Welcome Back"</h1>
                <p>"Sign in to your hotel admin panel"</p>
                <form on:submit=on_submit>
                    <label for="email">"Email"</label>
                    <input
                        id="email"
                        name="email"
                        type="email"
                        required
                        placeholder="Enter your email"
                        prop:value=email
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                    <label for="password">"Password"</label>
                    <input
                        id="password"
                        name="password"
                        type="password"
                        required
                        placeholder="Enter your password"
                        prop:value=password
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                    {move || error.get().map(|msg| view! { <p class="error">{msg}</p> })}
                    <button type="submit" class="login-button">"Sign In"</button>
                </form>
                <p class="note">
                    "Demo credentials: "
                    <span class="credentials">{format!("{DEMO_EMAIL} / {DEMO_PASSWORD}")}</span>
                </p>
            </div>
        </div>
    }
}
