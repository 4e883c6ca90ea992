//! Dashboard page component.

use hotel_admin_session::AppRoute;
use leptos::prelude::*;

use crate::session::use_session;

const QUICK_LINKS: [AppRoute; 4] = [
    AppRoute::Rooms,
    AppRoute::Guests,
    AppRoute::Notifications,
    AppRoute::ConfigureDisplay,
];

/// Default landing view after sign-in.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();

    let greeting = move || {
        session
            .current_user()
            .map(|user| format!("Welcome back, {}!", user.username()))
            .unwrap_or_else(|| "Welcome back!".to_string())
    };

    view! {
        <div class="dashboard-page">
            <h2>{greeting}</h2>
            <p>"Here is what needs your attention today."</p>
            <section class="quick-links">
                {QUICK_LINKS
                    .into_iter()
                    .map(|route| view! {
                        <a href=route.path() class="quick-link">{route.title()}</a>
                    })
                    .collect_view()}
            </section>
        </div>
    }
}
