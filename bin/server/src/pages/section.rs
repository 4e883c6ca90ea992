//! Placeholder for the management sections.

use hotel_admin_session::AppRoute;
use leptos::prelude::*;

/// Section page showing the route's title. Rooms, guests, feedback and the
/// other management tables render here.
#[component]
pub fn SectionPage(route: AppRoute) -> impl IntoView {
    view! {
        <div class="section-page">
            <h2>{route.title()}</h2>
            <p class="empty-state">"Nothing to show yet."</p>
        </div>
    }
}
