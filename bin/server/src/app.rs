//! Main Leptos application component, route guarding and the
//! authenticated shell.

use hotel_admin_session::{AppRoute, NavItem, Navigation, Screen};
use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};
use leptos_router::{
    NavigateOptions,
    components::{Route, Router, Routes},
    hooks::{use_location, use_navigate},
    path,
};

use crate::pages::{DashboardPage, LoginPage, SectionPage, SettingsPage};
use crate::session::{provide_session_context, use_session};

/// The main application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let session = provide_session_context();

    // Effects only run in the browser, so the server always renders the
    // loading gate and the client opens it right after hydration.
    Effect::new(move |_| session.open_gate());

    view! {
        <Title text="Hotel Management System"/>
        <Meta name="description" content="Hotel Management System"/>
        <Meta name="robots" content="noindex, nofollow"/>
        <Router>
            <Routes fallback=|| view! { <GuardedView/> }>
                <Route path=path!("/") view=GuardedView/>
                <Route path=path!("/*any") view=GuardedView/>
            </Routes>
        </Router>
    }
}

fn navigate_options(nav: Navigation) -> NavigateOptions {
    NavigateOptions {
        replace: nav.replace,
        ..Default::default()
    }
}

/// Renders whatever the gate and guard allow for the current location and
/// performs their redirects.
#[component]
fn GuardedView() -> impl IntoView {
    let session = use_session();
    let location = use_location();
    let navigate = use_navigate();

    let screen = Memo::new(move |_| session.screen(&location.pathname.get()));

    Effect::new(move |_| {
        if let Screen::Redirect(nav) = screen.get() {
            navigate(nav.to.path(), navigate_options(nav));
        }
    });

    move || match screen.get() {
        Screen::Render(AppRoute::Login) => view! { <LoginPage/> }.into_any(),
        Screen::Render(route) => view! { <Shell route=route/> }.into_any(),
        Screen::Loading | Screen::Redirect(_) => view! { <LoadingScreen/> }.into_any(),
    }
}

/// Neutral placeholder shown while nothing may be rendered yet.
#[component]
fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen" aria-busy="true">
            <div class="spinner"></div>
            <p>"Loading..."</p>
        </div>
    }
}

/// Authenticated layout: sidebar, header and the page for `route`.
#[component]
fn Shell(route: AppRoute) -> impl IntoView {
    view! {
        <div class="shell">
            <Sidebar current=route/>
            <div class="shell-main">
                <Header current=route/>
                <main class="container">{page_for(route)}</main>
            </div>
        </div>
    }
}

fn page_for(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Dashboard => view! { <DashboardPage/> }.into_any(),
        AppRoute::Settings => view! { <SettingsPage/> }.into_any(),
        route => view! { <SectionPage route=route/> }.into_any(),
    }
}

#[component]
fn Sidebar(current: AppRoute) -> impl IntoView {
    let link = move |item: NavItem| {
        let class = if item.is_active(current) {
            "nav-link active"
        } else {
            "nav-link"
        };
        view! { <a href=item.route.path() class=class>{item.label}</a> }
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar-brand">"Admin Panel"</div>
            <nav class="sidebar-nav">
                {NavItem::PRIMARY.into_iter().map(link).collect_view()}
            </nav>
            <div class="sidebar-footer">{link(NavItem::SETTINGS)}</div>
        </aside>
    }
}

/// Header with the page title and the signed-in user.
#[component]
fn Header(current: AppRoute) -> impl IntoView {
    let session = use_session();

    view! {
        <header class="header">
            <h1 class="header-title">{current.title()}</h1>
            <div class="header-right">
                {move || {
                    session.current_user().map(|user| view! {
                        <div class="user-menu">
                            <span class="user-name">{user.username().to_string()}</span>
                            <span class="user-role">{user.role().to_string()}</span>
                        </div>
                    })
                }}
                <LogoutButton/>
            </div>
        </header>
    }
}

/// Signs out. `GuardedView` then replaces the location with the login view.
#[component]
pub fn LogoutButton() -> impl IntoView {
    let session = use_session();

    let on_click = move |_: leptos::ev::MouseEvent| session.logout();

    view! {
        <button type="button" class="logout-button" on:click=on_click>
            "Log out"
        </button>
    }
}
