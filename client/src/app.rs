//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_navigate,
};

use crate::components::nav_bar::NavBar;
use crate::components::toast_host::ToastHost;
use crate::pages::{
    HomeRedirect, NotFound, dashboard::DashboardPage, event_detail::EventDetailPage, events::EventsPage,
    game_detail::GameDetailPage, games::GamesPage, login::LoginPage, people::PeoplePage, profile::ProfilePage,
    register::RegisterPage,
};
use crate::state::{
    auth::AuthState, notifications::NotificationsState, toast::ToastState, ui::UiState,
};
use crate::util::{dark_mode, session};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state signals, applies the theme, starts the session
/// check, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::pending());
    let ui = RwSignal::new(UiState::with_dark_mode(dark_mode::read_preference()));
    let toasts = RwSignal::new(ToastState::default());
    let notifications = RwSignal::new(NotificationsState::default());

    provide_context(auth);
    provide_context(ui);
    provide_context(toasts);
    provide_context(notifications);

    // Effects only run in the browser, so SSR keeps the pending state.
    Effect::new(move || dark_mode::apply(ui.with(|u| u.dark_mode)));
    Effect::new(move |started: Option<()>| {
        if started.is_none() {
            session::bootstrap_session(auth, toasts);
        }
    });
    let _recheck = session::spawn_session_recheck(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/boardshare.css"/>
        <Title text="BoardShare"/>

        <Router>
            <SessionExpiryHandler/>
            <NavBar/>
            <main class="app-main">
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=StaticSegment("") view=HomeRedirect/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("games") view=GamesPage/>
                    <Route path=(StaticSegment("games"), ParamSegment("id")) view=GameDetailPage/>
                    <Route path=StaticSegment("events") view=EventsPage/>
                    <Route path=(StaticSegment("events"), ParamSegment("id")) view=EventDetailPage/>
                    <Route path=StaticSegment("people") view=PeoplePage/>
                    <Route path=(StaticSegment("profile"), ParamSegment("id")) view=ProfilePage/>
                </Routes>
            </main>
            <ToastHost/>
        </Router>
    }
}

/// Installs the HTTP client's 401 hook; lives inside the router so it can
/// navigate.
#[component]
fn SessionExpiryHandler() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    session::install_session_expiry_handler(auth, toasts, use_navigate());
}
