//! Top navigation: links, theme toggle, notification bell, user menu.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::notifications_panel::NotificationsPanel;
use crate::state::auth::AuthState;
use crate::state::notifications::NotificationsState;
use crate::state::toast::ToastState;
use crate::state::ui::UiState;
use crate::util::{dark_mode, session};

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let notifications = expect_context::<RwSignal<NotificationsState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let signed_in = move || auth.with(AuthState::is_authenticated);
    let user_label = move || auth.with(|a| a.user.as_ref().map(|u| u.label().to_owned()).unwrap_or_default());
    let profile_href = move || auth.with(|a| a.user_id().map(|id| format!("/profile/{id}")).unwrap_or_default());
    let unread = move || notifications.with(NotificationsState::unread_count);

    let on_toggle_theme = move |_| {
        let next = dark_mode::toggle(ui.get_untracked().dark_mode);
        ui.update(|u| u.dark_mode = next);
    };

    // Signing out flips auth state; the page's unauth redirect does the routing.
    let on_logout = move |_| {
        ui.update(UiState::close_overlays);
        leptos::task::spawn_local(async move {
            session::logout(auth).await;
            notifications.update(NotificationsState::clear);
            toasts.update(|t| {
                t.info("Signed out.");
            });
        });
    };

    view! {
        <header class="nav-bar">
            <A href="/" attr:class="nav-bar__brand">"BoardShare"</A>
            <button
                class="nav-bar__menu-toggle"
                aria-label="Menu"
                on:click=move |_| ui.update(|u| u.nav_open = !u.nav_open)
            >
                "☰"
            </button>
            <nav class="nav-bar__links" class:nav-bar__links--open=move || ui.get().nav_open>
                <Show when=signed_in>
                    <A href="/dashboard">"Dashboard"</A>
                    <A href="/games">"Games"</A>
                    <A href="/events">"Events"</A>
                    <A href="/people">"People"</A>
                </Show>
            </nav>
            <span class="nav-bar__spacer"></span>
            <button
                class="btn nav-bar__theme"
                title="Toggle dark mode"
                on:click=on_toggle_theme
            >
                {move || if ui.get().dark_mode { "☀" } else { "☾" }}
            </button>
            <Show
                when=signed_in
                fallback=|| view! {
                    <A href="/login" attr:class="btn">"Sign in"</A>
                    <A href="/register" attr:class="btn btn--primary">"Join"</A>
                }
            >
                <div class="nav-bar__bell">
                    <button
                        class="btn nav-bar__bell-button"
                        aria-label="Notifications"
                        on:click=move |_| ui.update(UiState::toggle_notifications)
                    >
                        "🔔"
                        <Show when=move || { unread() > 0 }>
                            <span class="badge">{unread}</span>
                        </Show>
                    </button>
                    <NotificationsPanel />
                </div>
                <div class="nav-bar__user">
                    <button class="btn" on:click=move |_| ui.update(UiState::toggle_user_menu)>
                        {user_label}
                    </button>
                    <Show when=move || ui.get().user_menu_open>
                        <div class="menu">
                            <a class="menu__item" href=profile_href on:click=move |_| ui.update(UiState::close_overlays)>
                                "My profile"
                            </a>
                            <button class="menu__item" on:click=on_logout>
                                "Sign out"
                            </button>
                        </div>
                    </Show>
                </div>
            </Show>
        </header>
    }
}
