//! Personal activity overview.
//!
//! Six independent sections, each with its own list state so one failing
//! endpoint never blanks the others.

use leptos::prelude::*;

use super::{AuthGate, load_list};
use crate::components::borrow_request_list::BorrowRequestList;
use crate::components::feedback::{ErrorBanner, Spinner};
use crate::net::api::borrowing::{self, BorrowRole};
use crate::net::api::events::{self, EventQuery};
use crate::net::api::registrations;
use crate::net::types::{BorrowRequest, Event, LendingRecord, Registration};
use crate::state::auth::AuthState;
use crate::state::listing::ListState;
use crate::state::toast::ToastState;
use crate::util::format;
use crate::util::mount_guard::MountGuard;

/// Open loans split into (lent out by `user_id`, borrowed by `user_id`).
pub(crate) fn open_loans(records: &[LendingRecord], user_id: Option<i64>) -> (Vec<LendingRecord>, Vec<LendingRecord>) {
    let Some(uid) = user_id else {
        return (Vec::new(), Vec::new());
    };
    records
        .iter()
        .filter(|r| !r.is_returned())
        .filter(|r| r.lender_id == uid || r.borrower_id == uid)
        .cloned()
        .partition(|r| r.lender_id == uid)
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <AuthGate>
            <DashboardView />
        </AuthGate>
    }
}

#[component]
fn DashboardView() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let guard = MountGuard::new();

    let records = RwSignal::new(ListState::<LendingRecord>::default());
    let incoming = RwSignal::new(ListState::<BorrowRequest>::default());
    let outgoing = RwSignal::new(ListState::<BorrowRequest>::default());
    let my_events = RwSignal::new(ListState::<Event>::default());
    let my_registrations = RwSignal::new(ListState::<Registration>::default());
    let returning = RwSignal::new(None::<i64>);

    let load_records = {
        let guard = guard.clone();
        move || load_list(records, &guard, borrowing::lending_records())
    };
    load_records();
    load_list(incoming, &guard, borrowing::list_requests(BorrowRole::Owner));
    load_list(outgoing, &guard, borrowing::list_requests(BorrowRole::Borrower));
    load_list(my_events, &guard, events::list_events(EventQuery { upcoming_only: true, mine: true }));
    load_list(my_registrations, &guard, registrations::my_registrations());

    // An approval creates a lending record.
    let requests_changed = Callback::new({
        let load_records = load_records.clone();
        move |()| load_records()
    });
    let retry_records = Callback::new(move |()| load_records());

    let mark_returned = move |id: i64| {
        if returning.get_untracked().is_some() {
            return;
        }
        returning.set(Some(id));
        leptos::task::spawn_local(async move {
            match borrowing::mark_returned(id).await {
                Ok(updated) => {
                    records.update(|l| {
                        l.replace_item(|r| r.id == id, updated);
                    });
                    toasts.update(|t| {
                        t.success("Marked as returned.");
                    });
                }
                Err(err) => {
                    toasts.update(|t| {
                        t.api_error(&err);
                    });
                }
            }
            returning.set(None);
        });
    };

    let loans = Memo::new(move |_| records.with(|l| open_loans(&l.items, auth.with(AuthState::user_id))));
    let records_error = Signal::derive(move || records.with(|l| l.error.clone()));
    let events_error = Signal::derive(move || my_events.with(|l| l.error.clone()));
    let registrations_error = Signal::derive(move || my_registrations.with(|l| l.error.clone()));
    let today = format::today();

    view! {
        <div class="page page--dashboard">
            <header class="page__header">
                <h1>{move || auth.with(|a| a.user.as_ref().map(|u| format!("Hi, {}", u.label())).unwrap_or_default())}</h1>
            </header>

            <section class="dashboard__section">
                <h2>"My games on loan"</h2>
                <ErrorBanner message=records_error on_retry=retry_records />
                <Show when=move || records.with(|l| l.loading)>
                    <Spinner />
                </Show>
                <Show when=move || !records.with(|l| l.loading) && loans.with(|(lent, _)| lent.is_empty())>
                    <p class="empty">"None of your games are lent out."</p>
                </Show>
                <ul class="loan-list">
                    <For each=move || loans.get().0 key=|r| r.id let:record>
                        <li class="loan-list__item" class:loan-list__item--overdue=record.is_overdue(today)>
                            <strong>{record.game_title.clone().unwrap_or_else(|| "Game".to_owned())}</strong>
                            " with "
                            <a href=format!("/profile/{}", record.borrower_id)>
                                {record.borrower_username.clone().unwrap_or_else(|| format!("user #{}", record.borrower_id))}
                            </a>
                            " · due " {format::date(record.due_date)}
                        </li>
                    </For>
                </ul>
            </section>

            <section class="dashboard__section">
                <h2>"Incoming borrow requests"</h2>
                <BorrowRequestList role=BorrowRole::Owner requests=incoming on_changed=requests_changed />
            </section>

            <section class="dashboard__section">
                <h2>"My borrow requests"</h2>
                <BorrowRequestList role=BorrowRole::Borrower requests=outgoing />
            </section>

            <section class="dashboard__section">
                <h2>"Borrowed now"</h2>
                <Show when=move || !records.with(|l| l.loading) && loans.with(|(_, borrowed)| borrowed.is_empty())>
                    <p class="empty">"You are not borrowing anything."</p>
                </Show>
                <ul class="loan-list">
                    <For each=move || loans.get().1 key=|r| r.id let:record>
                        <li class="loan-list__item" class:loan-list__item--overdue=record.is_overdue(today)>
                            <strong>{record.game_title.clone().unwrap_or_else(|| "Game".to_owned())}</strong>
                            " from "
                            <a href=format!("/profile/{}", record.lender_id)>
                                {record.lender_username.clone().unwrap_or_else(|| format!("user #{}", record.lender_id))}
                            </a>
                            " · due " {format::date(record.due_date)}
                            <button
                                class="btn btn--small"
                                disabled=move || returning.get().is_some()
                                on:click=move |_| mark_returned(record.id)
                            >
                                "Mark returned"
                            </button>
                        </li>
                    </For>
                </ul>
            </section>

            <section class="dashboard__section">
                <h2>"My events"</h2>
                <ErrorBanner message=events_error />
                <Show when=move || my_events.with(|l| !l.loading && l.error.is_none() && l.is_empty())>
                    <p class="empty">"You are not organizing any upcoming events. " <a href="/events">"Create one"</a></p>
                </Show>
                <ul class="event-list">
                    <For each=move || my_events.get().items key=|e| e.id let:event>
                        <li>
                            <a href=format!("/events/{}", event.id)>{event.title.clone()}</a>
                            " · " {format::date_time(event.start_time)}
                            " · " {event.participant_count} " going"
                        </li>
                    </For>
                </ul>
            </section>

            <section class="dashboard__section">
                <h2>"My registrations"</h2>
                <ErrorBanner message=registrations_error />
                <Show when=move || my_registrations.with(|l| !l.loading && l.error.is_none() && l.is_empty())>
                    <p class="empty">"You have not joined any events."</p>
                </Show>
                <ul class="event-list">
                    <For each=move || my_registrations.get().items key=|r| r.id let:registration>
                        <li>
                            <a href=format!("/events/{}", registration.event_id)>
                                {registration.event_title.clone().unwrap_or_else(|| format!("Event #{}", registration.event_id))}
                            </a>
                        </li>
                    </For>
                </ul>
            </section>
        </div>
    }
}

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;
