//! Borrow requests as seen by the owner (approve/reject) or the borrower
//! (cancel). Decisions update the row optimistically and roll back on error.

#[cfg(test)]
#[path = "borrow_request_list_test.rs"]
mod borrow_request_list_test;

use leptos::prelude::*;

use crate::net::api::borrowing::{self, BorrowRole};
use crate::net::types::{BorrowRequest, BorrowStatus};
use crate::state::listing::ListState;
use crate::state::toast::ToastState;
use crate::util::format;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Action {
    Approve,
    Reject,
    Cancel,
}

impl Action {
    fn resulting_status(self) -> BorrowStatus {
        match self {
            Action::Approve => BorrowStatus::Approved,
            Action::Reject => BorrowStatus::Rejected,
            Action::Cancel => BorrowStatus::Cancelled,
        }
    }

    fn done_message(self) -> &'static str {
        match self {
            Action::Approve => "Request approved.",
            Action::Reject => "Request declined.",
            Action::Cancel => "Request cancelled.",
        }
    }
}

/// Actions available to `role` for a request in `status`.
fn actions_for(role: BorrowRole, status: BorrowStatus) -> &'static [Action] {
    match (role, status) {
        (BorrowRole::Owner, BorrowStatus::Pending) => &[Action::Approve, Action::Reject],
        (BorrowRole::Borrower, BorrowStatus::Pending) => &[Action::Cancel],
        _ => &[],
    }
}

fn counterpart(role: BorrowRole, request: &BorrowRequest) -> String {
    match role {
        BorrowRole::Owner => request
            .borrower_username
            .clone()
            .unwrap_or_else(|| format!("user #{}", request.borrower_id)),
        BorrowRole::Borrower => request
            .owner_username
            .clone()
            .unwrap_or_else(|| format!("user #{}", request.owner_id)),
    }
}

async fn run_action(action: Action, id: i64) -> Result<(), crate::net::error::ApiError> {
    match action {
        Action::Approve => borrowing::approve(id).await.map(|_| ()),
        Action::Reject => borrowing::reject(id).await.map(|_| ()),
        Action::Cancel => borrowing::cancel(id).await,
    }
}

#[component]
pub fn BorrowRequestList(
    role: BorrowRole,
    requests: RwSignal<ListState<BorrowRequest>>,
    #[prop(optional)] on_changed: Option<Callback<()>>,
) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let pending = RwSignal::new(None::<i64>);

    let act = move |id: i64, action: Action| {
        if pending.get_untracked().is_some() {
            return;
        }
        let previous = requests
            .try_update(|l| {
                let current = l.items.iter().find(|r| r.id == id).cloned()?;
                let next = BorrowRequest { status: action.resulting_status(), ..current };
                l.replace_item(|r| r.id == id, next)
            })
            .flatten();
        let Some(previous) = previous else {
            return;
        };
        pending.set(Some(id));
        leptos::task::spawn_local(async move {
            match run_action(action, id).await {
                Ok(()) => {
                    toasts.update(|t| {
                        t.success(action.done_message());
                    });
                    if let Some(cb) = on_changed {
                        cb.run(());
                    }
                }
                Err(err) => {
                    requests.update(|l| {
                        l.replace_item(|r| r.id == id, previous);
                    });
                    toasts.update(|t| {
                        t.api_error(&err);
                    });
                }
            }
            pending.set(None);
        });
    };

    let empty_text = match role {
        BorrowRole::Owner => "No one has asked to borrow your games.",
        BorrowRole::Borrower => "You have not requested any games.",
    };

    view! {
        <Show when=move || requests.with(ListState::is_empty)>
            <p class="empty">{empty_text}</p>
        </Show>
        <ul class="request-list">
            <For
                each=move || requests.get().items
                key=|r| (r.id, r.status)
                children=move |request| {
                    let id = request.id;
                    let who = counterpart(role, &request);
                    let title = request.game_title.clone().unwrap_or_else(|| "a game".to_owned());
                    let href = request.game_id.map(|g| format!("/games/{g}")).unwrap_or_default();
                    let dates = format::date_range(request.start_date, request.end_date);
                    let buttons = actions_for(role, request.status)
                        .iter()
                        .map(|&action| {
                            let (label, class) = match action {
                                Action::Approve => ("Approve", "btn btn--small btn--primary"),
                                Action::Reject => ("Decline", "btn btn--small"),
                                Action::Cancel => ("Cancel", "btn btn--small btn--danger"),
                            };
                            view! {
                                <button
                                    class=class
                                    disabled=move || pending.get() == Some(id)
                                    on:click=move |_| act(id, action)
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>();
                    view! {
                        <li class="request-list__item">
                            <a class="request-list__game" href=href>{title}</a>
                            <span class="request-list__who">{who}</span>
                            <span class="request-list__dates">{dates}</span>
                            <span class="badge">{request.status.label()}</span>
                            {request.message.clone().map(|m| view! { <p class="request-list__message">{m}</p> })}
                            <span class="request-list__actions">{buttons}</span>
                        </li>
                    }
                }
            />
        </ul>
    }
}
