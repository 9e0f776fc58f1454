//! Game reviews: list with delete-own, and the star-rating form.

use leptos::prelude::*;

use crate::components::feedback::FieldError;
use crate::components::form_field::TextArea;
use crate::forms::FormErrors;
use crate::forms::review::{RATING_MAX, ReviewDraft, validate};
use crate::net::api::reviews as reviews_api;
use crate::net::types::Review;
use crate::state::auth::AuthState;
use crate::state::listing::ListState;
use crate::state::toast::ToastState;
use crate::util::format;

#[component]
pub fn ReviewList(reviews: RwSignal<ListState<Review>>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let delete = move |id: i64| {
        let removed = reviews.try_update(|l| l.remove_by(|r| r.id == id)).flatten();
        leptos::task::spawn_local(async move {
            if let Err(err) = reviews_api::delete_review(id).await {
                if let Some((index, item)) = removed {
                    reviews.update(|l| l.restore(index, item));
                }
                toasts.update(|t| {
                    t.api_error(&err);
                });
            }
        });
    };

    view! {
        <Show when=move || reviews.with(ListState::is_empty)>
            <p class="empty">"No reviews yet."</p>
        </Show>
        <ul class="review-list">
            <For
                each=move || reviews.get().items
                key=|r| r.id
                children=move |review| {
                    let id = review.id;
                    let mine = auth.with_untracked(|a| a.owns(review.user_id));
                    let author = review.username.clone().unwrap_or_else(|| format!("user #{}", review.user_id));
                    let when = review.created_at.map(|t| format::date(t.date())).unwrap_or_default();
                    view! {
                        <li class="review-list__item">
                            <span class="review-list__stars" aria-label=format!("{} stars", review.rating)>
                                {format::stars(review.rating)}
                            </span>
                            <span class="review-list__author">{author}</span>
                            <time class="review-list__time">{when}</time>
                            {review.comment.clone().map(|c| view! { <p class="review-list__comment">{c}</p> })}
                            <Show when=move || mine>
                                <button class="btn btn--small btn--danger" on:click=move |_| delete(id)>
                                    "Delete"
                                </button>
                            </Show>
                        </li>
                    }
                }
            />
        </ul>
    }
}

#[component]
pub fn ReviewForm(game_id: i64, on_posted: Callback<Review>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let rating = RwSignal::new(0_u8);
    let hover = RwSignal::new(0_u8);
    let comment = RwSignal::new(String::new());
    let errors = RwSignal::new(FormErrors::new());
    let busy = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let draft = ReviewDraft { rating: rating.get_untracked(), comment: comment.get_untracked() };
        let input = match validate(&draft) {
            Ok(input) => input,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(FormErrors::new());
        busy.set(true);
        leptos::task::spawn_local(async move {
            let result = reviews_api::create_review(game_id, &input).await;
            busy.set(false);
            match result {
                Ok(review) => {
                    rating.set(0);
                    comment.set(String::new());
                    toasts.update(|t| {
                        t.success("Thanks for the review!");
                    });
                    on_posted.run(review);
                }
                Err(err) => toasts.update(|t| {
                    t.api_error(&err);
                }),
            }
        });
    };

    let stars = (1..=RATING_MAX)
        .map(|n| {
            let lit = move || {
                let shown = if hover.get() > 0 { hover.get() } else { rating.get() };
                n <= shown
            };
            view! {
                <button
                    type="button"
                    class="star"
                    class:star--lit=lit
                    aria-label=format!("{n} stars")
                    on:mouseenter=move |_| hover.set(n)
                    on:mouseleave=move |_| hover.set(0)
                    on:click=move |_| rating.set(n)
                >
                    "★"
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <form class="review-form" on:submit=submit>
            <div class="review-form__stars" role="radiogroup">{stars}</div>
            <FieldError errors=errors field="rating" />
            <TextArea label="Comment (optional)" value=comment errors=errors field="comment" rows=3 />
            <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                "Post review"
            </button>
        </form>
    }
}
