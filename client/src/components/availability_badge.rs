#[cfg(test)]
#[path = "availability_badge_test.rs"]
mod availability_badge_test;

use leptos::prelude::*;

use crate::net::api::games;
use crate::net::types::Availability;
use crate::util::format;

pub fn availability_text(availability: &Availability) -> String {
    if availability.total_copies == 0 {
        return "No copies listed".to_owned();
    }
    if availability.is_available() {
        return format!("{} of {} available", availability.available_copies, availability.total_copies);
    }
    match availability.next_available_date {
        Some(date) => format!("All lent out · back {}", format::date(date)),
        None => "All lent out".to_owned(),
    }
}

/// Fetches and shows server-computed availability for a game. Bumping
/// `refresh` re-fetches (e.g. after an instance is added).
#[component]
pub fn AvailabilityBadge(game_id: i64, #[prop(optional)] refresh: Option<RwSignal<u32>>) -> impl IntoView {
    let state = RwSignal::new(None::<Result<Availability, String>>);
    Effect::new(move || {
        if let Some(r) = refresh {
            r.track();
        }
        leptos::task::spawn_local(async move {
            let result = games::availability(game_id).await.map_err(|e| e.user_message());
            state.set(Some(result));
        });
    });

    move || match state.get() {
        None => view! { <span class="badge badge--muted">"…"</span> }.into_any(),
        Some(Ok(a)) => {
            let class = if a.is_available() { "badge badge--ok" } else { "badge badge--warn" };
            view! { <span class=class>{availability_text(&a)}</span> }.into_any()
        }
        Some(Err(_)) => view! { <span class="badge badge--muted">"Availability unknown"</span> }.into_any(),
    }
}
