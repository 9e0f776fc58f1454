//! Catalog card for a game in list views.

use leptos::prelude::*;

use crate::net::types::Game;
use crate::util::format;

#[component]
pub fn GameCard(
    game: Game,
    /// "Add to my shelf" action; hidden when `None`.
    #[prop(optional)]
    on_copy: Option<Callback<i64>>,
) -> impl IntoView {
    let href = format!("/games/{}", game.id);
    let id = game.id;
    let players = format::player_range(game.min_players, game.max_players);
    let playtime = game.playtime_minutes.map(format::playtime);
    let rating = format::rating(game.average_rating);

    view! {
        <article class="game-card">
            {game.image_url.map(|src| view! { <img class="game-card__image" src=src alt="" loading="lazy" /> })}
            <div class="game-card__body">
                <a class="game-card__title" href=href>{game.title}</a>
                <p class="game-card__meta">
                    <span>{players}</span>
                    {playtime.map(|p| view! { <span>" · " {p}</span> })}
                    {game.year_published.map(|y| view! { <span>" · " {y}</span> })}
                </p>
                <p class="game-card__rating">
                    "★ " {rating} " (" {game.review_count} ")"
                </p>
            </div>
            {on_copy.map(|cb| view! {
                <button class="btn btn--small game-card__copy" on:click=move |_| cb.run(id)>
                    "I own this"
                </button>
            })}
        </article>
    }
}
