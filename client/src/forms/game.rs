//! Create/edit game form.

#[cfg(test)]
#[path = "game_test.rs"]
mod game_test;

use super::{FormErrors, bounded_text, optional_number, optional_text, required_text};
use crate::net::types::{Game, GameInput};

pub const TITLE_MAX: usize = 200;
pub const DESCRIPTION_MAX: usize = 2000;
pub const PLAYERS_MAX: u32 = 100;
pub const EARLIEST_YEAR: i32 = 1800;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameDraft {
    pub title: String,
    pub description: String,
    pub min_players: String,
    pub max_players: String,
    pub playtime_minutes: String,
    pub year_published: String,
    pub image_url: String,
}

impl Default for GameDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            min_players: "2".to_owned(),
            max_players: "4".to_owned(),
            playtime_minutes: String::new(),
            year_published: String::new(),
            image_url: String::new(),
        }
    }
}

impl GameDraft {
    /// Prefill from an existing game for editing.
    pub fn from_game(game: &Game) -> Self {
        fn opt<T: ToString>(v: Option<T>) -> String {
            v.map(|v| v.to_string()).unwrap_or_default()
        }
        Self {
            title: game.title.clone(),
            description: game.description.clone().unwrap_or_default(),
            min_players: game.min_players.to_string(),
            max_players: game.max_players.to_string(),
            playtime_minutes: opt(game.playtime_minutes),
            year_published: opt(game.year_published),
            image_url: game.image_url.clone().unwrap_or_default(),
        }
    }
}

/// `current_year` bounds the publication year (one year ahead is allowed
/// for announced titles).
///
/// # Errors
///
/// Field errors for title, player counts, playtime, year, or description.
pub fn validate(draft: &GameDraft, current_year: i32) -> Result<GameInput, FormErrors> {
    let mut errors = FormErrors::new();
    let title = required_text(&mut errors, "title", "Title", &draft.title, TITLE_MAX);
    let description = bounded_text(&mut errors, "description", "Description", &draft.description, DESCRIPTION_MAX);

    let min_players = required_count(&mut errors, "min_players", "Minimum players", &draft.min_players);
    let max_players = required_count(&mut errors, "max_players", "Maximum players", &draft.max_players);
    if let (Some(min), Some(max)) = (min_players, max_players) {
        if min < 1 {
            errors.add("min_players", "At least one player is required.");
        }
        if max > PLAYERS_MAX {
            errors.add("max_players", format!("At most {PLAYERS_MAX} players."));
        }
        if min > max {
            errors.add("max_players", "Maximum players must be at least the minimum.");
        }
    }

    let playtime_minutes: Option<u32> =
        optional_number(&mut errors, "playtime_minutes", "Playtime", &draft.playtime_minutes);
    if playtime_minutes == Some(0) {
        errors.add("playtime_minutes", "Playtime must be greater than zero.");
    }

    let year_published: Option<i32> = optional_number(&mut errors, "year_published", "Year", &draft.year_published);
    if let Some(year) = year_published {
        let latest = current_year + 1;
        if !(EARLIEST_YEAR..=latest).contains(&year) {
            errors.add("year_published", format!("Year must be between {EARLIEST_YEAR} and {latest}."));
        }
    }

    let image_url = optional_text(&draft.image_url);
    if image_url
        .as_deref()
        .is_some_and(|u| !(u.starts_with("http://") || u.starts_with("https://")))
    {
        errors.add("image_url", "Image URL must start with http:// or https://.");
    }

    errors.finish(|| GameInput {
        title,
        description,
        min_players: min_players.unwrap_or_default(),
        max_players: max_players.unwrap_or_default(),
        playtime_minutes,
        year_published,
        image_url,
    })
}

fn required_count(errors: &mut FormErrors, field: &'static str, label: &str, raw: &str) -> Option<u32> {
    if raw.trim().is_empty() {
        errors.add(field, format!("{label} is required."));
        return None;
    }
    optional_number(errors, field, label, raw)
}
