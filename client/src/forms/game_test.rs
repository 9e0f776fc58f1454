use super::*;

fn draft() -> GameDraft {
    GameDraft { title: "Azul".to_owned(), ..GameDraft::default() }
}

#[test]
fn default_draft_with_title_is_valid() {
    let input = validate(&draft(), 2026).unwrap();
    assert_eq!(input.title, "Azul");
    assert_eq!((input.min_players, input.max_players), (2, 4));
    assert_eq!(input.description, None);
}

#[test]
fn title_is_required() {
    let d = GameDraft { title: "  ".to_owned(), ..draft() };
    assert_eq!(validate(&d, 2026).unwrap_err().get("title"), Some("Title is required."));
}

#[test]
fn player_range_must_be_ordered_and_bounded() {
    let d = GameDraft { min_players: "5".to_owned(), max_players: "3".to_owned(), ..draft() };
    assert!(validate(&d, 2026).unwrap_err().has("max_players"));

    let d = GameDraft { min_players: "0".to_owned(), ..draft() };
    assert!(validate(&d, 2026).unwrap_err().has("min_players"));

    let d = GameDraft { max_players: "101".to_owned(), ..draft() };
    assert!(validate(&d, 2026).unwrap_err().has("max_players"));
}

#[test]
fn missing_player_count_is_reported() {
    let d = GameDraft { max_players: String::new(), ..draft() };
    assert_eq!(validate(&d, 2026).unwrap_err().get("max_players"), Some("Maximum players is required."));
}

#[test]
fn zero_playtime_is_rejected() {
    let d = GameDraft { playtime_minutes: "0".to_owned(), ..draft() };
    assert!(validate(&d, 2026).unwrap_err().has("playtime_minutes"));
    let d = GameDraft { playtime_minutes: "45".to_owned(), ..draft() };
    assert_eq!(validate(&d, 2026).unwrap().playtime_minutes, Some(45));
}

#[test]
fn year_window_allows_next_year() {
    let d = GameDraft { year_published: "2027".to_owned(), ..draft() };
    assert!(validate(&d, 2026).is_ok());
    let d = GameDraft { year_published: "2028".to_owned(), ..draft() };
    assert!(validate(&d, 2026).unwrap_err().has("year_published"));
    let d = GameDraft { year_published: "1799".to_owned(), ..draft() };
    assert!(validate(&d, 2026).unwrap_err().has("year_published"));
}

#[test]
fn long_description_is_rejected() {
    let d = GameDraft { description: "x".repeat(DESCRIPTION_MAX + 1), ..draft() };
    assert!(validate(&d, 2026).unwrap_err().has("description"));
}

#[test]
fn image_url_must_be_http() {
    let d = GameDraft { image_url: "javascript:alert(1)".to_owned(), ..draft() };
    assert!(validate(&d, 2026).unwrap_err().has("image_url"));
}

#[test]
fn from_game_round_trips_through_validate() {
    let game = Game {
        id: 1,
        title: "Brass".to_owned(),
        description: Some("Industry".to_owned()),
        min_players: 2,
        max_players: 4,
        playtime_minutes: Some(120),
        year_published: Some(2018),
        image_url: None,
        owner_id: Some(1),
        average_rating: None,
        review_count: 0,
    };
    let input = validate(&GameDraft::from_game(&game), 2026).unwrap();
    assert_eq!(input.title, "Brass");
    assert_eq!(input.playtime_minutes, Some(120));
    assert_eq!(input.year_published, Some(2018));
}
