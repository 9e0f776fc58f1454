use super::*;

fn user() -> User {
    User {
        id: 7,
        username: "meeple".to_owned(),
        email: "meeple@example.com".to_owned(),
        display_name: Some("Mia".to_owned()),
        avatar_url: None,
        bio: None,
        location: Some("Leeds".to_owned()),
    }
}

#[test]
fn draft_prefills_from_user() {
    let draft = ProfileDraft::from_user(&user());
    assert_eq!(draft.display_name, "Mia");
    assert_eq!(draft.bio, "");
    assert_eq!(draft.location, "Leeds");
}

#[test]
fn blank_fields_clear_values() {
    let input = validate(&ProfileDraft { display_name: "  ".to_owned(), ..ProfileDraft::default() }).unwrap();
    assert_eq!(input, ProfileInput::default());
}

#[test]
fn values_are_trimmed() {
    let draft = ProfileDraft { location: " York ".to_owned(), ..ProfileDraft::from_user(&user()) };
    let input = validate(&draft).unwrap();
    assert_eq!(input.display_name.as_deref(), Some("Mia"));
    assert_eq!(input.location.as_deref(), Some("York"));
}

#[test]
fn long_fields_are_rejected() {
    let draft = ProfileDraft {
        display_name: "x".repeat(DISPLAY_NAME_MAX + 1),
        bio: "y".repeat(BIO_MAX + 1),
        location: "ok".to_owned(),
    };
    let errors = validate(&draft).unwrap_err();
    assert_eq!(errors.get("display_name"), Some("Display name must be at most 100 characters."));
    assert!(errors.has("bio"));
    assert!(!errors.has("location"));
}

#[test]
fn payload_serializes_blank_as_null() {
    let json = serde_json::to_value(validate(&ProfileDraft::default()).unwrap()).unwrap();
    assert_eq!(json, serde_json::json!({"display_name": null, "bio": null, "location": null}));
}
