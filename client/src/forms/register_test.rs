use super::*;

fn draft() -> RegisterDraft {
    RegisterDraft {
        username: "dice_roller".to_owned(),
        email: "dice@example.com".to_owned(),
        password: "longenough".to_owned(),
        confirm_password: "longenough".to_owned(),
    }
}

#[test]
fn valid_draft_produces_input() {
    let input = validate(&draft()).unwrap();
    assert_eq!(input.username, "dice_roller");
    assert_eq!(input.email, "dice@example.com");
}

#[test]
fn username_length_and_charset_are_checked() {
    let mut d = draft();
    d.username = "ab".to_owned();
    assert!(validate(&d).unwrap_err().has("username"));
    d.username = "has space".to_owned();
    assert!(validate(&d).unwrap_err().has("username"));
    d.username = "x".repeat(USERNAME_MAX + 1);
    assert!(validate(&d).unwrap_err().has("username"));
}

#[test]
fn email_shapes() {
    assert!(is_plausible_email("a@b.co"));
    assert!(!is_plausible_email("a@b"));
    assert!(!is_plausible_email("@b.co"));
    assert!(!is_plausible_email("a@@b.co"));
    assert!(!is_plausible_email("a@b..co"));
    assert!(!is_plausible_email("a b@c.co"));
}

#[test]
fn short_password_and_mismatch_are_separate_errors() {
    let mut d = draft();
    d.password = "short".to_owned();
    d.confirm_password = "other".to_owned();
    let errors = validate(&d).unwrap_err();
    assert!(errors.has("password"));
    assert_eq!(errors.get("confirm_password"), Some("Passwords do not match."));
}
