use super::*;

#[test]
fn blank_fields_are_rejected() {
    let errors = validate(&LoginDraft::default()).unwrap_err();
    assert!(errors.has("username"));
    assert!(errors.has("password"));
}

#[test]
fn whitespace_password_is_rejected() {
    let draft = LoginDraft { username: "meeple".to_owned(), password: "   ".to_owned() };
    assert!(validate(&draft).unwrap_err().has("password"));
}

#[test]
fn username_is_trimmed_but_password_is_not() {
    let draft = LoginDraft { username: "  meeple ".to_owned(), password: " secret ".to_owned() };
    let input = validate(&draft).unwrap();
    assert_eq!(input.username, "meeple");
    assert_eq!(input.password, " secret ");
}
