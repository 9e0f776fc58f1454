use super::*;

#[test]
fn renders_basic_markdown() {
    let html = render_markdown_html("**Great** for 4 players");
    assert!(html.contains("<strong>Great</strong>"));
}

#[test]
fn drops_raw_html() {
    let html = render_markdown_html("hi <script>alert(1)</script>");
    assert!(!html.contains("<script>"));
}

#[test]
fn neutralizes_script_links() {
    let html = render_markdown_html("[click](javascript:alert(1))");
    assert!(html.contains("href=\"#\""));
    assert!(!html.contains("javascript"));
}

#[test]
fn keeps_web_and_relative_links() {
    let html = render_markdown_html("[rules](https://example.com/rules.pdf) and [game](/games/3)");
    assert!(html.contains("href=\"https://example.com/rules.pdf\""));
    assert!(html.contains("href=\"/games/3\""));
}

#[test]
fn url_safety_rules() {
    assert!(is_safe_url("mailto:host@example.com"));
    assert!(is_safe_url("/path?x=a:b"));
    assert!(!is_safe_url(" JavaScript:alert(1)"));
    assert!(!is_safe_url("data:text/html,hi"));
}
