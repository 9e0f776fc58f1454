//! Readable-cookie helpers for the `isAuthenticated` flag.
//!
//! The session cookie itself is `HttpOnly`; the backend also sets a plain
//! flag cookie so the client can skip the session check entirely when the
//! user is obviously signed out.

#[cfg(test)]
#[path = "cookies_test.rs"]
mod cookies_test;

use crate::config::AUTH_FLAG_COOKIE;

/// Value of `name` in a `document.cookie`-style header (`a=1; b=2`).
pub fn cookie_value<'a>(cookie_header: &'a str, name: &str) -> Option<&'a str> {
    cookie_header.split(';').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key.trim() == name).then(|| value.trim())
    })
}

/// Whether a flag cookie value means "on".
pub fn flag_set(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "true" | "1" | "yes")
}

/// Header value that expires the flag cookie.
pub fn expired_flag_cookie() -> String {
    format!("{AUTH_FLAG_COOKIE}=; Path=/; Max-Age=0; SameSite=Lax")
}

#[cfg(feature = "hydrate")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;
    web_sys::window()?.document()?.dyn_into::<web_sys::HtmlDocument>().ok()
}

/// Whether the browser holds a truthy auth flag cookie.
pub fn auth_flag_present() -> bool {
    #[cfg(feature = "hydrate")]
    {
        html_document()
            .and_then(|doc| doc.cookie().ok())
            .as_deref()
            .and_then(|header| cookie_value(header, AUTH_FLAG_COOKIE))
            .is_some_and(flag_set)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Expire the flag cookie locally after logout or session expiry.
pub fn clear_auth_flag() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = html_document() {
            let _ = doc.set_cookie(&expired_flag_cookie());
        }
    }
}
