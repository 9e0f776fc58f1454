//! Same-origin reverse proxy to the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only ever talks to this host, so the backend's session cookie
//! is first-party and no CORS is involved. Requests are streamed through
//! unchanged apart from hop-by-hop headers; backend `Set-Cookie` headers can
//! have their `Domain=` attribute stripped so the cookie binds to this host.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::Json;
use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::header::{self, HeaderMap, HeaderName, HeaderValue};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Headers that describe a single connection and must not be forwarded.
const HOP_BY_HOP: [&str; 8] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("backend unreachable: {0}")]
    Upstream(String),
    #[error("backend timed out")]
    Timeout,
    #[error("invalid proxy target: {0}")]
    InvalidTarget(String),
}

impl ProxyError {
    fn from_reqwest(err: &reqwest::Error) -> Self {
        if err.is_timeout() { Self::Timeout } else { Self::Upstream(err.to_string()) }
    }

    pub(crate) fn status(&self) -> StatusCode {
        match self {
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
            Self::InvalidTarget(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(error = %self, %status, "proxy request failed");
        (status, Json(serde_json::json!({ "detail": self.to_string() }))).into_response()
    }
}

/// Path prefixes forwarded to the backend.
pub const PROXIED_PREFIXES: [&str; 3] = ["/api/", "/auth/", "/users/"];

/// `.` or `..`, including percent-encoded dots, which URL parsing resolves.
fn is_dot_segment(segment: &str) -> bool {
    let decoded = segment.to_ascii_lowercase().replace("%2e", ".");
    decoded == "." || decoded == ".."
}

/// Backend URL for an incoming path and optional query string.
///
/// The resolved path must stay under the backend's base path and one of
/// [`PROXIED_PREFIXES`].
pub fn target_url(backend: &str, path: &str, query: Option<&str>) -> Result<reqwest::Url, ProxyError> {
    let invalid = || ProxyError::InvalidTarget(path.to_owned());
    if !path.starts_with('/') || path.split(['/', '\\']).any(is_dot_segment) {
        return Err(invalid());
    }

    let base = reqwest::Url::parse(backend).map_err(|e| ProxyError::InvalidTarget(format!("{backend}: {e}")))?;
    let base_path = base.path().trim_end_matches('/');

    let mut raw = format!("{}{path}", backend.trim_end_matches('/'));
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        raw.push('?');
        raw.push_str(query);
    }
    let url = reqwest::Url::parse(&raw).map_err(|e| ProxyError::InvalidTarget(format!("{raw}: {e}")))?;

    let resolved = url.path().strip_prefix(base_path).unwrap_or_default();
    if url.origin() != base.origin() || !PROXIED_PREFIXES.iter().any(|prefix| resolved.starts_with(prefix)) {
        return Err(invalid());
    }
    Ok(url)
}

fn is_hop_by_hop(name: &HeaderName) -> bool {
    HOP_BY_HOP.contains(&name.as_str())
}

/// Client headers to send upstream: everything but hop-by-hop and `host`.
pub fn forward_request_headers(incoming: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::with_capacity(incoming.len());
    for (name, value) in incoming {
        if is_hop_by_hop(name) || name == header::HOST {
            continue;
        }
        out.append(name.clone(), value.clone());
    }
    out
}

/// Backend headers to return to the browser.
pub fn forward_response_headers(upstream: &HeaderMap, strip_cookie_domain: bool) -> HeaderMap {
    let mut out = HeaderMap::with_capacity(upstream.len());
    for (name, value) in upstream {
        if is_hop_by_hop(name) {
            continue;
        }
        if strip_cookie_domain && name == header::SET_COOKIE {
            let rewritten = value
                .to_str()
                .ok()
                .map(rewrite_set_cookie)
                .and_then(|v| HeaderValue::from_str(&v).ok());
            out.append(name.clone(), rewritten.unwrap_or_else(|| value.clone()));
            continue;
        }
        out.append(name.clone(), value.clone());
    }
    out
}

/// Drop the `Domain=` attribute from a `Set-Cookie` value.
pub fn rewrite_set_cookie(value: &str) -> String {
    value
        .split(';')
        .map(str::trim)
        .filter(|attr| !attr.is_empty() && !attr.to_ascii_lowercase().starts_with("domain="))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Forward any method on the proxied prefixes to the backend.
pub async fn proxy_handler(State(state): State<AppState>, req: Request) -> Result<Response, ProxyError> {
    let (parts, body) = req.into_parts();
    let url = target_url(&state.config.backend_url, parts.uri.path(), parts.uri.query())?;
    tracing::debug!(method = %parts.method, %url, "proxying");

    let upstream = state
        .http
        .request(parts.method, url)
        .headers(forward_request_headers(&parts.headers))
        .body(reqwest::Body::wrap_stream(body.into_data_stream()))
        .send()
        .await
        .map_err(|e| ProxyError::from_reqwest(&e))?;

    let status = upstream.status();
    let headers = forward_response_headers(upstream.headers(), state.config.cookie_strip_domain);
    let mut response = Response::new(Body::from_stream(upstream.bytes_stream()));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    Ok(response)
}
