use super::*;

#[test]
fn target_url_joins_backend_path_and_query() {
    let url = target_url("http://backend:8000/", "/api/games", Some("search=azul&page=2")).unwrap();
    assert_eq!(url.as_str(), "http://backend:8000/api/games?search=azul&page=2");
}

#[test]
fn target_url_without_query() {
    let url = target_url("http://backend:8000", "/users/me", None).unwrap();
    assert_eq!(url.as_str(), "http://backend:8000/users/me");
    let url = target_url("http://backend:8000", "/users/me", Some("")).unwrap();
    assert_eq!(url.as_str(), "http://backend:8000/users/me");
}

#[test]
fn target_url_rejects_traversal() {
    assert!(matches!(
        target_url("http://backend:8000", "/api/../admin", None),
        Err(ProxyError::InvalidTarget(_))
    ));
    assert!(matches!(target_url("http://backend:8000", "api/games", None), Err(ProxyError::InvalidTarget(_))));
}

#[test]
fn target_url_rejects_percent_encoded_traversal() {
    for path in ["/api/%2e%2e/%2E%2E/admin/secret", "/api/.%2e/internal", "/auth/%2E./x", "/users/%2e/me"] {
        assert!(
            matches!(target_url("http://backend:8000/base", path, None), Err(ProxyError::InvalidTarget(_))),
            "{path} should be rejected"
        );
    }
}

#[test]
fn target_url_keeps_backend_base_path() {
    let url = target_url("http://backend:8000/base/", "/api/games/3", None).unwrap();
    assert_eq!(url.path(), "/base/api/games/3");
}

#[test]
fn target_url_only_forwards_proxied_prefixes() {
    assert!(matches!(target_url("http://backend:8000", "/internal/admin", None), Err(ProxyError::InvalidTarget(_))));
    assert!(matches!(target_url("http://backend:8000", "/api", None), Err(ProxyError::InvalidTarget(_))));
    assert!(matches!(target_url("http://backend:8000", "/api/..\\admin", None), Err(ProxyError::InvalidTarget(_))));
}

#[test]
fn encoded_dots_inside_names_are_allowed() {
    let url = target_url("http://backend:8000", "/api/games/%2e%2eazul", None).unwrap();
    assert_eq!(url.path(), "/api/games/%2e%2eazul");
}

#[test]
fn request_headers_drop_host_and_hop_by_hop() {
    let mut headers = HeaderMap::new();
    headers.insert(header::HOST, HeaderValue::from_static("localhost:3000"));
    headers.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));
    headers.insert(header::COOKIE, HeaderValue::from_static("session=abc"));
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));

    let out = forward_request_headers(&headers);
    assert!(out.get(header::HOST).is_none());
    assert!(out.get(header::CONNECTION).is_none());
    assert_eq!(out.get(header::COOKIE).unwrap(), "session=abc");
    assert_eq!(out.get(header::CONTENT_TYPE).unwrap(), "application/json");
}

#[test]
fn response_headers_keep_every_set_cookie() {
    let mut headers = HeaderMap::new();
    headers.append(header::SET_COOKIE, HeaderValue::from_static("a=1; Domain=api.example.com; Path=/"));
    headers.append(header::SET_COOKIE, HeaderValue::from_static("b=2; Path=/"));
    headers.insert(header::TRANSFER_ENCODING, HeaderValue::from_static("chunked"));

    let out = forward_response_headers(&headers, true);
    let cookies: Vec<_> = out.get_all(header::SET_COOKIE).iter().map(|v| v.to_str().unwrap()).collect();
    assert_eq!(cookies, vec!["a=1; Path=/", "b=2; Path=/"]);
    assert!(out.get(header::TRANSFER_ENCODING).is_none());
}

#[test]
fn response_cookies_untouched_when_stripping_disabled() {
    let mut headers = HeaderMap::new();
    headers.insert(header::SET_COOKIE, HeaderValue::from_static("a=1; Domain=api.example.com"));
    let out = forward_response_headers(&headers, false);
    assert_eq!(out.get(header::SET_COOKIE).unwrap(), "a=1; Domain=api.example.com");
}

#[test]
fn rewrite_set_cookie_strips_domain_case_insensitively() {
    assert_eq!(
        rewrite_set_cookie("session=xyz; HttpOnly; domain=.example.com; Path=/; SameSite=Lax"),
        "session=xyz; HttpOnly; Path=/; SameSite=Lax"
    );
    assert_eq!(rewrite_set_cookie("flag=1"), "flag=1");
}

#[test]
fn error_statuses() {
    assert_eq!(ProxyError::Upstream("refused".into()).status(), StatusCode::BAD_GATEWAY);
    assert_eq!(ProxyError::Timeout.status(), StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(ProxyError::InvalidTarget("x".into()).status(), StatusCode::INTERNAL_SERVER_ERROR);
}
