use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let config = HostConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
    assert!(config.cookie_strip_domain);
    assert_eq!(config.proxy_timeout_secs, DEFAULT_PROXY_TIMEOUT_SECS);
    assert_eq!(config.connect_timeout_secs, DEFAULT_CONNECT_TIMEOUT_SECS);
}

#[test]
fn backend_url_trailing_slash_trimmed() {
    let config = HostConfig::from_lookup(lookup(&[("BACKEND_URL", "https://api.example.com/ ")])).unwrap();
    assert_eq!(config.backend_url, "https://api.example.com");
}

#[test]
fn non_http_backend_rejected() {
    let err = HostConfig::from_lookup(lookup(&[("BACKEND_URL", "ftp://files")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidBackendUrl("ftp://files".to_owned()));
}

#[test]
fn bad_port_rejected() {
    let err = HostConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("eighty".to_owned()));
}

#[test]
fn cookie_strip_can_be_disabled() {
    let config = HostConfig::from_lookup(lookup(&[("COOKIE_STRIP_DOMAIN", "off")])).unwrap();
    assert!(!config.cookie_strip_domain);
}

#[test]
fn unparseable_bool_keeps_default() {
    let config = HostConfig::from_lookup(lookup(&[("COOKIE_STRIP_DOMAIN", "maybe")])).unwrap();
    assert!(config.cookie_strip_domain);
}

#[test]
fn bad_timeout_falls_back() {
    let config = HostConfig::from_lookup(lookup(&[("PROXY_TIMEOUT_SECS", "soon"), ("PROXY_CONNECT_TIMEOUT_SECS", "2")])).unwrap();
    assert_eq!(config.proxy_timeout_secs, DEFAULT_PROXY_TIMEOUT_SECS);
    assert_eq!(config.connect_timeout_secs, 2);
}

#[test]
fn parse_bool_variants() {
    for raw in ["1", "true", "YES", " On "] {
        assert_eq!(parse_bool(raw), Some(true), "{raw:?}");
    }
    for raw in ["0", "false", "No", "off"] {
        assert_eq!(parse_bool(raw), Some(false), "{raw:?}");
    }
    assert_eq!(parse_bool(""), None);
}
