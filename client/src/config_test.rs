use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

fn full() -> Vec<(&'static str, &'static str)> {
    vec![
        (SERVICE_ID_VAR, "service_abc"),
        (TEMPLATE_ID_VAR, "template_xyz"),
        (PUBLIC_KEY_VAR, "pk_123"),
    ]
}

#[test]
fn from_lookup_defaults_endpoint() {
    let cfg = RelayConfig::from_lookup(lookup_from(&full())).unwrap();
    assert_eq!(cfg.endpoint, DEFAULT_EMAILJS_ENDPOINT);
    assert_eq!(cfg.service_id, "service_abc");
    assert_eq!(cfg.template_id, "template_xyz");
    assert_eq!(cfg.public_key, "pk_123");
}

#[test]
fn from_lookup_accepts_endpoint_override() {
    let mut pairs = full();
    pairs.push((ENDPOINT_VAR, "http://localhost:9000/send"));
    let cfg = RelayConfig::from_lookup(lookup_from(&pairs)).unwrap();
    assert_eq!(cfg.endpoint, "http://localhost:9000/send");
}

#[test]
fn from_lookup_rejects_non_http_endpoint() {
    let mut pairs = full();
    pairs.push((ENDPOINT_VAR, "ftp://example.test"));
    assert_eq!(
        RelayConfig::from_lookup(lookup_from(&pairs)),
        Err(ConfigError::InvalidEndpoint("ftp://example.test".to_owned()))
    );
}

#[test]
fn from_lookup_blank_endpoint_falls_back_to_default() {
    let mut pairs = full();
    pairs.push((ENDPOINT_VAR, "   "));
    let cfg = RelayConfig::from_lookup(lookup_from(&pairs)).unwrap();
    assert_eq!(cfg.endpoint, DEFAULT_EMAILJS_ENDPOINT);
}

#[test]
fn from_lookup_reports_first_missing_id() {
    let pairs = [(SERVICE_ID_VAR, "service_abc"), (PUBLIC_KEY_VAR, "pk_123")];
    assert_eq!(
        RelayConfig::from_lookup(lookup_from(&pairs)),
        Err(ConfigError::MissingVar { var: TEMPLATE_ID_VAR })
    );
}

#[test]
fn from_lookup_treats_blank_id_as_missing() {
    let pairs = [(SERVICE_ID_VAR, "  "), (TEMPLATE_ID_VAR, "t"), (PUBLIC_KEY_VAR, "k")];
    assert_eq!(
        RelayConfig::from_lookup(lookup_from(&pairs)),
        Err(ConfigError::MissingVar { var: SERVICE_ID_VAR })
    );
}

#[test]
fn from_lookup_trims_values() {
    let pairs = [(SERVICE_ID_VAR, " s "), (TEMPLATE_ID_VAR, "t\n"), (PUBLIC_KEY_VAR, "\tk")];
    let cfg = RelayConfig::from_lookup(lookup_from(&pairs)).unwrap();
    assert_eq!((cfg.service_id.as_str(), cfg.template_id.as_str(), cfg.public_key.as_str()), ("s", "t", "k"));
}
