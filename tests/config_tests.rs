use vibecards::core::config::{AppConfig, DEFAULT_WORKER_BASE_URL, WORKER_URL_VAR};
use vibecards::errors::ConfigError;

fn lookup_of(value: Option<&'static str>) -> impl Fn(&str) -> Option<String> {
    move |key: &str| {
        assert_eq!(key, WORKER_URL_VAR);
        value.map(str::to_string)
    }
}

#[test]
fn test_default_when_unset() {
    let config = AppConfig::from_lookup(lookup_of(None)).unwrap();
    assert_eq!(config.worker_base_url, DEFAULT_WORKER_BASE_URL);
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_blank_value_counts_as_unset() {
    let config = AppConfig::from_lookup(lookup_of(Some("   "))).unwrap();
    assert_eq!(config.worker_base_url, "http://localhost:8000");
}

#[test]
fn test_override_is_used_for_both_endpoints() {
    let config = AppConfig::from_lookup(lookup_of(Some("https://worker.internal:9443"))).unwrap();
    assert_eq!(
        config.worker_endpoint("/summarise"),
        "https://worker.internal:9443/summarise"
    );
    assert_eq!(
        config.worker_endpoint("/flashcards"),
        "https://worker.internal:9443/flashcards"
    );
}

#[test]
fn test_trailing_slash_is_trimmed() {
    let config = AppConfig::from_lookup(lookup_of(Some("http://worker:8000/"))).unwrap();
    assert_eq!(config.worker_base_url, "http://worker:8000");
}

#[test]
fn test_malformed_values_are_rejected() {
    for bad in ["not a url", "worker:8000", "ftp://worker", "http://worker/?x=1"] {
        let err = AppConfig::from_lookup(lookup_of(Some(bad))).unwrap_err();
        match err {
            ConfigError::InvalidWorkerUrl { value, .. } => assert_eq!(value, bad),
        }
    }
}
