//! Integration tests for the configuration system.
//!
//! These tests exercise the template builder, validator, and serializer
//! together: every document the library can generate must survive a YAML
//! round-trip unchanged, and validation must behave as a pure function of
//! the document value.

use linergen::config::defaults;
use linergen::{Config, ConfigValidator, TemplateRequest};
use proptest::prelude::*;
use serde_json::json;
use std::collections::BTreeMap;

// ============================================================================
// Round-trip guarantees
// ============================================================================

/// Every supported topology, built with default parameters, must round-trip
/// through YAML field-for-field.
#[test]
fn test_all_topologies_round_trip_with_defaults() {
    for template in linergen::SUPPORTED_TEMPLATES.split(", ") {
        // stream has a genuinely required parameter
        let params = if template == "stream" {
            json!({"proxy_pass": "192.168.1.100:3389"})
        } else {
            json!({})
        };
        let config = TemplateRequest::from_params(template, params)
            .unwrap()
            .build()
            .unwrap();
        let yaml = config.to_yaml().unwrap();
        let parsed = Config::from_yaml(&yaml).unwrap();
        assert_eq!(parsed, config, "round-trip mismatch for {template}:\n{yaml}");
    }
}

#[test]
fn test_defaults_factory_fragments_round_trip() {
    let config = Config {
        global: Some(defaults::global()),
        dialer: BTreeMap::from([("local".to_string(), "local".to_string())]),
        https: vec![defaults::http_block(
            vec![":443".to_string()],
            vec!["example.org".to_string()],
        )],
        tunnel: vec![defaults::tunnel_block(
            vec!["127.0.0.1:10022".to_string()],
            "127.0.0.1:22",
            "cloud",
        )],
        dns: vec![defaults::dns_block(
            vec![":53".to_string()],
            "https://8.8.8.8/dns-query",
        )],
        ..Default::default()
    };
    let yaml = config.to_yaml().unwrap();
    assert_eq!(Config::from_yaml(&yaml).unwrap(), config);
}

// ============================================================================
// Validator behavior over generated documents
// ============================================================================

/// Documents produced by templates validate cleanly, except for the
/// topologies whose defaults intentionally leave a dialer unresolved
/// (tunnel_client and redsocks until a dialer URL is supplied).
#[test]
fn test_generated_documents_validate() {
    for template in ["http_forward", "tunnel_server", "dns", "full"] {
        let config = TemplateRequest::from_params(template, json!({}))
            .unwrap()
            .build()
            .unwrap();
        let result = ConfigValidator::validate(&config);
        assert!(
            result.is_valid(),
            "{template} produced violations: {:?}",
            result.errors()
        );
    }
}

/// A default tunnel_client points at the `cloud` dialer without defining
/// it; the builder stays permissive and the validator reports the dangling
/// reference. Supplying the URL resolves it.
#[test]
fn test_tunnel_client_default_leaves_dialer_unresolved() {
    let config = TemplateRequest::from_params("tunnel_client", json!({}))
        .unwrap()
        .build()
        .unwrap();
    let result = ConfigValidator::validate(&config);
    assert_eq!(result.errors().len(), 1);
    assert_eq!(result.errors()[0].field, "tunnel[0].dialer");

    let config = TemplateRequest::from_params(
        "tunnel_client",
        json!({"dialer_url": "http2://proxy.example.org"}),
    )
    .unwrap()
    .build()
    .unwrap();
    assert!(ConfigValidator::validate(&config).is_valid());
}

#[test]
fn test_validation_twice_yields_identical_results() {
    let config = TemplateRequest::from_params(
        "tunnel_client",
        json!({"dialer": "ghost", "remote_listen": ["127.0.0.1:10022"]}),
    )
    .unwrap()
    .build()
    .unwrap();
    assert_eq!(
        ConfigValidator::validate(&config),
        ConfigValidator::validate(&config)
    );
}

#[test]
fn test_validate_text_full_pipeline() {
    let yaml = r"
dialer:
  local: local
https:
- listen:
  - ':443'
  forward:
    policy: proxy_pass
    dialer: undefined_dialer
";
    let result = ConfigValidator::validate_text(yaml).unwrap();
    assert!(!result.is_valid());

    // Both the missing server_name and the dangling dialer are reported in
    // one pass.
    let fields: Vec<&str> = result.errors().iter().map(|e| e.field.as_str()).collect();
    assert_eq!(
        fields,
        vec!["https[0].server_name", "https[0].forward.dialer"]
    );
}

#[test]
fn test_syntax_error_never_reaches_structural_validation() {
    // An unterminated flow mapping is a syntax error, not a violation list.
    let result = ConfigValidator::validate_text("https: [{listen: ':443'");
    assert!(result.is_err());
}

// ============================================================================
// Property-based coverage
// ============================================================================

fn port_listen() -> impl Strategy<Value = Vec<String>> {
    (1u16..=65535).prop_map(|port| vec![format!(":{port}")])
}

proptest! {
    /// Round-trip: serializing and re-parsing an http_forward document
    /// reproduces it exactly, whatever the listen address, server name,
    /// and dialer entry.
    #[test]
    fn prop_http_forward_round_trip(
        listen in port_listen(),
        host in "[a-z]{1,12}\\.(org|net|example)",
        dialer in "[a-z][a-z0-9_]{0,15}",
        url_host in "[a-z]{1,12}\\.example",
    ) {
        let config = TemplateRequest::from_params(
            "http_forward",
            json!({
                "listen": listen,
                "server_name": [host],
                "dialer": dialer,
                "dialer_url": format!("socks5://{url_host}:1080"),
            }),
        )
        .unwrap()
        .build()
        .unwrap();

        let yaml = config.to_yaml().unwrap();
        let parsed = Config::from_yaml(&yaml).unwrap();
        prop_assert_eq!(parsed, config);
    }

    /// Validation is deterministic: two runs over the same document agree,
    /// and serializing in between does not change the outcome.
    #[test]
    fn prop_validation_deterministic(
        listen in port_listen(),
        dialer in "[a-z][a-z0-9_]{0,15}",
        with_url in any::<bool>(),
    ) {
        let mut params = json!({
            "remote_listen": listen,
            "dialer": dialer,
        });
        if with_url {
            params["dialer_url"] = json!("http3://relay.example:443");
        }
        let config = TemplateRequest::from_params("tunnel_client", params)
            .unwrap()
            .build()
            .unwrap();

        let first = ConfigValidator::validate(&config);
        let second = ConfigValidator::validate(&config);
        prop_assert_eq!(&first, &second);

        let reparsed = Config::from_yaml(&config.to_yaml().unwrap()).unwrap();
        prop_assert_eq!(&first, &ConfigValidator::validate(&reparsed));
    }

    /// The builder never lets a caller-supplied URL shadow the built-in
    /// `local` dialer.
    #[test]
    fn prop_local_dialer_never_overwritten(
        url_host in "[a-z]{1,12}\\.example",
    ) {
        let config = TemplateRequest::from_params(
            "http_forward",
            json!({"dialer": "local", "dialer_url": format!("wss://{url_host}:443")}),
        )
        .unwrap()
        .build()
        .unwrap();
        prop_assert_eq!(config.dialer.get("local").map(String::as_str), Some("local"));
        prop_assert_eq!(config.dialer.len(), 1);
    }
}
