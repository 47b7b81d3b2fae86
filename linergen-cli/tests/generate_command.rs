//! Integration tests for the `generate` command.
//!
//! These tests verify topology generation end-to-end: default parameters,
//! explicit parameter bags, file output, and the error paths (unknown
//! template, malformed parameters, documents that fail validation).

use assert_cmd::Command;
use predicates::prelude::*;

fn linergen() -> Command {
    Command::cargo_bin("linergen").unwrap()
}

#[test]
fn test_generate_http_forward_defaults() {
    linergen()
        .args(["generate", "--template", "http_forward"])
        .assert()
        .success()
        .stdout(predicate::str::contains("global:"))
        .stdout(predicate::str::contains("https:"))
        .stdout(predicate::str::contains("- ':443'"))
        .stdout(predicate::str::contains("policy: proxy_pass"))
        .stdout(predicate::str::contains("dialer: local"));
}

#[test]
fn test_generate_tunnel_client_with_params() {
    linergen()
        .args([
            "generate",
            "--template",
            "tunnel_client",
            "--params",
            r#"{"remote_listen": ["127.0.0.1:10022"], "proxy_pass": "127.0.0.1:22",
                "dialer": "cloud", "dialer_url": "http2://proxy.example.org"}"#,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("tunnel:"))
        .stdout(predicate::str::contains("127.0.0.1:10022"))
        .stdout(predicate::str::contains("proxy_pass: 127.0.0.1:22"))
        .stdout(predicate::str::contains("dialer: cloud"))
        .stdout(predicate::str::contains("cloud: http2://proxy.example.org"))
        .stdout(predicate::str::contains("enable_keep_alive: true"));
}

#[test]
fn test_generate_tunnel_client_without_dialer_url_fails_validation() {
    // The default `cloud` dialer has no URL; generation validates before
    // emitting and reports the dangling reference.
    linergen()
        .args(["generate", "--template", "tunnel_client"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("tunnel[0].dialer"))
        .stderr(predicate::str::contains("'cloud' is not defined"));
}

#[test]
fn test_generate_writes_parseable_document_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("liner.yaml");

    linergen()
        .args(["generate", "--template", "full"])
        .arg("-o")
        .arg(&path)
        .assert()
        .success();

    let contents = std::fs::read_to_string(&path).unwrap();
    let config = linergen::Config::from_yaml(&contents).unwrap();
    assert_eq!(config.https.len(), 1);
    assert_eq!(config.dns.len(), 1);
    assert_eq!(config.dialer.get("local").map(String::as_str), Some("local"));
}

#[test]
fn test_generate_unknown_template() {
    linergen()
        .args(["generate", "--template", "bogus"])
        .assert()
        .failure()
        .code(6)
        .stderr(predicate::str::contains("unknown template 'bogus'"))
        .stderr(predicate::str::contains("tunnel_client"));
}

#[test]
fn test_generate_rejects_malformed_params() {
    linergen()
        .args(["generate", "--template", "dns", "--params", "{not json"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("must be valid JSON"));
}

#[test]
fn test_generate_rejects_mistyped_params() {
    linergen()
        .args([
            "generate",
            "--template",
            "dns",
            "--params",
            r#"{"listen": ":53"}"#,
        ])
        .assert()
        .failure()
        .code(6)
        .stderr(predicate::str::contains("invalid parameters"));
}

#[test]
fn test_generate_reports_validation_failure_with_full_list() {
    // The default redsocks topology references a `proxy` dialer that has
    // no URL, so validation must fail before anything is emitted.
    linergen()
        .args(["generate", "--template", "redsocks"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("redsocks[0].forward.dialer"))
        .stderr(predicate::str::contains("'proxy' is not defined"));
}

#[test]
fn test_generate_stream_requires_proxy_pass() {
    linergen()
        .args(["generate", "--template", "stream"])
        .assert()
        .failure()
        .code(6)
        .stderr(predicate::str::contains(
            "missing required parameter 'proxy_pass'",
        ));
}

#[test]
fn test_generate_stream_with_target() {
    linergen()
        .args([
            "generate",
            "--template",
            "stream",
            "--params",
            r#"{"listen": [":3389"], "proxy_pass": "192.168.1.100:3389"}"#,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("stream:"))
        .stdout(predicate::str::contains("proxy_pass: 192.168.1.100:3389"));
}
