//! Structural configuration validation.
//!
//! The validator walks an assembled [`Config`] in a fixed section order and
//! accumulates every violation it finds, so callers get the complete list
//! in one pass instead of stopping at the first problem. Violations carry a
//! dotted/bracket field path (`https[0].forward.dialer`) that addresses the
//! offending field exactly.
//!
//! Validation is a pure function of the document value: no state is kept
//! between calls, and the set of valid dialer names is recomputed from the
//! document's own dialer table on every call.

use crate::config::schema::{
    Config, CronConfig, DnsConfig, GlobalConfig, HttpConfig, RedsocksConfig, SniConfig,
    SocksConfig, SshConfig, StreamConfig, TunnelConfig,
};
use crate::error::Result;
use std::collections::BTreeSet;
use std::fmt;

/// Log levels accepted by the `global.log_level` field.
const LOG_LEVELS: [&str; 7] = ["trace", "debug", "info", "warn", "error", "fatal", "panic"];

/// One structural violation: a machine-addressable field path and a
/// human-readable message.
///
/// # Examples
///
/// ```
/// use linergen::config::ValidationError;
///
/// let err = ValidationError {
///     field: "tunnel[0].proxy_pass".to_string(),
///     message: "proxy_pass field is required".to_string(),
/// };
/// assert_eq!(err.to_string(), "tunnel[0].proxy_pass: proxy_pass field is required");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted/bracket path of the offending field.
    pub field: String,
    /// Description of the violation.
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// The outcome of validating one document.
///
/// A result is valid exactly when its violation list is empty; validity is
/// derived, never stored separately.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// True when no violations were found.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The accumulated violations, in traversal order.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    fn push(&mut self, field: String, message: impl Into<String>) {
        self.errors.push(ValidationError {
            field,
            message: message.into(),
        });
    }
}

/// True when an optional string is absent or empty.
fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}

/// Validates liner configuration documents.
///
/// # Examples
///
/// ```
/// use linergen::config::{Config, ConfigValidator};
///
/// let result = ConfigValidator::validate(&Config::default());
/// assert!(result.is_valid());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Check that raw text is well-formed YAML, without interpreting it.
    ///
    /// This is the syntax pre-check: it must pass before structural
    /// validation is attempted at all.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Yaml`] when the text is not well-formed.
    pub fn check_syntax(text: &str) -> Result<()> {
        serde_yaml::from_str::<serde_yaml::Value>(text)?;
        Ok(())
    }

    /// Validate raw document text.
    ///
    /// Runs the syntax pre-check, decodes the document, then performs the
    /// structural walk. A syntax or decode failure short-circuits with an
    /// error and never produces a [`ValidationResult`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Yaml`] when the text is not well-formed YAML
    /// or does not decode into the schema.
    pub fn validate_text(text: &str) -> Result<ValidationResult> {
        Self::check_syntax(text)?;
        let config = Config::from_yaml(text)?;
        Ok(Self::validate(&config))
    }

    /// Validate an assembled document.
    ///
    /// Sections are checked in a fixed order (global, dialers, https, http,
    /// tunnel, dns, socks, redsocks, stream, ssh, then sni and cron), with
    /// dialer cross-references last. Every violation is accumulated.
    #[must_use]
    pub fn validate(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::default();

        if let Some(global) = &config.global {
            Self::validate_global(global, &mut result);
        }
        Self::validate_dialers(config, &mut result);
        for (i, https) in config.https.iter().enumerate() {
            Self::validate_http(https, &format!("https[{i}]"), true, &mut result);
        }
        for (i, http) in config.http.iter().enumerate() {
            Self::validate_http(http, &format!("http[{i}]"), false, &mut result);
        }
        for (i, tunnel) in config.tunnel.iter().enumerate() {
            Self::validate_tunnel(tunnel, &format!("tunnel[{i}]"), &mut result);
        }
        for (i, dns) in config.dns.iter().enumerate() {
            Self::validate_dns(dns, &format!("dns[{i}]"), &mut result);
        }
        for (i, socks) in config.socks.iter().enumerate() {
            Self::validate_socks(socks, &format!("socks[{i}]"), &mut result);
        }
        for (i, redsocks) in config.redsocks.iter().enumerate() {
            Self::validate_redsocks(redsocks, &format!("redsocks[{i}]"), &mut result);
        }
        for (i, stream) in config.stream.iter().enumerate() {
            Self::validate_stream(stream, &format!("stream[{i}]"), &mut result);
        }
        for (i, ssh) in config.ssh.iter().enumerate() {
            Self::validate_ssh(ssh, &format!("ssh[{i}]"), &mut result);
        }
        if let Some(sni) = &config.sni {
            Self::validate_sni(sni, &mut result);
        }
        for (i, cron) in config.cron.iter().enumerate() {
            Self::validate_cron(cron, &format!("cron[{i}]"), &mut result);
        }
        Self::validate_dialer_references(config, &mut result);

        log::debug!("validated configuration: {} violation(s)", result.errors.len());
        result
    }

    fn validate_global(global: &GlobalConfig, result: &mut ValidationResult) {
        if let Some(level) = global.log_level.as_deref() {
            if !level.is_empty() && !LOG_LEVELS.contains(&level) {
                result.push(
                    "global.log_level".to_string(),
                    format!(
                        "invalid log level: {level}, must be one of: {}",
                        LOG_LEVELS.join(", ")
                    ),
                );
            }
        }

        if let Some(server) = global.dns_server.as_deref() {
            if !server.is_empty()
                && !server.starts_with("https://")
                && !server.starts_with("udp://")
                && !server.contains(':')
            {
                result.push(
                    "global.dns_server".to_string(),
                    "dns_server should be a valid DNS server address \
                     (e.g., 'https://8.8.8.8/dns-query' or '8.8.8.8:53')",
                );
            }
        }
    }

    fn validate_dialers(config: &Config, result: &mut ValidationResult) {
        for (name, url) in &config.dialer {
            if name.is_empty() {
                result.push("dialer".to_string(), "dialer name cannot be empty");
            }
            if url.is_empty() {
                result.push(format!("dialer.{name}"), "dialer URL cannot be empty");
            }
        }
    }

    fn validate_http(
        http: &HttpConfig,
        prefix: &str,
        is_https: bool,
        result: &mut ValidationResult,
    ) {
        if http.listen.is_empty() {
            result.push(
                format!("{prefix}.listen"),
                "listen field is required and cannot be empty",
            );
        }

        if is_https && http.server_name.is_empty() {
            result.push(
                format!("{prefix}.server_name"),
                "server_name field is required for HTTPS configuration",
            );
        }

        // A forward block that sets neither policy nor dialer is inert and
        // not an error; once either is set, policy becomes required.
        if let Some(forward) = &http.forward {
            let touched = !is_blank(&forward.policy) || !is_blank(&forward.dialer);
            if touched && is_blank(&forward.policy) {
                result.push(
                    format!("{prefix}.forward.policy"),
                    "policy is required when forward is configured",
                );
            }
        }
    }

    fn validate_tunnel(tunnel: &TunnelConfig, prefix: &str, result: &mut ValidationResult) {
        if tunnel.remote_listen.is_empty() {
            result.push(
                format!("{prefix}.remote_listen"),
                "remote_listen field is required and cannot be empty",
            );
        }
        if is_blank(&tunnel.proxy_pass) {
            result.push(format!("{prefix}.proxy_pass"), "proxy_pass field is required");
        }
        if is_blank(&tunnel.dialer) {
            result.push(format!("{prefix}.dialer"), "dialer field is required");
        }
    }

    fn validate_dns(dns: &DnsConfig, prefix: &str, result: &mut ValidationResult) {
        if dns.listen.is_empty() {
            result.push(
                format!("{prefix}.listen"),
                "listen field is required and cannot be empty",
            );
        }
        if dns.policy.as_deref() == Some("forward") && is_blank(&dns.proxy_pass) {
            result.push(
                format!("{prefix}.proxy_pass"),
                "proxy_pass is required when policy is 'forward'",
            );
        }
    }

    fn validate_socks(socks: &SocksConfig, prefix: &str, result: &mut ValidationResult) {
        if socks.listen.is_empty() {
            result.push(
                format!("{prefix}.listen"),
                "listen field is required and cannot be empty",
            );
        }
    }

    fn validate_redsocks(redsocks: &RedsocksConfig, prefix: &str, result: &mut ValidationResult) {
        if redsocks.listen.is_empty() {
            result.push(
                format!("{prefix}.listen"),
                "listen field is required and cannot be empty",
            );
        }
    }

    fn validate_stream(stream: &StreamConfig, prefix: &str, result: &mut ValidationResult) {
        if stream.listen.is_empty() {
            result.push(
                format!("{prefix}.listen"),
                "listen field is required and cannot be empty",
            );
        }
        if is_blank(&stream.proxy_pass) {
            result.push(format!("{prefix}.proxy_pass"), "proxy_pass field is required");
        }
    }

    fn validate_ssh(ssh: &SshConfig, prefix: &str, result: &mut ValidationResult) {
        if ssh.listen.is_empty() {
            result.push(
                format!("{prefix}.listen"),
                "listen field is required and cannot be empty",
            );
        }
    }

    fn validate_sni(sni: &SniConfig, result: &mut ValidationResult) {
        if let Some(forward) = &sni.forward {
            let touched = !is_blank(&forward.policy) || !is_blank(&forward.dialer);
            if touched && is_blank(&forward.policy) {
                result.push(
                    "sni.forward.policy".to_string(),
                    "policy is required when forward is configured",
                );
            }
        }
    }

    fn validate_cron(cron: &CronConfig, prefix: &str, result: &mut ValidationResult) {
        if is_blank(&cron.spec) {
            result.push(format!("{prefix}.spec"), "spec field is required");
        }
        if is_blank(&cron.command) {
            result.push(format!("{prefix}.command"), "command field is required");
        }
    }

    /// Check every `dialer` field against the set of names defined by the
    /// document: the built-in `local` plus the keys of the dialer table.
    fn validate_dialer_references(config: &Config, result: &mut ValidationResult) {
        let mut defined: BTreeSet<&str> = BTreeSet::new();
        defined.insert("local");
        defined.extend(config.dialer.keys().map(String::as_str));

        let mut check = |field: String, dialer: &Option<String>| {
            if let Some(name) = dialer.as_deref() {
                if !name.is_empty() && !defined.contains(name) {
                    result.push(field, format!("dialer '{name}' is not defined"));
                }
            }
        };

        for (i, https) in config.https.iter().enumerate() {
            if let Some(forward) = &https.forward {
                check(format!("https[{i}].forward.dialer"), &forward.dialer);
            }
        }
        for (i, http) in config.http.iter().enumerate() {
            if let Some(forward) = &http.forward {
                check(format!("http[{i}].forward.dialer"), &forward.dialer);
            }
        }
        for (i, tunnel) in config.tunnel.iter().enumerate() {
            check(format!("tunnel[{i}].dialer"), &tunnel.dialer);
        }
        for (i, socks) in config.socks.iter().enumerate() {
            if let Some(forward) = &socks.forward {
                check(format!("socks[{i}].forward.dialer"), &forward.dialer);
            }
        }
        if let Some(forward) = config.sni.as_ref().and_then(|sni| sni.forward.as_ref()) {
            check("sni.forward.dialer".to_string(), &forward.dialer);
        }
        for (i, redsocks) in config.redsocks.iter().enumerate() {
            if let Some(forward) = &redsocks.forward {
                check(format!("redsocks[{i}].forward.dialer"), &forward.dialer);
            }
        }
        for (i, stream) in config.stream.iter().enumerate() {
            check(format!("stream[{i}].dialer"), &stream.dialer);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults;
    use crate::config::schema::{HttpForwardConfig, SniForwardConfig, SocksForwardConfig};
    use std::collections::BTreeMap;

    fn local_dialer() -> BTreeMap<String, String> {
        BTreeMap::from([("local".to_string(), "local".to_string())])
    }

    #[test]
    fn test_validate_empty_config() {
        let result = ConfigValidator::validate(&Config::default());
        assert!(result.is_valid());
        assert!(result.errors().is_empty());
    }

    #[test]
    fn test_validate_complete_forward_config() {
        let config = Config {
            global: Some(defaults::global()),
            dialer: local_dialer(),
            https: vec![defaults::http_block(
                vec![":443".to_string()],
                vec!["example.org".to_string()],
            )],
            ..Default::default()
        };
        let result = ConfigValidator::validate(&config);
        assert!(result.is_valid(), "unexpected errors: {:?}", result.errors());
    }

    #[test]
    fn test_https_missing_server_name() {
        let config = Config {
            https: vec![HttpConfig {
                listen: vec![":443".to_string()],
                ..Default::default()
            }],
            ..Default::default()
        };
        let result = ConfigValidator::validate(&config);
        assert!(!result.is_valid());
        assert!(result
            .errors()
            .iter()
            .any(|e| e.field.ends_with(".server_name")));
    }

    #[test]
    fn test_http_does_not_require_server_name() {
        let config = Config {
            http: vec![HttpConfig {
                listen: vec![":8080".to_string()],
                ..Default::default()
            }],
            ..Default::default()
        };
        assert!(ConfigValidator::validate(&config).is_valid());
    }

    #[test]
    fn test_inert_forward_block_is_not_an_error() {
        let config = Config {
            http: vec![HttpConfig {
                listen: vec![":8080".to_string()],
                forward: Some(HttpForwardConfig::default()),
                ..Default::default()
            }],
            ..Default::default()
        };
        assert!(ConfigValidator::validate(&config).is_valid());
    }

    #[test]
    fn test_forward_with_dialer_requires_policy() {
        let config = Config {
            dialer: local_dialer(),
            http: vec![HttpConfig {
                listen: vec![":8080".to_string()],
                forward: Some(HttpForwardConfig {
                    dialer: Some("local".to_string()),
                    ..Default::default()
                }),
                ..Default::default()
            }],
            ..Default::default()
        };
        let result = ConfigValidator::validate(&config);
        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.errors()[0].field, "http[0].forward.policy");
    }

    #[test]
    fn test_empty_tunnel_yields_one_violation_per_field() {
        let config = Config {
            tunnel: vec![TunnelConfig::default()],
            ..Default::default()
        };
        let result = ConfigValidator::validate(&config);
        assert!(result.errors().len() >= 3);
        for suffix in [".remote_listen", ".proxy_pass", ".dialer"] {
            assert!(
                result.errors().iter().any(|e| e.field.ends_with(suffix)),
                "missing violation for {suffix}"
            );
        }
    }

    #[test]
    fn test_dns_forward_policy_requires_proxy_pass() {
        let forward = Config {
            dns: vec![DnsConfig {
                listen: vec![":53".to_string()],
                policy: Some("forward".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        };
        let result = ConfigValidator::validate(&forward);
        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.errors()[0].field, "dns[0].proxy_pass");

        let direct = Config {
            dns: vec![DnsConfig {
                listen: vec![":53".to_string()],
                policy: Some("direct".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        };
        assert!(ConfigValidator::validate(&direct).is_valid());
    }

    #[test]
    fn test_undefined_dialer_reference() {
        let config = Config {
            dialer: local_dialer(),
            https: vec![HttpConfig {
                listen: vec![":443".to_string()],
                server_name: vec!["example.org".to_string()],
                forward: Some(HttpForwardConfig {
                    policy: Some("proxy_pass".to_string()),
                    dialer: Some("undefined_dialer".to_string()),
                    ..Default::default()
                }),
                ..Default::default()
            }],
            ..Default::default()
        };
        let result = ConfigValidator::validate(&config);
        assert!(!result.is_valid());
        let err = result
            .errors()
            .iter()
            .find(|e| e.field == "https[0].forward.dialer")
            .expect("missing dialer reference violation");
        assert!(err.message.contains("undefined_dialer"));
        assert!(err.message.contains("not defined"));
    }

    #[test]
    fn test_local_dialer_is_builtin() {
        // `local` resolves even with an empty dialer table.
        let config = Config {
            tunnel: vec![defaults::tunnel_block(
                vec!["127.0.0.1:10022".to_string()],
                "127.0.0.1:22",
                "local",
            )],
            ..Default::default()
        };
        assert!(ConfigValidator::validate(&config).is_valid());
    }

    #[test]
    fn test_dialer_references_cover_all_sections() {
        let config = Config {
            sni: Some(SniConfig {
                enabled: Some(true),
                forward: Some(SniForwardConfig {
                    policy: Some("proxy_pass".to_string()),
                    dialer: Some("ghost".to_string()),
                    ..Default::default()
                }),
            }),
            socks: vec![SocksConfig {
                listen: vec![":1080".to_string()],
                forward: Some(SocksForwardConfig {
                    dialer: Some("ghost".to_string()),
                    policy: Some("proxy_pass".to_string()),
                    ..Default::default()
                }),
                ..Default::default()
            }],
            redsocks: vec![RedsocksConfig {
                listen: vec![":12345".to_string()],
                forward: Some(crate::config::schema::RedsocksForwardConfig {
                    dialer: Some("ghost".to_string()),
                    ..Default::default()
                }),
            }],
            stream: vec![StreamConfig {
                listen: vec![":3389".to_string()],
                proxy_pass: Some("192.168.1.100:3389".to_string()),
                dialer: Some("ghost".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        };
        let result = ConfigValidator::validate(&config);
        let fields: Vec<&str> = result
            .errors()
            .iter()
            .filter(|e| e.message.contains("not defined"))
            .map(|e| e.field.as_str())
            .collect();
        assert_eq!(
            fields,
            vec![
                "sni.forward.dialer",
                "socks[0].forward.dialer",
                "redsocks[0].forward.dialer",
                "stream[0].dialer",
            ]
        );
    }

    #[test]
    fn test_invalid_log_level() {
        let config = Config {
            global: Some(GlobalConfig {
                log_level: Some("loud".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let result = ConfigValidator::validate(&config);
        assert_eq!(result.errors()[0].field, "global.log_level");
        assert!(result.errors()[0].message.contains("loud"));
    }

    #[test]
    fn test_invalid_dns_server() {
        let config = Config {
            global: Some(GlobalConfig {
                dns_server: Some("not-a-server".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let result = ConfigValidator::validate(&config);
        assert_eq!(result.errors()[0].field, "global.dns_server");

        // Host:port and udp:// forms are accepted.
        for server in ["8.8.8.8:53", "udp://8.8.8.8", "https://8.8.8.8/dns-query"] {
            let config = Config {
                global: Some(GlobalConfig {
                    dns_server: Some(server.to_string()),
                    ..Default::default()
                }),
                ..Default::default()
            };
            assert!(ConfigValidator::validate(&config).is_valid(), "{server}");
        }
    }

    #[test]
    fn test_empty_dialer_url() {
        let config = Config {
            dialer: BTreeMap::from([("cloud".to_string(), String::new())]),
            ..Default::default()
        };
        let result = ConfigValidator::validate(&config);
        assert_eq!(result.errors()[0].field, "dialer.cloud");
    }

    #[test]
    fn test_cron_requires_spec_and_command() {
        let config = Config {
            cron: vec![CronConfig::default()],
            ..Default::default()
        };
        let result = ConfigValidator::validate(&config);
        assert_eq!(result.errors().len(), 2);
        assert_eq!(result.errors()[0].field, "cron[0].spec");
        assert_eq!(result.errors()[1].field, "cron[0].command");
    }

    #[test]
    fn test_stream_requires_listen_and_proxy_pass() {
        let config = Config {
            stream: vec![StreamConfig::default()],
            ..Default::default()
        };
        let result = ConfigValidator::validate(&config);
        assert_eq!(result.errors().len(), 2);
        assert!(result.errors()[0].field.ends_with(".listen"));
        assert!(result.errors()[1].field.ends_with(".proxy_pass"));
    }

    #[test]
    fn test_validation_is_deterministic() {
        let config = Config {
            https: vec![HttpConfig {
                listen: vec![":443".to_string()],
                ..Default::default()
            }],
            tunnel: vec![TunnelConfig::default()],
            ..Default::default()
        };
        let first = ConfigValidator::validate(&config);
        let second = ConfigValidator::validate(&config);
        assert_eq!(first, second);
    }

    #[test]
    fn test_check_syntax_accepts_well_formed_text() {
        assert!(ConfigValidator::check_syntax("global:\n  log_level: info\n").is_ok());
    }

    #[test]
    fn test_check_syntax_rejects_malformed_text() {
        assert!(ConfigValidator::check_syntax("global:\n  log_level: [unterminated\n").is_err());
    }

    #[test]
    fn test_validate_text_short_circuits_on_syntax_error() {
        let result = ConfigValidator::validate_text("https:\n  - listen: [\":443\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_text_runs_structural_checks() {
        let result = ConfigValidator::validate_text(
            "https:\n- listen:\n  - ':443'\n",
        )
        .unwrap();
        assert!(!result.is_valid());
        assert!(result
            .errors()
            .iter()
            .any(|e| e.field == "https[0].server_name"));
    }
}
