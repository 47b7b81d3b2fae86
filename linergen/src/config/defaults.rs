//! Pre-populated configuration fragments.
//!
//! These factories produce the conservative starting points used by the
//! template builder and by callers assembling documents by hand. They are
//! pure functions of their arguments; nothing here validates.

use crate::config::schema::{DnsConfig, GlobalConfig, HttpConfig, HttpForwardConfig, TunnelConfig};

/// Upstream DNS server used wherever a resolver default is needed.
pub const DNS_SERVER: &str = "https://8.8.8.8/dns-query";

/// DNS response cache capacity for generated DNS blocks.
pub const DNS_CACHE_SIZE: u32 = 4096;

/// Outbound dial timeout in seconds for generated blocks.
pub const DIAL_TIMEOUT: u32 = 5;

/// Idle connection timeout in seconds for the global settings.
pub const IDLE_CONN_TIMEOUT: u32 = 90;

/// Idle connection pool size for the global settings.
pub const MAX_IDLE_CONNS: u32 = 100;

/// Global settings with recommended defaults.
///
/// # Examples
///
/// ```
/// use linergen::config::defaults;
///
/// let global = defaults::global();
/// assert_eq!(global.log_level.as_deref(), Some("info"));
/// assert_eq!(global.dial_timeout, Some(5));
/// ```
#[must_use]
pub fn global() -> GlobalConfig {
    GlobalConfig {
        log_level: Some("info".to_string()),
        dns_server: Some(DNS_SERVER.to_string()),
        disable_http3: Some(false),
        dial_timeout: Some(DIAL_TIMEOUT),
        idle_conn_timeout: Some(IDLE_CONN_TIMEOUT),
        max_idle_conns: Some(MAX_IDLE_CONNS),
        ..Default::default()
    }
}

/// A minimal HTTP/HTTPS forward block: policy `proxy_pass` through the
/// built-in `local` dialer, with request logging enabled.
#[must_use]
pub fn http_block(listen: Vec<String>, server_name: Vec<String>) -> HttpConfig {
    HttpConfig {
        listen,
        server_name,
        forward: Some(HttpForwardConfig {
            policy: Some("proxy_pass".to_string()),
            dialer: Some("local".to_string()),
            log: Some(true),
            ..Default::default()
        }),
        ..Default::default()
    }
}

/// A minimal tunnel client block with keep-alive and logging enabled.
///
/// # Examples
///
/// ```
/// use linergen::config::defaults;
///
/// let tunnel = defaults::tunnel_block(
///     vec!["127.0.0.1:10022".into()],
///     "127.0.0.1:22",
///     "cloud",
/// );
/// assert_eq!(tunnel.enable_keep_alive, Some(true));
/// assert_eq!(tunnel.dial_timeout, Some(5));
/// ```
#[must_use]
pub fn tunnel_block(remote_listen: Vec<String>, proxy_pass: &str, dialer: &str) -> TunnelConfig {
    TunnelConfig {
        remote_listen,
        proxy_pass: Some(proxy_pass.to_string()),
        dialer: Some(dialer.to_string()),
        dial_timeout: Some(DIAL_TIMEOUT),
        enable_keep_alive: Some(true),
        log: Some(true),
        ..Default::default()
    }
}

/// A minimal forwarding DNS block with caching and logging enabled.
#[must_use]
pub fn dns_block(listen: Vec<String>, proxy_pass: &str) -> DnsConfig {
    DnsConfig {
        listen,
        policy: Some("forward".to_string()),
        proxy_pass: Some(proxy_pass.to_string()),
        cache_size: Some(DNS_CACHE_SIZE),
        log: Some(true),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_defaults() {
        let cfg = global();
        assert_eq!(cfg.log_level.as_deref(), Some("info"));
        assert_eq!(cfg.dns_server.as_deref(), Some("https://8.8.8.8/dns-query"));
        assert_eq!(cfg.disable_http3, Some(false));
        assert_eq!(cfg.dial_timeout, Some(5));
        assert_eq!(cfg.idle_conn_timeout, Some(90));
        assert_eq!(cfg.max_idle_conns, Some(100));
        // Fields without documented defaults stay unset.
        assert!(cfg.log_dir.is_none());
        assert!(cfg.tls_insecure.is_none());
    }

    #[test]
    fn test_http_block_defaults() {
        let cfg = http_block(vec![":443".to_string()], vec!["example.org".to_string()]);
        assert_eq!(cfg.listen, vec![":443".to_string()]);
        assert_eq!(cfg.server_name, vec!["example.org".to_string()]);
        let forward = cfg.forward.unwrap();
        assert_eq!(forward.policy.as_deref(), Some("proxy_pass"));
        assert_eq!(forward.dialer.as_deref(), Some("local"));
        assert_eq!(forward.log, Some(true));
    }

    #[test]
    fn test_tunnel_block_defaults() {
        let cfg = tunnel_block(
            vec!["127.0.0.1:10022".to_string()],
            "127.0.0.1:22",
            "cloud",
        );
        assert_eq!(cfg.remote_listen, vec!["127.0.0.1:10022".to_string()]);
        assert_eq!(cfg.proxy_pass.as_deref(), Some("127.0.0.1:22"));
        assert_eq!(cfg.dialer.as_deref(), Some("cloud"));
        assert_eq!(cfg.enable_keep_alive, Some(true));
        assert_eq!(cfg.log, Some(true));
    }

    #[test]
    fn test_dns_block_defaults() {
        let cfg = dns_block(vec![":53".to_string()], "https://8.8.8.8/dns-query");
        assert_eq!(cfg.listen, vec![":53".to_string()]);
        assert_eq!(cfg.policy.as_deref(), Some("forward"));
        assert_eq!(cfg.proxy_pass.as_deref(), Some("https://8.8.8.8/dns-query"));
        assert_eq!(cfg.cache_size, Some(4096));
        assert_eq!(cfg.log, Some(true));
    }
}
