//! Configuration schema definitions.
//!
//! This module defines the complete document structure understood by the
//! liner proxy: process-wide global settings, the named dialer table, and
//! the per-protocol service sections (https, http, tunnel, dns, socks,
//! redsocks, stream, ssh, sni, cron).
//!
//! The schema is pure data. Every field is optional at this layer; required
//! fields are enforced by [`crate::config::ConfigValidator`], not here.
//!
//! # Presence policy
//!
//! Fields are omitted from the generated document when unset: scalars are
//! `Option<T>` skipped when `None`, lists are skipped when empty, and the
//! dialer table is skipped when empty. `Option` keeps "unset" distinct from
//! "set to zero", so documents stay minimal and round-trips are exact.
//! Unknown keys in parsed input are ignored, matching liner's own parser.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Process-wide global settings.
///
/// Every field is optional; absent fields take liner's documented defaults
/// at run time, not at generation time.
///
/// # Examples
///
/// ```
/// use linergen::config::GlobalConfig;
///
/// let global = GlobalConfig {
///     log_level: Some("info".to_string()),
///     dns_server: Some("https://8.8.8.8/dns-query".to_string()),
///     ..Default::default()
/// };
/// assert_eq!(global.log_level.as_deref(), Some("info"));
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct GlobalConfig {
    /// Directory for log files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<String>,

    /// Log level (trace, debug, info, warn, error, fatal, panic).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,

    /// Number of rotated log files to keep.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_backups: Option<u32>,

    /// Maximum log file size in bytes before rotation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_maxsize: Option<u64>,

    /// Use local time instead of UTC in log timestamps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_localtime: Option<bool>,

    /// Size of the asynchronous log channel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_channel_size: Option<u32>,

    /// Refuse to dial local/private addresses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forbid_local_addr: Option<bool>,

    /// Outbound dial timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dial_timeout: Option<u32>,

    /// Read buffer size for outbound dials.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dial_read_buffer: Option<u32>,

    /// Write buffer size for outbound dials.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dial_write_buffer: Option<u32>,

    /// Upstream DNS resolver address, e.g. `https://8.8.8.8/dns-query`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns_server: Option<String>,

    /// DNS cache entry lifetime, e.g. `15m`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns_cache_duration: Option<String>,

    /// DNS cache capacity in entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns_cache_size: Option<u32>,

    /// TCP read buffer size for accepted connections.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tcp_read_buffer: Option<u32>,

    /// TCP write buffer size for accepted connections.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tcp_write_buffer: Option<u32>,

    /// Skip TLS certificate verification on outbound connections.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls_insecure: Option<bool>,

    /// Directory for automatically provisioned certificates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autocert_dir: Option<String>,

    /// Directory holding GeoIP databases.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geoip_dir: Option<String>,

    /// GeoIP lookup cache capacity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geoip_cache_size: Option<u32>,

    /// Disable geosite domain categorization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geosite_disabled: Option<bool>,

    /// Geosite lookup cache capacity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geosite_cache_size: Option<u32>,

    /// Idle connection timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idle_conn_timeout: Option<u32>,

    /// Maximum number of pooled idle connections.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_idle_conns: Option<u32>,

    /// Disable the HTTP/3 listener and dialer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_http3: Option<bool>,

    /// Override the reported process name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_process_name: Option<String>,
}

/// Forward sub-block of an HTTP/HTTPS section.
///
/// The `policy` string is a routing-policy expression evaluated by liner at
/// request time; it is passed through opaquely here.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct HttpForwardConfig {
    /// Routing policy expression, e.g. `proxy_pass`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy: Option<String>,

    /// Path to the auth-table CSV for proxy authentication.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_table: Option<String>,

    /// Name of the dialer used for outbound connections.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialer: Option<String>,

    /// TCP congestion control algorithm, e.g. `bbr`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tcp_congestion: Option<String>,

    /// Path to a table of denied destination domains.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deny_domains_table: Option<String>,

    /// Per-connection speed limit in bytes per second.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed_limit: Option<i64>,

    /// Never dial IPv6 destinations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_ipv6: Option<bool>,

    /// Prefer IPv6 destinations when both families resolve.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefer_ipv6: Option<bool>,

    /// Log forwarded requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log: Option<bool>,

    /// Interval between traffic log records, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_interval: Option<i64>,

    /// Buffer size for the bidirectional copy loop.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub io_copy_buffer: Option<u32>,

    /// Idle timeout for forwarded connections, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idle_timeout: Option<i64>,
}

/// Tunnel sub-block of an HTTP/HTTPS section (server side of reverse
/// tunneling).
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct HttpTunnelConfig {
    /// Accept tunnel client registrations on this listener.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Path to the auth-table CSV for tunnel authentication.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_table: Option<String>,

    /// Addresses/CIDRs a client may open reverse listeners on.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allow_listens: Vec<String>,

    /// Per-tunnel speed limit in bytes per second.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed_limit: Option<i64>,

    /// Keep tunnel transport connections alive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_keep_alive: Option<bool>,

    /// Log tunnel activity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log: Option<bool>,
}

/// Static-file serving sub-block of a web location.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct HttpWebIndexConfig {
    /// Document root directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,

    /// Extra response headers, one `Name: value` per line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<String>,

    /// Response charset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charset: Option<String>,

    /// Literal response body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    /// Serve a single file instead of a directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

/// Reverse-proxy sub-block of a web location.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct HttpWebProxyConfig {
    /// Upstream address or routing expression.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pass: Option<String>,

    /// Path to the auth-table CSV guarding this location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_table: Option<String>,

    /// Prefix stripped from the request path before proxying.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strip_prefix: Option<String>,

    /// Headers set on the proxied request, one `Name: value` per line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_headers: Option<String>,

    /// Dump failed upstream exchanges for debugging.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dump_failure: Option<bool>,
}

/// DNS-over-HTTPS sub-block of a web location.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct HttpWebDohConfig {
    /// Serve DoH on this location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Routing policy expression for DNS queries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy: Option<String>,

    /// Upstream DNS server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_pass: Option<String>,

    /// Response cache capacity in entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_size: Option<u32>,
}

/// Interactive shell sub-block of a web location.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct HttpWebShellConfig {
    /// Serve a shell on this location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Command to execute for each session, e.g. `login`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    /// Home directory template for sessions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home: Option<String>,

    /// Path to the auth-table CSV guarding the shell.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_table: Option<String>,
}

/// WebDAV sub-block of a web location.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct HttpWebDavConfig {
    /// Serve WebDAV on this location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Directory exposed over WebDAV.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,

    /// Path to the auth-table CSV guarding WebDAV access.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_table: Option<String>,
}

/// One web location under an HTTP/HTTPS section.
///
/// Exactly one of the sub-blocks is normally populated per location; liner
/// dispatches on whichever is present.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct HttpWebConfig {
    /// URL path this location matches, e.g. `/`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// TCP congestion control algorithm for this location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tcp_congestion: Option<String>,

    /// Static-file serving settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<HttpWebIndexConfig>,

    /// Reverse-proxy settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy: Option<HttpWebProxyConfig>,

    /// DNS-over-HTTPS settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doh: Option<HttpWebDohConfig>,

    /// Interactive shell settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shell: Option<HttpWebShellConfig>,

    /// WebDAV settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dav: Option<HttpWebDavConfig>,
}

/// One HTTP or HTTPS listener section.
///
/// The same record serves both the `https` and `http` top-level lists; the
/// TLS-specific fields (`server_name`, `keyfile`, `certfile`) matter only
/// under `https`.
///
/// # Examples
///
/// ```
/// use linergen::config::defaults;
///
/// let block = defaults::http_block(vec![":443".into()], vec!["example.org".into()]);
/// assert_eq!(block.listen, vec![":443".to_string()]);
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct HttpConfig {
    /// Listen addresses, e.g. `[":443"]`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub listen: Vec<String>,

    /// TLS server names answered on this listener.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub server_name: Vec<String>,

    /// TLS private key file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyfile: Option<String>,

    /// TLS certificate file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certfile: Option<String>,

    /// Pre-shared key for obfuscated access.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub psk: Option<String>,

    /// Forward-proxy settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forward: Option<HttpForwardConfig>,

    /// Reverse-tunnel server settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tunnel: Option<HttpTunnelConfig>,

    /// Web locations served on this listener.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub web: Vec<HttpWebConfig>,
}

/// One tunnel client section (reverse tunneling).
///
/// A tunnel block asks a remote liner instance to listen on
/// `remote_listen` and forwards accepted connections to the local
/// `proxy_pass` target through the named dialer.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct TunnelConfig {
    /// Addresses the remote side should listen on, e.g. `["127.0.0.1:10022"]`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub remote_listen: Vec<String>,

    /// Local target accepted connections are forwarded to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_pass: Option<String>,

    /// Resolver used for the remote endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolver: Option<String>,

    /// Dial timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dial_timeout: Option<u32>,

    /// Name of the dialer reaching the remote endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialer: Option<String>,

    /// Per-tunnel speed limit in bytes per second.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed_limit: Option<i64>,

    /// Keep the tunnel transport alive between connections.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_keep_alive: Option<bool>,

    /// Log tunnel activity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log: Option<bool>,
}

/// One DNS listener section.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct DnsConfig {
    /// Listen addresses, e.g. `[":53"]`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub listen: Vec<String>,

    /// TLS private key file (DNS-over-TLS listeners).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyfile: Option<String>,

    /// Routing policy; `forward` sends every query to `proxy_pass`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy: Option<String>,

    /// Upstream DNS server, required when `policy` is `forward`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_pass: Option<String>,

    /// Response cache capacity in entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_size: Option<u32>,

    /// Log resolved queries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log: Option<bool>,
}

/// Forward sub-block of a SOCKS section.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct SocksForwardConfig {
    /// Routing policy expression.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy: Option<String>,

    /// Path to the auth-table CSV for SOCKS authentication.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_table: Option<String>,

    /// Name of the dialer used for outbound connections.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialer: Option<String>,

    /// Path to a table of denied destination domains.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deny_domains_table: Option<String>,

    /// Per-connection speed limit in bytes per second.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed_limit: Option<i64>,

    /// Never dial IPv6 destinations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_ipv6: Option<bool>,

    /// Prefer IPv6 destinations when both families resolve.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefer_ipv6: Option<bool>,

    /// Log forwarded requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log: Option<bool>,
}

/// One SOCKS listener section.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct SocksConfig {
    /// Listen addresses, e.g. `[":1080"]`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub listen: Vec<String>,

    /// Pre-shared key for obfuscated access.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub psk: Option<String>,

    /// Forward settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forward: Option<SocksForwardConfig>,
}

/// Forward sub-block of the SNI section.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct SniForwardConfig {
    /// Routing policy expression evaluated against the ClientHello.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy: Option<String>,

    /// Name of the dialer used for outbound connections.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialer: Option<String>,

    /// Never dial IPv6 destinations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_ipv6: Option<bool>,

    /// Prefer IPv6 destinations when both families resolve.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefer_ipv6: Option<bool>,

    /// Log routed connections.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log: Option<bool>,
}

/// SNI-based routing section.
///
/// SNI routing inspects the TLS ClientHello on existing HTTPS listeners and
/// routes by server name before the handshake completes, so it carries no
/// `listen` field of its own.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct SniConfig {
    /// Enable SNI routing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Forward settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forward: Option<SniForwardConfig>,
}

/// Forward sub-block of a redsocks section.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct RedsocksForwardConfig {
    /// Name of the dialer used for outbound connections.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialer: Option<String>,

    /// Log redirected connections.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log: Option<bool>,
}

/// One transparent-redirection (redsocks) listener section.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct RedsocksConfig {
    /// Listen addresses, e.g. `[":12345"]`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub listen: Vec<String>,

    /// Forward settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forward: Option<RedsocksForwardConfig>,
}

/// One raw TCP/TLS stream-forwarding listener section.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct StreamConfig {
    /// Listen addresses, e.g. `[":3389"]`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub listen: Vec<String>,

    /// TLS private key file (terminates TLS when set with `certfile`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyfile: Option<String>,

    /// TLS certificate file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certfile: Option<String>,

    /// Target address accepted connections are forwarded to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_pass: Option<String>,

    /// PROXY protocol version sent upstream (1 or 2); absent disables it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_protocol: Option<u8>,

    /// Dial timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dial_timeout: Option<u32>,

    /// Name of the dialer used for outbound connections.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialer: Option<String>,

    /// Per-connection speed limit in bytes per second.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed_limit: Option<i64>,

    /// Log forwarded connections.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log: Option<bool>,
}

/// One SSH server section.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct SshConfig {
    /// Listen addresses, e.g. `[":2222"]`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub listen: Vec<String>,

    /// Server version string announced to clients.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_version: Option<String>,

    /// Host private key (PEM content or file path).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_key: Option<String>,

    /// Path to the auth-table CSV for password authentication.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_table: Option<String>,

    /// Path to an authorized-keys file for public-key authentication.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorized_keys: Option<String>,

    /// Shell launched for interactive sessions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shell: Option<String>,

    /// Home directory template for sessions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home: Option<String>,

    /// Disable transport keep-alive probes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_keepalive: Option<bool>,

    /// Log sessions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log: Option<bool>,
}

/// One scheduled-command section.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct CronConfig {
    /// Cron schedule expression, e.g. `0 */6 * * *`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec: Option<String>,

    /// Command to run on schedule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

/// A complete liner configuration document.
///
/// Field declaration order is the wire order; liner reads the same
/// top-level keys (`global`, `dialer`, `sni`, `https`, `http`, `tunnel`,
/// `dns`, `socks`, `redsocks`, `stream`, `ssh`, `cron`) from its own parser,
/// so names here must match byte-for-byte.
///
/// # Examples
///
/// ```
/// use linergen::config::{defaults, Config};
///
/// let config = Config {
///     global: Some(defaults::global()),
///     dns: vec![defaults::dns_block(vec![":53".into()], "https://8.8.8.8/dns-query")],
///     ..Default::default()
/// };
/// let yaml = config.to_yaml().unwrap();
/// assert!(yaml.contains("dns:"));
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Config {
    /// Process-wide global settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global: Option<GlobalConfig>,

    /// Named dialer table: name to dialer URL.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub dialer: BTreeMap<String, String>,

    /// SNI-based routing settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sni: Option<SniConfig>,

    /// HTTPS listener sections.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub https: Vec<HttpConfig>,

    /// Plain HTTP listener sections.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub http: Vec<HttpConfig>,

    /// Tunnel client sections.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tunnel: Vec<TunnelConfig>,

    /// DNS listener sections.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dns: Vec<DnsConfig>,

    /// SOCKS listener sections.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub socks: Vec<SocksConfig>,

    /// Transparent-redirection listener sections.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub redsocks: Vec<RedsocksConfig>,

    /// Stream-forwarding listener sections.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stream: Vec<StreamConfig>,

    /// SSH server sections.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ssh: Vec<SshConfig>,

    /// Scheduled-command sections.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cron: Vec<CronConfig>,
}

impl Config {
    /// Serialize the document to YAML text.
    ///
    /// Unset fields are omitted entirely (see the module-level presence
    /// policy).
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Yaml`] if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Parse a document from YAML text.
    ///
    /// Unknown keys are ignored; omitted fields decode to their unset
    /// state. Fails before any structural interpretation if the text is not
    /// well-formed YAML.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Yaml`] if the text is not valid YAML or does
    /// not match the schema's field types.
    pub fn from_yaml(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }
}
