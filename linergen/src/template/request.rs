//! Typed topology requests.
//!
//! Each supported topology has its own request record with explicit
//! optional fields; a loosely-typed parameter bag (a JSON object) is
//! deserialized into the record selected by the topology name. Absent
//! fields fall back to documented literal defaults at build time — the
//! builder is permissive, the validator is the enforcement point.

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Comma-separated list of the supported topology names, as reported by
/// [`Error::UnknownTemplate`].
pub const SUPPORTED_TEMPLATES: &str =
    "http_forward, tunnel_server, tunnel_client, dns, full, sni, redsocks, stream, ssh, webshell";

/// Parameters for the `http_forward` topology.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HttpForwardRequest {
    /// Listen addresses; defaults to `[":443"]`.
    pub listen: Vec<String>,
    /// TLS server names; defaults to `["example.org"]`.
    pub server_name: Vec<String>,
    /// Dialer name; defaults to `local`.
    pub dialer: Option<String>,
    /// Dialer URL added to the table under the dialer name.
    pub dialer_url: Option<String>,
}

/// Parameters for the `tunnel_server` topology.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TunnelServerRequest {
    /// Listen addresses; defaults to `[":443"]`.
    pub listen: Vec<String>,
    /// TLS server names; defaults to `["example.org"]`.
    pub server_name: Vec<String>,
    /// Auth-table path; defaults to `auth_user.csv`.
    pub auth_table: Option<String>,
    /// Addresses clients may open reverse listeners on; defaults to
    /// loopback plus the 240.0.0.0/8 range.
    pub allow_listens: Vec<String>,
}

/// Parameters for the `tunnel_client` topology.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TunnelClientRequest {
    /// Remote listen addresses; defaults to `["127.0.0.1:10022"]`.
    pub remote_listen: Vec<String>,
    /// Local forwarding target; defaults to `127.0.0.1:22`.
    pub proxy_pass: Option<String>,
    /// Dialer name reaching the remote endpoint; defaults to `cloud`.
    pub dialer: Option<String>,
    /// Dialer URL added to the table under the dialer name.
    pub dialer_url: Option<String>,
    /// Resolver for the remote endpoint; defaults to the standard DoH
    /// upstream.
    pub resolver: Option<String>,
}

/// Parameters for the `dns` topology.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DnsRequest {
    /// Listen addresses; defaults to `[":53"]`.
    pub listen: Vec<String>,
    /// Upstream DNS server; defaults to the standard DoH upstream.
    pub proxy_pass: Option<String>,
}

/// Parameters for the `full` topology.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FullRequest {
    /// Override for `global.log_level`.
    pub log_level: Option<String>,
    /// Override for `global.dns_server`.
    pub dns_server: Option<String>,
    /// Override for `global.disable_http3`.
    pub disable_http3: Option<bool>,
}

/// Parameters for the `sni` topology.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SniRequest {
    /// Enable SNI routing.
    pub enabled: Option<bool>,
    /// Routing policy; defaults to `proxy_pass`.
    pub policy: Option<String>,
    /// Dialer name; defaults to `local`.
    pub dialer: Option<String>,
    /// Dialer URL added to the table under the dialer name.
    pub dialer_url: Option<String>,
    /// Never dial IPv6 destinations.
    pub disable_ipv6: Option<bool>,
    /// Prefer IPv6 destinations.
    pub prefer_ipv6: Option<bool>,
    /// Log routed connections.
    pub log: Option<bool>,
}

/// Parameters for the `redsocks` topology.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RedsocksRequest {
    /// Listen addresses; defaults to `[":12345"]`.
    pub listen: Vec<String>,
    /// Dialer name; defaults to `proxy`.
    pub dialer: Option<String>,
    /// Dialer URL added to the table under the dialer name.
    pub dialer_url: Option<String>,
    /// Log redirected connections.
    pub log: Option<bool>,
}

/// Parameters for the `stream` topology.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StreamRequest {
    /// Listen addresses; defaults to `[":8080"]`.
    pub listen: Vec<String>,
    /// Target address to forward to. Required: there is no sensible
    /// default forwarding target.
    pub proxy_pass: Option<String>,
    /// Dialer name; defaults to `local`.
    pub dialer: Option<String>,
    /// Dialer URL added to the table under the dialer name.
    pub dialer_url: Option<String>,
    /// TLS private key file.
    pub keyfile: Option<String>,
    /// TLS certificate file.
    pub certfile: Option<String>,
    /// PROXY protocol version sent upstream (1 or 2).
    pub proxy_protocol: Option<u8>,
    /// Dial timeout in seconds; defaults to 5.
    pub dial_timeout: Option<u32>,
    /// Per-connection speed limit in bytes per second.
    pub speed_limit: Option<i64>,
    /// Log forwarded connections.
    pub log: Option<bool>,
}

/// Parameters for the `ssh` topology.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SshRequest {
    /// Listen addresses; defaults to `[":2222"]`.
    pub listen: Vec<String>,
    /// Server version string announced to clients.
    pub server_version: Option<String>,
    /// Host private key; defaults to `ssh_host_key`.
    pub host_key: Option<String>,
    /// Auth-table path; defaults to `auth_user.csv`.
    pub auth_table: Option<String>,
    /// Authorized-keys file for public-key authentication.
    pub authorized_keys: Option<String>,
    /// Session shell; defaults to `/bin/bash`.
    pub shell: Option<String>,
    /// Home directory template for sessions.
    pub home: Option<String>,
    /// Disable transport keep-alive probes.
    pub disable_keepalive: Option<bool>,
    /// Log sessions.
    pub log: Option<bool>,
}

/// Parameters for the `webshell` topology.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WebshellRequest {
    /// Listen addresses; defaults to `[":443"]`.
    pub listen: Vec<String>,
    /// TLS server names; defaults to `["shell.example.org"]`.
    pub server_name: Vec<String>,
    /// Session command; defaults to `login`.
    pub command: Option<String>,
    /// Home directory template for sessions.
    pub home: Option<String>,
    /// Auth-table path; defaults to `auth_user.csv`.
    pub auth_table: Option<String>,
    /// URL path of the shell location; defaults to `/shell/`.
    pub location: Option<String>,
}

/// A named-topology request: one variant per supported topology.
///
/// # Examples
///
/// ```
/// use linergen::template::TemplateRequest;
/// use serde_json::json;
///
/// let request = TemplateRequest::from_params(
///     "tunnel_client",
///     json!({"remote_listen": ["127.0.0.1:10022"], "dialer": "cloud"}),
/// )
/// .unwrap();
/// assert_eq!(request.name(), "tunnel_client");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateRequest {
    /// HTTPS forward proxy.
    HttpForward(HttpForwardRequest),
    /// Reverse-tunnel server on an HTTPS listener.
    TunnelServer(TunnelServerRequest),
    /// Reverse-tunnel client.
    TunnelClient(TunnelClientRequest),
    /// Forwarding DNS listener.
    Dns(DnsRequest),
    /// Full document: global settings, HTTPS forward, and DNS.
    Full(FullRequest),
    /// SNI-based routing.
    Sni(SniRequest),
    /// Transparent redirection listener.
    Redsocks(RedsocksRequest),
    /// Raw stream forwarding listener.
    Stream(StreamRequest),
    /// SSH server.
    Ssh(SshRequest),
    /// Web shell behind an HTTPS listener.
    Webshell(WebshellRequest),
}

impl TemplateRequest {
    /// Select a topology by name and deserialize its parameter bag.
    ///
    /// A `null` bag is treated as an empty object, so every parameter takes
    /// its documented default.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownTemplate`] for an unsupported name and
    /// [`Error::InvalidParams`] when the bag does not match the selected
    /// request type.
    pub fn from_params(template: &str, params: serde_json::Value) -> Result<Self> {
        let params = if params.is_null() {
            serde_json::Value::Object(serde_json::Map::new())
        } else {
            params
        };

        match template {
            "http_forward" => Ok(Self::HttpForward(bag(template, params)?)),
            "tunnel_server" => Ok(Self::TunnelServer(bag(template, params)?)),
            "tunnel_client" => Ok(Self::TunnelClient(bag(template, params)?)),
            "dns" => Ok(Self::Dns(bag(template, params)?)),
            "full" => Ok(Self::Full(bag(template, params)?)),
            "sni" => Ok(Self::Sni(bag(template, params)?)),
            "redsocks" => Ok(Self::Redsocks(bag(template, params)?)),
            "stream" => Ok(Self::Stream(bag(template, params)?)),
            "ssh" => Ok(Self::Ssh(bag(template, params)?)),
            "webshell" => Ok(Self::Webshell(bag(template, params)?)),
            other => Err(Error::UnknownTemplate {
                name: other.to_string(),
                supported: SUPPORTED_TEMPLATES,
            }),
        }
    }

    /// The topology name of this request.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::HttpForward(_) => "http_forward",
            Self::TunnelServer(_) => "tunnel_server",
            Self::TunnelClient(_) => "tunnel_client",
            Self::Dns(_) => "dns",
            Self::Full(_) => "full",
            Self::Sni(_) => "sni",
            Self::Redsocks(_) => "redsocks",
            Self::Stream(_) => "stream",
            Self::Ssh(_) => "ssh",
            Self::Webshell(_) => "webshell",
        }
    }
}

fn bag<T: DeserializeOwned>(template: &str, params: serde_json::Value) -> Result<T> {
    serde_json::from_value(params).map_err(|e| Error::InvalidParams {
        template: template.to_string(),
        message: e.to_string(),
    })
}
