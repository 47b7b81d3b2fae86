//! Topology assembly.
//!
//! Builds a complete [`Config`] from a [`TemplateRequest`], filling absent
//! parameters with the documented literal defaults. The builder never
//! rejects an inconsistent combination — that is the validator's job — with
//! one exception: parameters that have no sensible default (a stream's
//! forwarding target) are reported as missing rather than invented.

use crate::config::defaults;
use crate::config::schema::{
    Config, HttpConfig, HttpForwardConfig, HttpTunnelConfig, HttpWebConfig, HttpWebShellConfig,
    RedsocksConfig, RedsocksForwardConfig, SniConfig, SniForwardConfig, SshConfig, StreamConfig,
};
use crate::error::{Error, Result};
use crate::template::request::{
    DnsRequest, FullRequest, HttpForwardRequest, RedsocksRequest, SniRequest, SshRequest,
    StreamRequest, TemplateRequest, TunnelClientRequest, TunnelServerRequest, WebshellRequest,
};
use std::collections::BTreeMap;

impl TemplateRequest {
    /// Assemble the complete document for this request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingParameter`] when a parameter with no
    /// sensible default is absent (currently only the stream topology's
    /// `proxy_pass`).
    ///
    /// # Examples
    ///
    /// ```
    /// use linergen::template::TemplateRequest;
    /// use serde_json::json;
    ///
    /// let config = TemplateRequest::from_params("dns", json!({}))
    ///     .unwrap()
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(config.dns[0].listen, vec![":53".to_string()]);
    /// ```
    pub fn build(&self) -> Result<Config> {
        log::debug!("building {} topology", self.name());
        match self {
            Self::HttpForward(req) => Ok(build_http_forward(req)),
            Self::TunnelServer(req) => Ok(build_tunnel_server(req)),
            Self::TunnelClient(req) => Ok(build_tunnel_client(req)),
            Self::Dns(req) => Ok(build_dns(req)),
            Self::Full(req) => Ok(build_full(req)),
            Self::Sni(req) => Ok(build_sni(req)),
            Self::Redsocks(req) => Ok(build_redsocks(req)),
            Self::Stream(req) => build_stream(req),
            Self::Ssh(req) => Ok(build_ssh(req)),
            Self::Webshell(req) => Ok(build_webshell(req)),
        }
    }
}

/// Replace an empty list with its documented default.
fn fallback(values: &[String], defaults: &[&str]) -> Vec<String> {
    if values.is_empty() {
        defaults.iter().map(|s| (*s).to_string()).collect()
    } else {
        values.to_vec()
    }
}

/// Replace an absent or empty string with its documented default.
fn or_default(value: &Option<String>, default: &str) -> String {
    match value.as_deref() {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => default.to_string(),
    }
}

/// A dialer table seeded with the built-in `local` entry.
///
/// The caller's dialer is added only under a distinct name and only when a
/// URL was actually supplied; the fixed meaning of `local` is never
/// overwritten by caller input.
fn dialer_table(name: &str, url: Option<&str>) -> BTreeMap<String, String> {
    let mut table = BTreeMap::from([("local".to_string(), "local".to_string())]);
    if let Some(url) = url {
        if !url.is_empty() && !name.is_empty() && name != "local" {
            table.insert(name.to_string(), url.to_string());
        }
    }
    table
}

fn build_http_forward(req: &HttpForwardRequest) -> Config {
    let listen = fallback(&req.listen, &[":443"]);
    let server_name = fallback(&req.server_name, &["example.org"]);
    let dialer = or_default(&req.dialer, "local");

    let mut block = defaults::http_block(listen, server_name);
    if let Some(forward) = block.forward.as_mut() {
        forward.dialer = Some(dialer.clone());
    }

    Config {
        global: Some(defaults::global()),
        dialer: dialer_table(&dialer, req.dialer_url.as_deref()),
        https: vec![block],
        ..Default::default()
    }
}

fn build_tunnel_server(req: &TunnelServerRequest) -> Config {
    let listen = fallback(&req.listen, &[":443"]);
    let server_name = fallback(&req.server_name, &["example.org"]);
    let auth_table = or_default(&req.auth_table, "auth_user.csv");
    let allow_listens = fallback(&req.allow_listens, &["127.0.0.1", "240.0.0.0/8"]);

    Config {
        global: Some(defaults::global()),
        https: vec![HttpConfig {
            listen,
            server_name,
            tunnel: Some(HttpTunnelConfig {
                enabled: Some(true),
                auth_table: Some(auth_table),
                allow_listens,
                enable_keep_alive: Some(true),
                log: Some(true),
                ..Default::default()
            }),
            ..Default::default()
        }],
        ..Default::default()
    }
}

fn build_tunnel_client(req: &TunnelClientRequest) -> Config {
    let remote_listen = fallback(&req.remote_listen, &["127.0.0.1:10022"]);
    let proxy_pass = or_default(&req.proxy_pass, "127.0.0.1:22");
    let dialer = or_default(&req.dialer, "cloud");
    let resolver = or_default(&req.resolver, defaults::DNS_SERVER);

    let mut block = defaults::tunnel_block(remote_listen, &proxy_pass, &dialer);
    block.resolver = Some(resolver);

    Config {
        global: Some(defaults::global()),
        dialer: dialer_table(&dialer, req.dialer_url.as_deref()),
        tunnel: vec![block],
        ..Default::default()
    }
}

fn build_dns(req: &DnsRequest) -> Config {
    let listen = fallback(&req.listen, &[":53"]);
    let proxy_pass = or_default(&req.proxy_pass, defaults::DNS_SERVER);

    Config {
        global: Some(defaults::global()),
        dns: vec![defaults::dns_block(listen, &proxy_pass)],
        ..Default::default()
    }
}

fn build_full(req: &FullRequest) -> Config {
    let mut global = defaults::global();
    if let Some(level) = &req.log_level {
        global.log_level = Some(level.clone());
    }
    if let Some(server) = &req.dns_server {
        global.dns_server = Some(server.clone());
    }
    if let Some(disable) = req.disable_http3 {
        global.disable_http3 = Some(disable);
    }

    Config {
        global: Some(global),
        dialer: BTreeMap::from([("local".to_string(), "local".to_string())]),
        https: vec![defaults::http_block(
            vec![":443".to_string()],
            vec!["example.org".to_string()],
        )],
        dns: vec![defaults::dns_block(vec![":53".to_string()], defaults::DNS_SERVER)],
        ..Default::default()
    }
}

fn build_sni(req: &SniRequest) -> Config {
    let dialer = or_default(&req.dialer, "local");
    let policy = or_default(&req.policy, "proxy_pass");

    Config {
        global: Some(defaults::global()),
        dialer: dialer_table(&dialer, req.dialer_url.as_deref()),
        sni: Some(SniConfig {
            enabled: req.enabled,
            forward: Some(SniForwardConfig {
                policy: Some(policy),
                dialer: Some(dialer),
                disable_ipv6: req.disable_ipv6,
                prefer_ipv6: req.prefer_ipv6,
                log: req.log,
            }),
        }),
        ..Default::default()
    }
}

fn build_redsocks(req: &RedsocksRequest) -> Config {
    let listen = fallback(&req.listen, &[":12345"]);
    let dialer = or_default(&req.dialer, "proxy");

    // Redsocks normally points at a remote proxy dialer, so the table
    // starts empty instead of seeding `local`.
    let mut table = BTreeMap::new();
    if let Some(url) = req.dialer_url.as_deref() {
        if !url.is_empty() && dialer != "local" {
            table.insert(dialer.clone(), url.to_string());
        }
    }

    Config {
        global: Some(defaults::global()),
        dialer: table,
        redsocks: vec![RedsocksConfig {
            listen,
            forward: Some(RedsocksForwardConfig {
                dialer: Some(dialer),
                log: req.log,
            }),
        }],
        ..Default::default()
    }
}

fn build_stream(req: &StreamRequest) -> Result<Config> {
    let proxy_pass = match req.proxy_pass.as_deref() {
        Some(target) if !target.is_empty() => target.to_string(),
        _ => {
            return Err(Error::MissingParameter {
                name: "proxy_pass".to_string(),
                reason: "specify the target address to forward to".to_string(),
            })
        }
    };
    let listen = fallback(&req.listen, &[":8080"]);
    let dialer = or_default(&req.dialer, "local");

    Ok(Config {
        global: Some(defaults::global()),
        dialer: dialer_table(&dialer, req.dialer_url.as_deref()),
        stream: vec![StreamConfig {
            listen,
            keyfile: req.keyfile.clone(),
            certfile: req.certfile.clone(),
            proxy_pass: Some(proxy_pass),
            proxy_protocol: req.proxy_protocol,
            dial_timeout: Some(req.dial_timeout.unwrap_or(defaults::DIAL_TIMEOUT)),
            dialer: Some(dialer),
            speed_limit: req.speed_limit,
            log: req.log,
        }],
        ..Default::default()
    })
}

fn build_ssh(req: &SshRequest) -> Config {
    Config {
        global: Some(defaults::global()),
        ssh: vec![SshConfig {
            listen: fallback(&req.listen, &[":2222"]),
            server_version: req.server_version.clone(),
            host_key: Some(or_default(&req.host_key, "ssh_host_key")),
            auth_table: Some(or_default(&req.auth_table, "auth_user.csv")),
            authorized_keys: req.authorized_keys.clone(),
            shell: Some(or_default(&req.shell, "/bin/bash")),
            home: req.home.clone(),
            disable_keepalive: req.disable_keepalive,
            log: req.log,
        }],
        ..Default::default()
    }
}

fn build_webshell(req: &WebshellRequest) -> Config {
    let listen = fallback(&req.listen, &[":443"]);
    let server_name = fallback(&req.server_name, &["shell.example.org"]);

    Config {
        global: Some(defaults::global()),
        dialer: BTreeMap::from([("local".to_string(), "local".to_string())]),
        https: vec![HttpConfig {
            listen,
            server_name,
            // The shell is the point of this listener; plain requests get a
            // fixed 404.
            forward: Some(HttpForwardConfig {
                policy: Some("return 404".to_string()),
                log: Some(true),
                ..Default::default()
            }),
            web: vec![HttpWebConfig {
                location: Some(or_default(&req.location, "/shell/")),
                shell: Some(HttpWebShellConfig {
                    enabled: Some(true),
                    command: Some(or_default(&req.command, "login")),
                    home: req.home.clone(),
                    auth_table: Some(or_default(&req.auth_table, "auth_user.csv")),
                }),
                ..Default::default()
            }],
            ..Default::default()
        }],
        ..Default::default()
    }
}
