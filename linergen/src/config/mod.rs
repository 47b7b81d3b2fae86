//! Configuration data model for the liner proxy.
//!
//! This module provides:
//! - The document schema ([`schema`]): pure record types mirroring liner's
//!   YAML configuration format field-for-field.
//! - Pre-populated fragments ([`defaults`]): conservative starting points
//!   for generated documents.
//! - Structural validation ([`validator`]): presence rules, conditional
//!   requirements, and dialer cross-reference checks, all accumulated into
//!   one complete violation list.
//!
//! # Examples
//!
//! Assemble, validate, and serialize a document:
//!
//! ```
//! use linergen::config::{defaults, Config, ConfigValidator};
//! use std::collections::BTreeMap;
//!
//! let config = Config {
//!     global: Some(defaults::global()),
//!     dialer: BTreeMap::from([("local".to_string(), "local".to_string())]),
//!     https: vec![defaults::http_block(
//!         vec![":443".to_string()],
//!         vec!["example.org".to_string()],
//!     )],
//!     ..Default::default()
//! };
//!
//! assert!(ConfigValidator::validate(&config).is_valid());
//! let yaml = config.to_yaml().unwrap();
//! assert_eq!(Config::from_yaml(&yaml).unwrap(), config);
//! ```

pub mod defaults;
pub mod schema;
pub mod validator;

// Re-export key types at module root
pub use schema::{
    Config, CronConfig, DnsConfig, GlobalConfig, HttpConfig, HttpForwardConfig, HttpTunnelConfig,
    HttpWebConfig, HttpWebDavConfig, HttpWebDohConfig, HttpWebIndexConfig, HttpWebProxyConfig,
    HttpWebShellConfig, RedsocksConfig, RedsocksForwardConfig, SniConfig, SniForwardConfig,
    SocksConfig, SocksForwardConfig, SshConfig, StreamConfig, TunnelConfig,
};
pub use validator::{ConfigValidator, ValidationError, ValidationResult};
