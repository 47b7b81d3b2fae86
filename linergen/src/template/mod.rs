//! Named-topology templates.
//!
//! A template turns a small set of named parameters into a complete,
//! validated-ready [`crate::Config`]. Supported topologies cover the common
//! liner deployments: HTTPS forward proxying, both halves of reverse
//! tunneling, DNS forwarding, SNI routing, transparent redirection, stream
//! forwarding, SSH serving, a web shell, and a full starter document.
//!
//! # Examples
//!
//! ```
//! use linergen::template::TemplateRequest;
//! use serde_json::json;
//!
//! let config = TemplateRequest::from_params(
//!     "tunnel_client",
//!     json!({
//!         "remote_listen": ["127.0.0.1:10022"],
//!         "proxy_pass": "127.0.0.1:22",
//!         "dialer": "cloud",
//!         "dialer_url": "http2://proxy.example.org",
//!     }),
//! )
//! .unwrap()
//! .build()
//! .unwrap();
//!
//! assert_eq!(config.tunnel[0].proxy_pass.as_deref(), Some("127.0.0.1:22"));
//! ```

pub mod builder;
pub mod request;

pub use request::{
    DnsRequest, FullRequest, HttpForwardRequest, RedsocksRequest, SniRequest, SshRequest,
    StreamRequest, TemplateRequest, TunnelClientRequest, TunnelServerRequest, WebshellRequest,
    SUPPORTED_TEMPLATES,
};
