//! Dialer URL construction.
//!
//! A dialer is a named outbound-connection method referenced by name from
//! service blocks. This module builds the URL strings stored in the dialer
//! table from a typed connection kind plus an address.

use crate::error::{Error, Result};
use std::fmt;

/// The outbound-connection kinds liner understands.
///
/// # Examples
///
/// ```
/// use linergen::dialer::DialerKind;
///
/// let kind = DialerKind::parse("socks5").unwrap();
/// assert_eq!(kind.url("127.0.0.1:1080"), "socks5://127.0.0.1:1080");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialerKind {
    /// Dial directly from the local host (optionally via an interface).
    Local,
    /// SOCKS5 upstream proxy.
    Socks5,
    /// HTTP/2 upstream proxy.
    Http2,
    /// HTTP/3 upstream proxy.
    Http3,
    /// SSH upstream.
    Ssh,
    /// WebSocket-over-TLS upstream.
    Wss,
}

/// Comma-separated list of the supported dialer kinds, as reported by
/// [`Error::UnknownDialerKind`].
pub const SUPPORTED_KINDS: &str = "local, socks5, http2, http3, ssh, wss";

impl DialerKind {
    /// Parse a dialer kind from its scheme name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownDialerKind`] for an unrecognized name.
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "local" => Ok(Self::Local),
            "socks5" => Ok(Self::Socks5),
            "http2" => Ok(Self::Http2),
            "http3" => Ok(Self::Http3),
            "ssh" => Ok(Self::Ssh),
            "wss" => Ok(Self::Wss),
            other => Err(Error::UnknownDialerKind {
                kind: other.to_string(),
                supported: SUPPORTED_KINDS,
            }),
        }
    }

    /// Build the dialer URL for an address.
    ///
    /// The local kind takes an optional interface name rather than a
    /// host:port address (`local://` or `local://wg0`).
    #[must_use]
    pub fn url(&self, address: &str) -> String {
        match self {
            // local:// with no interface is valid on its own.
            Self::Local => format!("local://{address}"),
            _ => format!("{self}://{address}"),
        }
    }
}

impl fmt::Display for DialerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => write!(f, "local"),
            Self::Socks5 => write!(f, "socks5"),
            Self::Http2 => write!(f, "http2"),
            Self::Http3 => write!(f, "http3"),
            Self::Ssh => write!(f, "ssh"),
            Self::Wss => write!(f, "wss"),
        }
    }
}

/// Build a named dialer table entry.
///
/// # Errors
///
/// Returns [`Error::MissingParameter`] when the name is empty and
/// [`Error::UnknownDialerKind`] for an unrecognized kind.
///
/// # Examples
///
/// ```
/// use linergen::dialer::dialer_entry;
///
/// let (name, url) = dialer_entry("cloud", "ssh", "example.org:22").unwrap();
/// assert_eq!(name, "cloud");
/// assert_eq!(url, "ssh://example.org:22");
/// ```
pub fn dialer_entry(name: &str, kind: &str, address: &str) -> Result<(String, String)> {
    if name.is_empty() {
        return Err(Error::MissingParameter {
            name: "name".to_string(),
            reason: "provide a name for the dialer, e.g. 'cloud' or 'proxy'".to_string(),
        });
    }
    let kind = DialerKind::parse(kind)?;
    Ok((name.to_string(), kind.url(address)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_kinds() {
        for (name, kind) in [
            ("local", DialerKind::Local),
            ("socks5", DialerKind::Socks5),
            ("http2", DialerKind::Http2),
            ("http3", DialerKind::Http3),
            ("ssh", DialerKind::Ssh),
            ("wss", DialerKind::Wss),
        ] {
            assert_eq!(DialerKind::parse(name).unwrap(), kind);
            assert_eq!(kind.to_string(), name);
        }
    }

    #[test]
    fn test_parse_unknown_kind() {
        let err = DialerKind::parse("smtp").unwrap_err();
        let display = format!("{err}");
        assert!(display.contains("smtp"));
        assert!(display.contains("socks5"));
    }

    #[test]
    fn test_url_construction() {
        assert_eq!(
            DialerKind::Socks5.url("example.com:1080"),
            "socks5://example.com:1080"
        );
        assert_eq!(DialerKind::Wss.url("cdn.example.org:443"), "wss://cdn.example.org:443");
    }

    #[test]
    fn test_local_url_with_and_without_interface() {
        assert_eq!(DialerKind::Local.url(""), "local://");
        assert_eq!(DialerKind::Local.url("wg0"), "local://wg0");
    }

    #[test]
    fn test_dialer_entry_requires_name() {
        let err = dialer_entry("", "socks5", "127.0.0.1:1080").unwrap_err();
        assert!(matches!(err, Error::MissingParameter { ref name, .. } if name == "name"));
    }
}
