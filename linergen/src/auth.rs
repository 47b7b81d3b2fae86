//! Auth-table artifact generation.
//!
//! Several liner subsystems (proxy auth, tunnel registration, SSH,
//! WebDAV) share one CSV user table. The format is fixed: a 7-column
//! header with booleans encoded as `0`/`1`. liner parses this file
//! independently, so the header must match byte-for-byte.

use crate::error::Result;
use serde::Deserialize;

/// The fixed auth-table column header.
pub const AUTH_TABLE_HEADER: [&str; 7] = [
    "username",
    "password",
    "speed_limit",
    "allow_tunnel",
    "allow_client",
    "allow_ssh",
    "allow_webdav",
];

/// One user row of the auth table.
///
/// # Examples
///
/// ```
/// use linergen::auth::{render_auth_table, AuthUser};
///
/// let users = [AuthUser {
///     username: "alice".to_string(),
///     password: "secret".to_string(),
///     allow_tunnel: true,
///     ..Default::default()
/// }];
/// let csv = render_auth_table(&users).unwrap();
/// assert!(csv.starts_with("username,password,speed_limit,"));
/// assert!(csv.contains("alice,secret,0,1,0,0,0"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AuthUser {
    /// Login name.
    pub username: String,
    /// Password (stored as given; hashing is liner's concern).
    pub password: String,
    /// Per-user speed limit in bytes per second; 0 means unlimited.
    pub speed_limit: i64,
    /// Permit opening reverse tunnels.
    pub allow_tunnel: bool,
    /// Permit tunnel client registration.
    pub allow_client: bool,
    /// Permit SSH login.
    pub allow_ssh: bool,
    /// Permit WebDAV access.
    pub allow_webdav: bool,
}

/// Render the auth-table CSV for a list of users.
///
/// The header row is always present, even for an empty user list.
///
/// # Errors
///
/// Returns [`crate::Error::AuthTable`] if the CSV writer fails.
pub fn render_auth_table(users: &[AuthUser]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(AUTH_TABLE_HEADER)?;

    for user in users {
        let speed_limit = user.speed_limit.to_string();
        writer.write_record([
            user.username.as_str(),
            user.password.as_str(),
            speed_limit.as_str(),
            bit(user.allow_tunnel),
            bit(user.allow_client),
            bit(user.allow_ssh),
            bit(user.allow_webdav),
        ])?;
    }

    writer.flush().map_err(csv::Error::from)?;
    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    // The writer only ever receives UTF-8 input.
    Ok(String::from_utf8(bytes).expect("csv output is UTF-8"))
}

/// Encode a permission flag the way liner reads it.
const fn bit(flag: bool) -> &'static str {
    if flag {
        "1"
    } else {
        "0"
    }
}
