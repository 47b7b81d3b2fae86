#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # linergen
//!
//! A library for generating, parsing, and validating configuration
//! documents for the liner proxy.
//!
//! The configuration data model ([`Config`]) mirrors liner's YAML format
//! field-for-field. Documents are assembled from named-topology templates
//! ([`TemplateRequest`]) or constructed directly, checked with the
//! structural validator ([`ConfigValidator`]), and serialized to YAML.
//! Validation accumulates every violation into a [`ValidationResult`]
//! rather than stopping at the first problem.
//!
//! ## Core Types
//!
//! - [`Config`] and its section types: the document schema
//! - [`TemplateRequest`]: typed named-topology requests
//! - [`ConfigValidator`], [`ValidationResult`], [`ValidationError`]:
//!   structural validation
//! - [`DialerKind`]: dialer URL construction
//! - [`AuthUser`]: the auth-table side artifact
//! - [`Error`] and [`Result`]: error handling types
//!
//! ## Examples
//!
//! ```
//! use linergen::{Config, ConfigValidator, TemplateRequest};
//! use serde_json::json;
//!
//! // Build a DNS forwarding document from a template...
//! let config = TemplateRequest::from_params("dns", json!({"listen": [":53"]}))
//!     .unwrap()
//!     .build()
//!     .unwrap();
//!
//! // ...validate it...
//! assert!(ConfigValidator::validate(&config).is_valid());
//!
//! // ...and round-trip it through YAML.
//! let yaml = config.to_yaml().unwrap();
//! assert_eq!(Config::from_yaml(&yaml).unwrap(), config);
//! ```

pub mod auth;
pub mod config;
pub mod dialer;
pub mod error;
pub mod logging;
pub mod template;

// Re-export key types at crate root for convenience
pub use auth::{render_auth_table, AuthUser};
pub use config::{Config, ConfigValidator, ValidationError, ValidationResult};
pub use dialer::DialerKind;
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use template::{TemplateRequest, SUPPORTED_TEMPLATES};
