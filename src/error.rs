//! Error handling for the singleref model library.
//!
//! The core enum helpers (`is_valid_value`, `from_json`, `to_json`,
//! `to_json_typed`) never fail. This type covers the strict decode path and
//! the configuration layer.
//!
//! # Examples
//!
//! ```
//! use singleref::error::{Error, Result};
//! use singleref::models::SingleRefType;
//!
//! fn parse(raw: &str) -> Result<SingleRefType> {
//!     raw.parse()
//! }
//!
//! assert!(parse("admin").is_ok());
//! assert!(matches!(parse("guest"), Err(Error::InvalidEnumValue { .. })));
//! ```

use thiserror::Error;

/// Result type for singleref operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for singleref operations
#[derive(Debug, Error)]
pub enum Error {
    /// A value is not one of the literals declared by an enum schema
    #[error("Invalid value for enum {type_name}: {value}")]
    InvalidEnumValue {
        type_name: &'static str,
        value: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create an invalid-value error, rendering `value` as compact JSON
    pub fn invalid_enum_value(type_name: &'static str, value: &serde_json::Value) -> Self {
        Self::InvalidEnumValue {
            type_name,
            value: value.to_string(),
        }
    }
}
