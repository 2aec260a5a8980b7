//! Decode policy configuration.
//!
//! Settings are resolved from, in increasing precedence: built-in defaults,
//! a TOML file, and the `SINGLEREF_*` environment variables. The CLI applies
//! its own flags on top.
//!
//! ```toml
//! # ~/.config/singleref/config.toml
//! mode = "strict"
//! warn_on_unknown = false
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Environment variable selecting the decode mode
pub const ENV_DECODE_MODE: &str = "SINGLEREF_DECODE_MODE";
/// Environment variable toggling the unknown-value warning
pub const ENV_WARN_ON_UNKNOWN: &str = "SINGLEREF_WARN_ON_UNKNOWN";

/// How enum values are treated when decoded from JSON
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodeMode {
    /// Reject values outside the declared set
    Strict,
    /// Pass every value through unchanged
    #[default]
    Permissive,
}

impl DecodeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Permissive => "permissive",
        }
    }
}

impl fmt::Display for DecodeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DecodeMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "permissive" => Ok(Self::Permissive),
            _ => Err(Error::config(format!(
                "Unknown decode mode: '{s}'. Expected 'strict' or 'permissive'"
            ))),
        }
    }
}

/// Decode settings consulted by [`crate::models::single_ref_type::decode_with`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeConfig {
    pub mode: DecodeMode,
    /// Log a warning when permissive decode accepts an unknown value
    pub warn_on_unknown: bool,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            mode: DecodeMode::Permissive,
            warn_on_unknown: true,
        }
    }
}

impl DecodeConfig {
    pub fn strict() -> Self {
        Self {
            mode: DecodeMode::Strict,
            ..Self::default()
        }
    }

    /// Parse settings from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Load settings from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading decode config from {}", path.display());
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    /// Default config file location: `<config_dir>/singleref/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("singleref").join("config.toml"))
    }

    /// Resolve settings from the process environment.
    ///
    /// An explicit `path` must exist; the default path is used only when it
    /// is present on disk.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, |key| std::env::var(key).ok())
    }

    /// Same as [`DecodeConfig::load`] with an injectable environment lookup
    pub fn load_with_env<F>(path: Option<&Path>, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path() {
                Some(default) if default.is_file() => Self::from_file(&default)?,
                _ => {
                    debug!("No decode config file found, using defaults");
                    Self::default()
                }
            },
        };
        config.apply_env(env)?;
        Ok(config)
    }

    /// Overlay `SINGLEREF_*` variables onto these settings
    pub fn apply_env<F>(&mut self, env: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(mode) = env(ENV_DECODE_MODE) {
            self.mode = mode.parse()?;
            debug!("Decode mode overridden by {ENV_DECODE_MODE}: {}", self.mode);
        }
        if let Some(flag) = env(ENV_WARN_ON_UNKNOWN) {
            self.warn_on_unknown = parse_bool(ENV_WARN_ON_UNKNOWN, &flag)?;
        }
        Ok(())
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(Error::config(format!("{key} must be a boolean, got '{raw}'"))),
    }
}
