//! `SingleRefType` model, generated from the OpenAPI enum schema of the same
//! name.
//!
//! The schema declares two string literals, `admin` and `user`, and the wire
//! form is the bare JSON string. Two decode paths are offered:
//!
//! - [`from_json`] is permissive. It wraps any JSON value in a
//!   [`SingleRefTypeValue`] without checking it, so values emitted by newer
//!   producers survive a round trip. Whether the pass-through is intended
//!   forward compatibility is not stated by the source schema; integrators
//!   that need a guarantee should call [`is_valid_value`] or
//!   [`SingleRefTypeValue::known`] themselves.
//! - [`SingleRefType::from_json_strict`] fails with
//!   [`Error::InvalidEnumValue`] on anything outside the declared set.
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use singleref::models::single_ref_type::{self, SingleRefType};
//!
//! assert!(single_ref_type::is_valid_value(&json!("admin")));
//! assert!(!single_ref_type::is_valid_value(&json!("User")));
//!
//! let decoded = single_ref_type::from_json(json!("not-a-real-value"));
//! assert_eq!(decoded.as_json(), &json!("not-a-real-value"));
//! assert_eq!(decoded.known(), None);
//!
//! assert_eq!("user".parse::<SingleRefType>().unwrap(), SingleRefType::User);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use tracing::warn;

use crate::config::{DecodeConfig, DecodeMode};
use crate::error::{Error, Result};
use crate::models::traits::StringEnum;

/// Closed set of roles a reference may point at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SingleRefType {
    Admin,
    User,
}

const VARIANTS: [SingleRefType; 2] = [SingleRefType::Admin, SingleRefType::User];

impl SingleRefType {
    /// Declared literals, in schema order
    pub const VALUES: [&'static str; VARIANTS.len()] = {
        let mut values = [""; VARIANTS.len()];
        let mut i = 0;
        while i < VARIANTS.len() {
            values[i] = SingleRefType::as_str(&VARIANTS[i]);
            i += 1;
        }
        values
    };

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }

    pub fn from_json_strict(value: &JsonValue) -> Result<Self> {
        <Self as StringEnum>::from_json_strict(value)
    }
}

impl StringEnum for SingleRefType {
    const NAME: &'static str = "SingleRefType";

    fn variants() -> &'static [Self] {
        &VARIANTS
    }

    fn as_str(self) -> &'static str {
        SingleRefType::as_str(&self)
    }
}

impl fmt::Display for SingleRefType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SingleRefType {
    type Err = Error;

    /// Exact, case-sensitive match against the declared literals
    fn from_str(s: &str) -> Result<Self> {
        <Self as StringEnum>::from_literal(s).ok_or_else(|| {
            Error::invalid_enum_value(<Self as StringEnum>::NAME, &JsonValue::String(s.into()))
        })
    }
}

impl TryFrom<&JsonValue> for SingleRefType {
    type Error = Error;

    fn try_from(value: &JsonValue) -> Result<Self> {
        Self::from_json_strict(value)
    }
}

impl From<SingleRefType> for JsonValue {
    fn from(value: SingleRefType) -> Self {
        JsonValue::String(value.as_str().to_string())
    }
}

/// Wire-level `SingleRefType` as produced by the permissive decoder.
///
/// Holds the JSON exactly as received. It may lie outside the declared set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SingleRefTypeValue(JsonValue);

impl SingleRefTypeValue {
    pub fn as_json(&self) -> &JsonValue {
        &self.0
    }

    pub fn into_json(self) -> JsonValue {
        self.0
    }

    /// The declared variant this value names, if any
    pub fn known(&self) -> Option<SingleRefType> {
        self.0.as_str().and_then(SingleRefType::from_literal)
    }

    pub fn is_known(&self) -> bool {
        self.known().is_some()
    }
}

impl From<SingleRefType> for SingleRefTypeValue {
    fn from(value: SingleRefType) -> Self {
        Self(value.into())
    }
}

impl PartialEq<SingleRefType> for SingleRefTypeValue {
    fn eq(&self, other: &SingleRefType) -> bool {
        self.known() == Some(*other)
    }
}

/// True iff `value` is a JSON string equal to one of the declared literals
pub fn is_valid_value(value: &JsonValue) -> bool {
    <SingleRefType as StringEnum>::is_valid_value(value)
}

/// Membership test for a value that may be absent. Absence is not a member.
pub fn is_valid_optional(value: Option<&JsonValue>) -> bool {
    value.is_some_and(is_valid_value)
}

pub fn is_valid_str(value: &str) -> bool {
    SingleRefType::from_literal(value).is_some()
}

/// Trusted pass-through decode. Never fails and never validates.
pub fn from_json(json: JsonValue) -> SingleRefTypeValue {
    from_json_typed(json, false)
}

/// Decode overload carrying the generator-wide discriminator flag.
///
/// `SingleRefType` has no discriminator, so `_ignore_discriminator` is unused.
pub fn from_json_typed(json: JsonValue, _ignore_discriminator: bool) -> SingleRefTypeValue {
    SingleRefTypeValue(json)
}

/// Identity encode. Absent stays absent and JSON `null` stays `null`.
pub fn to_json(value: Option<&SingleRefTypeValue>) -> Option<JsonValue> {
    value.map(|v| v.as_json().clone())
}

/// Typed identity encode carrying the discriminator flag (unused here)
pub fn to_json_typed(value: JsonValue, _ignore_discriminator: bool) -> SingleRefTypeValue {
    SingleRefTypeValue(value)
}

/// Decode according to `config`.
///
/// In strict mode values outside the declared set are rejected; in permissive
/// mode they pass through, optionally with a warning.
pub fn decode_with(json: JsonValue, config: &DecodeConfig) -> Result<SingleRefTypeValue> {
    match config.mode {
        DecodeMode::Strict => SingleRefType::from_json_strict(&json).map(Into::into),
        DecodeMode::Permissive => {
            let decoded = from_json(json);
            if config.warn_on_unknown && !decoded.is_known() {
                warn!(
                    "Accepted unknown {} value {}",
                    <SingleRefType as StringEnum>::NAME,
                    decoded.as_json()
                );
            }
            Ok(decoded)
        }
    }
}
