//! Shared interface for string-valued enum models

use serde_json::Value as JsonValue;

use crate::error::{Error, Result};

/// A closed enumeration whose wire form is a bare JSON string
pub trait StringEnum: Copy + Send + Sync + 'static {
    /// Schema name as declared in the OpenAPI document
    const NAME: &'static str;

    /// Every variant, in declaration order
    fn variants() -> &'static [Self];

    /// The wire literal for this variant
    fn as_str(self) -> &'static str;

    /// Iterate the declared literals in declaration order
    fn values() -> impl Iterator<Item = &'static str> {
        Self::variants().iter().map(|v| v.as_str())
    }

    /// Look up a variant by its exact, case-sensitive literal
    fn from_literal(literal: &str) -> Option<Self> {
        Self::variants()
            .iter()
            .copied()
            .find(|v| v.as_str() == literal)
    }

    /// Membership test over arbitrary JSON. Non-strings are never members.
    fn is_valid_value(value: &JsonValue) -> bool {
        value
            .as_str()
            .is_some_and(|s| Self::from_literal(s).is_some())
    }

    /// Strict decode; rejects anything outside the declared set
    fn from_json_strict(value: &JsonValue) -> Result<Self> {
        value
            .as_str()
            .and_then(Self::from_literal)
            .ok_or_else(|| Error::invalid_enum_value(Self::NAME, value))
    }
}
