//! singleref model library
//!
//! Provides the `SingleRefType` enum model, its JSON boundary helpers and the
//! decode policy configuration shared with the `singleref` CLI.
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod models;

pub use config::{DecodeConfig, DecodeMode};
pub use error::{Error, Result};
pub use models::{SingleRefType, SingleRefTypeValue, StringEnum};
