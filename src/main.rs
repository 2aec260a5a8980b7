//! singleref CLI entrypoint
//! Inspects, decodes and encodes `SingleRefType` values from the shell.
#![deny(unsafe_code)]

// Internal imports (std, crate)
use std::path::PathBuf;
use std::process::ExitCode;

use singleref::{
    DecodeConfig, DecodeMode, SingleRefType, StringEnum,
    models::single_ref_type::{self, decode_with},
};

// External imports (alphabetized)
use anyhow::Context;
use clap::Parser;
use serde_json::Value as JsonValue;
use tracing::{Level, debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "singleref")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// List every declared SingleRefType literal
    Values,
    /// Test whether a value is a declared literal
    Check {
        /// JSON value, or a bare string when it does not parse as JSON
        value: String,
    },
    /// Decode a JSON value through the configured decode policy
    Decode {
        /// JSON value, or a bare string when it does not parse as JSON
        json: String,
        /// Reject values outside the declared set regardless of config
        #[arg(long)]
        strict: bool,
        /// Path to a TOML config file
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Encode a declared literal as JSON
    Encode {
        /// One of the declared literals (case-sensitive)
        value: String,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // RUST_LOG wins over the built-in default; --verbose wins over both
    let mut filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if cli.verbose {
        filter = filter.add_directive(Level::DEBUG.into());
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting singleref CLI");
    match &cli.command {
        Commands::Values => {
            for literal in SingleRefType::values() {
                println!("{literal}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check { value } => {
            let json = parse_json_arg(value);
            if single_ref_type::is_valid_value(&json) {
                println!("valid");
                Ok(ExitCode::SUCCESS)
            } else {
                println!("invalid");
                Ok(ExitCode::FAILURE)
            }
        }
        Commands::Decode {
            json,
            strict,
            config,
        } => {
            let mut decode_config = DecodeConfig::load(config.as_deref())
                .context("Failed to load decode configuration")?;
            if *strict {
                decode_config.mode = DecodeMode::Strict;
            }
            debug!("Decoding with mode {}", decode_config.mode);

            let decoded = decode_with(parse_json_arg(json), &decode_config)
                .with_context(|| format!("Failed to decode {json}"))?;
            println!("{}", serde_json::to_string(decoded.as_json())?);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Encode { value } => {
            let parsed: SingleRefType = value
                .parse()
                .with_context(|| format!("Cannot encode '{value}'"))?;
            let encoded = single_ref_type::to_json(Some(&parsed.into()))
                .context("Encoding produced no value")?;
            println!("{}", serde_json::to_string(&encoded)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Shell arguments are usually unquoted, so `admin` is read as the string
/// `"admin"` rather than rejected as malformed JSON.
fn parse_json_arg(raw: &str) -> JsonValue {
    serde_json::from_str(raw).unwrap_or_else(|_| JsonValue::String(raw.to_string()))
}
