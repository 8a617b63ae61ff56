//! Command-line interface for the greeter.
//!
//! ## Usage
//!
//! - `greet <VALUE>` - greet `VALUE` as text
//! - `greet --json <VALUE>` - decode `VALUE` as JSON, then greet the decoded value
//! - `greet --date <VALUE>` - decode `VALUE` as an RFC 3339 timestamp, then greet it
//!
//! ## Design
//!
//! Argument parsing uses clap derive macros. [`execute`] returns `CliResult<String>` instead of calling
//! `process::exit`; only the top-level [`run`] handles errors and exits.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::fmt;
use std::process;

use chrono::{DateTime, Utc};
use clap::Parser;
use tracing::info;

use crate::greet::greet;
use crate::value::DynamicValue;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. [`run`] prints the message and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Greet a value, rejecting anything that is not text
#[derive(Parser, Debug)]
#[command(name = "greet")]
#[command(version = VERSION)]
#[command(about = "Greet a value, rejecting anything that is not text", long_about = None)]
pub struct Cli {
    /// Value to greet
    #[arg(value_name = "VALUE")]
    pub value: String,

    /// Decode VALUE as a JSON document before greeting
    #[arg(long, conflicts_with = "date")]
    pub json: bool,

    /// Decode VALUE as an RFC 3339 timestamp before greeting
    #[arg(long)]
    pub date: bool,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called.
pub fn run() {
    let cli = Cli::parse();

    match execute(&cli) {
        Ok(greeting) => println!("{greeting}"),
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Decode the argument and greet it.
pub fn execute(cli: &Cli) -> CliResult<String> {
    let value = decode_value(cli)?;
    info!(type_name = value.type_name(), "greeting value");

    greet(value).map_err(|err| CliError::failure(format!("{:?}", miette::Report::new(err))))
}

/// Turn the raw argument into a [`DynamicValue`] according to the decoding flags.
fn decode_value(cli: &Cli) -> CliResult<DynamicValue> {
    if cli.json {
        let parsed: serde_json::Value = serde_json::from_str(&cli.value)
            .map_err(|e| CliError::failure(format!("Error: invalid JSON value: {e}")))?;
        return Ok(parsed.into());
    }
    if cli.date {
        let parsed = DateTime::parse_from_rfc3339(&cli.value)
            .map_err(|e| CliError::failure(format!("Error: invalid RFC 3339 timestamp: {e}")))?;
        return Ok(parsed.with_timezone(&Utc).into());
    }
    Ok(DynamicValue::Text(cli.value.clone()))
}
