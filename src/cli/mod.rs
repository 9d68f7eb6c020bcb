//! CLI module for LedgerForge
//!
//! ## Commands
//!
//! - *(no subcommand)* - Run the built-in test suite with default settings
//! - `test` - Run the built-in test suite (pytest-style flags)
//! - `run` - Construct a `LedgerForge` and call `run()`
//! - `version` - Print the version
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::process;

use clap::{Parser, Subcommand};

use crate::config::OutputFormat;
use crate::version::LEDGERFORGE_VERSION;

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
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
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

impl From<crate::harness::HarnessError> for CliError {
    fn from(e: crate::harness::HarnessError) -> Self {
        CliError::failure(format!("Error: {}", e))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// LedgerForge and its self-test harness
#[derive(Parser, Debug)]
#[command(name = "ledgerforge")]
#[command(version = LEDGERFORGE_VERSION)]
#[command(about = "Run LedgerForge and its built-in test suite", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the built-in test suite (pytest-style)
    Test {
        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
        /// Stop on first failure
        #[arg(short = 'x', long = "exitfirst")]
        stop_on_fail: bool,
        /// Include slow tests
        #[arg(long)]
        slow: bool,
        /// Filter tests by keyword
        #[arg(short = 'k', value_name = "EXPR")]
        filter: Option<String>,
        /// List collected tests without running them
        #[arg(long)]
        collect_only: bool,
        /// Report format
        #[arg(long, value_name = "FORMAT", default_value_t = OutputFormat::Console)]
        format: OutputFormat,
        /// Disable ANSI colours (also honoured via NO_COLOR)
        #[arg(long)]
        no_color: bool,
    },

    /// Construct a LedgerForge and call run()
    Run,

    /// Print the version
    Version,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Some(Command::Test {
            verbose,
            stop_on_fail,
            slow,
            filter,
            collect_only,
            format,
            no_color,
        }) => {
            let config = commands::config_from_flags(verbose, stop_on_fail, slow, filter, collect_only, format, no_color);
            commands::run_tests(&config)
        }
        Some(Command::Run) => commands::run_forge(),
        Some(Command::Version) => commands::print_version(),
        // Default: behave like running the test module as a standalone program
        None => {
            let config = commands::config_from_flags(false, false, false, None, false, OutputFormat::Console, false);
            commands::run_tests(&config)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
