//! CLI module for bndlex
//!
//! This module provides the command-line interface for the scanner.
//!
//! ## Commands
//!
//! - `lex <file>` - Print the token stream of a manifest (text or JSON)
//! - `verify <file>...` - Check that scanning can resume at every token boundary
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
use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

use crate::format::{DumpConfig, DumpFormat};
use crate::version::BNDLEX_VERSION;

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

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Restartable scanner for bnd-style manifest files
#[derive(Parser, Debug)]
#[command(name = "bndlex")]
#[command(version = BNDLEX_VERSION)]
#[command(about = "Restartable scanner for bnd-style manifest files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    // Debug/development flags
    /// Tokenize a whole file with default settings (debug)
    #[arg(long = "lex", value_name = "FILE")]
    pub lex_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the token stream of a manifest
    Lex(LexArgs),

    /// Check that scanning can resume at every token boundary
    Verify {
        /// Manifest files to check
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,
    },
}

/// Arguments of the `lex` subcommand.
#[derive(Args, Debug, Clone)]
pub struct LexArgs {
    /// Manifest file to scan
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
    /// Byte offset to start scanning at
    #[arg(long, default_value_t = 0)]
    pub start: usize,
    /// Byte offset to stop scanning at (default: end of file)
    #[arg(long)]
    pub end: Option<usize>,
    /// Resume state (0 or 1; any non-zero value means 1)
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub state: i32,
    /// Output format
    #[arg(long, value_enum, default_value_t = DumpFormat::Text)]
    pub format: DumpFormat,
    /// Do not print token text
    #[arg(long)]
    pub no_text: bool,
    /// Do not print resume states
    #[arg(long)]
    pub no_state: bool,
    /// Truncate token text after this many characters (0 = never)
    #[arg(long, value_name = "CHARS", default_value_t = 60)]
    pub max_width: usize,
}

impl LexArgs {
    /// Dump settings selected by the flags.
    pub fn dump_config(&self) -> DumpConfig {
        DumpConfig::new()
            .with_format(self.format)
            .with_text(!self.no_text)
            .with_state(!self.no_state)
            .with_max_text_width(self.max_width)
    }
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
fn execute(cli: Cli) -> CliResult<ExitCode> {
    // Handle debug flags first
    if let Some(file) = cli.lex_file {
        return commands::lex_file(&LexArgs {
            file,
            start: 0,
            end: None,
            state: 0,
            format: DumpFormat::Text,
            no_text: false,
            no_state: false,
            max_width: 60,
        });
    }

    match cli.command {
        Some(Command::Lex(args)) => commands::lex_file(&args),
        Some(Command::Verify { files }) => commands::verify_files(&files),
        // No command and no debug flag - show help
        None => Err(CliError::failure("Usage: bndlex <COMMAND>; run `bndlex --help` for details")),
    }
}

// ============================================================================
// Tests
// ============================================================================
