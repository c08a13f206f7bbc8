//! Loxide - a lexical analyzer for the Lox scripting language
//!
//! Converts raw Lox source text into a flat, typed token sequence and
//! prints it for inspection. This is the scanning stage of a language
//! front end: literals get their parsed payloads, reserved words are
//! separated from identifiers, and every token carries the line it was
//! finalized on.
//!
//! # Example
//!
//! ```lox
//! var answer = 42;
//! print answer / 2; // 21
//! ```

#![doc(html_root_url = "https://docs.rs/loxide")]
#![warn(rust_2018_idioms)]

// Public modules
pub mod frontend;
pub mod repl;
pub mod util;

// Re-exports
pub use anyhow::{Context, Result};

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::frontend::lexer::{self, Token};
use crate::util::diagnostic::ConsoleReporter;

/// Tool version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tool name
pub const NAME: &str = "Loxide";

/// Output format for token dumps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One `KIND lexeme literal` line per token
    #[default]
    Text,
    /// The whole token sequence as a pretty-printed JSON array
    Json,
}

/// Scan source code and print its token stream
///
/// Lexical errors are rendered to stderr as they are found; scanning
/// always runs to the end of input. Returns `true` when the source
/// scanned clean.
///
/// # Example
///
/// ```no_run
/// use loxide::{run, OutputFormat, Result};
///
/// fn main() -> Result<()> {
///     run("print 1 + 2;", OutputFormat::Text)?;
///     Ok(())
/// }
/// ```
pub fn run(source: &str, format: OutputFormat) -> Result<bool> {
    let mut reporter = ConsoleReporter::new();
    let tokens = lexer::scan(source, &mut reporter);
    print_tokens(&tokens, format)?;
    Ok(!reporter.had_error())
}

/// Scan a script file and print its token stream
pub fn run_file(path: &Path, format: OutputFormat) -> Result<bool> {
    debug!("Scanning file: {}", path.display());
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    run(&source, format)
}

fn print_tokens(tokens: &[Token], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for token in tokens {
                println!("{}", token);
            }
        }
        OutputFormat::Json => {
            let rendered =
                serde_json::to_string_pretty(tokens).context("Failed to serialize token stream")?;
            println!("{}", rendered);
        }
    }
    Ok(())
}
