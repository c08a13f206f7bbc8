//! Lexical analysis
//!
//! Split into specialized modules: the token data model, the
//! reserved-word table, and the scanner state machine.

pub mod keywords;
pub mod scanner;
pub mod tokens;

#[cfg(test)]
mod tests;

// Re-export types
pub use scanner::Scanner;
pub use tokens::{LexError, Literal, Token, TokenKind};

use tracing::debug;

use crate::util::diagnostic::Reporter;

/// Scan source code into a token sequence
///
/// Lexical errors are routed to `reporter`; scanning always runs to the
/// end of input and the sequence is terminated by an EOF token.
pub fn scan(source: &str, reporter: &mut dyn Reporter) -> Vec<Token> {
    debug!("Scanning source ({} bytes)", source.len());
    let mut scanner = Scanner::new(source);
    scanner.scan_tokens(reporter);
    let tokens = scanner.into_tokens();
    debug!("Scanned {} tokens", tokens.len());
    tokens
}
