//! Diagnostic reporting
//!
//! The scanner never aborts on bad input: every lexical error goes
//! through the [`Reporter`] sink and scanning continues. The sink is
//! the only channel through which the scanner signals problems.

/// Error sink consumed by the scanner
pub trait Reporter {
    /// Record an error at the given 1-based line
    fn report(&mut self, line: usize, message: &str);
}

/// Reporter that prints to stderr and remembers that an error occurred
#[derive(Debug, Default)]
pub struct ConsoleReporter {
    had_error: bool,
}

impl ConsoleReporter {
    /// Create a reporter with a clear error flag
    pub fn new() -> Self {
        Self::default()
    }

    /// True when at least one error has been reported
    pub fn had_error(&self) -> bool {
        self.had_error
    }

    /// Clear the error flag, for prompt-loop reuse
    pub fn reset(&mut self) {
        self.had_error = false;
    }
}

impl Reporter for ConsoleReporter {
    fn report(&mut self, line: usize, message: &str) {
        eprintln!("[line {}] Error: {}", line, message);
        self.had_error = true;
    }
}

/// A recorded diagnostic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: usize,
    pub message: String,
}

/// Reporter that accumulates diagnostics in report order
#[derive(Debug, Default)]
pub struct ErrorCollector {
    diagnostics: Vec<Diagnostic>,
}

impl ErrorCollector {
    /// Create an empty collector
    pub fn new() -> Self {
        Self::default()
    }

    /// True when at least one diagnostic has been recorded
    pub fn had_error(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Diagnostics recorded so far
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Drain the recorded diagnostics, leaving the collector empty
    pub fn take(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }
}

impl Reporter for ErrorCollector {
    fn report(&mut self, line: usize, message: &str) {
        self.diagnostics.push(Diagnostic {
            line,
            message: message.to_string(),
        });
    }
}
