//! Interactive prompt
//!
//! Line-based read loop with rustyline for editing and history. Each
//! submitted line is scanned independently; lexical errors are reported
//! as they occur and never end the session.

use std::path::PathBuf;

use anyhow::{Context, Result};
use rustyline::config::Config;
use rustyline::error::ReadlineError;
use rustyline::history::FileHistory;
use rustyline::Editor;

use crate::{run, OutputFormat, NAME, VERSION};

/// Prompt configuration
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Prompt to display
    pub prompt: String,
    /// History file path
    pub history_file: Option<PathBuf>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".into(),
            history_file: None,
        }
    }
}

/// Interactive scanner session
pub struct Repl {
    config: ReplConfig,
    editor: Editor<(), FileHistory>,
    format: OutputFormat,
}

impl Repl {
    /// Create a REPL with the default configuration
    pub fn new(format: OutputFormat) -> Result<Self> {
        Self::with_config(ReplConfig::default(), format)
    }

    /// Create with custom config
    pub fn with_config(config: ReplConfig, format: OutputFormat) -> Result<Self> {
        let rl_config = Config::builder().history_ignore_space(true).build();

        let mut editor =
            Editor::with_config(rl_config).context("Failed to initialize line editor")?;

        // Load history if file exists
        if let Some(ref history_file) = config.history_file {
            if history_file.exists() {
                let _ = editor.load_history(history_file);
            }
        }

        Ok(Self {
            config,
            editor,
            format,
        })
    }

    /// Run the prompt loop until Ctrl-D
    pub fn run(&mut self) -> Result<()> {
        println!("{} {}", NAME, VERSION);
        println!("Press Ctrl+D to exit\n");

        loop {
            match self.editor.readline(&self.config.prompt) {
                Ok(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    let _ = self.editor.add_history_entry(&line);

                    // Errors were already reported; the next line starts clean
                    run(&line, self.format)?;
                }
                Err(ReadlineError::Eof) => {
                    // Ctrl-D pressed
                    break;
                }
                Err(ReadlineError::Interrupted) => {
                    // Ctrl-C pressed
                    println!("(Interrupted)");
                    continue;
                }
                Err(e) => return Err(e).context("Failed to read line"),
            }
        }

        // Save history
        if let Some(ref history_file) = self.config.history_file {
            let _ = self.editor.save_history(history_file);
        }

        Ok(())
    }
}
