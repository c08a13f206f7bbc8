//! Loxide - CLI

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use loxide::repl::Repl;
use loxide::util::logger;
use loxide::{run_file, OutputFormat, NAME, VERSION};

/// A lexical analyzer for the Lox scripting language
#[derive(Parser, Debug)]
#[command(name = "loxide")]
#[command(version = VERSION)]
#[command(about = NAME, long_about = None)]
struct Args {
    /// Script file to scan; starts the interactive prompt when omitted
    #[arg(value_name = "SCRIPT")]
    script: Option<PathBuf>,

    /// Emit the token stream as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.verbose {
        logger::init_debug();
    } else {
        logger::init();
    }

    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    match args.script {
        Some(script) => {
            let clean = run_file(&script, format)
                .with_context(|| format!("Failed to scan: {}", script.display()))?;
            if !clean {
                // sysexits EX_DATAERR
                process::exit(65);
            }
        }
        None => {
            let mut repl = Repl::new(format)?;
            repl.run()?;
        }
    }

    Ok(())
}
