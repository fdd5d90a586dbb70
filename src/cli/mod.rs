//! Command-line interface for scriptmeta.
//!
//! The CLI is a thin wrapper over [`crate::metadata::extract_block`]: it
//! reads the named script file, runs the extractor, and prints the metadata
//! (or "No metadata found." when the file carries none). All failures exit
//! non-zero through the user-friendly error path in [`crate::core::error`].
//!
//! # Examples
//!
//! ```bash
//! scriptmeta script.py
//! scriptmeta --format json script.py
//! scriptmeta --block-type test --verbose script.py
//! ```

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::metadata::{self, DEFAULT_BLOCK_TYPE};

/// Output format for extracted metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The metadata as a TOML document (default)
    Toml,
    /// The metadata as pretty-printed JSON
    Json,
}

/// Main CLI structure for scriptmeta.
///
/// Follows standard Unix conventions: short options use single dashes,
/// long options use double dashes, and `--verbose`/`--quiet` are mutually
/// exclusive.
#[derive(Parser)]
#[command(
    name = "scriptmeta",
    about = "Extract inline TOML metadata blocks embedded in script comments",
    version,
    long_about = "Reads a script file, looks for a '# /// script' metadata block in its \
comments, and prints the parsed TOML metadata. Prints 'No metadata found.' when the \
file carries no block; exits non-zero when metadata is ambiguous or malformed."
)]
pub struct Cli {
    /// Path to the script file to read.
    file: PathBuf,

    /// Block type to extract.
    ///
    /// Metadata blocks declare a type on their opening line (`# /// <type>`);
    /// only blocks of the requested type are considered. Letters, digits, and
    /// hyphens.
    #[arg(long, value_name = "NAME", default_value = DEFAULT_BLOCK_TYPE)]
    block_type: String,

    /// Output format for the extracted metadata.
    #[arg(long, value_enum, default_value_t = OutputFormat::Toml)]
    format: OutputFormat,

    /// Enable verbose output for debugging.
    ///
    /// Equivalent to setting `RUST_LOG=debug`. Mutually exclusive with
    /// `--quiet`.
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all output except errors for automation.
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    /// Execute the CLI.
    ///
    /// Reads the script file, runs the extractor, and prints the result.
    /// Returns an error for the caller to render via
    /// [`crate::core::user_friendly_error`].
    pub fn execute(self) -> Result<()> {
        self.init_logging();

        let script = std::fs::read_to_string(&self.file)
            .with_context(|| format!("failed to read script file '{}'", self.file.display()))?;

        tracing::debug!(
            file = %self.file.display(),
            bytes = script.len(),
            block_type = %self.block_type,
            "extracting metadata"
        );

        match metadata::extract_block(&script, &self.block_type)? {
            Some(table) => match self.format {
                OutputFormat::Toml => {
                    let rendered = toml::to_string(&table)
                        .context("failed to serialize metadata as TOML")?;
                    print!("{rendered}");
                }
                OutputFormat::Json => {
                    let rendered = serde_json::to_string_pretty(&table)
                        .context("failed to serialize metadata as JSON")?;
                    println!("{rendered}");
                }
            },
            None => println!("No metadata found."),
        }

        Ok(())
    }

    /// Initialize the tracing subscriber from the verbosity flags.
    ///
    /// `--verbose` maps to `debug`, `--quiet` to `error`; otherwise
    /// `RUST_LOG` is honored with a `warn` fallback.
    fn init_logging(&self) {
        let filter = if self.quiet {
            EnvFilter::new("error")
        } else if self.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .try_init();
    }
}
