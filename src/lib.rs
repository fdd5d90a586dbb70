//! scriptmeta - inline script metadata extraction
//!
//! A small utility that extracts inline TOML metadata embedded in a script's
//! comments. Metadata lives in a `# ///` block:
//!
//! ```text
//! # /// script
//! # requires-python = ">=3.12"
//! # dependencies = []
//! # ///
//! ```
//!
//! The extractor is a pure function of the script text: it does no I/O, holds
//! no state between calls, and is safe to invoke concurrently on independent
//! inputs. The three possible outcomes are kept distinct:
//!
//! - **present**: exactly one matching block, parsed into a [`toml::Table`]
//! - **absent**: no matching block (`Ok(None)`, not an error)
//! - **failed**: multiple matching blocks, or content that is not valid TOML
//!
//! # Core Modules
//!
//! - [`metadata`] - block scanning and TOML extraction
//! - [`core`] - error types and user-friendly error reporting
//! - [`cli`] - the `scriptmeta` command-line interface
//!
//! # Library Usage
//!
//! ```
//! use scriptmeta::metadata;
//!
//! let script = "# /// script\n# requires-python = \">=3.12\"\n# dependencies = []\n# ///\n";
//!
//! match metadata::extract(script) {
//!     Ok(Some(table)) => println!("requires {}", table["requires-python"]),
//!     Ok(None) => println!("No metadata found."),
//!     Err(e) => eprintln!("{e}"),
//! }
//! ```
//!
//! # Command-Line Usage
//!
//! ```bash
//! # Print a script's metadata as TOML
//! scriptmeta path/to/script.py
//!
//! # Print it as JSON instead
//! scriptmeta --format json path/to/script.py
//!
//! # Extract a different block type
//! scriptmeta --block-type test path/to/script.py
//! ```

pub mod cli;
pub mod core;
pub mod metadata;
