//! Inline script metadata extraction.
//!
//! This module locates specially delimited comment blocks embedded in a
//! source file's text and parses their de-commented content as TOML. The
//! block format is the `# /// <type>` convention: an opening marker naming
//! the block type, a run of `#`-prefixed body lines, and a closing `# ///`.

pub mod extractor;

pub use extractor::{DEFAULT_BLOCK_TYPE, MetadataBlock, extract, extract_block, scan_blocks};
