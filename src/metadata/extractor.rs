//! Extract inline TOML metadata from script text.
//!
//! This module implements the scanner for `# ///` metadata blocks. A block
//! looks like this inside a script:
//!
//! ```text
//! # /// script
//! # requires-python = ">=3.12"
//! # dependencies = []
//! # ///
//! ```
//!
//! The opening line declares a block type (letters, digits, and hyphens);
//! every body line is either exactly `#` or starts with `# `; the closing
//! line is exactly `# ///`. Stripping the comment prefix from the body yields
//! a TOML document.
//!
//! The scanner is a plain line-scanning state machine rather than a regex,
//! and it is deliberately strict about the delimiter lines: a trailing `\r`
//! or a missing space disqualifies a marker, while body lines keep whatever
//! bytes they carry after the `# ` prefix. Blocks that never close are
//! invisible to the scanner, not an error.

use toml::Table;

use crate::core::ScriptmetaError;

/// The block type extracted by default: `script`.
pub const DEFAULT_BLOCK_TYPE: &str = "script";

/// A raw metadata block found in script text.
///
/// The content is kept exactly as matched, comment prefixes and line
/// terminators included, so that error reports can show the offending
/// blocks verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataBlock {
    /// The declared block type from the opening `# /// <type>` line.
    pub block_type: String,
    /// The body lines between the opening and closing markers, still
    /// comment-prefixed, with line terminators preserved.
    pub content: String,
}

/// Extract the `script` metadata block from script text.
///
/// This is the primary entry point. The three outcomes are kept distinct:
/// - `Ok(Some(table))` - exactly one well-formed `script` block was found
/// - `Ok(None)` - no `script` block is present (not an error)
/// - `Err(_)` - multiple `script` blocks, or the block is not valid TOML
///
/// # Examples
///
/// ```
/// use scriptmeta::metadata::extract;
///
/// let script = "# /// script\n# requires-python = \">=3.12\"\n# ///\n";
/// let table = extract(script).unwrap().unwrap();
/// assert_eq!(table["requires-python"].as_str(), Some(">=3.12"));
///
/// assert!(extract("print('no metadata here')\n").unwrap().is_none());
/// ```
pub fn extract(script: &str) -> Result<Option<Table>, ScriptmetaError> {
    extract_block(script, DEFAULT_BLOCK_TYPE)
}

/// Extract a metadata block of an arbitrary type from script text.
///
/// Behaves exactly like [`extract`] but selects blocks whose declared type
/// equals `block_type` instead of the default `script`.
///
/// # Errors
///
/// - [`ScriptmetaError::MultipleBlocks`] if two or more blocks of the
///   requested type are present. Ambiguous metadata is fatal; the error
///   carries the raw matched blocks for diagnostics.
/// - [`ScriptmetaError::MetadataParse`] if the de-commented block content is
///   not valid TOML. The underlying parser error is preserved as the source.
pub fn extract_block(script: &str, block_type: &str) -> Result<Option<Table>, ScriptmetaError> {
    let matches: Vec<MetadataBlock> = scan_blocks(script)
        .into_iter()
        .filter(|block| block.block_type == block_type)
        .collect();

    match matches.len() {
        0 => {
            tracing::debug!(block_type, "no metadata block found");
            Ok(None)
        }
        1 => {
            let toml_source = strip_comment_prefix(&matches[0].content);
            let table =
                toml_source
                    .parse::<Table>()
                    .map_err(|e| ScriptmetaError::MetadataParse {
                        block_type: block_type.to_string(),
                        source: e,
                    })?;
            tracing::debug!(block_type, keys = table.len(), "parsed metadata block");
            Ok(Some(table))
        }
        count => {
            tracing::debug!(block_type, count, "ambiguous metadata");
            Err(ScriptmetaError::MultipleBlocks {
                block_type: block_type.to_string(),
                blocks: matches.into_iter().map(|block| block.content).collect(),
            })
        }
    }
}

/// Scan script text for all metadata blocks, regardless of type.
///
/// Blocks are matched non-overlapping, in order of appearance. An opening
/// marker whose comment run never reaches a closing `# ///` matches nothing;
/// scanning resumes on the next line so a later opener inside the same run
/// can still match.
pub fn scan_blocks(script: &str) -> Vec<MetadataBlock> {
    let lines: Vec<&str> = script.split_inclusive('\n').collect();
    let mut blocks = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        let Some(block_type) = opening_block_type(lines[i]) else {
            i += 1;
            continue;
        };

        // Walk the contiguous comment run following the opener. Body lines
        // may themselves read `# ///`; the last one closes the block.
        let mut end = i + 1;
        let mut closing = None;
        while end < lines.len() && is_body_line(lines[end]) {
            if strip_newline(lines[end]) == "# ///" {
                closing = Some(end);
            }
            end += 1;
        }

        match closing {
            Some(closing) => {
                blocks.push(MetadataBlock {
                    block_type: block_type.to_string(),
                    content: lines[i + 1..closing].concat(),
                });
                i = closing + 1;
            }
            None => {
                // Unterminated block: invisible, keep scanning.
                i += 1;
            }
        }
    }

    blocks
}

/// Remove the comment prefix from every line of a matched block body.
///
/// A line starting with `# ` loses those two characters; any other line
/// loses exactly one leading `#`. Line terminators pass through untouched,
/// so the reconstructed TOML keeps the original line structure.
fn strip_comment_prefix(content: &str) -> String {
    content
        .split_inclusive('\n')
        .map(|line| {
            if let Some(rest) = line.strip_prefix("# ") {
                rest
            } else {
                line.strip_prefix('#').unwrap_or(line)
            }
        })
        .collect()
}

fn strip_newline(line: &str) -> &str {
    line.strip_suffix('\n').unwrap_or(line)
}

/// Parse an opening marker line, returning the declared block type.
///
/// The line must be exactly `# /// <type>` with `<type>` drawn from
/// letters, digits, and hyphens. Anything else, including a trailing
/// carriage return, is not an opener.
fn opening_block_type(line: &str) -> Option<&str> {
    let name = strip_newline(line).strip_prefix("# /// ")?;
    if !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-')
    {
        Some(name)
    } else {
        None
    }
}

/// A body line is exactly `#` or starts with `# `.
fn is_body_line(line: &str) -> bool {
    let line = strip_newline(line);
    line == "#" || line.starts_with("# ")
}
