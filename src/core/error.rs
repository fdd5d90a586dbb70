//! Error handling for scriptmeta.
//!
//! The error system has two layers:
//! 1. [`ScriptmetaError`] - strongly-typed errors for precise handling in code
//! 2. [`ErrorContext`] - a wrapper that adds user-friendly messages and
//!    suggestions for CLI display
//!
//! Extraction failures are deterministic, so nothing here is retryable: both
//! the ambiguous-input case (multiple metadata blocks) and the malformed-TOML
//! case surface immediately to the caller. The CLI boundary converts any
//! error into an [`ErrorContext`] via [`user_friendly_error`] and exits
//! non-zero instead of leaking a backtrace.
//!
//! # Examples
//!
//! ```rust,no_run
//! use scriptmeta::core::{ScriptmetaError, user_friendly_error};
//!
//! let err = ScriptmetaError::MultipleBlocks {
//!     block_type: "script".to_string(),
//!     blocks: vec!["# a = 1\n".to_string(), "# b = 2\n".to_string()],
//! };
//! let ctx = user_friendly_error(anyhow::Error::from(err));
//! ctx.display(); // Colored error with details and a suggestion
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for scriptmeta operations.
///
/// Each variant represents a specific failure mode with enough context to
/// produce an actionable message. Absence of metadata is deliberately *not*
/// an error; the extraction API models it as `Ok(None)`.
#[derive(Error, Debug)]
pub enum ScriptmetaError {
    /// More than one metadata block of the requested type was found.
    ///
    /// Inline metadata must be unambiguous, so this is a fatal,
    /// non-retryable input error. The raw matched blocks are carried for
    /// diagnostic display.
    #[error("multiple '{block_type}' metadata blocks found ({count})", count = .blocks.len())]
    MultipleBlocks {
        /// The block type that matched more than once
        block_type: String,
        /// The raw, still comment-prefixed content of each matched block
        blocks: Vec<String>,
    },

    /// A metadata block was found but its content is not valid TOML.
    #[error("invalid TOML in '{block_type}' metadata block")]
    MetadataParse {
        /// The block type whose content failed to parse
        block_type: String,
        /// The underlying TOML parser error
        #[source]
        source: toml::de::Error,
    },

    /// File system error
    #[error("file system error: {operation}: {path}")]
    FileSystemError {
        /// The file system operation that failed
        operation: String,
        /// Path where the file system error occurred
        path: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Other error
    #[error("{message}")]
    Other {
        /// Generic error message
        message: String,
    },
}

impl Clone for ScriptmetaError {
    fn clone(&self) -> Self {
        match self {
            Self::MultipleBlocks { block_type, blocks } => Self::MultipleBlocks {
                block_type: block_type.clone(),
                blocks: blocks.clone(),
            },
            // toml::de::Error is not guaranteed Clone, convert to Other
            Self::MetadataParse { block_type, source } => Self::Other {
                message: format!("invalid TOML in '{block_type}' metadata block: {source}"),
            },
            Self::FileSystemError { operation, path } => Self::FileSystemError {
                operation: operation.clone(),
                path: path.clone(),
            },
            // io::Error does not implement Clone, convert to Other
            Self::IoError(e) => Self::Other {
                message: format!("IO error: {e}"),
            },
            Self::Other { message } => Self::Other {
                message: message.clone(),
            },
        }
    }
}

/// Error context wrapper that provides user-friendly error information.
///
/// Wraps a [`ScriptmetaError`] and adds an optional suggestion and optional
/// details. When displayed, errors show:
/// 1. **Error**: the main error message in red
/// 2. **Details**: additional context in yellow (optional)
/// 3. **Suggestion**: actionable steps in green (optional)
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying scriptmeta error
    pub error: ScriptmetaError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context from a [`ScriptmetaError`].
    #[must_use]
    pub const fn new(error: ScriptmetaError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error context to stderr with terminal colors.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error to a user-friendly [`ErrorContext`] with suggestions.
///
/// This is the main entry point for converting arbitrary errors into
/// user-friendly messages for CLI display. It recognizes [`ScriptmetaError`]
/// variants and common [`std::io::Error`] kinds; anything else falls through
/// with its own message.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(scriptmeta_error) = error.downcast_ref::<ScriptmetaError>() {
        return create_error_context(scriptmeta_error);
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(ScriptmetaError::FileSystemError {
                    operation: "read".to_string(),
                    path: "unknown".to_string(),
                })
                .with_suggestion("Check that the script file exists and the path is correct");
            }
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(ScriptmetaError::FileSystemError {
                    operation: "read".to_string(),
                    path: "unknown".to_string(),
                })
                .with_suggestion("Check the file's ownership and read permissions");
            }
            _ => {}
        }
    }

    ErrorContext::new(ScriptmetaError::Other {
        message: format!("{error:#}"),
    })
}

/// Build an [`ErrorContext`] with suggestions tailored to each error variant.
fn create_error_context(error: &ScriptmetaError) -> ErrorContext {
    match error {
        ScriptmetaError::MultipleBlocks { block_type, blocks } => {
            let details = blocks
                .iter()
                .enumerate()
                .map(|(i, block)| format!("block {}:\n{}", i + 1, block.trim_end()))
                .collect::<Vec<_>>()
                .join("\n");
            let suggestion = format!(
                "Keep a single '{block_type}' block; remove or merge the duplicates"
            );
            ErrorContext::new(error.clone())
                .with_details(details)
                .with_suggestion(suggestion)
        }
        ScriptmetaError::MetadataParse { source, .. } => {
            // Clone degrades this variant to Other, so the parser message is
            // carried explicitly in the details.
            ErrorContext::new(error.clone())
                .with_details(source.to_string())
                .with_suggestion("Fix the TOML syntax between the '# ///' markers")
        }
        ScriptmetaError::FileSystemError { path, .. } => {
            let suggestion = format!("Check that '{path}' exists and is readable");
            ErrorContext::new(error.clone()).with_suggestion(suggestion)
        }
        _ => ErrorContext::new(error.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiple_blocks_display() {
        let error = ScriptmetaError::MultipleBlocks {
            block_type: "script".to_string(),
            blocks: vec!["# a = 1\n".to_string(), "# b = 2\n".to_string()],
        };

        assert_eq!(
            error.to_string(),
            "multiple 'script' metadata blocks found (2)"
        );
    }

    #[test]
    fn test_metadata_parse_preserves_source() {
        let parse_error = "not == toml".parse::<toml::Table>().unwrap_err();
        let error = ScriptmetaError::MetadataParse {
            block_type: "script".to_string(),
            source: parse_error,
        };

        assert!(std::error::Error::source(&error).is_some());
        assert!(error.to_string().contains("invalid TOML"));
    }

    #[test]
    fn test_user_friendly_error_multiple_blocks() {
        let error = ScriptmetaError::MultipleBlocks {
            block_type: "script".to_string(),
            blocks: vec!["# a = 1\n".to_string(), "# b = 2\n".to_string()],
        };

        let ctx = user_friendly_error(anyhow::Error::from(error));
        let details = ctx.details.expect("details should list the blocks");
        assert!(details.contains("block 1:"));
        assert!(details.contains("# b = 2"));
        assert!(ctx.suggestion.is_some());
    }

    #[test]
    fn test_user_friendly_error_io_not_found() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let ctx = user_friendly_error(anyhow::Error::from(io_error));

        assert!(matches!(
            ctx.error,
            ScriptmetaError::FileSystemError { .. }
        ));
        assert!(ctx.suggestion.is_some());
    }

    #[test]
    fn test_error_context_display_format() {
        let ctx = ErrorContext::new(ScriptmetaError::Other {
            message: "something failed".to_string(),
        })
        .with_details("more context")
        .with_suggestion("try again differently");

        let rendered = ctx.to_string();
        assert!(rendered.contains("something failed"));
        assert!(rendered.contains("Details: more context"));
        assert!(rendered.contains("Suggestion: try again differently"));
    }

    #[test]
    fn test_clone_converts_io_error() {
        let error = ScriptmetaError::IoError(std::io::Error::other("boom"));
        let cloned = error.clone();

        assert!(matches!(cloned, ScriptmetaError::Other { .. }));
        assert!(cloned.to_string().contains("boom"));
    }
}
