//! Core types for scriptmeta.
//!
//! This module provides the foundation of the crate's error handling:
//! strongly-typed errors ([`ScriptmetaError`]) for precise handling in code,
//! and user-friendly contexts ([`ErrorContext`]) with actionable suggestions
//! for CLI users. See [`error`] for the full design.

pub mod error;

pub use error::{ErrorContext, ScriptmetaError, user_friendly_error};
