//! # Error Types
//!
//! Failure taxonomy for the configuration engine.
//!
//! Per-field conditions are deliberately NOT errors: an absent key triggers
//! the default fallback for that field, and a type-mismatched value is
//! coerced best-effort (see `store::coerce`). Only document-level and
//! backend-level failures surface here.

use thiserror::Error;

/// Errors that can occur while loading or persisting a configuration.
///
/// - No silent failures
/// - The ENGINE never panics on runtime input; all errors are recoverable
/// - A failed `load`/`from_json` leaves the store entirely untouched
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The backend resource is missing or unreadable.
    #[error("config resource unavailable: {0}")]
    BackendUnavailable(String),

    /// The document could not be parsed as a JSON object.
    /// This is all-or-nothing at the document level.
    #[error("malformed config document: {0}")]
    MalformedDocument(String),

    /// The backend rejected the whole-resource write.
    #[error("config write failed: {0}")]
    BackendWriteFailure(String),
}
