//! Error types for html-insert.
//!
//! This module defines the error types returned by insertion operations.

/// Error type for insertion operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// CSS selector failed to parse.
    #[error("selector parse failed: {0}")]
    Selector(String),

    /// An `insert` value could not be rendered as valid markup.
    #[error("invalid insert node: {0}")]
    Insertion(String),

    /// Options JSON was malformed.
    #[error("invalid insertion config: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type alias for insertion operations.
pub type Result<T> = std::result::Result<T, Error>;
