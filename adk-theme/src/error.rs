//! Error types for adk-theme.
//!
//! Token derivation itself never fails: missing sections fall back to empty
//! maps or numeric defaults. Errors only surface while a raw theme document
//! is turned into a [`ThemeDescription`](crate::ThemeDescription).

use thiserror::Error;

/// Errors raised while reading a theme description.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// The document is not valid JSON or does not match the theme shape.
    #[error("Invalid theme description: {source}")]
    Parse {
        #[from]
        source: serde_json::Error,
    },

    /// The underlying reader failed before the document could be parsed.
    #[error("Failed to read theme description: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ThemeError>;
