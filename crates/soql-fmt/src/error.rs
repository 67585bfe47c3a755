//! Error types for the formatter.

use std::path::PathBuf;

use soql_parser_core::ParseError;

/// Errors that can occur while formatting an input.
#[derive(Debug, thiserror::Error)]
pub enum FmtError {
    /// Reading or writing a file failed.
    #[error("IO error on '{path}': {source}")]
    Io {
        /// The file involved.
        path: PathBuf,
        /// The underlying error.
        source: std::io::Error,
    },

    /// Reading standard input or writing standard output failed.
    #[error("IO error: {0}")]
    Stdio(#[from] std::io::Error),

    /// The input is not valid query text.
    #[error("{origin}: {source}")]
    Parse {
        /// Display name of the input (`<stdin>` or a path).
        origin: String,
        /// The parse failure.
        source: ParseError,
    },

    /// Serializing the tree failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for formatter operations.
pub type Result<T> = std::result::Result<T, FmtError>;
