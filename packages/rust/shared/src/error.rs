//! Error types for sends.
//!
//! Library crates use [`SendsError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Top-level error type for all sends operations.
#[derive(Debug, thiserror::Error)]
pub enum SendsError {
    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// Frontmatter or send-line parsing error.
    #[error("parse error: {message}")]
    Parse { message: String },

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Directory traversal failed part way through the content tree.
    #[error("error walking directory {path:?}: {source}")]
    Walk {
        path: PathBuf,
        source: walkdir::Error,
    },

    /// The `<site>/content/<type>` directory does not exist.
    #[error("content path does not exist: {}", path.display())]
    MissingContent { path: PathBuf },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, SendsError>;

impl SendsError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create a parse error from any displayable message.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse {
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Wrap a traversal error, keeping the entry it failed on when known.
    pub fn walk(root: impl Into<PathBuf>, source: walkdir::Error) -> Self {
        let path = source
            .path()
            .map(PathBuf::from)
            .unwrap_or_else(|| root.into());
        Self::Walk { path, source }
    }
}
