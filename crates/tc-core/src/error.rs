//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `TcError` as one variant
//! via `From`.

use thiserror::Error;

/// The top-level error type for `tc-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum TcError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `tc-*` crates.
pub type TcResult<T> = Result<T, TcError>;
