//! Export error types.

use thiserror::Error;

/// Errors raised while persisting or reading back exported artifacts.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Creating or writing an artifact file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A CSV line could not be parsed.
    #[error("CSV parse error at line {line}: {message}")]
    Parse { line: usize, message: String },
}

/// Result type alias using [`ExportError`].
pub type Result<T> = std::result::Result<T, ExportError>;
