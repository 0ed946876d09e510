use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, ExportError>;

/// Error type covering the different failure cases that can occur when the
/// export pipeline loads, flattens, or encodes a project tree.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Wrapper for IO failures such as reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raised when the assembled project tree fails to parse.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Errors bubbled up from the workbook encoder.
    #[error("Excel encoding error: {0}")]
    Encoding(#[from] rust_xlsxwriter::XlsxError),

    /// Raised when a required project field is missing or empty. Nothing is
    /// built when this fires.
    #[error("invalid project record: required field '{0}' is empty")]
    InvalidInput(&'static str),

    /// Raised when the user provides a path that does not exist.
    #[error("input file not found: {0}")]
    MissingInput(PathBuf),

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
