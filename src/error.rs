//! Error types for the booklet library

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the booklet library
#[derive(Error, Debug)]
pub enum Error {
    /// Page count is not a positive integer (or is too large to impose)
    #[error("Invalid page count: {0} (must be a positive integer)")]
    InvalidPageCount(i64),

    /// PDF processing error
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Invalid PDF (no pages)
    #[error("PDF has no pages: {}", .0.display())]
    EmptyPdf(PathBuf),

    /// Output path would overwrite the source document
    #[error("Output path is the same as the input: {}", .0.display())]
    OutputOverwritesInput(PathBuf),

    /// General error
    #[error("{0}")]
    General(String),
}
