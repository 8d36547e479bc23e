//! Error types for the dniscan-core library.

use thiserror::Error;

/// Main error type for the dniscan library.
#[derive(Error, Debug)]
pub enum DniScanError {
    /// DNI field extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to DNI field extraction.
///
/// Individual field misses are not errors: they leave the field unset on the
/// record. Only an unusable input text is fatal to a call.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// The OCR text is empty or contained nothing but recognition noise.
    #[error("OCR text is empty")]
    EmptyText,
}

/// Result type for the dniscan library.
pub type Result<T> = std::result::Result<T, DniScanError>;
