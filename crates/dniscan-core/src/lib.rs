//! Core library for Argentine DNI OCR text processing.
//!
//! This crate provides:
//! - Line-oriented normalization of raw OCR text
//! - Front-side field extraction (ID number, birth date, given name, surname)
//! - Back-side field extraction (CUIL, domicile, birthplace)
//! - A scanner merging both sides into one structured record
//!
//! The OCR engine itself is an external collaborator: this crate consumes
//! the text it produces, one newline-delimited string per document side.

pub mod dni;
pub mod error;
pub mod models;
pub mod text;

pub use dni::{BackParser, DniScanner, FrontParser};
pub use error::{DniScanError, ExtractionError, Result};
pub use models::config::{ExtractionConfig, ScanConfig};
pub use models::record::DniRecord;
pub use text::{normalize_back, normalize_front, NormalizedText};
