//! DNI field extraction module.

mod back;
mod front;
mod scanner;
pub mod rules;

pub use back::BackParser;
pub use front::FrontParser;
pub use scanner::DniScanner;

use crate::error::ExtractionError;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;
