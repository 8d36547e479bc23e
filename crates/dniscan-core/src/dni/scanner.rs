//! Record aggregation across document sides.

use tracing::info;

use crate::models::config::ScanConfig;
use crate::models::record::DniRecord;
use crate::text::{normalize_back, normalize_front};

use super::back::BackParser;
use super::front::FrontParser;
use super::Result;

/// Aggregates front and back extraction into one record.
///
/// Stateless across calls: a single scanner may be shared freely between
/// threads, and nothing from one document leaks into the next.
pub struct DniScanner {
    front: FrontParser,
    back: BackParser,
}

impl DniScanner {
    /// Create a scanner with default settings.
    pub fn new() -> Self {
        Self {
            front: FrontParser::new(),
            back: BackParser::new(),
        }
    }

    /// Create a scanner from a configuration.
    pub fn with_config(config: &ScanConfig) -> Self {
        Self {
            front: FrontParser::new().with_config(config.extraction.clone()),
            back: BackParser::new(),
        }
    }

    /// Extract a structured record from front-side OCR text, augmented with
    /// back-side fields when `back_text` is supplied.
    ///
    /// Only an unusable front side is an error. Back-side shortfalls are
    /// logged and ignored: a malformed back side never invalidates
    /// already-extracted front-side data.
    pub fn process(&self, front_text: &str, back_text: Option<&str>) -> Result<DniRecord> {
        info!("scanning front side ({} chars)", front_text.len());
        let front = normalize_front(front_text);
        let mut record = self.front.parse(&front)?;

        match back_text {
            Some(back) if !back.trim().is_empty() => {
                info!("scanning back side ({} chars)", back.len());
                let back = normalize_back(back);
                self.back.parse(&back, &mut record);
            }
            _ => info!("no back side supplied, returning front-only record"),
        }

        info!(
            "scan complete, {} of 7 fields extracted",
            7 - record.missing_fields().len()
        );
        Ok(record)
    }
}

impl Default for DniScanner {
    fn default() -> Self {
        Self::new()
    }
}
