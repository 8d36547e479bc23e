//! Configuration structures for the scan pipeline.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::DniScanError;

/// Main configuration for the dniscan pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Field extraction configuration.
    pub extraction: ExtractionConfig,
}

/// Field extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Earliest plausible birth year for numeric date candidates.
    pub birth_year_min: i32,

    /// Latest plausible birth year for numeric date candidates.
    pub birth_year_max: i32,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            birth_year_min: 1900,
            birth_year_max: 2010,
        }
    }
}

impl ScanConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, DniScanError> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| DniScanError::Config(e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), DniScanError> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| DniScanError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
