//! Front-side field extraction: ID number, birth date, given name, surname.

use tracing::{debug, warn};

use crate::error::ExtractionError;
use crate::models::config::ExtractionConfig;
use crate::models::record::DniRecord;
use crate::text::NormalizedText;

use super::rules::{extract_names, BirthDateExtractor, FieldExtractor, IdNumberExtractor};
use super::Result;

/// Front-side parser.
///
/// Individual field misses leave the field unset; only an empty input is an
/// error. Holds nothing but configuration, so one instance can serve
/// concurrent calls.
pub struct FrontParser {
    config: ExtractionConfig,
}

impl FrontParser {
    /// Create a front parser with default settings.
    pub fn new() -> Self {
        Self {
            config: ExtractionConfig::default(),
        }
    }

    /// Set the extraction configuration.
    pub fn with_config(mut self, config: ExtractionConfig) -> Self {
        self.config = config;
        self
    }

    /// Parse the normalized front side into a fresh record.
    pub fn parse(&self, text: &NormalizedText) -> Result<DniRecord> {
        if text.is_empty() {
            return Err(ExtractionError::EmptyText);
        }

        let mut record = DniRecord::default();

        match IdNumberExtractor::new().extract(text.as_str()) {
            Some(m) => {
                debug!("ID number extracted: {}", m.value);
                record.id_number = Some(m.value);
            }
            None => warn!("could not extract ID number"),
        }

        let dates = BirthDateExtractor::new()
            .with_year_window(self.config.birth_year_min, self.config.birth_year_max);
        match dates.extract(text.as_str()) {
            Some(m) => {
                debug!("birth date extracted: {}", m.value);
                record.birth_date = Some(m.value);
            }
            None => warn!("could not extract birth date"),
        }

        let names = extract_names(text.as_str());
        if names.surname.is_none() && names.given_name.is_none() {
            warn!("could not extract surname or given name");
        }
        record.surname = names.surname;
        record.given_name = names.given_name;

        Ok(record)
    }
}

impl Default for FrontParser {
    fn default() -> Self {
        Self::new()
    }
}
