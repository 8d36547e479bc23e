//! CUIL (tax identifier) extraction.

use super::patterns::{CUIL_DASHED, CUIL_LABELED};
use super::{ExtractionMatch, FieldExtractor};

/// CUIL field extractor. Emits the canonical dashed form NN-NNNNNNNN-N.
pub struct TaxIdExtractor;

impl TaxIdExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TaxIdExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for TaxIdExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = Vec::new();

        // Dashed shape first: it needs no label.
        for caps in CUIL_DASHED.captures_iter(text) {
            let cuil = format!("{}-{}-{}", &caps[1], &caps[2], &caps[3]);
            let full = caps.get(0).unwrap();
            results.push(
                ExtractionMatch::new(cuil, full.as_str())
                    .with_position(full.start(), full.end()),
            );
        }

        // Labeled 11-digit run, reformatted into the dashed shape.
        for caps in CUIL_LABELED.captures_iter(text) {
            let cuil = format_tax_id(&caps[1]);

            if results.iter().any(|r| r.value == cuil) {
                continue;
            }

            let full = caps.get(0).unwrap();
            results.push(
                ExtractionMatch::new(cuil, full.as_str())
                    .with_position(full.start(), full.end()),
            );
        }

        results
    }
}

/// Extract the first CUIL from text in canonical dashed form.
pub fn extract_tax_id(text: &str) -> Option<String> {
    TaxIdExtractor::new().extract(text).map(|m| m.value)
}

/// Format an 11-digit CUIL as NN-NNNNNNNN-N. Anything else passes through.
pub fn format_tax_id(cuil: &str) -> String {
    let digits: String = cuil.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() != 11 {
        return cuil.to_string();
    }

    format!("{}-{}-{}", &digits[0..2], &digits[2..10], &digits[10..11])
}
