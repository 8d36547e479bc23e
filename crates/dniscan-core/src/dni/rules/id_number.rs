//! National ID number extraction.

use tracing::debug;

use super::patterns::ID_NUMBER;
use super::{ExtractionMatch, FieldExtractor};

/// Bytes inspected before a digit run for date punctuation.
const WINDOW_BEFORE: usize = 3;
/// Bytes inspected after the start of a digit run for date punctuation.
const WINDOW_AFTER: usize = 15;

/// ID-number field extractor.
///
/// Scans for 7-8 digit runs (optionally dot-grouped) and rejects runs that
/// sit next to date punctuation, so the day/month/year digits of a printed
/// date are never mistaken for the document number.
pub struct IdNumberExtractor;

impl IdNumberExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for IdNumberExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for IdNumberExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = Vec::new();

        for caps in ID_NUMBER.captures_iter(text) {
            let digits = caps[1].replace('.', "");
            if digits.len() < 7 || digits.len() > 8 {
                continue;
            }

            let full = caps.get(0).unwrap();
            if near_date_punctuation(text, full.start()) {
                debug!("digit run {} rejected: date punctuation nearby", &caps[1]);
                continue;
            }

            results.push(
                ExtractionMatch::new(digits, full.as_str())
                    .with_position(full.start(), full.end()),
            );
        }

        results
    }
}

/// Extract the first accepted ID number from text, grouping dots stripped.
pub fn extract_id_number(text: &str) -> Option<String> {
    IdNumberExtractor::new().extract(text).map(|m| m.value)
}

/// True when the window from `WINDOW_BEFORE` bytes before to `WINDOW_AFTER`
/// bytes after `position` holds a `/` or `-` on the same line.
///
/// The window is clipped at line breaks: a date on an adjacent OCR line is
/// not context for this run. The 3/15 boundary values are empirical; leave
/// them alone without a reference corpus showing a regression.
fn near_date_punctuation(text: &str, position: usize) -> bool {
    let bytes = text.as_bytes();
    let start = position.saturating_sub(WINDOW_BEFORE);
    let end = usize::min(position + WINDOW_AFTER, bytes.len());

    for &b in bytes[start..position].iter().rev() {
        match b {
            b'\n' => break,
            b'/' | b'-' => return true,
            _ => {}
        }
    }
    for &b in &bytes[position..end] {
        match b {
            b'\n' => break,
            b'/' | b'-' => return true,
            _ => {}
        }
    }

    false
}
