//! Birth-date extraction.
//!
//! Two passes: the front of a DNI prints the birth date next to its
//! bilingual label with a redundant month abbreviation ("15 MAR / MAR 1985"),
//! so a labeled lettered-date pass runs first. Degraded scans fall back to a
//! whole-text numeric pass gated by a birth-year plausibility window that
//! keeps issue and expiry dates out.

use tracing::debug;

use super::patterns::{BIRTH_DATE_KEYWORDS, DATE_LETTERED, DATE_NUMERIC};
use super::{ExtractionMatch, FieldExtractor};

/// Birth-date field extractor. Emits dd/mm/yyyy.
pub struct BirthDateExtractor {
    year_min: i32,
    year_max: i32,
}

impl BirthDateExtractor {
    pub fn new() -> Self {
        Self {
            year_min: 1900,
            year_max: 2010,
        }
    }

    /// Set the plausible birth-year window for numeric candidates.
    pub fn with_year_window(mut self, min: i32, max: i32) -> Self {
        self.year_min = min;
        self.year_max = max;
        self
    }

    /// Pass 1: lettered date on a labeled line, or wrapped onto the next one.
    fn extract_labeled(&self, text: &str) -> Option<ExtractionMatch<String>> {
        let lines: Vec<&str> = text.lines().collect();

        for (i, line) in lines.iter().enumerate() {
            let upper = line.to_ascii_uppercase();
            if !BIRTH_DATE_KEYWORDS.iter().any(|k| upper.contains(k)) {
                continue;
            }

            let mut search = upper;
            if let Some(next) = lines.get(i + 1) {
                search.push(' ');
                search.push_str(&next.to_ascii_uppercase());
            }

            for caps in DATE_LETTERED.captures_iter(&search) {
                if let Some(month) = month_abbrev_to_number(&caps[2]) {
                    let value = format!("{}/{:02}/{}", &caps[1], month, &caps[3]);
                    debug!("lettered birth date found: {}", value);
                    return Some(ExtractionMatch::new(value, caps.get(0).unwrap().as_str()));
                }
            }
        }

        None
    }

    /// Pass 2: first numeric date in the whole text whose day, month and
    /// year pass the plausibility checks.
    fn extract_numeric(&self, text: &str) -> Option<ExtractionMatch<String>> {
        self.numeric_candidates(text).into_iter().next()
    }

    fn numeric_candidates(&self, text: &str) -> Vec<ExtractionMatch<String>> {
        let mut results = Vec::new();

        for caps in DATE_NUMERIC.captures_iter(text) {
            let day: u32 = caps[1].parse().unwrap_or(0);
            let month: u32 = caps[2].parse().unwrap_or(0);
            let year: i32 = caps[3].parse().unwrap_or(0);

            if (1..=31).contains(&day)
                && (1..=12).contains(&month)
                && (self.year_min..=self.year_max).contains(&year)
            {
                let full = caps.get(0).unwrap();
                let value = format!("{}/{}/{}", &caps[1], &caps[2], &caps[3]);
                debug!("numeric birth date found: {}", value);
                results.push(
                    ExtractionMatch::new(value, full.as_str())
                        .with_position(full.start(), full.end()),
                );
            }
        }

        results
    }
}

impl Default for BirthDateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for BirthDateExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_labeled(text)
            .or_else(|| self.extract_numeric(text))
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = Vec::new();
        if let Some(labeled) = self.extract_labeled(text) {
            results.push(labeled);
        }
        results.extend(self.numeric_candidates(text));
        results
    }
}

/// Extract the birth date with the default year window.
pub fn extract_birth_date(text: &str) -> Option<String> {
    BirthDateExtractor::new().extract(text).map(|m| m.value)
}

/// Spanish/English three-letter month abbreviation to month number.
fn month_abbrev_to_number(abbrev: &str) -> Option<u32> {
    match abbrev.to_ascii_uppercase().as_str() {
        "ENE" | "JAN" => Some(1),
        "FEB" => Some(2),
        "MAR" => Some(3),
        "ABR" | "APR" => Some(4),
        "MAY" => Some(5),
        "JUN" => Some(6),
        "JUL" => Some(7),
        "AGO" | "AUG" => Some(8),
        "SEP" => Some(9),
        "OCT" => Some(10),
        "NOV" => Some(11),
        "DIC" | "DEC" => Some(12),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lettered_date_on_label_line() {
        let text = "FECHA DE NACIMIENTO 15 MAR / MAR 1985\n12345678";
        assert_eq!(extract_birth_date(text), Some("15/03/1985".to_string()));
    }

    #[test]
    fn test_lettered_date_wrapped_to_next_line() {
        let text = "Fecha de nacimiento / Date of birth\n05 NOV/ NOV 2001";
        assert_eq!(extract_birth_date(text), Some("05/11/2001".to_string()));
    }

    #[test]
    fn test_unknown_month_abbrev_falls_back() {
        // "XYZ" resolves no month, but the numeric date elsewhere does.
        let text = "FECHA DE NACIMIENTO 15 XYZ / XYZ 1985\n22/07/1990";
        assert_eq!(extract_birth_date(text), Some("22/07/1990".to_string()));
    }

    #[test]
    fn test_numeric_fallback_without_label() {
        assert_eq!(
            extract_birth_date("PEREZ\n15/03/1985"),
            Some("15/03/1985".to_string())
        );
        // Dash-separated dates are canonicalized to slashes.
        assert_eq!(
            extract_birth_date("PEREZ\n15-03-1985"),
            Some("15/03/1985".to_string())
        );
    }

    #[test]
    fn test_numeric_rejects_implausible_components() {
        assert_eq!(extract_birth_date("45/03/1985"), None);
        assert_eq!(extract_birth_date("15/13/1985"), None);
        // Outside the birth-year window: issue/expiry dates.
        assert_eq!(extract_birth_date("15/03/2020"), None);
        assert_eq!(extract_birth_date("15/03/1890"), None);
    }

    #[test]
    fn test_first_plausible_numeric_wins() {
        let text = "emitido 10/06/2019\nnacido 15/03/1985";
        // 2019 is outside the window, so the second date is the birth date.
        assert_eq!(extract_birth_date(text), Some("15/03/1985".to_string()));
    }

    #[test]
    fn test_custom_year_window() {
        let extractor = BirthDateExtractor::new().with_year_window(1900, 2024);
        assert_eq!(
            extractor.extract("15/03/2020").map(|m| m.value),
            Some("15/03/2020".to_string())
        );
    }

    #[test]
    fn test_lettered_preferred_over_numeric() {
        let text = "FECHA DE NACIMIENTO 15 MAR / MAR 1985\nvto 10/06/2009";
        assert_eq!(extract_birth_date(text), Some("15/03/1985".to_string()));
    }
}
