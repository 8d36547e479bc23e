//! Back-side field extraction: tax ID, domicile, birthplace.

use tracing::{debug, warn};

use crate::models::record::DniRecord;
use crate::text::NormalizedText;

use super::rules::patterns::{BACK_STOPWORDS, BIRTHPLACE_KEYWORDS};
use super::rules::{title_case, FieldExtractor, TaxIdExtractor};

/// Back-side parser.
///
/// Everything here is best-effort: the three sub-extractions are
/// independent, a miss leaves the record untouched, and the API is
/// infallible so a bad back side can never taint front-side results.
pub struct BackParser;

impl BackParser {
    pub fn new() -> Self {
        Self
    }

    /// Augment `record` with back-side fields.
    pub fn parse(&self, text: &NormalizedText, record: &mut DniRecord) {
        if text.is_empty() {
            warn!("back-side OCR text is empty, skipping");
            return;
        }

        match TaxIdExtractor::new().extract(text.as_str()) {
            Some(m) => {
                debug!("tax ID extracted: {}", m.value);
                record.tax_id = Some(m.value);
            }
            None => warn!("could not extract tax ID"),
        }

        match extract_domicile(text) {
            Some(address) => {
                debug!("domicile extracted: {}", address);
                record.address = Some(address);
            }
            None => warn!("could not extract domicile"),
        }

        match extract_birthplace(text) {
            Some(place) => {
                debug!("birthplace extracted: {}", place);
                record.birthplace = Some(place);
            }
            None => warn!("could not extract birthplace"),
        }
    }
}

impl Default for BackParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Domicile: trailing text of the DOMICILIO line, rejoined with its
/// continuation line when OCR wrapped the address.
fn extract_domicile(text: &NormalizedText) -> Option<String> {
    let lines: Vec<&str> = text.lines().collect();

    for (i, line) in lines.iter().enumerate() {
        let upper = line.to_ascii_uppercase();
        let Some(idx) = upper.find("DOMICILIO") else {
            continue;
        };

        let mut value = strip_label(line, idx + "DOMICILIO".len()).to_string();

        if let Some(next) = lines.get(i + 1) {
            if !value.is_empty() && is_continuation(next) {
                // A trailing hyphen is an OCR line break inside the address.
                if value.ends_with('-') {
                    value.pop();
                }
                value.push(' ');
                value.push_str(next.trim());
            }
        }

        if value.chars().count() > 5 {
            return Some(title_case(&value));
        }
    }

    None
}

/// A line qualifies as a domicile continuation when it is long enough and is
/// not another back-side field or caption.
fn is_continuation(line: &str) -> bool {
    let upper = line.to_ascii_uppercase();
    line.chars().count() > 5 && !BACK_STOPWORDS.iter().any(|k| upper.contains(k))
}

/// Birthplace: trailing text of a LUGAR DE NACIMIENTO line, or the whole
/// next line when the label stands alone.
fn extract_birthplace(text: &NormalizedText) -> Option<String> {
    let lines: Vec<&str> = text.lines().collect();

    for (i, line) in lines.iter().enumerate() {
        let upper = line.to_ascii_uppercase();
        let Some((label, idx)) = BIRTHPLACE_KEYWORDS
            .iter()
            .find_map(|label| upper.find(label).map(|idx| (*label, idx)))
        else {
            continue;
        };

        let after = strip_label(line, idx + label.len());
        if after.chars().count() > 2 {
            return Some(title_case(after));
        }

        if let Some(next) = lines.get(i + 1) {
            let next = next.trim();
            if next.chars().count() > 2 {
                return Some(title_case(next));
            }
        }
    }

    None
}

/// Text following a field label, with the separating colon and spaces gone.
fn strip_label(line: &str, after_idx: usize) -> &str {
    line[after_idx..]
        .trim_start_matches([':', ' '])
        .trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::normalize_back;
    use pretty_assertions::assert_eq;

    fn parse(raw: &str) -> DniRecord {
        let mut record = DniRecord::default();
        BackParser::new().parse(&normalize_back(raw), &mut record);
        record
    }

    #[test]
    fn test_parse_full_back() {
        let record = parse(
            "DOMICILIO: AV SIEMPREVIVA 742\nCUIL 20-12345678-1\nLUGAR DE NACIMIENTO\nBUENOS AIRES",
        );

        assert_eq!(record.address.as_deref(), Some("Av Siempreviva 742"));
        assert_eq!(record.tax_id.as_deref(), Some("20-12345678-1"));
        assert_eq!(record.birthplace.as_deref(), Some("Buenos Aires"));
    }

    #[test]
    fn test_domicile_rejoins_hyphen_wrapped_address() {
        let record = parse("DOMICILIO: CALLE LAS HERAS 1SO-\n PISO 3 DEPTO B\nCUIL 20-12345678-1");
        assert_eq!(
            record.address.as_deref(),
            Some("Calle Las Heras 1so Piso 3 Depto B")
        );
    }

    #[test]
    fn test_domicile_continuation_stops_at_next_field() {
        let record = parse("DOMICILIO: AV RIVADAVIA 1500\nLUGAR DE NACIMIENTO: ROSARIO");
        assert_eq!(record.address.as_deref(), Some("Av Rivadavia 1500"));
        assert_eq!(record.birthplace.as_deref(), Some("Rosario"));
    }

    #[test]
    fn test_domicile_requires_same_line_text() {
        let record = parse("DOMICILIO\nCUIL 20-12345678-1");
        assert_eq!(record.address, None);
    }

    #[test]
    fn test_birthplace_same_line() {
        let record = parse("LUGAR NACIMIENTO: CORDOBA");
        assert_eq!(record.birthplace.as_deref(), Some("Cordoba"));
    }

    #[test]
    fn test_birthplace_short_variant() {
        let record = parse("LUGAR NAC: MAR DEL PLATA");
        assert_eq!(record.birthplace.as_deref(), Some("Mar Del Plata"));
    }

    #[test]
    fn test_birthplace_ignores_too_short_values() {
        let record = parse("LUGAR DE NACIMIENTO: BA\nX");
        assert_eq!(record.birthplace, None);
    }

    #[test]
    fn test_undashed_labeled_cuil() {
        let record = parse("CUIL: 20123456781");
        assert_eq!(record.tax_id.as_deref(), Some("20-12345678-1"));
    }

    #[test]
    fn test_empty_back_leaves_record_unchanged() {
        let mut record = DniRecord {
            surname: Some("Perez".to_string()),
            ..Default::default()
        };
        BackParser::new().parse(&normalize_back("   \n  "), &mut record);

        assert_eq!(record.surname.as_deref(), Some("Perez"));
        assert_eq!(record.address, None);
    }

    #[test]
    fn test_garbage_back_extracts_nothing() {
        let record = parse("%%% ??? !!!\nzzz");
        assert_eq!(record, DniRecord::default());
    }
}
