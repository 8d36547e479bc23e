//! Given-name and surname extraction.
//!
//! Strategy chain per field: keyword-anchored same-line value, then the line
//! below the keyword, and as a last resort a whole-text heuristic that picks
//! the first lines looking like bare name sequences. The first success wins.

use tracing::{debug, info};

use super::patterns::{GIVEN_NAME_KEYWORDS, NAME_CHARS, NAME_STOPWORDS, SURNAME_KEYWORDS};
use super::title_case;

/// Name fields recovered from the front side.
#[derive(Debug, Clone, Default)]
pub struct NameFields {
    pub surname: Option<String>,
    pub given_name: Option<String>,
}

/// Extract surname and given name from normalized front-side text.
pub fn extract_names(text: &str) -> NameFields {
    let lines: Vec<&str> = text.lines().collect();
    let mut fields = NameFields::default();

    for (i, line) in lines.iter().enumerate() {
        let upper = line.to_ascii_uppercase();
        let next_line = lines.get(i + 1).copied();

        let is_surname_line = SURNAME_KEYWORDS.iter().any(|k| upper.contains(k));

        if fields.surname.is_none() && is_surname_line {
            fields.surname = value_for_keyword(line, &upper, &SURNAME_KEYWORDS, next_line);
            if let Some(surname) = &fields.surname {
                debug!("surname anchored at line {}: {}", i, surname);
            }
        }

        // "SURNAME" contains "NAME", so a surname header line must never
        // feed the given-name branch.
        if fields.given_name.is_none()
            && !is_surname_line
            && GIVEN_NAME_KEYWORDS.iter().any(|k| upper.contains(k))
        {
            fields.given_name = value_for_keyword(line, &upper, &GIVEN_NAME_KEYWORDS, next_line);
            if let Some(given) = &fields.given_name {
                debug!("given name anchored at line {}: {}", i, given);
            }
        }
    }

    if fields.surname.is_none() && fields.given_name.is_none() {
        info!("no keyword-anchored names, trying line heuristic");
        heuristic_names(&lines, &mut fields);
    }

    fields
}

/// Value for one keyword on `line`: trailing same-line text first, else the
/// following line when it stands alone as a name.
fn value_for_keyword(
    line: &str,
    upper: &str,
    keywords: &[&str],
    next_line: Option<&str>,
) -> Option<String> {
    for keyword in keywords {
        if let Some(idx) = upper.find(keyword) {
            if let Some(value) = same_line_value(line, idx + keyword.len(), keywords) {
                return Some(title_case(&value));
            }
        }
    }

    let next = next_line?.trim();
    if !next.is_empty() && is_valid_name(next) && !contains_stopword(next) {
        return Some(title_case(next));
    }

    None
}

/// Trailing text of a keyword line, with the separator and the bilingual
/// counterpart label stripped ("Apellido / Surname PEREZ" -> "PEREZ").
fn same_line_value(line: &str, after_idx: usize, keywords: &[&str]) -> Option<String> {
    let mut rest = line[after_idx..].trim_start();

    if let Some(stripped) = rest.strip_prefix('/') {
        rest = stripped.trim_start();
    }

    if let Some(first_word) = rest.split_whitespace().next() {
        if keywords.iter().any(|k| first_word.eq_ignore_ascii_case(k)) {
            rest = rest[first_word.len()..].trim_start();
        }
    }

    let rest = rest.trim();
    if !rest.is_empty() && is_valid_name(rest) {
        Some(rest.to_string())
    } else {
        None
    }
}

/// Keyword-free fallback: the first line that reads like a bare name becomes
/// the surname, the next distinct one the given name.
fn heuristic_names(lines: &[&str], fields: &mut NameFields) {
    for line in lines {
        if line.chars().count() <= 3 || !is_valid_name(line) || contains_stopword(line) {
            continue;
        }

        if fields.surname.is_none() {
            fields.surname = Some(title_case(line));
            debug!("surname by heuristic: {}", line);
            continue;
        }

        if fields.given_name.is_none() {
            let candidate = title_case(line);
            if fields.surname.as_deref() != Some(candidate.as_str()) {
                debug!("given name by heuristic: {}", line);
                fields.given_name = Some(candidate);
                break;
            }
        }
    }
}

/// A plausible name token sequence: letters, Spanish accents and hyphens
/// only, one to six words, each word at least two characters.
pub fn is_valid_name(text: &str) -> bool {
    if text.chars().count() < 2 || !NAME_CHARS.is_match(text) {
        return false;
    }

    let words: Vec<&str> = text.split_whitespace().collect();
    (1..=6).contains(&words.len()) && words.iter().all(|w| w.chars().count() >= 2)
}

fn contains_stopword(text: &str) -> bool {
    let upper = text.to_ascii_uppercase();
    NAME_STOPWORDS.iter().any(|k| upper.contains(k))
}
