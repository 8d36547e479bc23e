//! OCR text normalization.
//!
//! The external recognition engine delivers one string per document side
//! with newline-delimited lines. Normalization cleans each line in place and
//! keeps the line structure, which later keyword anchoring depends on.

/// Cleaned, line-oriented OCR text.
///
/// Ephemeral intermediate value: built once per extraction call from one raw
/// OCR string, never cached or shared across calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText {
    text: String,
}

impl NormalizedText {
    /// The full normalized text, lines joined with `\n`.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Iterator over the normalized lines.
    pub fn lines(&self) -> std::str::Lines<'_> {
        self.text.lines()
    }

    /// True when nothing survived normalization.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Normalize front-side OCR text.
///
/// Besides whitespace cleanup this strips every character that is not a
/// letter, digit, whitespace, `/`, `.` or `-`: recognition noise glyphs go
/// away while punctuation meaningful to dates and ID numbers survives.
pub fn normalize_front(raw: &str) -> NormalizedText {
    normalize(raw, true)
}

/// Normalize back-side OCR text, keeping all characters.
pub fn normalize_back(raw: &str) -> NormalizedText {
    normalize(raw, false)
}

fn normalize(raw: &str, strip_noise: bool) -> NormalizedText {
    let mut lines = Vec::new();

    for line in raw.lines() {
        // Noise stripping happens before whitespace collapsing so the
        // operation is idempotent.
        let kept: String = if strip_noise {
            line.chars().filter(|c| !is_noise(*c)).collect()
        } else {
            line.to_string()
        };

        let collapsed = kept.split_whitespace().collect::<Vec<_>>().join(" ");
        if !collapsed.is_empty() {
            lines.push(collapsed);
        }
    }

    NormalizedText {
        text: lines.join("\n"),
    }
}

fn is_noise(c: char) -> bool {
    !(c.is_alphanumeric() || c.is_whitespace() || matches!(c, '/' | '.' | '-'))
}
