//! Common regex patterns and keyword vocabulary for DNI extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// 7-8 digit ID number, optionally dot-grouped in thousands
    /// (12.345.678 or 12345678).
    pub static ref ID_NUMBER: Regex = Regex::new(
        r"\b(\d{1,3}\.?\d{3}\.?\d{3}|\d{7,8})\b"
    ).unwrap();

    /// Bilingual lettered date as printed on the front, e.g. "15 MAR / MAR 1985".
    pub static ref DATE_LETTERED: Regex = Regex::new(
        r"\b(\d{2})\s+([A-Z]{3})[/\s]+[A-Z]{3}\s+(\d{4})\b"
    ).unwrap();

    /// Numeric date: dd/mm/yyyy or dd-mm-yyyy.
    pub static ref DATE_NUMERIC: Regex = Regex::new(
        r"\b(\d{2})[/-](\d{2})[/-](\d{4})\b"
    ).unwrap();

    /// Dashed CUIL: 2 digits, 7-8 digits, check digit.
    pub static ref CUIL_DASHED: Regex = Regex::new(
        r"\b(\d{2})\s*-\s*(\d{7,8})\s*-\s*(\d)\b"
    ).unwrap();

    /// Labeled undashed CUIL: an 11-digit run after the CUIL label.
    pub static ref CUIL_LABELED: Regex = Regex::new(
        r"(?i)CUIL[:\s]*(\d{11})"
    ).unwrap();

    /// A name token sequence: letters, Spanish accents, hyphens.
    pub static ref NAME_CHARS: Regex = Regex::new(
        r"^[a-zA-ZáéíóúÁÉÍÓÚñÑüÜ\s-]+$"
    ).unwrap();
}

/// Surname field labels, Spanish first.
pub const SURNAME_KEYWORDS: [&str; 2] = ["APELLIDO", "SURNAME"];

/// Given-name field labels, Spanish first.
pub const GIVEN_NAME_KEYWORDS: [&str; 2] = ["NOMBRE", "NAME"];

/// Birth-date field labels.
pub const BIRTH_DATE_KEYWORDS: [&str; 2] = ["FECHA DE NACIMIENTO", "DATE OF BIRTH"];

/// Birthplace field labels, longest variant first so shorter ones never
/// truncate a longer match on the same line.
pub const BIRTHPLACE_KEYWORDS: [&str; 3] =
    ["LUGAR DE NACIMIENTO", "LUGAR NACIMIENTO", "LUGAR NAC"];

/// Words that disqualify a line as a name candidate: field labels plus
/// document boilerplate printed on every DNI.
pub const NAME_STOPWORDS: [&str; 19] = [
    "APELLIDO", "SURNAME", "NOMBRE", "NAME",
    "FECHA", "NACIMIENTO", "BIRTH", "DOMICILIO", "LUGAR", "CUIL",
    "REPUBLICA", "ARGENTINA", "DOCUMENTO", "NACIONAL", "IDENTIDAD",
    "DNI", "SEXO", "NACIONALIDAD", "EJEMPLAR",
];

/// Back-side markers that end a domicile: other fields and the signature
/// and fingerprint captions.
pub const BACK_STOPWORDS: [&str; 5] =
    ["LUGAR", "NACIMIENTO", "CUIL", "MINISTRO", "PULGAR"];
