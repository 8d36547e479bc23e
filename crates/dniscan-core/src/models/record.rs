//! Structured record extracted from a DNI scan.

use serde::{Deserialize, Serialize};

/// Identity fields recovered from one document scan.
///
/// Every field is optional: an extraction shortfall leaves the field unset,
/// and unset fields are omitted from the serialized form. A populated field
/// always holds a cleaned value, never raw OCR text: names and places are
/// word-wise title-cased, `id_number` is digits only, `birth_date` is
/// `dd/mm/yyyy`, `tax_id` is `NN-NNNNNNNN-N`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DniRecord {
    /// Given name(s) from the front side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,

    /// Surname from the front side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,

    /// National ID number from the front side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_number: Option<String>,

    /// Birth date from the front side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,

    /// Domicile from the back side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Birthplace from the back side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthplace: Option<String>,

    /// CUIL tax identifier from the back side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
}

impl DniRecord {
    /// Serialized names of the fields extraction did not populate.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.given_name.is_none() {
            missing.push("givenName");
        }
        if self.surname.is_none() {
            missing.push("surname");
        }
        if self.id_number.is_none() {
            missing.push("idNumber");
        }
        if self.birth_date.is_none() {
            missing.push("birthDate");
        }
        if self.address.is_none() {
            missing.push("address");
        }
        if self.birthplace.is_none() {
            missing.push("birthplace");
        }
        if self.tax_id.is_none() {
            missing.push("taxId");
        }
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_absent_fields_omitted() {
        let record = DniRecord {
            surname: Some("Perez".to_string()),
            id_number: Some("12345678".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"surname":"Perez","idNumber":"12345678"}"#);
    }

    #[test]
    fn test_empty_record_serializes_empty() {
        let json = serde_json::to_string(&DniRecord::default()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_missing_fields() {
        let record = DniRecord {
            surname: Some("Perez".to_string()),
            ..Default::default()
        };

        let missing = record.missing_fields();
        assert!(!missing.contains(&"surname"));
        assert!(missing.contains(&"givenName"));
        assert!(missing.contains(&"taxId"));
    }
}
