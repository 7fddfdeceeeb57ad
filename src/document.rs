// SPDX-FileCopyrightText: 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Wire schema of the registration document.
//!
//! Field names and nesting mirror the registry API exactly. The registry
//! mixes snake_case with two camelCase names (`importRequest` on the
//! document, `participantInn` in the description), so those two carry
//! explicit renames.

use serde::{Deserialize, Serialize};

/// A document submitted to the registry for goods introduction.
///
/// Owned by the caller; the client only reads it to serialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub description: Description,
    pub doc_id: String,
    pub doc_status: String,
    pub doc_type: String,
    #[serde(rename = "importRequest")]
    pub import_request: bool,
    pub owner_inn: String,
    pub participant_inn: String,
    pub producer_inn: String,
    pub production_date: String,
    pub production_type: String,
    pub products: Vec<Product>,
    pub reg_date: String,
    pub reg_number: String,
}

/// Nested description block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Description {
    #[serde(rename = "participantInn")]
    pub participant_inn: String,
}

/// One product line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub certificate_document: String,
    pub certificate_document_date: String,
    pub certificate_document_number: String,
    pub owner_inn: String,
    pub producer_inn: String,
    pub production_date: String,
    pub tnved_code: String,
    pub uit_code: String,
    pub uitu_code: String,
}

/// Fully populated fixture used across the crate's tests.
#[cfg(test)]
pub(crate) fn sample_document() -> Document {
    Document {
        description: Description {
            participant_inn: "1234567890".to_string(),
        },
        doc_id: "doc123".to_string(),
        doc_status: "NEW".to_string(),
        doc_type: "LP_INTRODUCE_GOODS".to_string(),
        import_request: true,
        owner_inn: "1234567890".to_string(),
        participant_inn: "1234567890".to_string(),
        producer_inn: "1234567890".to_string(),
        production_date: "2020-01-23".to_string(),
        production_type: "OWN_PRODUCTION".to_string(),
        products: vec![Product {
            certificate_document: "CONFORMITY_CERTIFICATE".to_string(),
            certificate_document_date: "2020-01-23".to_string(),
            certificate_document_number: "cert123".to_string(),
            owner_inn: "1234567890".to_string(),
            producer_inn: "1234567890".to_string(),
            production_date: "2020-01-23".to_string(),
            tnved_code: "6401".to_string(),
            uit_code: "uit".to_string(),
            uitu_code: "uitu".to_string(),
        }],
        reg_date: "2020-01-23".to_string(),
        reg_number: "reg123".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names() {
        let json = serde_json::to_value(sample_document()).unwrap();

        assert_eq!(json["importRequest"], true);
        assert_eq!(json["description"]["participantInn"], "1234567890");
        assert_eq!(json["doc_type"], "LP_INTRODUCE_GOODS");
        assert_eq!(json["products"][0]["tnved_code"], "6401");
        assert_eq!(json["products"][0]["certificate_document_number"], "cert123");

        // The renamed fields must not also appear under their Rust names.
        assert!(json.get("import_request").is_none());
        assert!(json["description"].get("participant_inn").is_none());
    }

    #[test]
    fn test_json_round_trip() {
        let document = sample_document();
        let json = serde_json::to_string(&document).unwrap();
        let parsed: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, document);
    }
}
