//! Registry Wire Types
//!
//! Document and request envelope types serialized for the CRPT registry.
//! Field names are camelCase on the wire, matching the registry's
//! schema. The core enforces no invariants on document contents;
//! validation is the registry's concern.

use serde::{Deserialize, Serialize};

/// A product document to be registered
///
/// Opaque to the admission core: string and boolean fields passed
/// through to the registry as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// INN of the participant
    pub participant_inn: String,

    /// Document identifier
    pub doc_id: String,

    /// INN of the owner
    pub owner_inn: String,

    /// INN of the producer
    pub producer_inn: String,

    /// Production date (YYYY-MM-DD)
    pub production_date: String,

    /// Document type code
    pub doc_type: String,

    /// Whether this is an import request
    pub import_request: bool,
}

/// Envelope sent to the registry: the document plus its signature
///
/// Built per `submit()` call and discarded after the call completes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionRequest {
    /// The document being registered
    pub description: Document,

    /// Detached signature over the document
    pub signature: String,
}

impl SubmissionRequest {
    /// Create a new submission request
    pub fn new(document: Document, signature: impl Into<String>) -> Self {
        Self {
            description: document,
            signature: signature.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_document() -> Document {
        Document {
            participant_inn: "9999999999".to_string(),
            doc_id: "333".to_string(),
            owner_inn: "7700000000".to_string(),
            producer_inn: "7800000000".to_string(),
            production_date: "2024-05-01".to_string(),
            doc_type: "ProductDescription".to_string(),
            import_request: true,
        }
    }

    #[test]
    fn test_document_wire_casing() {
        let json = serde_json::to_value(sample_document()).unwrap();
        let obj = json.as_object().unwrap();

        for key in [
            "participantInn",
            "docId",
            "ownerInn",
            "producerInn",
            "productionDate",
            "docType",
            "importRequest",
        ] {
            assert!(obj.contains_key(key), "missing wire field {key}");
        }
    }

    #[test]
    fn test_request_envelope_shape() {
        let request = SubmissionRequest::new(sample_document(), "sig-value");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["signature"], "sig-value");
        assert_eq!(json["description"]["docId"], "333");
        assert_eq!(json["description"]["importRequest"], true);
    }

    #[test]
    fn test_request_round_trip() {
        let request = SubmissionRequest::new(sample_document(), "sig");
        let json = serde_json::to_string(&request).unwrap();
        let parsed: SubmissionRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.description, request.description);
        assert_eq!(parsed.signature, "sig");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            // The wire format must be stable for arbitrary field
            // contents, signatures included.
            #[test]
            fn request_survives_encode_decode(
                participant_inn in ".*",
                doc_id in ".*",
                signature in ".*",
                import_request in proptest::bool::ANY,
            ) {
                let document = Document {
                    participant_inn,
                    doc_id,
                    import_request,
                    ..Document::default()
                };
                let request = SubmissionRequest::new(document.clone(), signature.clone());

                let json = serde_json::to_string(&request).unwrap();
                let parsed: SubmissionRequest = serde_json::from_str(&json).unwrap();

                prop_assert_eq!(parsed.description, document);
                prop_assert_eq!(parsed.signature, signature);
            }
        }
    }
}
