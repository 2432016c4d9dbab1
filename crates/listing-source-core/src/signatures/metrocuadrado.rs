//! Metrocuadrado signature
//!
//! **Shape**: `{responseCode, message, data: {metadata, result:
//! {propertiesByFiltersQuery: {count, total, properties: [..]}}}}`

use serde_json::Value;

use crate::shape::{array_field, as_object, has_required_fields, object_field, ShapeError};

use super::Signature;

pub const METROCUADRADO: &str = "metrocuadrado";

/// Matches Metrocuadrado search responses.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetrocuadradoSignature;

impl MetrocuadradoSignature {
    pub fn new() -> Self {
        Self
    }

    fn check(document: &Value) -> Option<()> {
        let root = as_object(document)?;
        has_required_fields(root, &["responseCode", "message", "data"]).then_some(())?;

        let data = object_field(root, "data")?;
        has_required_fields(data, &["metadata", "result"]).then_some(())?;

        let result = object_field(data, "result")?;
        let query = object_field(result, "propertiesByFiltersQuery")?;
        has_required_fields(query, &["count", "total", "properties"]).then_some(())?;

        array_field(query, "properties").map(|_| ())
    }
}

impl Signature for MetrocuadradoSignature {
    fn name(&self) -> &str {
        METROCUADRADO
    }

    fn matches(&self, document: &Value) -> Result<bool, ShapeError> {
        Ok(Self::check(document).is_some())
    }

    fn description(&self) -> &str {
        "data.result.propertiesByFiltersQuery with count, total and a properties list"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal() -> Value {
        json!({
            "responseCode": 200,
            "message": "ok",
            "data": {
                "metadata": {},
                "result": {
                    "propertiesByFiltersQuery": {
                        "count": 0,
                        "total": 0,
                        "properties": []
                    }
                }
            }
        })
    }

    #[test]
    fn test_minimal_document_matches() {
        assert_eq!(MetrocuadradoSignature::new().matches(&minimal()), Ok(true));
    }

    #[test]
    fn test_properties_with_any_elements() {
        let mut doc = minimal();
        doc["data"]["result"]["propertiesByFiltersQuery"]["properties"] =
            json!([{"id": 1}, "loose", null]);
        assert_eq!(MetrocuadradoSignature::new().matches(&doc), Ok(true));
    }

    #[test]
    fn test_missing_top_level_key() {
        let mut doc = minimal();
        doc.as_object_mut().unwrap().remove("responseCode");
        assert_eq!(MetrocuadradoSignature::new().matches(&doc), Ok(false));
    }

    #[test]
    fn test_missing_metadata() {
        let mut doc = minimal();
        doc["data"].as_object_mut().unwrap().remove("metadata");
        assert_eq!(MetrocuadradoSignature::new().matches(&doc), Ok(false));
    }

    #[test]
    fn test_wrong_types_are_mismatches() {
        let sig = MetrocuadradoSignature::new();

        let mut doc = minimal();
        doc["data"] = json!("nope");
        assert_eq!(sig.matches(&doc), Ok(false));

        let mut doc = minimal();
        doc["data"]["result"] = json!([]);
        assert_eq!(sig.matches(&doc), Ok(false));

        let mut doc = minimal();
        doc["data"]["result"]["propertiesByFiltersQuery"] = json!(null);
        assert_eq!(sig.matches(&doc), Ok(false));

        let mut doc = minimal();
        doc["data"]["result"]["propertiesByFiltersQuery"]["properties"] = json!({});
        assert_eq!(sig.matches(&doc), Ok(false));
    }

    #[test]
    fn test_missing_count() {
        let mut doc = minimal();
        doc["data"]["result"]["propertiesByFiltersQuery"]
            .as_object_mut()
            .unwrap()
            .remove("count");
        assert_eq!(MetrocuadradoSignature::new().matches(&doc), Ok(false));
    }
}
