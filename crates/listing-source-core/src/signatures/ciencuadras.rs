//! Ciencuadras signature
//!
//! **Shape**: `{success, message, data: {total, totalPages, results: [..]}}`

use serde_json::Value;

use crate::shape::{array_field, as_object, has_required_fields, object_field, ShapeError};

use super::Signature;

pub const CIENCUADRAS: &str = "ciencuadras";

/// Matches Ciencuadras search responses.
#[derive(Debug, Clone, Copy, Default)]
pub struct CiencuadrasSignature;

impl CiencuadrasSignature {
    pub fn new() -> Self {
        Self
    }

    fn check(document: &Value) -> Option<()> {
        let root = as_object(document)?;
        has_required_fields(root, &["success", "message", "data"]).then_some(())?;

        let data = object_field(root, "data")?;
        has_required_fields(data, &["total", "totalPages", "results"]).then_some(())?;

        array_field(data, "results").map(|_| ())
    }
}

impl Signature for CiencuadrasSignature {
    fn name(&self) -> &str {
        CIENCUADRAS
    }

    fn matches(&self, document: &Value) -> Result<bool, ShapeError> {
        Ok(Self::check(document).is_some())
    }

    fn description(&self) -> &str {
        "paginated data with total, totalPages and a results list"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal() -> Value {
        json!({
            "success": true,
            "message": "",
            "data": {
                "total": 0,
                "totalPages": 0,
                "results": []
            }
        })
    }

    #[test]
    fn test_minimal_document_matches() {
        assert_eq!(CiencuadrasSignature::new().matches(&minimal()), Ok(true));
    }

    #[test]
    fn test_extra_keys_are_ignored() {
        let mut doc = minimal();
        doc["data"]["highlights"] = json!([]);
        doc["data"]["mapResults"] = json!({});
        assert_eq!(CiencuadrasSignature::new().matches(&doc), Ok(true));
    }

    #[test]
    fn test_data_as_string() {
        let doc = json!({"success": true, "message": "", "data": "oops"});
        assert_eq!(CiencuadrasSignature::new().matches(&doc), Ok(false));
    }

    #[test]
    fn test_results_not_array() {
        let mut doc = minimal();
        doc["data"]["results"] = json!("none");
        assert_eq!(CiencuadrasSignature::new().matches(&doc), Ok(false));
    }

    #[test]
    fn test_missing_total_pages() {
        let mut doc = minimal();
        doc["data"].as_object_mut().unwrap().remove("totalPages");
        assert_eq!(CiencuadrasSignature::new().matches(&doc), Ok(false));
    }
}
