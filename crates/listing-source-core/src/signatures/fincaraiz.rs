//! Fincaraiz signature
//!
//! **Shape**: an Elasticsearch search response,
//! `{took, timed_out, _shards: {..}, hits: {total, max_score, hits: [..]}}`

use serde_json::Value;

use crate::shape::{array_field, as_object, has_required_fields, object_field, ShapeError};

use super::Signature;

pub const FINCARAIZ: &str = "fincaraiz";

/// Matches Fincaraiz search responses.
#[derive(Debug, Clone, Copy, Default)]
pub struct FincaraizSignature;

impl FincaraizSignature {
    pub fn new() -> Self {
        Self
    }

    fn check(document: &Value) -> Option<()> {
        let root = as_object(document)?;
        has_required_fields(root, &["took", "timed_out", "_shards", "hits"]).then_some(())?;

        // _shards content is not inspected
        object_field(root, "_shards")?;

        let hits = object_field(root, "hits")?;
        has_required_fields(hits, &["total", "max_score", "hits"]).then_some(())?;

        array_field(hits, "hits").map(|_| ())
    }
}

impl Signature for FincaraizSignature {
    fn name(&self) -> &str {
        FINCARAIZ
    }

    fn matches(&self, document: &Value) -> Result<bool, ShapeError> {
        Ok(Self::check(document).is_some())
    }

    fn description(&self) -> &str {
        "Elasticsearch response with _shards and a hits.hits list"
    }
}
