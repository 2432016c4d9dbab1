//! Safe accessors over untyped JSON.
//!
//! Two families live here:
//! - Lenient accessors (`as_object`, `object_field`, `array_field`) return
//!   `None` for both "key absent" and "wrong type". Built-in signatures use
//!   only these, so they never fail.
//! - Strict accessors (`expect_*`) return a `ShapeError` describing what was
//!   wrong. Custom validators use them when they would rather assume a shape
//!   and bail out with `?`.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// A JSON object as produced by serde_json.
pub type JsonObject = Map<String, Value>;

/// Coarse JSON type of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonKind {
    Object,
    Array,
    String,
    Number,
    Bool,
    Null,
}

impl JsonKind {
    /// Kind of the given value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Object(_) => JsonKind::Object,
            Value::Array(_) => JsonKind::Array,
            Value::String(_) => JsonKind::String,
            Value::Number(_) => JsonKind::Number,
            Value::Bool(_) => JsonKind::Bool,
            Value::Null => JsonKind::Null,
        }
    }

    /// Check whether `value` has this kind.
    pub fn matches(self, value: &Value) -> bool {
        JsonKind::of(value) == self
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JsonKind::Object => "object",
            JsonKind::Array => "array",
            JsonKind::String => "string",
            JsonKind::Number => "number",
            JsonKind::Bool => "bool",
            JsonKind::Null => "null",
        };
        f.write_str(name)
    }
}

/// A document did not have the shape a validator assumed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    #[error("Missing key: {path}")]
    MissingKey { path: String },

    #[error("Wrong type at {path}: expected {expected}, found {found}")]
    WrongType {
        path: String,
        expected: JsonKind,
        found: JsonKind,
    },

    #[error("Shape error: {0}")]
    Other(String),
}

/// Check that every name in `fields` is a key of `map`.
///
/// Existence only: a key holding `null` still counts as present.
pub fn has_required_fields(map: &JsonObject, fields: &[&str]) -> bool {
    fields.iter().all(|field| map.contains_key(*field))
}

/// The value as an object, if it is one.
pub fn as_object(value: &Value) -> Option<&JsonObject> {
    value.as_object()
}

/// The object stored under `key`, if present and an object.
pub fn object_field<'a>(map: &'a JsonObject, key: &str) -> Option<&'a JsonObject> {
    map.get(key).and_then(Value::as_object)
}

/// The array stored under `key`, if present and an array.
pub fn array_field<'a>(map: &'a JsonObject, key: &str) -> Option<&'a Vec<Value>> {
    map.get(key).and_then(Value::as_array)
}

/// Join a parent path and a key using dotted notation.
pub fn child_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", parent, key)
    }
}

/// Require `value` to be an object.
pub fn expect_object<'a>(value: &'a Value, path: &str) -> Result<&'a JsonObject, ShapeError> {
    value.as_object().ok_or_else(|| ShapeError::WrongType {
        path: display_path(path),
        expected: JsonKind::Object,
        found: JsonKind::of(value),
    })
}

/// Require `value` to be an array.
pub fn expect_array<'a>(value: &'a Value, path: &str) -> Result<&'a Vec<Value>, ShapeError> {
    value.as_array().ok_or_else(|| ShapeError::WrongType {
        path: display_path(path),
        expected: JsonKind::Array,
        found: JsonKind::of(value),
    })
}

/// Require `map` to contain `key`. `path` is the path of `map` itself.
pub fn expect_field<'a>(
    map: &'a JsonObject,
    key: &str,
    path: &str,
) -> Result<&'a Value, ShapeError> {
    map.get(key).ok_or_else(|| ShapeError::MissingKey {
        path: child_path(path, key),
    })
}

fn display_path(path: &str) -> String {
    if path.is_empty() {
        "<root>".to_string()
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_has_required_fields_existence_only() {
        let value = json!({"a": null, "b": 1});
        let map = value.as_object().unwrap();
        assert!(has_required_fields(map, &["a", "b"]));
        assert!(has_required_fields(map, &[]));
        assert!(!has_required_fields(map, &["a", "c"]));
    }

    #[test]
    fn test_lenient_accessors_conflate_absent_and_wrong_type() {
        let value = json!({"obj": {}, "arr": [], "text": "x"});
        let map = value.as_object().unwrap();

        assert!(object_field(map, "obj").is_some());
        assert!(object_field(map, "text").is_none());
        assert!(object_field(map, "missing").is_none());

        assert!(array_field(map, "arr").is_some());
        assert!(array_field(map, "obj").is_none());
        assert!(array_field(map, "missing").is_none());
    }

    #[test]
    fn test_expect_object_reports_kind() {
        let value = json!("not an object");
        let err = expect_object(&value, "data").unwrap_err();
        assert_eq!(
            err,
            ShapeError::WrongType {
                path: "data".to_string(),
                expected: JsonKind::Object,
                found: JsonKind::String,
            }
        );
        assert_eq!(
            err.to_string(),
            "Wrong type at data: expected object, found string"
        );
    }

    #[test]
    fn test_expect_field_builds_dotted_path() {
        let value = json!({"data": {}});
        let root = expect_object(&value, "").unwrap();
        let data = expect_object(expect_field(root, "data", "").unwrap(), "data").unwrap();
        let err = expect_field(data, "results", "data").unwrap_err();
        assert_eq!(
            err,
            ShapeError::MissingKey {
                path: "data.results".to_string()
            }
        );
    }

    #[test]
    fn test_root_path_display() {
        let err = expect_array(&json!({}), "").unwrap_err();
        assert!(err.to_string().contains("<root>"));
    }

    #[test]
    fn test_json_kind_of() {
        assert_eq!(JsonKind::of(&json!(null)), JsonKind::Null);
        assert_eq!(JsonKind::of(&json!(true)), JsonKind::Bool);
        assert_eq!(JsonKind::of(&json!(1.5)), JsonKind::Number);
        assert_eq!(JsonKind::of(&json!("s")), JsonKind::String);
        assert_eq!(JsonKind::of(&json!([])), JsonKind::Array);
        assert_eq!(JsonKind::of(&json!({})), JsonKind::Object);
        assert!(JsonKind::Array.matches(&json!([1, 2])));
    }
}
