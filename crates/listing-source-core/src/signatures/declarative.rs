//! Signatures described as data.
//!
//! A signature file lists providers and the structural rules their
//! documents satisfy. Files are YAML or JSON:
//!
//! ```yaml
//! signatures:
//!   - name: properati
//!     rules:
//!       - path: ""
//!         kind: object
//!         required: [status, listings]
//!       - path: listings
//!         kind: array
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::shape::{has_required_fields, JsonKind, ShapeError};

use super::Signature;

/// Errors that can occur when loading signature files.
#[derive(Error, Debug)]
pub enum SignatureFileError {
    #[error("Failed to read signature file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Signature validation failed: {0}")]
    ValidationError(String),
}

/// One structural condition on the value found at `path`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShapeRule {
    /// Dotted path from the document root; empty for the root itself
    #[serde(default)]
    pub path: String,

    /// Required coarse type of the value
    #[serde(default)]
    pub kind: Option<JsonKind>,

    /// Keys the value must contain (implies an object)
    #[serde(default)]
    pub required: Vec<String>,
}

impl ShapeRule {
    /// Check this rule against a document. Unreachable paths do not match.
    pub fn holds(&self, document: &Value) -> bool {
        let Some(value) = resolve(document, &self.path) else {
            return false;
        };

        if let Some(kind) = self.kind {
            if !kind.matches(value) {
                return false;
            }
        }

        if self.required.is_empty() {
            return true;
        }

        match value.as_object() {
            Some(map) => {
                let fields: Vec<&str> = self.required.iter().map(String::as_str).collect();
                has_required_fields(map, &fields)
            }
            None => false,
        }
    }
}

/// Walk a dotted path through nested objects.
fn resolve<'a>(document: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return Some(document);
    }
    path.split('.')
        .try_fold(document, |value, key| value.as_object()?.get(key))
}

/// A provider signature built from `ShapeRule`s.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeclarativeSignature {
    /// Provider name reported on match
    pub name: String,

    /// Human-readable description
    #[serde(default)]
    pub description: Option<String>,

    /// All rules must hold
    pub rules: Vec<ShapeRule>,
}

impl Signature for DeclarativeSignature {
    fn name(&self) -> &str {
        &self.name
    }

    fn matches(&self, document: &Value) -> Result<bool, ShapeError> {
        Ok(self.rules.iter().all(|rule| rule.holds(document)))
    }

    fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("Declarative signature")
    }
}

/// A collection of declarative signatures, as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SignatureFile {
    #[serde(default)]
    pub signatures: Vec<DeclarativeSignature>,
}

impl SignatureFile {
    /// Parse a signature file from YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, SignatureFileError> {
        let file: SignatureFile = serde_yaml::from_str(yaml)?;
        file.validate()?;
        Ok(file)
    }

    /// Parse a signature file from JSON string.
    pub fn from_json(json: &str) -> Result<Self, SignatureFileError> {
        let file: SignatureFile = serde_json::from_str(json)?;
        file.validate()?;
        Ok(file)
    }

    /// Parse a signature file from disk, picking the format by extension.
    ///
    /// `.json` is parsed as JSON; anything else as YAML.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SignatureFileError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json(&contents)
        } else {
            Self::from_yaml(&contents)
        }
    }

    /// The signatures, ready for registration.
    pub fn into_signatures(self) -> Vec<Arc<dyn Signature>> {
        self.signatures
            .into_iter()
            .map(|s| Arc::new(s) as Arc<dyn Signature>)
            .collect()
    }

    fn validate(&self) -> Result<(), SignatureFileError> {
        let mut seen = HashSet::new();

        for signature in &self.signatures {
            if signature.name.trim().is_empty() {
                return Err(SignatureFileError::ValidationError(
                    "Signature name must not be empty".to_string(),
                ));
            }

            if signature.rules.is_empty() {
                return Err(SignatureFileError::ValidationError(format!(
                    "Signature '{}' has no rules",
                    signature.name
                )));
            }

            if !seen.insert(signature.name.as_str()) {
                return Err(SignatureFileError::ValidationError(format!(
                    "Duplicate signature name: {}",
                    signature.name
                )));
            }
        }

        Ok(())
    }
}
