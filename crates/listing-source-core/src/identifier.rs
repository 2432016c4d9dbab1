//! Source identifier: applies registered signatures to a document.
//!
//! The identifier applies fixed rules:
//! 1. Signatures run in registration order
//! 2. The first signature that matches names the source
//! 3. If ANY signature reports a `ShapeError`, the scan stops and the
//!    document is an invalid source. Later signatures are not consulted.
//! 4. If nothing matches, the document is an invalid source

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::document::{DocumentLoader, FileLoader, LoadError};
use crate::registry::SignatureRegistry;
use crate::shape::ShapeError;
use crate::signatures::{FnSignature, Signature};

/// Literal reported when no signature matches.
pub const INVALID_SOURCE: &str = "invalid source";

/// Outcome of classifying one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "value", rename_all = "snake_case")]
pub enum Classification {
    /// A signature matched; holds the provider name
    Matched(String),

    /// No signature matched, or a signature hit an unexpected shape
    InvalidSource,

    /// The document could not be loaded; holds the loader's message
    Error(String),
}

impl Classification {
    /// Provider name, if one matched.
    pub fn source(&self) -> Option<&str> {
        match self {
            Classification::Matched(name) => Some(name),
            _ => None,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, Classification::Matched(_))
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Classification::InvalidSource)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Classification::Error(_))
    }
}

impl From<&LoadError> for Classification {
    fn from(err: &LoadError) -> Self {
        Classification::Error(err.to_string())
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Matched(name) => f.write_str(name),
            Classification::InvalidSource => f.write_str(INVALID_SOURCE),
            Classification::Error(message) => write!(f, "Error: {}", message),
        }
    }
}

/// Identifies which provider produced a document.
#[derive(Debug, Clone)]
pub struct SourceIdentifier {
    registry: SignatureRegistry,
}

impl Default for SourceIdentifier {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceIdentifier {
    /// Create an identifier with the built-in signatures.
    pub fn new() -> Self {
        Self::with_registry(SignatureRegistry::with_builtins())
    }

    /// Create an identifier over an existing registry.
    pub fn with_registry(registry: SignatureRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &SignatureRegistry {
        &self.registry
    }

    /// Register a closure as the signature for `name`.
    ///
    /// Replaces an existing signature of the same name in its priority slot.
    pub fn add_validator<F>(&mut self, name: impl Into<String>, validator: F)
    where
        F: Fn(&Value) -> Result<bool, ShapeError> + Send + Sync + 'static,
    {
        self.add_signature(Arc::new(FnSignature::new(name, validator)));
    }

    /// Register a signature.
    pub fn add_signature(&mut self, signature: Arc<dyn Signature>) {
        self.registry.register(signature);
    }

    /// Classify a loaded document.
    pub fn classify(&self, document: &Value) -> Classification {
        match self.first_match(document) {
            Ok(Some(name)) => {
                debug!(source = name, "document matched");
                Classification::Matched(name.to_string())
            }
            Ok(None) => {
                debug!("no signature matched");
                Classification::InvalidSource
            }
            Err((name, err)) => {
                warn!(signature = name, error = %err, "signature failed; aborting scan");
                Classification::InvalidSource
            }
        }
    }

    /// Classify the result of a load attempt, rendered as a string.
    ///
    /// Returns the provider name, `invalid source`, or `Error: <message>`.
    pub fn determine_data_source(&self, document: Result<&Value, &LoadError>) -> String {
        let classification = match document {
            Ok(document) => self.classify(document),
            Err(err) => Classification::from(err),
        };
        classification.to_string()
    }

    /// Load a document through `loader` and classify it.
    pub fn classify_path(&self, loader: &dyn DocumentLoader, path: &Path) -> Classification {
        match loader.load(path) {
            Ok(document) => self.classify(&document),
            Err(err) => {
                debug!(path = %path.display(), error = %err, "document could not be loaded");
                Classification::from(&err)
            }
        }
    }

    /// Load a file from disk and classify it.
    pub fn classify_file(&self, path: impl AsRef<Path>) -> Classification {
        self.classify_path(&FileLoader, path.as_ref())
    }

    fn first_match(&self, document: &Value) -> Result<Option<&str>, (&str, ShapeError)> {
        for signature in self.registry.iter() {
            let name = signature.name();
            let matched = signature.matches(document).map_err(|err| (name, err))?;
            debug!(signature = name, matched, "signature evaluated");
            if matched {
                return Ok(Some(name));
            }
        }
        Ok(None)
    }
}

/// Identify the provider of a JSON file using the built-in signatures.
///
/// Never fails: load errors come back as `Error: <message>`.
pub fn identify_file(path: impl AsRef<Path>) -> String {
    SourceIdentifier::new().classify_file(path).to_string()
}
