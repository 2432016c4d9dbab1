//! Ordered registry of provider signatures.
//!
//! Registration order is priority order: when a document satisfies more
//! than one signature, the one registered first wins.
//!
//! ## Usage
//!
//! ```ignore
//! let mut registry = SignatureRegistry::with_builtins();
//! registry.register(Arc::new(FnSignature::new("custom", |doc| Ok(doc.is_object()))));
//!
//! assert_eq!(registry.names(), vec!["metrocuadrado", "fincaraiz", "ciencuadras", "custom"]);
//! ```

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::signatures::{builtin_signatures, Signature};

/// Registry of signatures in priority order.
#[derive(Clone, Default)]
pub struct SignatureRegistry {
    signatures: Vec<Arc<dyn Signature>>,
}

impl SignatureRegistry {
    /// Create a registry with no signatures.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in signatures.
    pub fn with_builtins() -> Self {
        let mut registry = Self::empty();
        for signature in builtin_signatures() {
            registry.register(signature);
        }
        registry
    }

    /// Register a signature.
    ///
    /// If a signature with the same name already exists it is replaced in
    /// its current priority slot; otherwise the new one goes last.
    pub fn register(&mut self, signature: Arc<dyn Signature>) {
        match self.position(signature.name()) {
            Some(index) => {
                debug!(name = signature.name(), priority = index, "replacing signature");
                self.signatures[index] = signature;
            }
            None => {
                debug!(
                    name = signature.name(),
                    priority = self.signatures.len(),
                    "registering signature"
                );
                self.signatures.push(signature);
            }
        }
    }

    /// Register several signatures in order.
    pub fn extend(&mut self, signatures: impl IntoIterator<Item = Arc<dyn Signature>>) {
        for signature in signatures {
            self.register(signature);
        }
    }

    /// Names in priority order.
    pub fn names(&self) -> Vec<&str> {
        self.signatures.iter().map(|s| s.name()).collect()
    }

    /// Get a signature by name.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Signature>> {
        self.signatures.iter().find(|s| s.name() == name)
    }

    /// Check if a name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Iterate signatures in priority order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Signature>> {
        self.signatures.iter()
    }

    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.signatures.iter().position(|s| s.name() == name)
    }
}

impl fmt::Debug for SignatureRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignatureRegistry")
            .field("signatures", &self.names())
            .finish()
    }
}
