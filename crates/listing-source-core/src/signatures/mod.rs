//! Provider signatures.
//!
//! A signature is a structural predicate over a parsed document: it checks
//! that required keys exist and that a few values have the right coarse
//! type. Values themselves are never inspected.
//!
//! Built-in signatures:
//! - `metrocuadrado`: GraphQL-style `data.result.propertiesByFiltersQuery`
//! - `fincaraiz`: Elasticsearch-style `hits.hits`
//! - `ciencuadras`: paginated `data.results`

mod ciencuadras;
mod declarative;
mod fincaraiz;
mod metrocuadrado;

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::shape::ShapeError;

pub use ciencuadras::{CiencuadrasSignature, CIENCUADRAS};
pub use declarative::{DeclarativeSignature, ShapeRule, SignatureFile, SignatureFileError};
pub use fincaraiz::{FincaraizSignature, FINCARAIZ};
pub use metrocuadrado::{MetrocuadradoSignature, METROCUADRADO};

/// A structural predicate identifying one data provider.
pub trait Signature: Send + Sync {
    /// Provider name reported when this signature matches.
    fn name(&self) -> &str;

    /// Check the document against this signature.
    ///
    /// `Ok(false)` is an ordinary mismatch. `Err` means the validator hit a
    /// shape it could not handle; the identifier treats that as the end of
    /// the whole scan.
    fn matches(&self, document: &Value) -> Result<bool, ShapeError>;

    /// One-line description of the shape this signature expects.
    fn description(&self) -> &str {
        "Custom signature"
    }
}

/// The built-in signatures in priority order.
pub fn builtin_signatures() -> Vec<Arc<dyn Signature>> {
    vec![
        Arc::new(MetrocuadradoSignature::new()),
        Arc::new(FincaraizSignature::new()),
        Arc::new(CiencuadrasSignature::new()),
    ]
}

type ValidatorFn = dyn Fn(&Value) -> Result<bool, ShapeError> + Send + Sync;

/// A signature backed by a closure.
pub struct FnSignature {
    name: String,
    validator: Box<ValidatorFn>,
}

impl FnSignature {
    pub fn new<F>(name: impl Into<String>, validator: F) -> Self
    where
        F: Fn(&Value) -> Result<bool, ShapeError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            validator: Box::new(validator),
        }
    }
}

impl fmt::Debug for FnSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnSignature")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl Signature for FnSignature {
    fn name(&self) -> &str {
        &self.name
    }

    fn matches(&self, document: &Value) -> Result<bool, ShapeError> {
        (self.validator)(document)
    }
}
