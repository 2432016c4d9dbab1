//! # listing-source-core
//!
//! Identifies which real-estate listing provider produced a JSON document.
//!
//! Each provider has a structural signature: a set of required keys and a
//! few coarse type checks (is this an object? is this a list?). The
//! identifier applies the registered signatures in order and reports the
//! first that matches.
//!
//! ## Key Guarantees
//!
//! 1. **Deterministic**: Same document and registry always give the same answer
//! 2. **Never fails**: Every outcome is a `Classification`, including load errors
//! 3. **Ordered**: When several signatures match, the first registered wins
//! 4. **Read-only**: Signatures never mutate the document
//!
//! ## Example
//!
//! ```rust,ignore
//! use listing_source_core::{SourceIdentifier, Classification};
//!
//! let identifier = SourceIdentifier::new();
//! match identifier.classify_file("listings.json") {
//!     Classification::Matched(source) => println!("{}", source),
//!     Classification::InvalidSource => println!("invalid source"),
//!     Classification::Error(message) => println!("Error: {}", message),
//! }
//! ```

pub mod document;
pub mod identifier;
pub mod registry;
pub mod shape;
pub mod signatures;

// Re-export main types at crate root
pub use document::{load_document, parse_document, DocumentLoader, FileLoader, LoadError};
pub use identifier::{identify_file, Classification, SourceIdentifier, INVALID_SOURCE};
pub use registry::SignatureRegistry;
pub use shape::{has_required_fields, JsonKind, JsonObject, ShapeError};
pub use signatures::{
    builtin_signatures, CiencuadrasSignature, DeclarativeSignature, FincaraizSignature,
    FnSignature, MetrocuadradoSignature, ShapeRule, Signature, SignatureFile,
    SignatureFileError, CIENCUADRAS, FINCARAIZ, METROCUADRADO,
};
