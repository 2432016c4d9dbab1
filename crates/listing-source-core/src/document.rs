//! Document loading.
//!
//! Classification never touches the filesystem itself. It consumes what a
//! `DocumentLoader` produces: a parsed JSON value, or a `LoadError` whose
//! message is reported back to the caller verbatim.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while loading a document.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("File not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl LoadError {
    /// True when the path did not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadError::NotFound { .. })
    }

    /// True when the content was read but was not valid JSON.
    pub fn is_malformed(&self) -> bool {
        matches!(self, LoadError::Json(_))
    }
}

/// Source of parsed documents.
pub trait DocumentLoader {
    /// Load and parse the document at `path`.
    fn load(&self, path: &Path) -> Result<Value, LoadError>;
}

/// Loads documents from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileLoader;

impl FileLoader {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentLoader for FileLoader {
    fn load(&self, path: &Path) -> Result<Value, LoadError> {
        if !path.exists() {
            debug!(path = %path.display(), "document not found");
            return Err(LoadError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let contents = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let document = parse_document(&contents)?;
        debug!(path = %path.display(), bytes = contents.len(), "document loaded");
        Ok(document)
    }
}

/// Parse JSON text into a document.
pub fn parse_document(text: &str) -> Result<Value, LoadError> {
    Ok(serde_json::from_str(text)?)
}

/// Load a document from a file with the default loader.
pub fn load_document(path: impl AsRef<Path>) -> Result<Value, LoadError> {
    FileLoader.load(path.as_ref())
}
