// ============================================================
// Layer 4 — Source Loader
// ============================================================
// Reads the whole source file into memory as raw bytes.
//
// A missing or unreadable file is an error, never an empty
// Document: writing an empty destination would silently
// destroy whatever the user pointed us at.
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (Reading a File)

use std::{fs, path::PathBuf};

use crate::domain::document::Document;
use crate::domain::error::TransformError;
use crate::domain::traits::DocumentSource;

/// Loads a single file from disk.
/// Implements the DocumentSource trait from Layer 3.
pub struct FileSource {
    /// Path to the source file, relative to the working directory
    /// unless absolute
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DocumentSource for FileSource {
    fn load(&self) -> Result<Document, TransformError> {
        let bytes = fs::read(&self.path)
            .map_err(|e| TransformError::source_unreadable(&self.path, e))?;

        tracing::debug!("Loaded: {} ({} bytes)", self.path.display(), bytes.len());
        Ok(Document::new(&self.path, bytes))
    }
}
