// ============================================================
// Layer 6 — Destination Writer
// ============================================================
// Persists a Document to the destination path.
//
//   - file absent  → created
//   - file present → truncated and overwritten, no backup
//   - parent directory missing, permission denied, disk full
//     → WriteFailure carrying the underlying io::Error
//
// Reference: Rust Book §12 (I/O and File Handling)

use std::{fs, path::PathBuf};

use crate::domain::document::Document;
use crate::domain::error::TransformError;
use crate::domain::traits::DocumentSink;

/// Writes documents to a single file on disk.
/// Implements the DocumentSink trait from Layer 3.
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DocumentSink for FileSink {
    fn persist(&self, document: &Document) -> Result<usize, TransformError> {
        // fs::write opens with create + truncate
        fs::write(&self.path, document.content())
            .map_err(|e| TransformError::write_failure(&self.path, e))?;

        tracing::debug!(
            "Wrote {} bytes to '{}'",
            document.len(),
            self.path.display()
        );
        Ok(document.len())
    }
}
