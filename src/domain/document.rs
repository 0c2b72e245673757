// ============================================================
// Layer 3 — Document Domain Type
// ============================================================
// A Document is the whole source file held in memory.
// It is created by a DocumentSource, rewritten once by the
// substitution, then handed to a DocumentSink and dropped.
//
// The content is kept as raw bytes rather than a String:
// the transformer passes the file through untouched apart
// from the stripped line, so it must not reject or re-encode
// anything that isn't valid UTF-8.
//
// Reference: Rust Book §5 (Structs and Methods)

use std::path::{Path, PathBuf};

use crate::data::substitution::Substitution;

/// A file loaded from disk, waiting to be transformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Where the content came from — kept for log messages
    source: PathBuf,

    /// The full raw content of the file
    content: Vec<u8>,
}

impl Document {
    /// Create a new Document from a source path and its content.
    ///
    /// Example:
    ///   let doc = Document::new("code", b"    header\nbody".to_vec());
    pub fn new(source: impl Into<PathBuf>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            source:  source.into(),
            content: content.into(),
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Run the substitution over the content in place.
    /// Returns how many blocks were stripped.
    pub fn apply(&mut self, substitution: &Substitution) -> usize {
        let applied = substitution.apply(&self.content);
        if applied.replacements > 0 {
            self.content = applied.output;
        }
        applied.replacements
    }
}
