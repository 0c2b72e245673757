// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The application layer only talks to these two traits:
//   - DocumentSource → where the Document comes from
//   - DocumentSink   → where the transformed Document goes
//
// The file-backed implementations live in data::loader and
// infra::writer. Tests can swap in in-memory versions
// without touching the use case.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use crate::domain::document::Document;
use crate::domain::error::TransformError;

// ─── DocumentSource ───────────────────────────────────────────────────────────
/// Any component that can produce the Document to transform.
///
/// Implementations:
///   - FileSource → reads a whole file from disk
pub trait DocumentSource {
    /// Load the full document. Must fail rather than return
    /// empty content when the underlying input is missing.
    fn load(&self) -> Result<Document, TransformError>;
}

// ─── DocumentSink ─────────────────────────────────────────────────────────────
/// Any component that can persist a transformed Document.
///
/// Implementations:
///   - FileSink → creates or overwrites a file on disk
pub trait DocumentSink {
    /// Persist the document, replacing whatever was there before.
    /// Returns the number of bytes written.
    fn persist(&self, document: &Document) -> Result<usize, TransformError>;
}
