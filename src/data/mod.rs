// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between the raw file on disk and the rewritten
// bytes ready to be persisted.
//
//   source file
//       │
//       ▼
//   FileSource      → reads the whole file into a Document
//       │
//       ▼
//   Substitution    → strips the leading indented line
//       │
//       ▼
//   (infra::writer) → persists the result
//
// Reference: Rust Book §12 (I/O), regex crate docs

/// Reads the source file into a Document
pub mod loader;

/// The fixed regex substitution
pub mod substitution;
