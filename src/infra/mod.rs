// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Side effects that leave the process:
//
//   writer.rs — creates or overwrites the destination file
//               with the transformed content. No backup of
//               the previous content is kept.
//
// Reference: Rust Book §12 (I/O and File Handling)

/// Destination file writer
pub mod writer;
