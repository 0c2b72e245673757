// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the other layers to turn a source file into a
// destination file.
//
// Rules for this layer:
//   - No regex details here (that's Layer 4)
//   - No printing here (that's Layer 1)
//   - No direct file access (that's Layer 4 and 6)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The read → substitute → write workflow
pub mod transform_use_case;
