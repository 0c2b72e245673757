// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs, enums and traits that define what the
// transformer works with. Nothing here touches the disk or
// compiles a regex.
//
// Rules for this layer:
//   - NO file I/O
//   - NO clap types
//   - Only data, errors and the seams other layers implement
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// The in-memory buffer that flows through the pipeline
pub mod document;

// The error taxonomy shared by every layer
pub mod error;

// Core abstractions (traits) that the data and infra layers implement
pub mod traits;
