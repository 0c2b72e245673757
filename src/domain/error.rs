// ============================================================
// Layer 3 — Error Taxonomy
// ============================================================
// Every way a run can stop early. The CLI and application
// layers wrap these in anyhow for context; keeping the typed
// enum here lets tests match on the exact failure.
//
//   MissingArgument  — no destination given (not fatal: the
//                      CLI prints a message and exits 0)
//   SourceUnreadable — the source file can't be read
//   WriteFailure     — the destination can't be written
//   InvalidPattern   — the substitution pattern didn't compile
//
// Reference: Rust Book §9 (Error Handling)

use std::{io, path::PathBuf};

/// Errors raised while transforming a file
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    /// No destination path was supplied, or it was empty
    #[error("no destination file name given")]
    MissingArgument,

    /// The source file doesn't exist or couldn't be read
    #[error("cannot read source file '{}'", .path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The destination couldn't be created or overwritten
    #[error("cannot write destination file '{}'", .path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The substitution pattern failed to compile
    #[error("invalid substitution pattern")]
    InvalidPattern(#[from] regex::Error),
}

impl TransformError {
    /// Create a read error for path
    pub fn source_unreadable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::SourceUnreadable {
            path: path.into(),
            source,
        }
    }

    /// Create a write error for path
    pub fn write_failure(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::WriteFailure {
            path: path.into(),
            source,
        }
    }
}
