// ============================================================
// Layer 2 — TransformUseCase
// ============================================================
// Runs the whole pipeline in order:
//
//   Step 1: Check the destination argument   (abort if missing)
//   Step 2: Load the source file             (Layer 4 - data)
//   Step 3: Apply the substitution           (Layer 4 - data)
//   Step 4: Write the destination file       (Layer 6 - infra)
//
// Two end states:
//   awaiting argument → Aborted   (no destination, nothing touched)
//   awaiting argument → Written   (destination created/overwritten)
//
// Any failure after Step 1 is terminal for the run; there are
// no retries.
//
// Reference: Rust Book §9 (Error Handling with anyhow)

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::data::{
    loader::FileSource,
    substitution::{MatchMode, Substitution},
};
use crate::domain::error::TransformError;
use crate::domain::traits::{DocumentSink, DocumentSource};
use crate::infra::writer::FileSink;

/// Default source file, read relative to the working directory
pub const DEFAULT_SOURCE: &str = "code";

// ─── Transform Configuration ─────────────────────────────────────────────────
// Everything one run needs. Built from the CLI args; the
// application layer never sees clap types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformConfig {
    pub source:      PathBuf,
    pub destination: Option<PathBuf>,
    pub mode:        MatchMode,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            source:      PathBuf::from(DEFAULT_SOURCE),
            destination: None,
            mode:        MatchMode::First,
        }
    }
}

impl TransformConfig {
    /// The destination path, or MissingArgument if it's absent or empty
    pub fn destination(&self) -> Result<&PathBuf, TransformError> {
        match &self.destination {
            Some(path) if !path.as_os_str().is_empty() => Ok(path),
            _ => Err(TransformError::MissingArgument),
        }
    }
}

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No destination was given; nothing was read or written
    Aborted,

    /// The destination file now holds the transformed content
    Written {
        destination:  PathBuf,
        replacements: usize,
        bytes:        usize,
    },
}

// ─── TransformUseCase ─────────────────────────────────────────────────────────
pub struct TransformUseCase {
    config: TransformConfig,
}

impl TransformUseCase {
    pub fn new(config: TransformConfig) -> Self {
        Self { config }
    }

    /// Execute the pipeline against the file system
    pub fn execute(&self) -> Result<Outcome> {
        let destination = match self.config.destination() {
            Ok(path) => path,
            Err(TransformError::MissingArgument) => {
                tracing::debug!("No destination given — nothing to do");
                return Ok(Outcome::Aborted);
            }
            Err(e) => return Err(e.into()),
        };

        let source = FileSource::new(&self.config.source);
        let sink   = FileSink::new(destination);
        self.run(&source, &sink)
    }

    /// Execute the pipeline with explicit source and sink.
    /// Fails with MissingArgument when no destination is configured.
    pub fn run(&self, source: &dyn DocumentSource, sink: &dyn DocumentSink) -> Result<Outcome> {
        let destination = self.config.destination()?.clone();

        // ── Step 2: Load the source ──────────────────────────────────────────
        let mut document = source.load()?;
        tracing::info!(
            "Read {} bytes from '{}'",
            document.len(),
            document.source().display()
        );
        if document.is_empty() {
            tracing::info!("Source '{}' is empty", document.source().display());
        }

        // ── Step 3: Substitute ───────────────────────────────────────────────
        let substitution = Substitution::new(self.config.mode)?;
        let replacements = document.apply(&substitution);
        tracing::debug!("Match mode: {:?}", substitution.mode());
        if replacements == 0 {
            tracing::info!("No indented block found — content unchanged");
        }

        // ── Step 4: Persist ──────────────────────────────────────────────────
        let bytes = sink
            .persist(&document)
            .with_context(|| format!("Transform of '{}' failed", self.config.source.display()))?;

        tracing::info!(
            "Wrote {} bytes to '{}' ({} block(s) stripped)",
            bytes,
            destination.display(),
            replacements
        );

        Ok(Outcome::Written { destination, replacements, bytes })
    }
}
