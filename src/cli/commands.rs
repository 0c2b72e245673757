// ============================================================
// Layer 1 — CLI Arguments
// ============================================================
// The positional destination and the two optional flags.
//
// The destination is parsed as an OsString rather than a
// PathBuf: clap's PathBuf parser rejects an empty value, but
// an empty destination has to reach the application layer so
// it can be reported the same way as a missing one. OsString
// still accepts paths that aren't valid UTF-8.

use clap::Args;
use std::{ffi::OsString, path::PathBuf};

use crate::application::transform_use_case::{TransformConfig, DEFAULT_SOURCE};
use crate::data::substitution::MatchMode;

/// All arguments for a transform run
#[derive(Args, Debug)]
pub struct TransformArgs {
    /// Path of the file to write (created or overwritten)
    pub destination: Option<OsString>,

    /// Source file to read, relative to the working directory
    #[arg(short, long, default_value = DEFAULT_SOURCE)]
    pub source: PathBuf,

    /// Strip every matching block instead of only the first
    #[arg(short, long)]
    pub all: bool,
}

/// Convert CLI TransformArgs into the application-layer TransformConfig.
impl From<TransformArgs> for TransformConfig {
    fn from(a: TransformArgs) -> Self {
        TransformConfig {
            source:      a.source,
            destination: a.destination.map(PathBuf::from),
            mode:        if a.all { MatchMode::All } else { MatchMode::First },
        }
    }
}
