// ============================================================
// Layer 4 — Substitution
// ============================================================
// The one regex rewrite the transformer performs.
//
// Pattern (byte-oriented, see PATTERN below):
//
//   ^ +.*?\n(.*?)
//   │ │  │  │  └── group 1: lazy, nothing after it → always empty
//   │ │  │  └───── the newline ending the indented line
//   │ │  └──────── rest of that line, lazy ('.' never matches \n)
//   │ └─────────── a run of literal spaces
//   └───────────── start of a line (multi-line mode)
//
// Replacement: group 1.
// Net effect: the indented line and its newline are removed,
// everything after it is left exactly as it was.
//
// Flags:
//   m  — '^' matches at every line start, so only a line that
//        BEGINS with spaces qualifies (spaces mid-line don't)
//   -u — match raw bytes, so '.' accepts any byte but '\n'
//        and non-UTF-8 input passes straight through
//
// Match modes:
//   First — only the leftmost match is replaced (default)
//   All   — every non-overlapping match is replaced
//
// Reference: regex crate docs (bytes::Regex, replacen)

use std::borrow::Cow;

use regex::bytes::{Captures, Regex};

use crate::domain::error::TransformError;

/// The fixed substitution pattern
pub const PATTERN: &str = r"(?m-u)^ +.*?\n(.*?)";

/// The replacement: keep only the first capture group
pub const REPLACEMENT: &str = "${1}";

/// How many matches the substitution replaces
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// Replace only the leftmost match
    #[default]
    First,

    /// Replace every non-overlapping match
    All,
}

impl MatchMode {
    /// The `limit` argument for `Regex::replacen` (0 means unlimited)
    fn limit(self) -> usize {
        match self {
            MatchMode::First => 1,
            MatchMode::All   => 0,
        }
    }
}

/// Result of running the substitution over a buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied {
    /// The rewritten bytes (a copy of the input when nothing matched)
    pub output: Vec<u8>,

    /// Number of blocks that were stripped
    pub replacements: usize,
}

/// The compiled substitution, ready to run over any number of buffers
#[derive(Debug, Clone)]
pub struct Substitution {
    regex: Regex,
    mode:  MatchMode,
}

impl Substitution {
    /// Compile the fixed pattern for the given match mode
    pub fn new(mode: MatchMode) -> Result<Self, TransformError> {
        let regex = Regex::new(PATTERN)?;
        Ok(Self { regex, mode })
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Run the substitution over `input` in a single scan.
    pub fn apply(&self, input: &[u8]) -> Applied {
        let mut replacements = 0usize;

        let rewritten = self.regex.replacen(input, self.mode.limit(), |caps: &Captures<'_>| {
            replacements += 1;
            let mut kept = Vec::new();
            caps.expand(REPLACEMENT.as_bytes(), &mut kept);
            kept
        });
        let output = match rewritten {
            Cow::Borrowed(unchanged) => unchanged.to_vec(),
            Cow::Owned(rewritten)    => rewritten,
        };

        tracing::debug!(
            "Substitution ({:?}) replaced {} block(s)",
            self.mode,
            replacements
        );

        Applied { output, replacements }
    }
}
