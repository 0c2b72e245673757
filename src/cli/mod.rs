// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses the command line with clap and hands a
// TransformConfig to Layer 2.
//
// The only thing this layer ever prints to stdout is the
// abort message when no destination was given. Progress goes
// through tracing, which main() points at stderr.

pub mod commands;

use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};

use crate::application::transform_use_case::{Outcome, TransformUseCase};
use commands::TransformArgs;

/// Printed when no destination was given
pub const MISSING_DESTINATION: &str = "not filename...";

/// The main CLI struct
#[derive(Parser, Debug)]
#[command(
    name = "code-strip",
    version,
    about = "Strip the leading indented line from a source file and write the result to DESTINATION."
)]
pub struct Cli {
    #[command(flatten)]
    pub args: TransformArgs,
}

impl Cli {
    /// Run against the real stdout
    pub fn run(self) -> Result<()> {
        let stdout = io::stdout();
        self.run_with(&mut stdout.lock())
    }

    /// Run the transform, writing any user-facing message to `out`
    pub fn run_with(self, out: &mut impl Write) -> Result<()> {
        tracing::debug!("Arguments: {:?}", self.args);

        let use_case = TransformUseCase::new(self.args.into());
        match use_case.execute()? {
            Outcome::Aborted => {
                writeln!(out, "{MISSING_DESTINATION}")?;
            }
            Outcome::Written { destination, replacements, bytes } => {
                tracing::debug!(
                    "Done: '{}' ({} bytes, {} replacement(s))",
                    destination.display(),
                    bytes,
                    replacements
                );
            }
        }
        Ok(())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::transform_use_case::TransformConfig;
    use crate::data::substitution::MatchMode;
    use std::{fs, path::PathBuf};

    fn run(args: &[&str]) -> (Result<()>, String) {
        let cli     = Cli::try_parse_from(args).unwrap();
        let mut out = Vec::new();
        let result  = cli.run_with(&mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parses_defaults() {
        let cli = Cli::try_parse_from(["code-strip", "out.txt"]).unwrap();
        let cfg = TransformConfig::from(cli.args);

        assert_eq!(cfg.source, PathBuf::from("code"));
        assert_eq!(cfg.destination, Some(PathBuf::from("out.txt")));
        assert_eq!(cfg.mode, MatchMode::First);
    }

    #[test]
    fn test_parses_source_and_all() {
        let cli = Cli::try_parse_from(["code-strip", "-a", "--source", "in.txt", "out.txt"]).unwrap();
        let cfg = TransformConfig::from(cli.args);

        assert_eq!(cfg.source, PathBuf::from("in.txt"));
        assert_eq!(cfg.mode, MatchMode::All);
    }

    #[cfg(unix)]
    #[test]
    fn test_accepts_non_utf8_destination() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let dest = OsString::from_vec(b"out-\xff.txt".to_vec());
        let cli  = Cli::try_parse_from([OsString::from("code-strip"), dest.clone()]).unwrap();
        let cfg  = TransformConfig::from(cli.args);

        assert_eq!(cfg.destination, Some(PathBuf::from(dest)));
    }

    #[test]
    fn test_rejects_second_positional() {
        assert!(Cli::try_parse_from(["code-strip", "a.txt", "b.txt"]).is_err());
    }

    #[test]
    fn test_no_destination_prints_message() {
        let (result, out) = run(&["code-strip"]);
        assert!(result.is_ok());
        assert_eq!(out, "not filename...\n");
    }

    #[test]
    fn test_empty_destination_prints_message() {
        let (result, out) = run(&["code-strip", ""]);
        assert!(result.is_ok());
        assert_eq!(out, "not filename...\n");
    }

    #[test]
    fn test_success_prints_nothing() {
        let dir  = tempfile::tempdir().unwrap();
        let src  = dir.path().join("code");
        let dest = dir.path().join("out.txt");
        fs::write(&src, "    header\ninner content").unwrap();

        let (result, out) = run(&[
            "code-strip",
            "--source",
            src.to_str().unwrap(),
            dest.to_str().unwrap(),
        ]);

        assert!(result.is_ok());
        assert!(out.is_empty());
        assert_eq!(fs::read_to_string(&dest).unwrap(), "inner content");
    }

    #[test]
    fn test_missing_source_is_an_error() {
        let dir  = tempfile::tempdir().unwrap();
        let dest = dir.path().join("out.txt");

        let (result, out) = run(&[
            "code-strip",
            "--source",
            dir.path().join("code").to_str().unwrap(),
            dest.to_str().unwrap(),
        ]);

        assert!(result.is_err());
        assert!(out.is_empty());
        assert!(!dest.exists());
    }
}
