mod application;
mod cli;
mod data;
mod domain;
mod infra;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use tracing_subscriber::EnvFilter;

/// Quiet by default: a normal run writes nothing but the destination
/// file. `RUST_LOG=code_strip=info` shows the pipeline steps.
const DEFAULT_LOG_DIRECTIVE: &str = "code_strip=warn";

fn log_filter() -> Result<EnvFilter> {
    Ok(EnvFilter::from_default_env().add_directive(DEFAULT_LOG_DIRECTIVE.parse()?))
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout only ever carries the abort message
    tracing_subscriber::fmt()
        .with_env_filter(log_filter()?)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    cli.run()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::{
        fs,
        io::{self, Write},
        sync::{Arc, Mutex},
    };

    /// Collects everything the subscriber writes
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    /// Run the CLI under the default log filter, returning (stdout, logs)
    fn run_quietly(args: &[&str]) -> (String, String) {
        let logs   = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(DEFAULT_LOG_DIRECTIVE))
            .with_writer(move || writer.clone())
            .finish();

        let mut out = Vec::new();
        tracing::subscriber::with_default(subscriber, || {
            Cli::try_parse_from(args).unwrap().run_with(&mut out).unwrap();
        });

        (String::from_utf8(out).unwrap(), logs.text())
    }

    #[test]
    fn test_default_directive_parses() {
        assert!(DEFAULT_LOG_DIRECTIVE.parse::<tracing_subscriber::filter::Directive>().is_ok());
    }

    #[test]
    fn test_abort_prints_only_the_message() {
        let (out, logs) = run_quietly(&["code-strip"]);
        assert_eq!(out, "not filename...\n");
        assert!(logs.is_empty(), "unexpected log output: {logs}");
    }

    #[test]
    fn test_success_prints_nothing_at_all() {
        let dir  = tempfile::tempdir().unwrap();
        let src  = dir.path().join("code");
        let dest = dir.path().join("out.txt");
        fs::write(&src, "").unwrap();

        let (out, logs) = run_quietly(&[
            "code-strip",
            "--source",
            src.to_str().unwrap(),
            dest.to_str().unwrap(),
        ]);

        assert!(out.is_empty());
        assert!(logs.is_empty(), "unexpected log output: {logs}");
        assert_eq!(fs::read(&dest).unwrap(), b"");
    }
}
