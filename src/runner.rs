//! Binary entry point shared by the three strategy executables
//!
//! ```text
//! ┌──────────┐    ┌──────────┐    ┌──────────┐    ┌──────────┐
//! │  Config  │───▶│ Logging  │───▶│ Strategy │───▶│  stdout  │
//! │  (YAML)  │    │ (stderr) │    │ (table)  │    │ 100 lines│
//! └──────────┘    └──────────┘    └──────────┘    └──────────┘
//! ```

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::{AppConfig, DEFAULT_CONFIG_PATH};
use crate::error::ConfigError;
use crate::logging::init_logging;
use crate::strategy::Strategy;

/// Emit the sequence with `strategy` to `out`.
///
/// A reader closing the pipe early counts as a normal end of output.
pub fn run<W: Write + ?Sized>(strategy: Strategy, out: &mut W) -> Result<usize> {
    tracing::info!(strategy = %strategy, "Emitting sequence");

    match strategy.emit(out) {
        Ok(lines) => {
            tracing::info!(strategy = %strategy, lines, "Sequence complete");
            Ok(lines)
        }
        Err(e) if e.is_broken_pipe() => {
            tracing::debug!(strategy = %strategy, "Output closed by reader");
            Ok(0)
        }
        Err(e) => Err(e).with_context(|| format!("{} strategy failed", strategy)),
    }
}

/// Config for the run. An unreadable or malformed file yields the defaults
/// plus the error to report once logging is up.
pub fn load_config(path: impl AsRef<Path>) -> (AppConfig, Option<ConfigError>) {
    match AppConfig::load_or_default(path) {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    }
}

/// Load config, initialize logging, and emit to the locked stdout
pub fn run_to_stdout(strategy: Strategy) -> Result<()> {
    let (app_config, config_error) = load_config(DEFAULT_CONFIG_PATH);
    let _log_guard = init_logging(&app_config);
    if let Some(e) = config_error {
        tracing::warn!(error = %e, "Ignoring diagnostics config, using defaults");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(strategy, &mut out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct FullDisk;

    impl Write for FullDisk {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("no space left"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_run_writes_all_lines() {
        let mut buf = Vec::new();
        assert_eq!(run(Strategy::Wraparound, &mut buf).unwrap(), 100);
        assert!(buf.starts_with(b"1\n2\nFizz\n4\nBuzz\n"));
    }

    #[test]
    fn test_broken_pipe_is_success() {
        assert_eq!(run(Strategy::Direct, &mut ClosedPipe).unwrap(), 0);
    }

    #[test]
    fn test_malformed_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fizzbuzz.yaml");
        std::fs::write(&path, "log_level: [\n").unwrap();

        let (config, err) = load_config(&path);
        assert_eq!(config, AppConfig::default());
        assert!(matches!(err, Some(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_missing_config_is_silent_default() {
        let dir = tempfile::tempdir().unwrap();
        let (config, err) = load_config(dir.path().join("absent.yaml"));
        assert_eq!(config, AppConfig::default());
        assert!(err.is_none());
    }

    #[test]
    fn test_other_io_error_propagates() {
        let err = run(Strategy::Offset, &mut FullDisk).unwrap_err();
        let msg = format!("{:#}", err);
        assert!(msg.contains("offset strategy failed"), "{}", msg);
        assert!(msg.contains("no space left"), "{}", msg);
    }
}
