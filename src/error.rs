//! Error types
//!
//! The sequence itself cannot fail; only the output stream and the
//! diagnostics config file can.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure while writing the sequence
#[derive(Error, Debug)]
pub enum EmitError {
    #[error("Failed to write sequence output: {0}")]
    Io(#[from] io::Error),
}

impl EmitError {
    /// Reader went away (e.g. `fizzbuzz_direct | head -3`)
    pub fn is_broken_pipe(&self) -> bool {
        match self {
            EmitError::Io(e) => e.kind() == io::ErrorKind::BrokenPipe,
        }
    }
}

/// Failure while loading the diagnostics config
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}
