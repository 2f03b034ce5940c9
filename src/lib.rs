//! fizzbuzz_lut - FizzBuzz 1..=100 through lookup tables
//!
//! Three interchangeable strategies pick a table entry for every n and
//! produce byte-identical output.
//!
//! # Modules
//!
//! - [`line`] - Table entry type and sequence bounds
//! - [`strategy`] - Wraparound / direct / offset strategies
//! - [`emit`] - Writing steps to an output stream
//! - [`runner`] - Binary entry point (config, logging, stdout)
//! - [`config`] - Diagnostics configuration (YAML)
//! - [`logging`] - tracing subscriber setup
//! - [`error`] - Error types

// Core types - must be first!
pub mod line;

pub mod config;
pub mod emit;
pub mod error;
pub mod logging;
pub mod runner;
pub mod strategy;

// Convenient re-exports at crate root
pub use emit::emit_steps;
pub use error::{ConfigError, EmitError};
pub use line::{FIRST, LAST, LINE_COUNT, Line, Step};
pub use strategy::{Direct, Offset, Strategy, Wraparound};
