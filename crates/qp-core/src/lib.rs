//! Command-line front end for printable questionnaire rendering.
//!
//! Wraps [`qp_report`] with the pieces around a render pass: checking that
//! an export folder holds `spec.json`, `metadata.json`, and
//! `manifest.json`, loading them, naming and writing the output file,
//! configuration discovery, logging, and exit codes.

pub mod config;
pub mod error;
pub mod exit_codes;
pub mod export;
pub mod logging;
pub mod output;
pub mod pipeline;
pub mod workspace;
pub mod writer;

pub use error::{CliError, Result};
pub use exit_codes::ExitCode;
pub use pipeline::{RenderOutcome, RenderRequest};
