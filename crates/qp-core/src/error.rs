//! Error type for the command-line pipeline.

use std::path::PathBuf;

use qp_report::ReportError;
use thiserror::Error;

use crate::exit_codes::ExitCode;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced to the user as a single readable message.
#[derive(Error, Debug)]
pub enum CliError {
    /// A required export file is not in the folder.
    #[error("Missing file: {name}")]
    MissingFile { name: String, path: PathBuf },

    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("please enter a title for the questionnaire")]
    EmptyTitle,

    /// An export file could not be parsed.
    #[error("failed to parse {file}: {source}")]
    Json {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}: {reason}", .path.display())]
    Config { path: PathBuf, reason: String },

    #[error(transparent)]
    Report(#[from] ReportError),
}

impl CliError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CliError::Io {
            path: path.into(),
            source,
        }
    }

    /// Exit code reported for this error.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            CliError::MissingFile { .. } | CliError::NotADirectory(_) => ExitCode::MissingInput,
            CliError::EmptyTitle | CliError::Config { .. } => ExitCode::ArgsError,
            CliError::Report(ReportError::InvalidConfig(_)) => ExitCode::ArgsError,
            CliError::Json { .. } | CliError::Report(_) => ExitCode::InvalidInput,
            CliError::Io { .. } => ExitCode::IoError,
        }
    }
}
