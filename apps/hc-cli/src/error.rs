//! Error types for the command-line front end.

use std::path::PathBuf;

/// CLI error type wrapping the library crates' errors and case-file I/O.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Cycle analysis failed: {0}")]
    Cycle(#[from] hc_cycle::CycleError),

    #[error("Steam property lookup failed: {0}")]
    Steam(#[from] hc_steam::SteamError),

    #[error("Failed to read case file: {path}")]
    CaseFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse case file {path}: {message}")]
    CaseParse { path: PathBuf, message: String },

    #[error("Unsupported case file format: {0} (expected .yaml, .yml or .json)")]
    UnsupportedCaseFormat(PathBuf),

    #[error("Failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;
