use std::path::PathBuf;
use thiserror::Error;
use topocheck::engine::error::CheckError;

pub type Result<T> = std::result::Result<T, CliError>;

/// Process exit code for a topology that broke an allow-list rule.
pub const EXIT_VALIDATION_FAILURE: i32 = 1;
/// Process exit code for every other failure (bad input, bad configuration, I/O).
pub const EXIT_OTHER_FAILURE: i32 = 2;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Check(#[from] CheckError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse file '{}': {source}", .path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Check(e) if e.is_validation_failure() => EXIT_VALIDATION_FAILURE,
            _ => EXIT_OTHER_FAILURE,
        }
    }
}
