//! CLI error types.

use mimeo_config::ConfigError;
use mimeo_markdown::{SubmissionError, ValidationError};

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("article rejected: {0}")]
    Submission(#[from] SubmissionError),

    #[error("{0}")]
    Validation(#[from] ValidationError),
}
