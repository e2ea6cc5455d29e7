//! Write-time validation of submitted articles.

use crate::error::SubmissionError;
use crate::summary::{Summary, extract_summary};

/// Default size limit for submitted article text (1 MiB).
pub const DEFAULT_MAX_BYTES: usize = 1024 * 1024;

/// Limits applied to submitted article text before extraction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmissionLimits {
    /// Maximum article size in bytes.
    pub max_bytes: usize,
}

impl Default for SubmissionLimits {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_BYTES,
        }
    }
}

/// Validate a new or edited article and derive its stored title and preview.
///
/// Checks run cheapest first: emptiness, size, then summary extraction.
pub fn validate_submission(
    markdown: &str,
    limits: &SubmissionLimits,
) -> Result<Summary, SubmissionError> {
    if markdown.trim().is_empty() {
        return Err(SubmissionError::Empty);
    }
    if markdown.len() > limits.max_bytes {
        return Err(SubmissionError::TooLarge {
            size: markdown.len(),
            limit: limits.max_bytes,
        });
    }

    let summary = extract_summary(markdown)?;
    tracing::debug!(title = %summary.title, bytes = markdown.len(), "Submission accepted");
    Ok(summary)
}
