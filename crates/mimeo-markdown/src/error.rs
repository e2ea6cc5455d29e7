//! Error types for article submissions.

/// Article text does not have the shape every article must have.
///
/// Deterministic in the input text: the author has to fix the submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The document does not open with a heading, or the heading has no text.
    #[error("heading missing")]
    MissingHeading,
    /// No paragraph follows the title, or it yields no text.
    #[error("no paragraph content")]
    MissingParagraph,
}

/// Rejected article submission.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    /// Submitted text is empty or whitespace only.
    #[error("article text is empty")]
    Empty,
    /// Submitted text exceeds the configured size limit.
    #[error("article is {size} bytes, limit is {limit} bytes")]
    TooLarge {
        /// Size of the submitted text in bytes.
        size: usize,
        /// Configured limit in bytes.
        limit: usize,
    },
    /// Text is within limits but has no title or preview.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}
