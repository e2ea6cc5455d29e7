//! Title and preview extraction.
//!
//! Every article opens with a heading followed by a paragraph. The heading's
//! text becomes the title and the paragraph's text, capped at
//! [`PREVIEW_MAX_CHARS`], becomes the preview shown on listing pages.
//!
//! The same rule serves two callers: [`extract_summary`] rejects submissions
//! that lack the shape, and [`teaser`] derives listing text from stored
//! articles, which were validated on the way in.

use std::ptr;

use crate::error::ValidationError;
use crate::tree::{DocumentNode, NodeKind, TraversalEvent, Walk};
use crate::util::truncate_chars;

/// Maximum preview length in characters.
pub const PREVIEW_MAX_CHARS: usize = 256;

/// Title and preview of an article.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    /// Text of the leading heading.
    pub title: String,
    /// Text of the first paragraph after the heading, at most
    /// [`PREVIEW_MAX_CHARS`] characters.
    pub preview: String,
}

/// Extract title and preview from Markdown text.
///
/// # Example
///
/// ```
/// use mimeo_markdown::extract_summary;
///
/// let summary = extract_summary("# Hello *there*\nFirst paragraph.").unwrap();
/// assert_eq!(summary.title, "Hello there");
/// assert_eq!(summary.preview, "First paragraph.");
///
/// assert!(extract_summary("No heading here").is_err());
/// ```
pub fn extract_summary(markdown: &str) -> Result<Summary, ValidationError> {
    summarize(&DocumentNode::parse(markdown))
}

/// Extract title and preview from a parsed document.
pub fn summarize(document: &DocumentNode) -> Result<Summary, ValidationError> {
    let heading = document
        .first_child()
        .filter(|node| matches!(node.kind(), NodeKind::Heading(_)))
        .ok_or(ValidationError::MissingHeading)?;

    let mut state = SummaryState::default();
    let mut events = document.walk();

    // Position the walk on the heading's enter event.
    events
        .by_ref()
        .find(|event| matches!(event, TraversalEvent::Enter(node) if ptr::eq(*node, heading)))
        .ok_or(ValidationError::MissingHeading)?;

    tracing::debug!("Collecting article title");
    state.collect_title(&mut events, heading)?;

    let paragraph = events
        .by_ref()
        .find_map(|event| match event {
            TraversalEvent::Enter(node) if matches!(node.kind(), NodeKind::Paragraph) => {
                Some(node)
            }
            _ => None,
        })
        .ok_or(ValidationError::MissingParagraph)?;

    tracing::debug!("Collecting article preview");
    state.collect_preview(&mut events, paragraph)?;

    tracing::debug!(
        title = %state.title,
        preview_chars = state.preview_chars,
        "Article summary extracted"
    );
    Ok(state.into_summary())
}

/// Read-time teaser for a stored article.
///
/// Uses the same rule as [`extract_summary`]. Stored articles passed
/// validation, so a failure here is logged and yields `None`.
pub fn teaser(markdown: &str) -> Option<Summary> {
    match extract_summary(markdown) {
        Ok(summary) => Some(summary),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to derive teaser from stored article");
            None
        }
    }
}

/// State owned by a single extraction.
#[derive(Debug, Default)]
struct SummaryState {
    title: String,
    preview: String,
    preview_chars: usize,
}

impl SummaryState {
    /// Append text inside the heading until its exit.
    fn collect_title(
        &mut self,
        events: &mut Walk<'_>,
        heading: &DocumentNode,
    ) -> Result<(), ValidationError> {
        for event in events {
            match event {
                TraversalEvent::Enter(node) => {
                    if let NodeKind::Text(text) = node.kind() {
                        tracing::trace!(text = %text, "Append text to title");
                        self.title.push_str(text);
                    }
                }
                TraversalEvent::Exit(node) if ptr::eq(node, heading) => break,
                TraversalEvent::Exit(_) => {}
            }
        }

        if self.title.is_empty() {
            return Err(ValidationError::MissingHeading);
        }
        Ok(())
    }

    /// Append text inside the paragraph until its exit or the length cap.
    fn collect_preview(
        &mut self,
        events: &mut Walk<'_>,
        paragraph: &DocumentNode,
    ) -> Result<(), ValidationError> {
        for event in events {
            if self.preview_chars >= PREVIEW_MAX_CHARS {
                break;
            }
            match event {
                TraversalEvent::Enter(node) => {
                    if let NodeKind::Text(text) = node.kind() {
                        tracing::trace!(text = %text, "Append text to preview");
                        self.preview.push_str(text);
                        self.preview_chars += text.chars().count();
                    }
                }
                TraversalEvent::Exit(node) if ptr::eq(node, paragraph) => break,
                TraversalEvent::Exit(_) => {}
            }
        }

        truncate_chars(&mut self.preview, PREVIEW_MAX_CHARS);
        self.preview_chars = self.preview_chars.min(PREVIEW_MAX_CHARS);
        if self.preview.is_empty() {
            return Err(ValidationError::MissingParagraph);
        }
        Ok(())
    }

    fn into_summary(self) -> Summary {
        Summary {
            title: self.title,
            preview: self.preview,
        }
    }
}
