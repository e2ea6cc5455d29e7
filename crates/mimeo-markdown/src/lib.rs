//! Article Markdown rendering and summary extraction.
//!
//! This crate turns author-submitted CommonMark into the site's article HTML
//! and derives the title and preview shown on listing pages.
//!
//! # Architecture
//!
//! - [`DocumentNode`]: owned tree folded from the `pulldown-cmark` event stream,
//!   walked depth-first with [`DocumentNode::walk`]
//! - [`ArticleRenderer`]: single pass over the tree into one HTML buffer
//! - [`extract_summary`]: title from the leading heading, preview from the
//!   next paragraph
//! - [`validate_submission`]: size checks plus extraction for new articles
//!
//! Raw HTML in the input is passed through and nothing is escaped.
//!
//! # Example
//!
//! ```
//! use mimeo_markdown::{extract_summary, render};
//!
//! let markdown = "# Hello\n\nFirst paragraph.";
//! assert_eq!(render(markdown), "<h1>Hello</h1>\n<p>First paragraph.</p>\n");
//!
//! let summary = extract_summary(markdown).unwrap();
//! assert_eq!(summary.title, "Hello");
//! assert_eq!(summary.preview, "First paragraph.");
//! ```

mod error;
mod html;
mod renderer;
mod submission;
mod summary;
mod tree;
mod util;

pub use error::{SubmissionError, ValidationError};
pub use renderer::{ArticleRenderer, DEFAULT_IMAGE_CLASS, render};
pub use submission::{DEFAULT_MAX_BYTES, SubmissionLimits, validate_submission};
pub use summary::{PREVIEW_MAX_CHARS, Summary, extract_summary, summarize, teaser};
pub use tree::{Containerness, DocumentNode, ListStyle, NodeKind, TraversalEvent, Walk};
