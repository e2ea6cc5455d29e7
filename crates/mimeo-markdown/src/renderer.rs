//! Article renderer.
//!
//! One depth-first walk over the document tree, one output buffer, one flush.
//!
//! Block containers end with a newline after their closing tag. A paragraph
//! anywhere inside a list item writes no tags and no newline. Inline
//! containers (links, images, emphasis) write their closing markup only.

use std::fmt::Write;

use crate::html;
use crate::tree::{DocumentNode, ListStyle, NodeKind, TraversalEvent};

/// Default `class` attribute for rendered images.
pub const DEFAULT_IMAGE_CLASS: &str = "img-fluid";

/// Renders article Markdown into site HTML.
///
/// # Example
///
/// ```
/// use mimeo_markdown::ArticleRenderer;
///
/// let html = ArticleRenderer::new().render("# Header 1\n## Header 2");
/// assert_eq!(html, "<h1>Header 1</h1>\n<h2>Header 2</h2>\n");
/// ```
#[derive(Clone, Debug)]
pub struct ArticleRenderer {
    image_class: String,
}

impl ArticleRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            image_class: DEFAULT_IMAGE_CLASS.to_owned(),
        }
    }

    /// Set the `class` attribute written on every `<img>`.
    #[must_use]
    pub fn with_image_class(mut self, class: impl Into<String>) -> Self {
        self.image_class = class.into();
        self
    }

    #[must_use]
    pub fn image_class(&self) -> &str {
        &self.image_class
    }

    /// Parse and render Markdown text.
    #[must_use]
    pub fn render(&self, markdown: &str) -> String {
        self.render_document(&DocumentNode::parse(markdown))
    }

    /// Render an already parsed document.
    #[must_use]
    pub fn render_document(&self, document: &DocumentNode) -> String {
        let mut state = RenderState::new(&self.image_class);
        for event in document.walk() {
            state.process_event(event);
        }
        let html = state.finish();
        tracing::trace!(bytes = html.len(), "Rendered article");
        html
    }
}

impl Default for ArticleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// State owned by a single render call.
struct RenderState<'r> {
    output: String,
    /// Number of list items enclosing the current node.
    list_item_depth: usize,
    image_class: &'r str,
}

impl<'r> RenderState<'r> {
    fn new(image_class: &'r str) -> Self {
        Self {
            output: String::with_capacity(4096),
            list_item_depth: 0,
            image_class,
        }
    }

    fn process_event(&mut self, event: TraversalEvent<'_>) {
        match event {
            TraversalEvent::Enter(node) => self.enter(node.kind()),
            TraversalEvent::Exit(node) => self.exit(node.kind()),
        }
    }

    fn enter(&mut self, kind: &NodeKind) {
        match kind {
            NodeKind::Document | NodeKind::Other => {}
            NodeKind::Heading(level) => write!(self.output, "<h{level}>").unwrap(),
            NodeKind::Paragraph => {
                if !self.inside_list_item() {
                    self.output.push_str("<p>");
                }
            }
            NodeKind::List(ListStyle::Bullet) => self.output.push_str("<ul>\n"),
            NodeKind::List(ListStyle::Ordered) => self.output.push_str("<ol>\n"),
            NodeKind::Item => {
                self.list_item_depth += 1;
                self.output.push_str("<li>");
            }
            NodeKind::BlockQuote => self.output.push_str("<blockquote>"),
            NodeKind::Link { url, title } => {
                html::link_start(url, title.as_deref(), &mut self.output);
            }
            NodeKind::Image { url, title } => {
                html::image_start(self.image_class, url, title.as_deref(), &mut self.output);
            }
            NodeKind::Emphasis => self.output.push_str("<em>"),
            NodeKind::Strong => self.output.push_str("<strong>"),
            NodeKind::CodeBlock(literal) => html::code_block(literal, &mut self.output),
            NodeKind::Code(literal) => html::inline_code(literal, &mut self.output),
            NodeKind::HtmlBlock(literal)
            | NodeKind::HtmlInline(literal)
            | NodeKind::Text(literal) => self.output.push_str(literal),
            NodeKind::Linebreak => html::hard_break(&mut self.output),
            NodeKind::Softbreak => self.output.push(' '),
        }
    }

    fn exit(&mut self, kind: &NodeKind) {
        match kind {
            NodeKind::Heading(level) => {
                write!(self.output, "</h{level}>").unwrap();
                self.end_block();
            }
            NodeKind::Paragraph => {
                if !self.inside_list_item() {
                    self.output.push_str("</p>");
                    self.end_block();
                }
            }
            NodeKind::List(ListStyle::Bullet) => {
                self.output.push_str("</ul>");
                self.end_block();
            }
            NodeKind::List(ListStyle::Ordered) => {
                self.output.push_str("</ol>");
                self.end_block();
            }
            NodeKind::Item => {
                self.output.push_str("</li>");
                self.list_item_depth = self.list_item_depth.saturating_sub(1);
                self.end_block();
            }
            NodeKind::BlockQuote => {
                self.output.push_str("</blockquote>");
                self.end_block();
            }
            NodeKind::Other => self.end_block(),
            NodeKind::Link { .. } => self.output.push_str("</a>"),
            NodeKind::Image { .. } => html::image_end(&mut self.output),
            NodeKind::Emphasis => self.output.push_str("</em>"),
            NodeKind::Strong => self.output.push_str("</strong>"),
            NodeKind::Document
            | NodeKind::CodeBlock(_)
            | NodeKind::Code(_)
            | NodeKind::HtmlBlock(_)
            | NodeKind::HtmlInline(_)
            | NodeKind::Text(_)
            | NodeKind::Linebreak
            | NodeKind::Softbreak => {}
        }
    }

    fn inside_list_item(&self) -> bool {
        self.list_item_depth > 0
    }

    fn end_block(&mut self) {
        self.output.push('\n');
    }

    fn finish(self) -> String {
        self.output
    }
}

/// Render Markdown text with default settings.
#[must_use]
pub fn render(markdown: &str) -> String {
    ArticleRenderer::new().render(markdown)
}
