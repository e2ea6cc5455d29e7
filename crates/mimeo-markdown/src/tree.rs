//! Document tree built from the CommonMark event stream.
//!
//! `pulldown-cmark` yields a flat stream of start/end events. Both the renderer
//! and the summary extractor work on an owned [`DocumentNode`] tree instead, where
//! every node kind has a fixed [`Containerness`]:
//!
//! - containers yield [`TraversalEvent::Enter`] and, after their children,
//!   [`TraversalEvent::Exit`]
//! - leaves yield [`TraversalEvent::Enter`] only
//!
//! Code blocks and HTML blocks arrive from the parser as tags wrapping text
//! events; the builder folds them into single leaves carrying the joined literal.
//! Inline content of a tight list item is wrapped in a paragraph, so tight and
//! loose items share one shape.

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, TagEnd};

use crate::util::heading_level_to_num;

/// List marker style.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListStyle {
    /// `*`, `-` or `+` markers.
    Bullet,
    /// `1.` or `1)` markers.
    Ordered,
}

/// Whether a node kind can own children.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Containerness {
    /// Owns descendants; visited on enter and exit.
    Container,
    /// Has no descendants; visited on enter only.
    Leaf,
}

/// Node kind with its kind-specific attributes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Document,
    /// ATX or setext heading, level 1-6.
    Heading(u8),
    Paragraph,
    List(ListStyle),
    Item,
    BlockQuote,
    Link {
        url: String,
        title: Option<String>,
    },
    /// Image; its children carry the alt text.
    Image {
        url: String,
        title: Option<String>,
    },
    Emphasis,
    Strong,
    /// Indented or fenced code block with its full literal.
    CodeBlock(String),
    /// Inline code span.
    Code(String),
    HtmlBlock(String),
    HtmlInline(String),
    Text(String),
    /// Hard line break.
    Linebreak,
    /// Soft line break.
    Softbreak,
    /// Any container the renderer has no markup for.
    Other,
}

impl NodeKind {
    /// Container/leaf classification of this kind.
    #[must_use]
    pub fn containerness(&self) -> Containerness {
        match self {
            Self::Document
            | Self::Heading(_)
            | Self::Paragraph
            | Self::List(_)
            | Self::Item
            | Self::BlockQuote
            | Self::Link { .. }
            | Self::Image { .. }
            | Self::Emphasis
            | Self::Strong
            | Self::Other => Containerness::Container,
            Self::CodeBlock(_)
            | Self::Code(_)
            | Self::HtmlBlock(_)
            | Self::HtmlInline(_)
            | Self::Text(_)
            | Self::Linebreak
            | Self::Softbreak => Containerness::Leaf,
        }
    }

    /// Returns `true` for container kinds.
    #[must_use]
    pub fn is_container(&self) -> bool {
        self.containerness() == Containerness::Container
    }

    /// Returns `true` for kinds that only occur inside a block.
    #[must_use]
    pub fn is_inline(&self) -> bool {
        matches!(
            self,
            Self::Link { .. }
                | Self::Image { .. }
                | Self::Emphasis
                | Self::Strong
                | Self::Code(_)
                | Self::HtmlInline(_)
                | Self::Text(_)
                | Self::Linebreak
                | Self::Softbreak
        )
    }

    /// Short kind name for diagnostics.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Document => "document",
            Self::Heading(_) => "heading",
            Self::Paragraph => "paragraph",
            Self::List(_) => "list",
            Self::Item => "item",
            Self::BlockQuote => "block_quote",
            Self::Link { .. } => "link",
            Self::Image { .. } => "image",
            Self::Emphasis => "emph",
            Self::Strong => "strong",
            Self::CodeBlock(_) => "code_block",
            Self::Code(_) => "code",
            Self::HtmlBlock(_) => "html_block",
            Self::HtmlInline(_) => "html_inline",
            Self::Text(_) => "text",
            Self::Linebreak => "linebreak",
            Self::Softbreak => "softbreak",
            Self::Other => "other",
        }
    }
}

/// Node of a parsed Markdown document.
///
/// Trees are immutable once built. Children of a leaf are never visited.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentNode {
    kind: NodeKind,
    children: Vec<DocumentNode>,
}

impl DocumentNode {
    /// Create a node from its kind and children.
    #[must_use]
    pub fn new(kind: NodeKind, children: Vec<DocumentNode>) -> Self {
        Self { kind, children }
    }

    /// Create a node without children.
    #[must_use]
    pub fn leaf(kind: NodeKind) -> Self {
        Self::new(kind, Vec::new())
    }

    /// Parse CommonMark text into a document tree.
    ///
    /// No extensions are enabled: tables, footnotes, strikethrough and the
    /// rest of the GFM set are read as plain CommonMark.
    #[must_use]
    pub fn parse(markdown: &str) -> Self {
        Self::from_events(Parser::new_ext(markdown, Options::empty()))
    }

    /// Build a document tree from parser events.
    ///
    /// Containers left open by a truncated stream are closed at the end.
    pub fn from_events<'a, I>(events: I) -> Self
    where
        I: IntoIterator<Item = Event<'a>>,
    {
        let mut builder = TreeBuilder::new();
        for event in events {
            builder.process_event(event);
        }
        builder.finish()
    }

    #[must_use]
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    #[must_use]
    pub fn children(&self) -> &[DocumentNode] {
        &self.children
    }

    #[must_use]
    pub fn first_child(&self) -> Option<&DocumentNode> {
        self.children.first()
    }

    #[must_use]
    pub fn is_container(&self) -> bool {
        self.kind.is_container()
    }

    /// Depth-first pre/post-order traversal starting at this node.
    #[must_use]
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            root: Some(self),
            stack: Vec::new(),
        }
    }
}

/// Event produced by [`Walk`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TraversalEvent<'a> {
    /// First visit, before any children.
    Enter(&'a DocumentNode),
    /// After all children. Containers only.
    Exit(&'a DocumentNode),
}

impl<'a> TraversalEvent<'a> {
    /// The node this event refers to.
    #[must_use]
    pub fn node(&self) -> &'a DocumentNode {
        match *self {
            Self::Enter(node) | Self::Exit(node) => node,
        }
    }
}

/// Stack-based depth-first walk over a [`DocumentNode`] subtree.
#[derive(Debug)]
pub struct Walk<'a> {
    root: Option<&'a DocumentNode>,
    /// Open containers with the index of their next unvisited child.
    stack: Vec<(&'a DocumentNode, usize)>,
}

impl<'a> Walk<'a> {
    fn enter(&mut self, node: &'a DocumentNode) -> TraversalEvent<'a> {
        if node.is_container() {
            self.stack.push((node, 0));
        }
        TraversalEvent::Enter(node)
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = TraversalEvent<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(root) = self.root.take() {
            return Some(self.enter(root));
        }

        let (parent, cursor) = self.stack.last_mut()?;
        let parent: &'a DocumentNode = *parent;
        if let Some(child) = parent.children.get(*cursor) {
            *cursor += 1;
            Some(self.enter(child))
        } else {
            self.stack.pop();
            Some(TraversalEvent::Exit(parent))
        }
    }
}

/// Block whose text events are folded into one leaf literal.
#[derive(Clone, Copy, Debug)]
enum LiteralBlock {
    Code,
    Html,
}

/// Folds the flat parser event stream into a [`DocumentNode`] tree.
struct TreeBuilder {
    /// Open containers; the document root sits at the bottom.
    stack: Vec<DocumentNode>,
    literal: Option<(LiteralBlock, String)>,
    /// A paragraph opened for the inline content of a tight list item.
    tight_paragraph: bool,
}

impl TreeBuilder {
    fn new() -> Self {
        Self {
            stack: vec![DocumentNode::leaf(NodeKind::Document)],
            literal: None,
            tight_paragraph: false,
        }
    }

    fn process_event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start_tag(tag),
            Event::End(tag) => self.end_tag(tag),
            Event::Text(text) => self.literal_or_leaf(text, NodeKind::Text),
            Event::Html(html) => self.literal_or_leaf(html, NodeKind::HtmlBlock),
            Event::Code(code) => self.push_leaf(NodeKind::Code(code.into_string())),
            Event::InlineHtml(html) => self.push_leaf(NodeKind::HtmlInline(html.into_string())),
            Event::SoftBreak => self.push_leaf(NodeKind::Softbreak),
            Event::HardBreak => self.push_leaf(NodeKind::Linebreak),
            Event::Rule
            | Event::TaskListMarker(_)
            | Event::FootnoteReference(_)
            | Event::InlineMath(_)
            | Event::DisplayMath(_) => {
                // No node kind; dropped
            }
        }
    }

    fn start_tag(&mut self, tag: Tag<'_>) {
        let kind = match tag {
            Tag::CodeBlock(_) => {
                self.end_tight_paragraph();
                self.literal = Some((LiteralBlock::Code, String::new()));
                return;
            }
            Tag::HtmlBlock => {
                self.end_tight_paragraph();
                self.literal = Some((LiteralBlock::Html, String::new()));
                return;
            }
            Tag::Paragraph => NodeKind::Paragraph,
            Tag::Heading { level, .. } => NodeKind::Heading(heading_level_to_num(level)),
            Tag::BlockQuote(_) => NodeKind::BlockQuote,
            Tag::List(start) => NodeKind::List(if start.is_some() {
                ListStyle::Ordered
            } else {
                ListStyle::Bullet
            }),
            Tag::Item => NodeKind::Item,
            Tag::Emphasis => NodeKind::Emphasis,
            Tag::Strong => NodeKind::Strong,
            Tag::Link {
                dest_url, title, ..
            } => NodeKind::Link {
                url: dest_url.into_string(),
                title: non_empty(title),
            },
            Tag::Image {
                dest_url, title, ..
            } => NodeKind::Image {
                url: dest_url.into_string(),
                title: non_empty(title),
            },
            _ => NodeKind::Other,
        };
        self.enter_block_or_inline(&kind);
        self.stack.push(DocumentNode::leaf(kind));
    }

    fn end_tag(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::CodeBlock | TagEnd::HtmlBlock => {
                if let Some((block, literal)) = self.literal.take() {
                    self.push_leaf(match block {
                        LiteralBlock::Code => NodeKind::CodeBlock(literal),
                        LiteralBlock::Html => NodeKind::HtmlBlock(literal),
                    });
                }
            }
            TagEnd::Item => {
                self.end_tight_paragraph();
                self.close();
            }
            _ => self.close(),
        }
    }

    fn literal_or_leaf(&mut self, text: CowStr<'_>, leaf: fn(String) -> NodeKind) {
        match self.literal.as_mut() {
            Some((_, literal)) => literal.push_str(&text),
            None => self.push_leaf(leaf(text.into_string())),
        }
    }

    /// Close the innermost open container. The document root is never closed.
    fn close(&mut self) {
        if self.stack.len() > 1
            && let Some(node) = self.stack.pop()
        {
            self.push_child(node);
        }
    }

    fn push_leaf(&mut self, kind: NodeKind) {
        self.enter_block_or_inline(&kind);
        self.push_child(DocumentNode::leaf(kind));
    }

    /// Inline content directly under an item gets a paragraph, as in loose
    /// lists; the next block in the item closes it.
    fn enter_block_or_inline(&mut self, kind: &NodeKind) {
        if !kind.is_inline() {
            self.end_tight_paragraph();
        } else if !self.tight_paragraph
            && matches!(self.stack.last().map(DocumentNode::kind), Some(NodeKind::Item))
        {
            self.stack.push(DocumentNode::leaf(NodeKind::Paragraph));
            self.tight_paragraph = true;
        }
    }

    fn end_tight_paragraph(&mut self) {
        if self.tight_paragraph {
            self.tight_paragraph = false;
            self.close();
        }
    }

    fn push_child(&mut self, node: DocumentNode) {
        if let Some(parent) = self.stack.last_mut() {
            parent.children.push(node);
        }
    }

    fn finish(mut self) -> DocumentNode {
        if let Some((block, literal)) = self.literal.take() {
            self.push_leaf(match block {
                LiteralBlock::Code => NodeKind::CodeBlock(literal),
                LiteralBlock::Html => NodeKind::HtmlBlock(literal),
            });
        }
        while self.stack.len() > 1 {
            self.close();
        }
        self.stack
            .pop()
            .unwrap_or_else(|| DocumentNode::leaf(NodeKind::Document))
    }
}

fn non_empty(value: CowStr<'_>) -> Option<String> {
    (!value.is_empty()).then(|| value.into_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(literal: &str) -> DocumentNode {
        DocumentNode::leaf(NodeKind::Text(literal.to_owned()))
    }

    /// Render a walk as `+kind` / `-kind` tokens.
    fn trace(node: &DocumentNode) -> Vec<String> {
        node.walk()
            .map(|event| match event {
                TraversalEvent::Enter(n) => format!("+{}", n.kind().name()),
                TraversalEvent::Exit(n) => format!("-{}", n.kind().name()),
            })
            .collect()
    }

    #[test]
    fn test_containerness_classification() {
        let containers = [
            NodeKind::Document,
            NodeKind::Heading(1),
            NodeKind::Paragraph,
            NodeKind::List(ListStyle::Bullet),
            NodeKind::Item,
            NodeKind::BlockQuote,
            NodeKind::Link {
                url: String::new(),
                title: None,
            },
            NodeKind::Image {
                url: String::new(),
                title: None,
            },
            NodeKind::Other,
        ];
        let leaves = [
            NodeKind::CodeBlock(String::new()),
            NodeKind::Code(String::new()),
            NodeKind::HtmlBlock(String::new()),
            NodeKind::HtmlInline(String::new()),
            NodeKind::Text(String::new()),
            NodeKind::Linebreak,
        ];
        for kind in &containers {
            assert_eq!(kind.containerness(), Containerness::Container, "{kind:?}");
        }
        for kind in &leaves {
            assert_eq!(kind.containerness(), Containerness::Leaf, "{kind:?}");
        }
    }

    #[test]
    fn test_walk_leaf_has_no_exit() {
        let leaf = text("hello");
        let events: Vec<_> = leaf.walk().collect();
        assert_eq!(events, vec![TraversalEvent::Enter(&leaf)]);
    }

    #[test]
    fn test_walk_empty_container_enters_and_exits() {
        let node = DocumentNode::leaf(NodeKind::Paragraph);
        assert_eq!(trace(&node), vec!["+paragraph", "-paragraph"]);
    }

    #[test]
    fn test_walk_pre_post_order() {
        let doc = DocumentNode::new(
            NodeKind::Document,
            vec![
                DocumentNode::new(NodeKind::Heading(1), vec![text("Title")]),
                DocumentNode::new(
                    NodeKind::Paragraph,
                    vec![
                        text("a "),
                        DocumentNode::new(NodeKind::Emphasis, vec![text("b")]),
                    ],
                ),
            ],
        );
        assert_eq!(
            trace(&doc),
            vec![
                "+document",
                "+heading",
                "+text",
                "-heading",
                "+paragraph",
                "+text",
                "+emph",
                "+text",
                "-emph",
                "-paragraph",
                "-document",
            ]
        );
    }

    #[test]
    fn test_walk_ignores_children_of_leaf() {
        let odd = DocumentNode::new(NodeKind::Text("x".to_owned()), vec![text("hidden")]);
        assert_eq!(trace(&odd), vec!["+text"]);
    }

    #[test]
    fn test_event_node() {
        let leaf = text("x");
        assert_eq!(TraversalEvent::Enter(&leaf).node(), &leaf);
        assert_eq!(TraversalEvent::Exit(&leaf).node(), &leaf);
    }

    #[test]
    fn test_parse_headings() {
        let doc = DocumentNode::parse("# Header 1\n## Header 2");
        assert_eq!(
            doc,
            DocumentNode::new(
                NodeKind::Document,
                vec![
                    DocumentNode::new(NodeKind::Heading(1), vec![text("Header 1")]),
                    DocumentNode::new(NodeKind::Heading(2), vec![text("Header 2")]),
                ],
            )
        );
    }

    #[test]
    fn test_parse_list_styles() {
        let doc = DocumentNode::parse("1. One\n\n* Two");
        let kinds: Vec<_> = doc.children().iter().map(DocumentNode::kind).collect();
        assert_eq!(
            kinds,
            vec![
                &NodeKind::List(ListStyle::Ordered),
                &NodeKind::List(ListStyle::Bullet),
            ]
        );
    }

    #[test]
    fn test_parse_tight_item_wraps_inlines_in_paragraph() {
        let doc = DocumentNode::parse("* item *text*");
        assert_eq!(
            trace(&doc),
            vec![
                "+document",
                "+list",
                "+item",
                "+paragraph",
                "+text",
                "+emph",
                "+text",
                "-emph",
                "-paragraph",
                "-item",
                "-list",
                "-document",
            ]
        );
    }

    #[test]
    fn test_parse_tight_and_loose_items_share_shape() {
        let tight = DocumentNode::parse("* a\n* b");
        let loose = DocumentNode::parse("* a\n\n* b");
        assert_eq!(trace(&tight), trace(&loose));
    }

    #[test]
    fn test_parse_tight_paragraph_closes_before_nested_list() {
        let doc = DocumentNode::parse("* outer\n  * inner");
        assert_eq!(
            trace(&doc),
            vec![
                "+document",
                "+list",
                "+item",
                "+paragraph",
                "+text",
                "-paragraph",
                "+list",
                "+item",
                "+paragraph",
                "+text",
                "-paragraph",
                "-item",
                "-list",
                "-item",
                "-list",
                "-document",
            ]
        );
    }

    #[test]
    fn test_parse_code_block_is_single_leaf() {
        let doc = DocumentNode::parse("```\nline 1\nline 2\n```");
        assert_eq!(
            doc.children(),
            &[DocumentNode::leaf(NodeKind::CodeBlock(
                "line 1\nline 2\n".to_owned()
            ))]
        );
    }

    #[test]
    fn test_parse_html_block_is_single_leaf() {
        let doc = DocumentNode::parse("<div>\nhello\n</div>\n");
        assert_eq!(
            doc.children(),
            &[DocumentNode::leaf(NodeKind::HtmlBlock(
                "<div>\nhello\n</div>\n".to_owned()
            ))]
        );
    }

    #[test]
    fn test_parse_link_and_image_attributes() {
        let doc = DocumentNode::parse("[a](/x \"T\") ![b](y.png)");
        let paragraph = doc.first_child().unwrap();
        let link = &paragraph.children()[0];
        assert_eq!(
            link.kind(),
            &NodeKind::Link {
                url: "/x".to_owned(),
                title: Some("T".to_owned()),
            }
        );
        let image = paragraph
            .children()
            .iter()
            .find(|n| matches!(n.kind(), NodeKind::Image { .. }))
            .unwrap();
        assert_eq!(
            image.kind(),
            &NodeKind::Image {
                url: "y.png".to_owned(),
                title: None,
            }
        );
        assert_eq!(image.children(), &[text("b")]);
    }

    #[test]
    fn test_parse_breaks() {
        let doc = DocumentNode::parse("one  \ntwo\nthree");
        let kinds: Vec<_> = doc
            .first_child()
            .unwrap()
            .children()
            .iter()
            .map(|n| n.kind().name())
            .collect();
        assert_eq!(
            kinds,
            vec!["text", "linebreak", "text", "softbreak", "text"]
        );
    }

    #[test]
    fn test_parse_drops_thematic_break() {
        let doc = DocumentNode::parse("---");
        assert!(doc.children().is_empty());
    }

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(
            DocumentNode::parse(""),
            DocumentNode::leaf(NodeKind::Document)
        );
    }

    #[test]
    fn test_from_events_closes_truncated_stream() {
        let events = vec![
            Event::Start(Tag::Paragraph),
            Event::Text("dangling".into()),
        ];
        let doc = DocumentNode::from_events(events);
        assert_eq!(
            doc.children(),
            &[DocumentNode::new(NodeKind::Paragraph, vec![text("dangling")])]
        );
    }
}
