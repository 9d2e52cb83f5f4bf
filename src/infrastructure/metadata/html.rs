//! HTML metadata extraction.
//!
//! Parsing is done by `scraper`; traversal is a small recursive visitor over
//! the [`MarkupNode`] interface so the extraction rules do not depend on the
//! parser's own query API.

use ego_tree::NodeRef;
use scraper::{Html, Node};

use crate::domain::entities::PageMetadata;

/// The node kinds the extractor cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind<'a> {
    /// An element, by lowercase local name.
    Element(&'a str),
    Text(&'a str),
    /// Document roots, comments, doctypes and the like.
    Other,
}

/// Read-only view of a node in a parsed markup tree.
pub trait MarkupNode<'a>: Copy {
    fn node_kind(self) -> NodeKind<'a>;

    /// Attribute value by name, matched case-insensitively.
    fn attribute(self, name: &str) -> Option<&'a str>;

    /// Child nodes in document order.
    fn child_nodes(self) -> impl Iterator<Item = Self>;
}

impl<'a> MarkupNode<'a> for NodeRef<'a, Node> {
    fn node_kind(self) -> NodeKind<'a> {
        match self.value() {
            Node::Element(element) => NodeKind::Element(element.name()),
            Node::Text(text) => NodeKind::Text(&text.text),
            _ => NodeKind::Other,
        }
    }

    fn attribute(self, name: &str) -> Option<&'a str> {
        match self.value() {
            Node::Element(element) => element
                .attrs()
                .find(|(key, _)| key.eq_ignore_ascii_case(name))
                .map(|(_, value)| value),
            _ => None,
        }
    }

    fn child_nodes(self) -> impl Iterator<Item = Self> {
        NodeRef::children(&self)
    }
}

/// What the walker should do after visiting a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    Continue,
    SkipChildren,
    Stop,
}

pub trait Visitor<'a, N: MarkupNode<'a>> {
    fn visit(&mut self, node: N) -> Visit;
}

/// Depth-first, document-order walk. Returns [`Visit::Stop`] if the visitor
/// stopped early.
pub fn walk<'a, N, V>(node: N, visitor: &mut V) -> Visit
where
    N: MarkupNode<'a>,
    V: Visitor<'a, N>,
{
    match visitor.visit(node) {
        Visit::Stop => return Visit::Stop,
        Visit::SkipChildren => return Visit::Continue,
        Visit::Continue => {}
    }

    for child in node.child_nodes() {
        if walk(child, visitor) == Visit::Stop {
            return Visit::Stop;
        }
    }

    Visit::Continue
}

/// Concatenated text of every text node below `node`.
pub fn text_content<'a, N: MarkupNode<'a>>(node: N) -> String {
    struct TextCollector(String);

    impl<'a, N: MarkupNode<'a>> Visitor<'a, N> for TextCollector {
        fn visit(&mut self, node: N) -> Visit {
            if let NodeKind::Text(text) = node.node_kind() {
                self.0.push_str(text);
            }
            Visit::Continue
        }
    }

    let mut collector = TextCollector(String::new());
    walk(node, &mut collector);
    collector.0
}

/// Collects `<title>` and the description/keywords `<meta>` tags.
///
/// First non-empty match wins for every field.
#[derive(Debug, Default)]
struct HeadCollector {
    title: Option<String>,
    description: Option<String>,
    keywords: Option<String>,
}

impl HeadCollector {
    fn collect_meta<'a, N: MarkupNode<'a>>(&mut self, node: N) {
        let Some(content) = node.attribute("content") else {
            return;
        };
        let content = content.trim();
        if content.is_empty() {
            return;
        }

        let names = [node.attribute("name"), node.attribute("property")];
        for name in names.into_iter().flatten() {
            if is_description_name(name) && self.description.is_none() {
                self.description = Some(content.to_string());
            } else if name.eq_ignore_ascii_case("keywords") && self.keywords.is_none() {
                self.keywords = Some(content.to_string());
            }
        }
    }
}

impl<'a, N: MarkupNode<'a>> Visitor<'a, N> for HeadCollector {
    fn visit(&mut self, node: N) -> Visit {
        match node.node_kind() {
            NodeKind::Element(name) if name.eq_ignore_ascii_case("title") => {
                if self.title.is_none() {
                    let title = text_content(node);
                    let title = title.trim();
                    if !title.is_empty() {
                        self.title = Some(title.to_string());
                    }
                }
                Visit::SkipChildren
            }
            NodeKind::Element(name) if name.eq_ignore_ascii_case("meta") => {
                self.collect_meta(node);
                Visit::Continue
            }
            _ => Visit::Continue,
        }
    }
}

fn is_description_name(name: &str) -> bool {
    name.eq_ignore_ascii_case("description") || name.eq_ignore_ascii_case("og:description")
}

/// Text of the first `<h1>` with non-empty content.
#[derive(Debug, Default)]
struct FirstHeading(Option<String>);

impl<'a, N: MarkupNode<'a>> Visitor<'a, N> for FirstHeading {
    fn visit(&mut self, node: N) -> Visit {
        match node.node_kind() {
            NodeKind::Element(name) if name.eq_ignore_ascii_case("h1") => {
                let text = text_content(node);
                let text = text.trim();
                if text.is_empty() {
                    Visit::SkipChildren
                } else {
                    self.0 = Some(text.to_string());
                    Visit::Stop
                }
            }
            _ => Visit::Continue,
        }
    }
}

/// Extracts page metadata from any markup tree.
///
/// Title priority: `<title>`, then the first `<h1>`, then `source_url`.
pub fn extract_from_tree<'a, N: MarkupNode<'a>>(root: N, source_url: &str) -> PageMetadata {
    let mut head = HeadCollector::default();
    walk(root, &mut head);

    let title = head.title.or_else(|| {
        let mut heading = FirstHeading::default();
        walk(root, &mut heading);
        heading.0
    });

    PageMetadata {
        title: title.unwrap_or_else(|| source_url.to_string()),
        description: head.description.unwrap_or_default(),
        keywords: head.keywords.unwrap_or_default(),
        source_url: source_url.to_string(),
    }
}

/// Parses an HTML document and extracts its metadata.
pub fn parse_metadata(document: &str, source_url: &str) -> PageMetadata {
    let html = Html::parse_document(document);
    extract_from_tree(html.tree.root(), source_url)
}
