//! Normalized XML tree layer
//!
//! Wraps the structural parse so the rest of the parse pipeline sees a
//! deterministic tree shape:
//! - a pre-pass suspends markup inside `<lines>` spans, so malformed
//!   break tags and comment spans cannot break the structural parse
//! - child groups at the always-sequence paths keep sequence shape even
//!   with a single occurrence
//! - the schema text post-processor runs on the suspended paths
//!
//! The tree is internal; callers of the crate only ever see the song
//! model.

use std::borrow::Cow;
use std::collections::HashMap;
use std::slice;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::schema;

const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

/// A generic element node with its attributes and normalized content.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TreeNode {
    pub name: String,
    pub attributes: HashMap<String, String>,
    pub content: NodeContent,
}

/// Element content after normalization.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum NodeContent {
    Empty,
    Text(String),
    Children(HashMap<String, NodeShape>),
}

/// Shape of a same-named child group: a singleton, or an ordered
/// sequence. Groups at always-sequence paths are `Many` regardless of
/// occurrence count.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum NodeShape {
    One(TreeNode),
    Many(Vec<TreeNode>),
}

impl TreeNode {
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Singleton child lookup. A `Many` group yields its first entry.
    pub fn child(&self, name: &str) -> Option<&TreeNode> {
        match self.shape(name)? {
            NodeShape::One(node) => Some(node),
            NodeShape::Many(nodes) => nodes.first(),
        }
    }

    /// Sequence child lookup; a missing group is an empty slice and a
    /// singleton group is a slice of one.
    pub fn sequence(&self, name: &str) -> &[TreeNode] {
        match self.shape(name) {
            Some(NodeShape::One(node)) => slice::from_ref(node),
            Some(NodeShape::Many(nodes)) => nodes,
            None => &[],
        }
    }

    pub fn text(&self) -> Option<&str> {
        match &self.content {
            NodeContent::Text(text) => Some(text),
            _ => None,
        }
    }

    fn shape(&self, name: &str) -> Option<&NodeShape> {
        match &self.content {
            NodeContent::Children(children) => children.get(name),
            _ => None,
        }
    }
}

/// Paired `<lines>` spans. The tag name must be followed by whitespace
/// or the tag end, so names merely starting with "lines" never match;
/// the first alternative skips self-closed spans so their replacement
/// never swallows a following one.
static LINES_SPAN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)<lines(?:\s[^<>]*)?/>|(<lines(?:\s[^<>]*)?>)(.*?)(</lines\s*>)")
        .expect("valid lines-span pattern")
});

/// Entity-escapes the inner span of every paired `<lines>` element so
/// the structural parser treats it as raw text. Line content may hold
/// break markup that is not well-formed enough to survive element
/// parsing; the schema post-processor handles it after this pass.
pub(crate) fn suspend_line_markup(xml: &str) -> Cow<'_, str> {
    LINES_SPAN.replace_all(xml, |caps: &Captures| {
        match (caps.get(1), caps.get(2), caps.get(3)) {
            (Some(open), Some(body), Some(close)) => format!(
                "{}{}{}",
                open.as_str(),
                escape_text(body.as_str()),
                close.as_str()
            ),
            // Self-closed <lines/>: nothing to suspend
            _ => caps[0].to_string(),
        }
    })
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Converts a parsed document into the normalized owned tree, rooted at
/// the document element.
pub(crate) fn from_document(doc: &roxmltree::Document) -> TreeNode {
    convert(doc.root_element(), "")
}

fn convert(node: roxmltree::Node, parent_path: &str) -> TreeNode {
    let name = node.tag_name().name().to_string();
    let path = if parent_path.is_empty() {
        name.clone()
    } else {
        format!("{parent_path}.{name}")
    };

    let attributes = node
        .attributes()
        .map(|attr| (qualified_attr_name(&attr), attr.value().to_string()))
        .collect();

    let element_children: Vec<roxmltree::Node> =
        node.children().filter(|child| child.is_element()).collect();

    let content = if element_children.is_empty() {
        match node_text(node, &path) {
            Some(text) => NodeContent::Text(text),
            None => NodeContent::Empty,
        }
    } else {
        // Grouped by tag name; document order is preserved within each
        // group, which is where sequence order matters.
        let mut grouped: HashMap<String, Vec<TreeNode>> = HashMap::new();
        for child in element_children {
            let converted = convert(child, &path);
            grouped
                .entry(converted.name.clone())
                .or_default()
                .push(converted);
        }

        let children = grouped
            .into_iter()
            .map(|(tag, mut group)| {
                let child_path = format!("{path}.{tag}");
                let shape = if group.len() == 1 && !schema::is_sequence_path(&child_path) {
                    NodeShape::One(group.remove(0))
                } else {
                    NodeShape::Many(group)
                };
                (tag, shape)
            })
            .collect();
        NodeContent::Children(children)
    };

    TreeNode {
        name,
        attributes,
        content,
    }
}

/// Attributes in the `xml` namespace keep their prefix (`xml:lang`);
/// everything else is unprefixed in OpenLyrics documents.
fn qualified_attr_name(attr: &roxmltree::Attribute) -> String {
    if attr.namespace() == Some(XML_NAMESPACE) {
        format!("xml:{}", attr.name())
    } else {
        attr.name().to_string()
    }
}

fn node_text(node: roxmltree::Node, path: &str) -> Option<String> {
    let raw: String = node
        .children()
        .filter_map(|child| if child.is_text() { child.text() } else { None })
        .collect();
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match schema::process_node_text(path, trimmed) {
        Some(processed) => Some(processed),
        None => Some(trimmed.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suspension_escapes_paired_lines_spans() {
        let xml = "<lyrics><verse name=\"v1\"><lines>one<br>two</lines></verse></lyrics>";
        let suspended = suspend_line_markup(xml);
        assert_eq!(
            suspended,
            "<lyrics><verse name=\"v1\"><lines>one&lt;br&gt;two</lines></verse></lyrics>"
        );
    }

    #[test]
    fn suspension_leaves_self_closed_lines_alone() {
        let xml = "<verse><lines/><lines>a<br>b</lines></verse>";
        let suspended = suspend_line_markup(xml);
        assert_eq!(suspended, "<verse><lines/><lines>a&lt;br&gt;b</lines></verse>");
    }

    #[test]
    fn suspension_preserves_lines_attributes() {
        let xml = "<lines part=\"men\">a &amp; b</lines>";
        let suspended = suspend_line_markup(xml);
        assert_eq!(suspended, "<lines part=\"men\">a &amp;amp; b</lines>");
    }

    #[test]
    fn suspension_ignores_tags_merely_starting_with_lines() {
        let xml = "<linesGroup><entry>a</entry></linesGroup>";
        let suspended = suspend_line_markup(xml);
        assert_eq!(suspended, xml);
    }

    #[test]
    fn single_occurrence_on_sequence_path_keeps_sequence_shape() {
        let xml = "<song><properties><titles><title>One</title></titles></properties></song>";
        let doc = roxmltree::Document::parse(xml).unwrap();
        let tree = from_document(&doc);
        let titles = tree
            .child("properties")
            .and_then(|props| props.child("titles"))
            .unwrap();
        match titles.shape("title") {
            Some(NodeShape::Many(nodes)) => assert_eq!(nodes.len(), 1),
            other => panic!("expected Many shape for title group, got {other:?}"),
        }
    }

    #[test]
    fn single_occurrence_off_sequence_path_is_singleton() {
        let xml = "<song><properties/></song>";
        let doc = roxmltree::Document::parse(xml).unwrap();
        let tree = from_document(&doc);
        match tree.shape("properties") {
            Some(NodeShape::One(_)) => {}
            other => panic!("expected One shape for properties, got {other:?}"),
        }
    }
}
