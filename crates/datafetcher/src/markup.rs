//! A small markup tree that keeps nesting exactly as written.
//!
//! Catalog pages nest an `href` anchor inside each entry anchor. A conforming
//! HTML5 tree builder re-parents such content, so the tree is built here from
//! raw tag events instead and the rest of the crate only sees [`MarkupNode`].

use quick_xml::{
    Reader,
    escape::resolve_html5_entity,
    events::{BytesStart, Event},
};
use std::{borrow::Cow, str::FromStr};

/// Elements that never have children or a closing tag
const VOID_ELEMENTS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

/// Formatting elements whose text flows on with the surrounding run
const PHRASING_ELEMENTS: [&str; 14] = [
    "abbr", "b", "cite", "code", "em", "font", "i", "small", "span", "strong", "sub", "sup",
    "tt", "u",
];

/// The view of a parsed node that course detection needs
pub trait MarkupNode: Sized {
    /// Lowercase tag name, or `None` for text and the document root
    fn tag_name(&self) -> Option<&str>;

    /// Value of an attribute, looked up by lowercase name
    fn attr(&self, name: &str) -> Option<&str>;

    /// Child nodes in document order, text nodes included
    fn children(&self) -> Vec<Self>;

    /// Concatenated text of this node and all of its descendants
    fn text(&self) -> String;

    /// Text of this node broken into runs wherever a line break or a
    /// non-phrasing element (a paragraph, a link, ...) starts or ends
    ///
    /// Blank runs are left out.
    fn text_runs(&self) -> Vec<String>;

    fn first_child(&self) -> Option<Self> {
        self.children().into_iter().next()
    }

    fn is_element(&self, tag: &str) -> bool {
        self.tag_name() == Some(tag)
    }
}

#[derive(Debug, Clone)]
enum NodeData {
    Root,
    Element {
        name: String,
        attrs: Vec<(String, String)>,
    },
    Text(String),
}

#[derive(Debug, Clone)]
struct Node {
    data: NodeData,
    children: Vec<usize>,
}

/// A parsed markup document
///
/// Nodes live in one arena in the order their opening tags appear, so index
/// order is document (pre-)order.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
}

/// A borrowed handle to one node of a [`Document`]
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'a> {
    document: &'a Document,
    id: usize,
}

fn lowercase(name: &[u8]) -> String {
    String::from_utf8_lossy(name).to_ascii_lowercase()
}

fn element(tag: &BytesStart<'_>) -> NodeData {
    let attrs = tag
        .html_attributes()
        .filter_map(Result::ok)
        .map(|attr| {
            let value = attr
                .unescape_value()
                .map(Cow::into_owned)
                .unwrap_or_else(|_| String::from_utf8_lossy(&attr.value).into_owned());
            (lowercase(attr.key.as_ref()), value)
        })
        .collect();

    NodeData::Element {
        name: lowercase(tag.name().as_ref()),
        attrs,
    }
}

impl Document {
    /// Parses markup leniently
    ///
    /// Void elements never take children, an end tag closes the nearest open
    /// element with the same name (or is ignored), and unclosed elements are
    /// closed at the end of the input. Comments, doctypes and processing
    /// instructions are dropped.
    ///
    /// # Returns
    /// The document, or the tokenizer error for markup that cannot be read at all
    pub fn parse(markup: &str) -> Result<Self, quick_xml::Error> {
        let mut reader = Reader::from_str(markup);
        reader.config_mut().check_end_names = false;

        let mut document = Document {
            nodes: vec![Node {
                data: NodeData::Root,
                children: Vec::new(),
            }],
        };
        let mut open = vec![0];

        loop {
            let parent = open.last().copied().unwrap_or(0);
            match reader.read_event()? {
                Event::Start(tag) => {
                    let data = element(&tag);
                    let void = matches!(&data, NodeData::Element { name, .. } if VOID_ELEMENTS.contains(&name.as_str()));
                    let id = document.append(parent, data);
                    if !void {
                        open.push(id);
                    }
                }
                Event::Empty(tag) => {
                    document.append(parent, element(&tag));
                }
                Event::End(tag) => {
                    let name = lowercase(tag.name().as_ref());
                    if let Some(position) = open.iter().rposition(|&id| document.is_named(id, &name)) {
                        open.truncate(position);
                    }
                }
                Event::Text(text) => {
                    let text = text
                        .unescape_with(resolve_html5_entity)
                        .map(Cow::into_owned)
                        .unwrap_or_else(|_| String::from_utf8_lossy(&text).into_owned());
                    document.append_text(parent, text);
                }
                Event::CData(data) => {
                    document.append_text(parent, String::from_utf8_lossy(&data).into_owned());
                }
                Event::Eof => break,
                _ => {}
            }
        }

        Ok(document)
    }

    /// The synthetic node holding the top-level nodes
    pub fn root(&self) -> NodeRef<'_> {
        NodeRef {
            document: self,
            id: 0,
        }
    }

    fn append(&mut self, parent: usize, data: NodeData) -> usize {
        let id = self.nodes.len();
        self.nodes.push(Node {
            data,
            children: Vec::new(),
        });
        self.nodes[parent].children.push(id);
        id
    }

    fn append_text(&mut self, parent: usize, text: String) {
        if !text.is_empty() {
            self.append(parent, NodeData::Text(text));
        }
    }

    fn is_named(&self, id: usize, tag: &str) -> bool {
        matches!(&self.nodes[id].data, NodeData::Element { name, .. } if name == tag)
    }
}

impl FromStr for Document {
    type Err = quick_xml::Error;

    fn from_str(markup: &str) -> Result<Self, Self::Err> {
        Self::parse(markup)
    }
}

impl<'a> NodeRef<'a> {
    fn node(&self) -> &'a Node {
        &self.document.nodes[self.id]
    }

    fn collect_text(&self, out: &mut String) {
        match &self.node().data {
            NodeData::Text(text) => out.push_str(text),
            _ => {
                for child in self.children() {
                    child.collect_text(out);
                }
            }
        }
    }

    fn collect_runs(&self, runs: &mut Vec<String>) {
        match &self.node().data {
            NodeData::Text(text) => match runs.last_mut() {
                Some(run) => run.push_str(text),
                None => runs.push(text.clone()),
            },
            NodeData::Element { name, .. } if PHRASING_ELEMENTS.contains(&name.as_str()) => {
                for child in self.children() {
                    child.collect_runs(runs);
                }
            }
            _ => {
                runs.push(String::new());
                for child in self.children() {
                    child.collect_runs(runs);
                }
                runs.push(String::new());
            }
        }
    }
}

impl MarkupNode for NodeRef<'_> {
    fn tag_name(&self) -> Option<&str> {
        match &self.node().data {
            NodeData::Element { name, .. } => Some(name),
            _ => None,
        }
    }

    fn attr(&self, name: &str) -> Option<&str> {
        match &self.node().data {
            NodeData::Element { attrs, .. } => attrs
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.as_str()),
            _ => None,
        }
    }

    fn children(&self) -> Vec<Self> {
        self.node()
            .children
            .iter()
            .map(|&id| NodeRef {
                document: self.document,
                id,
            })
            .collect()
    }

    fn text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn text_runs(&self) -> Vec<String> {
        let mut runs = Vec::new();
        self.collect_runs(&mut runs);
        runs.retain(|run| !run.trim().is_empty());
        runs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(node: &NodeRef<'_>) -> Vec<String> {
        node.children()
            .iter()
            .map(|child| child.tag_name().unwrap_or("#text").to_string())
            .collect()
    }

    #[test]
    fn test_nested_anchor_keeps_nesting() {
        let document = Document::parse(
            r#"<a name="cse120"><p><b>CSE 120</b><br/>Text<a href="x">details</a></p></a>"#,
        )
        .unwrap();

        let anchor = document.root().first_child().unwrap();
        assert_eq!(anchor.tag_name(), Some("a"));
        assert_eq!(anchor.attr("name"), Some("cse120"));
        assert_eq!(tags(&anchor), ["p"]);

        let paragraph = anchor.first_child().unwrap();
        assert_eq!(tags(&paragraph), ["b", "br", "#text", "a"]);
        assert_eq!(anchor.text(), "CSE 120Textdetails");
    }

    #[test]
    fn test_void_elements_take_no_children() {
        let document = Document::parse("<p>one<br>two<img src=x.png>three</p>").unwrap();
        let paragraph = document.root().first_child().unwrap();
        assert_eq!(tags(&paragraph), ["#text", "br", "#text", "img", "#text"]);
    }

    #[test]
    fn test_unbalanced_end_tags() {
        let document = Document::parse("<div><p>open paragraph</div><span>after</span></i>").unwrap();
        assert_eq!(tags(&document.root()), ["div", "span"]);
    }

    #[test]
    fn test_entities_and_case() {
        let document = Document::parse(r#"<A NAME="x">R&amp;D&nbsp;101</A>"#).unwrap();
        let anchor = document.root().first_child().unwrap();
        assert!(anchor.is_element("a"));
        assert_eq!(anchor.attr("name"), Some("x"));
        assert_eq!(anchor.text(), "R&D\u{a0}101");
    }

    #[test]
    fn test_parse_from_str() {
        let document: Document = "<div><a name=\"1\"></a></div><a name=\"2\"></a>"
            .parse()
            .unwrap();
        assert_eq!(tags(&document.root()), ["div", "a"]);
    }

    #[test]
    fn test_text_runs_break_at_lines_and_links() {
        let document = Document::parse(
            r#"<a name="x"><p><b>CSE 143 Title (5)</b> text <i>more</i><br>Prerequisite: CSE 142<a href="y">View: CSE 311</a></p></a>"#,
        )
        .unwrap();

        let anchor = document.root().first_child().unwrap();
        assert_eq!(
            anchor.text_runs(),
            ["CSE 143 Title (5) text more", "Prerequisite: CSE 142", "View: CSE 311"]
        );
        assert_eq!(
            anchor.text(),
            "CSE 143 Title (5) text morePrerequisite: CSE 142View: CSE 311"
        );
    }

    #[test]
    fn test_comments_and_doctype_are_dropped() {
        let document =
            Document::parse("<!DOCTYPE html><!-- nav --><html><body>x</body></html>").unwrap();
        assert_eq!(tags(&document.root()), ["html"]);
        assert_eq!(document.root().text(), "x");
    }
}
