//! DOM Operations Adapter
//!
//! Thin layer over the `dom_query` crate. The parsed `Document` is an arena of
//! nodes addressed by `NodeId`; every node keeps a parent handle that is used
//! for traversal only. Detaching a node unlinks it (and its subtree) from its
//! parent's child list while the arena slot stays readable, so a detached
//! element can still be rendered.

use std::collections::{BTreeMap, HashMap};

// Re-export core types for external use
pub use dom_query::{Document, NodeId, NodeRef, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

// === Attribute Lookup ===

/// Read-only attribute bag.
///
/// Implemented for live DOM nodes and for plain string maps, so resolvers can
/// be driven either from a parsed document or from attributes gathered
/// elsewhere.
pub trait Attributes {
    /// Raw value of attribute `name`, if present.
    fn get_attr(&self, name: &str) -> Option<String>;

    /// Trimmed value of attribute `name`, if present and non-empty.
    fn non_empty_attr(&self, name: &str) -> Option<String> {
        self.get_attr(name)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}

impl Attributes for NodeRef<'_> {
    fn get_attr(&self, name: &str) -> Option<String> {
        self.attr(name).map(|v| v.to_string())
    }
}

impl Attributes for HashMap<String, String> {
    fn get_attr(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl Attributes for BTreeMap<String, String> {
    fn get_attr(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl Attributes for [(&str, &str)] {
    fn get_attr(&self, name: &str) -> Option<String> {
        self.iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| (*v).to_string())
    }
}

/// Parse an integer attribute the way browsers read `width="220px"`:
/// leading whitespace is skipped and the leading run of digits is used.
///
/// Returns `None` when the attribute is missing or has no leading digits.
#[must_use]
pub fn int_attr<A: Attributes + ?Sized>(attrs: &A, name: &str) -> Option<u32> {
    attrs.get_attr(name).and_then(|v| parse_leading_int(&v))
}

/// Leading-digit integer parse. `"300"` and `"300px"` both yield 300.
#[must_use]
pub fn parse_leading_int(value: &str) -> Option<u32> {
    let trimmed = value.trim_start();
    let digits_end = trimmed
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(trimmed.len(), |(i, _)| i);
    trimmed[..digits_end].parse().ok()
}

/// Whitespace-separated class list contains a token containing `fragment`.
#[must_use]
pub fn class_contains(node: &NodeRef, fragment: &str) -> bool {
    node.attr("class")
        .is_some_and(|class| class.contains(fragment))
}

// === Tag/Node Information ===

/// Tag name of an element node (lowercase, as html5ever emits it).
#[must_use]
pub fn tag_name(node: &NodeRef) -> Option<String> {
    if !node.is_element() {
        return None;
    }
    node.node_name().map(|t| t.to_ascii_lowercase())
}

/// Check whether `node` is an element with the given tag.
#[must_use]
pub fn is_tag(node: &NodeRef, tag: &str) -> bool {
    node.is_element()
        && node
            .node_name()
            .is_some_and(|name| name.eq_ignore_ascii_case(tag))
}

/// Trimmed text content of a node and its descendants.
#[must_use]
pub fn trimmed_text(node: &NodeRef) -> String {
    node.text().trim().to_string()
}

// === Tree Navigation ===

/// The `<body>` element, or the document root when there is none.
#[must_use]
pub fn body(doc: &Document) -> NodeRef<'_> {
    doc.select("body")
        .nodes()
        .first()
        .copied()
        .unwrap_or_else(|| doc.root())
}

/// Direct element children, skipping text and comment nodes.
#[must_use]
pub fn element_children<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    node.children()
        .into_iter()
        .filter(NodeRef::is_element)
        .collect()
}

/// First descendant of `node` matching `selector`, in document order.
///
/// `node` itself is never returned.
#[must_use]
pub fn first_descendant<'a>(node: &NodeRef<'a>, selector: &str) -> Option<NodeRef<'a>> {
    Selection::from(*node)
        .select(selector)
        .nodes()
        .first()
        .copied()
}

/// All descendants of `node` matching `selector`, in document order.
#[must_use]
pub fn descendants_matching<'a>(node: &NodeRef<'a>, selector: &str) -> Vec<NodeRef<'a>> {
    Selection::from(*node).select(selector).nodes().to_vec()
}

/// First element in the document matching `selector`, in document order.
#[must_use]
pub fn query_first<'a>(doc: &'a Document, selector: &str) -> Option<NodeRef<'a>> {
    doc.select(selector).nodes().first().copied()
}

/// Parent of `node` when that parent is an element.
#[must_use]
pub fn parent_element<'a>(node: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    node.parent().filter(NodeRef::is_element)
}

/// Resolve a stored handle back to a live node.
#[must_use]
pub fn node_by_id(doc: &Document, id: NodeId) -> Option<NodeRef<'_>> {
    doc.tree.get(&id)
}

// === Tree Manipulation ===

/// Unlink `node` and its subtree from its parent.
#[inline]
pub fn detach(node: &NodeRef) {
    node.remove_from_parent();
}

// === Rendering ===

/// Outer HTML of a single node.
#[inline]
#[must_use]
pub fn render(node: &NodeRef) -> StrTendril {
    node.html()
}

/// Concatenated outer HTML of several nodes, in the given order.
#[must_use]
pub fn render_all<'a, I>(nodes: I) -> String
where
    I: IntoIterator<Item = NodeRef<'a>>,
{
    let mut out = String::new();
    for node in nodes {
        out.push_str(&render(&node));
    }
    out
}

// === Parsing ===

/// Parse an HTML string into a document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}
