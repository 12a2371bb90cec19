//! Result types for structural parsing.
//!
//! The parse output keeps the live document together with `NodeId` handles
//! into it. Nothing is serialized until a caller asks for HTML.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dom::{self, Document, NodeId, NodeRef};

/// Lead image pulled out of the infobox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoboxImage {
    /// Fully resolved, absolute image URL.
    pub url: String,

    /// Display label (see [`crate::resolve_alt_text`]).
    pub alt_text: String,

    /// Declared width, or the configured default (400).
    pub width: u32,

    /// Declared height, or the configured default (300).
    pub height: u32,
}

/// Content image found anywhere in the article.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExtractedImage {
    /// Absolute `http(s)` URL; unique within one collection pass.
    pub url: String,

    /// Display label, never empty.
    pub alt_text: String,
}

/// One titled top-level section of the article body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionDescriptor {
    /// `section-<n>`, numbered by position among emitted sections.
    pub id: String,

    /// Trimmed text of the section's first `<h2>`, or `"Section"`.
    pub heading: String,

    /// Top-level nodes making up the section, heading included.
    pub nodes: Vec<NodeId>,
}

/// Output of [`crate::parse_article_structure`].
///
/// Owns the parsed document. Every handle in `intro_nodes`, `sections` and
/// `infobox` points into `dom`.
pub struct ParsedArticleStructure {
    /// The parsed document, with the infobox already detached.
    pub dom: Document,

    /// The detached infobox element, minus its lead image row.
    pub infobox: Option<NodeId>,

    /// Lead image of the infobox, if it had one.
    pub infobox_image: Option<InfoboxImage>,

    /// Top-level nodes before the first section, in document order.
    pub intro_nodes: Vec<NodeId>,

    /// Titled sections, in document order.
    pub sections: Vec<SectionDescriptor>,
}

impl ParsedArticleStructure {
    /// The degenerate result: empty document, no infobox, no intro, no sections.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            dom: dom::parse(""),
            infobox: None,
            infobox_image: None,
            intro_nodes: Vec::new(),
            sections: Vec::new(),
        }
    }

    /// True when nothing was extracted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.infobox.is_none()
            && self.infobox_image.is_none()
            && self.intro_nodes.is_empty()
            && self.sections.is_empty()
    }

    /// Resolve a handle into a live node.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_>> {
        dom::node_by_id(&self.dom, id)
    }

    /// Live references to the intro nodes.
    #[must_use]
    pub fn intro(&self) -> Vec<NodeRef<'_>> {
        self.resolve(&self.intro_nodes)
    }

    /// Live references to a section's nodes.
    #[must_use]
    pub fn section_nodes(&self, section: &SectionDescriptor) -> Vec<NodeRef<'_>> {
        self.resolve(&section.nodes)
    }

    /// The detached infobox element.
    #[must_use]
    pub fn infobox_element(&self) -> Option<NodeRef<'_>> {
        self.infobox.and_then(|id| self.node(id))
    }

    /// Look up a section by its `section-<n>` id.
    #[must_use]
    pub fn section(&self, id: &str) -> Option<&SectionDescriptor> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Outer HTML of the given nodes, concatenated.
    #[must_use]
    pub fn render_nodes(&self, ids: &[NodeId]) -> String {
        dom::render_all(self.resolve(ids))
    }

    /// Outer HTML of the intro.
    #[must_use]
    pub fn intro_html(&self) -> String {
        self.render_nodes(&self.intro_nodes)
    }

    /// Outer HTML of one section.
    #[must_use]
    pub fn section_html(&self, section: &SectionDescriptor) -> String {
        self.render_nodes(&section.nodes)
    }

    /// Outer HTML of the image-free infobox.
    #[must_use]
    pub fn infobox_html(&self) -> Option<String> {
        self.infobox_element().map(|n| dom::render(&n).to_string())
    }

    /// Serialize every part to HTML in one pass.
    #[must_use]
    pub fn render(&self) -> RenderedArticle {
        RenderedArticle {
            infobox_image: self.infobox_image.clone(),
            infobox_html: self.infobox_html(),
            intro_html: self.intro_html(),
            sections: self
                .sections
                .iter()
                .map(|s| RenderedSection {
                    id: s.id.clone(),
                    heading: s.heading.clone(),
                    html: self.section_html(s),
                })
                .collect(),
        }
    }

    fn resolve(&self, ids: &[NodeId]) -> Vec<NodeRef<'_>> {
        ids.iter().filter_map(|id| self.node(*id)).collect()
    }
}

impl Default for ParsedArticleStructure {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for ParsedArticleStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParsedArticleStructure")
            .field("infobox", &self.infobox.is_some())
            .field("infobox_image", &self.infobox_image)
            .field("intro_nodes", &self.intro_nodes.len())
            .field("sections", &self.sections)
            .finish_non_exhaustive()
    }
}

/// Owned, serializable rendering of a [`ParsedArticleStructure`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedArticle {
    /// Lead image of the infobox.
    pub infobox_image: Option<InfoboxImage>,

    /// Remaining infobox table as HTML.
    pub infobox_html: Option<String>,

    /// Intro as HTML.
    pub intro_html: String,

    /// Sections as HTML.
    pub sections: Vec<RenderedSection>,
}

/// One section of a [`RenderedArticle`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedSection {
    /// `section-<n>`.
    pub id: String,
    /// Section title.
    pub heading: String,
    /// Section content as HTML.
    pub html: String,
}
