//! Section splitting.
//!
//! Partitions the top-level children of `<body>` into an intro and a list of
//! titled sections.
//!
//! Parsoid output wraps every heading-level section in a `<section>` element;
//! the lead is the first wrapper and carries no `<h2>`. When those wrappers
//! exist, each wrapper holding an `<h2>` becomes one section. Otherwise the
//! `<h2>` elements themselves mark the boundaries: a section runs from the
//! top-level node holding its heading up to the node holding the next one.
//!
//! Both paths reduce to a list of `HeadingSpan`s over a slice of top-level
//! units, which `assemble` turns into the final intro and sections.

use std::collections::HashMap;

use tracing::debug;

use crate::dom::{self, Document, NodeId, NodeRef};
use crate::patterns::{DEFAULT_SECTION_HEADING, SECTION_HEADING};
use crate::result::SectionDescriptor;

/// Intro and sections of a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitDocument {
    /// Top-level nodes before the first section.
    pub intro_nodes: Vec<NodeId>,
    /// Titled sections in document order.
    pub sections: Vec<SectionDescriptor>,
}

/// A run of top-level units `[start, end)` titled by `heading`.
#[derive(Clone, Copy)]
struct HeadingSpan<'a> {
    start: usize,
    end: usize,
    heading: NodeRef<'a>,
}

/// Split the document body into intro and sections.
///
/// Expects the infobox to have been detached already. Read-only.
#[must_use]
pub fn split_document(doc: &Document) -> SplitDocument {
    let body = dom::body(doc);
    let top_level = dom::element_children(&body);

    let wrappers: Vec<NodeRef> = top_level
        .iter()
        .copied()
        .filter(|n| dom::is_tag(n, "section"))
        .collect();

    if wrappers.is_empty() {
        let spans = spans_from_headings(&body, &top_level);
        debug!(
            top_level = top_level.len(),
            sections = spans.len(),
            "split by heading boundaries"
        );
        assemble(&top_level, &spans)
    } else {
        let spans = spans_from_wrappers(&wrappers);
        debug!(
            wrappers = wrappers.len(),
            sections = spans.len(),
            "split by section wrappers"
        );
        assemble(&wrappers, &spans)
    }
}

/// One span per `<section>` wrapper that contains an `<h2>`.
///
/// Wrappers without a heading that come after the first titled one are not
/// part of any span.
fn spans_from_wrappers<'a>(wrappers: &[NodeRef<'a>]) -> Vec<HeadingSpan<'a>> {
    wrappers
        .iter()
        .enumerate()
        .filter_map(|(i, wrapper)| {
            dom::first_descendant(wrapper, SECTION_HEADING).map(|heading| HeadingSpan {
                start: i,
                end: i + 1,
                heading,
            })
        })
        .collect()
}

/// Spans bounded by the top-level containers of successive `<h2>`s.
///
/// Several headings inside one container yield a single span titled by the
/// first of them.
fn spans_from_headings<'a>(body: &NodeRef<'a>, top_level: &[NodeRef<'a>]) -> Vec<HeadingSpan<'a>> {
    let index_of: HashMap<NodeId, usize> = top_level
        .iter()
        .enumerate()
        .map(|(i, node)| (node.id, i))
        .collect();

    let mut spans: Vec<HeadingSpan<'a>> = Vec::new();
    for heading in dom::descendants_matching(body, SECTION_HEADING) {
        let Some(container) = top_level_container(&heading, body) else {
            continue;
        };
        let Some(&start) = index_of.get(&container.id) else {
            continue;
        };
        if spans.last().is_some_and(|span| span.start >= start) {
            continue;
        }
        if let Some(prev) = spans.last_mut() {
            prev.end = start;
        }
        spans.push(HeadingSpan {
            start,
            end: top_level.len(),
            heading,
        });
    }
    spans
}

/// The child of `body` whose subtree contains `node` (or `node` itself).
fn top_level_container<'a>(node: &NodeRef<'a>, body: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    let mut current = *node;
    loop {
        let parent = current.parent()?;
        if parent.id == body.id {
            return Some(current);
        }
        current = parent;
    }
}

/// Build the intro (everything before the first span) and one section per span.
fn assemble(units: &[NodeRef], spans: &[HeadingSpan]) -> SplitDocument {
    let Some(first) = spans.first() else {
        return SplitDocument {
            intro_nodes: ids(units),
            sections: Vec::new(),
        };
    };

    let sections = spans
        .iter()
        .enumerate()
        .map(|(index, span)| SectionDescriptor {
            id: format!("section-{index}"),
            heading: heading_label(&span.heading),
            nodes: ids(&units[span.start..span.end]),
        })
        .collect();

    SplitDocument {
        intro_nodes: ids(&units[..first.start]),
        sections,
    }
}

/// Display label for a heading: its trimmed text, or `"Section"` when blank.
fn heading_label(heading: &NodeRef) -> String {
    let text = dom::trimmed_text(heading);
    if text.is_empty() {
        DEFAULT_SECTION_HEADING.to_string()
    } else {
        text
    }
}

fn ids(nodes: &[NodeRef]) -> Vec<NodeId> {
    nodes.iter().map(|n| n.id).collect()
}
