//! Pre-render cleanup of article markup.
//!
//! Wikipedia's rendered HTML carries editing affordances and navigation
//! furniture (edit links, hatnotes, navboxes, portal bars, inline styles)
//! that a reader view does not show.

use std::collections::HashSet;

use tracing::debug;

use crate::dom::{self, Document, NodeId, NodeRef};
use crate::patterns::CHROME_SELECTORS;

/// Detach every element matching the chrome selector list.
///
/// Returns the number of elements removed. Elements nested inside an
/// already-removed element are not counted twice.
pub fn remove_chrome(doc: &Document) -> usize {
    remove_matching(doc, CHROME_SELECTORS)
}

/// Detach every element matching any of `selectors`.
pub fn remove_matching(doc: &Document, selectors: &[&str]) -> usize {
    let body = dom::body(doc);
    let mut targets: Vec<NodeRef> = Vec::new();
    let mut target_ids: HashSet<NodeId> = HashSet::new();
    for selector in selectors {
        for node in dom::descendants_matching(&body, selector) {
            if target_ids.insert(node.id) {
                targets.push(node);
            }
        }
    }

    // Only outermost targets are detached; nested ones go with them.
    let outermost: Vec<NodeRef> = targets
        .into_iter()
        .filter(|node| !has_ancestor_in(node, &target_ids))
        .collect();

    for node in &outermost {
        dom::detach(node);
    }

    let removed = outermost.len();
    if removed > 0 {
        debug!(removed, "removed chrome elements");
    }
    removed
}

fn has_ancestor_in(node: &NodeRef, ids: &HashSet<NodeId>) -> bool {
    let mut current = node.parent();
    while let Some(ancestor) = current {
        if ids.contains(&ancestor.id) {
            return true;
        }
        current = ancestor.parent();
    }
    false
}
