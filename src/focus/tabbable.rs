//! Tab-order computation.
//!
//! Order follows the browser rules: elements with a positive `tabindex` come
//! first in ascending order (ties keep document order), then every element
//! with `tabindex="0"` or natural focusability in document order. Subtrees
//! marked `hidden`, `inert` or `aria-hidden="true"` are skipped entirely.

use crate::constants::{ATTR_ARIA_HIDDEN, ATTR_HIDDEN, ATTR_INERT};
use crate::dom::{Document, Element, NodeId};

/// Ordered tabbable descendants of `container` (the container itself is never included).
pub fn tabbable_elements(doc: &Document, container: NodeId) -> Vec<NodeId> {
    let mut positive: Vec<(i32, NodeId)> = Vec::new();
    let mut natural = Vec::new();

    let mut stack: Vec<NodeId> = doc.children(container).iter().rev().copied().collect();
    while let Some(node) = stack.pop() {
        let Some(element) = doc.element(node) else {
            continue;
        };
        if prunes_subtree(element) {
            continue;
        }
        stack.extend(doc.children(node).iter().rev().copied());

        match tab_index_of(element) {
            Some(index) if index > 0 => positive.push((index, node)),
            Some(0) => natural.push(node),
            _ => {}
        }
    }

    positive.sort_by_key(|(index, _)| *index);
    positive.into_iter().map(|(_, node)| node).chain(natural).collect()
}

/// Whether `node` would appear in the tab sequence of its subtree.
pub fn is_tabbable(doc: &Document, node: NodeId) -> bool {
    let Some(element) = doc.element(node) else {
        return false;
    };
    let mut current = Some(node);
    while let Some(id) = current {
        if doc.element(id).is_some_and(prunes_subtree) {
            return false;
        }
        current = doc.parent(id);
    }
    tab_index_of(element).is_some_and(|index| index >= 0)
}

fn prunes_subtree(element: &Element) -> bool {
    element.has_attribute(ATTR_HIDDEN)
        || element.has_attribute(ATTR_INERT)
        || element.attribute(ATTR_ARIA_HIDDEN) == Some("true")
}

/// Effective tab index, `None` when the element is not focusable at all.
fn tab_index_of(element: &Element) -> Option<i32> {
    if element.is_disabled() {
        return None;
    }
    match element.parsed_tab_index() {
        Some(index) => Some(index),
        None if element.is_natively_focusable() => Some(0),
        None => None,
    }
}
