//! Element tree the dialog engine runs against.
//!
//! A [`Document`] is an arena of [`Element`]s rooted at a body node, plus the
//! single focus position shared by everything rendered into it. Widgets
//! outside the dialog core (buttons, inputs, selects) only show up here as
//! nodes that may be focusable, disabled or hidden.

mod document;
mod node;

pub use document::Document;
pub use node::{Element, ElementKind, NodeId};

/// Errors raised by structural document operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// The node does not belong to this document
    #[error("Unknown node: {0}")]
    UnknownNode(NodeId),

    /// The insertion would create a cycle or move the body
    #[error("Cannot insert {child} into {parent}")]
    HierarchyRequest { parent: NodeId, child: NodeId },
}
