use crate::dom::{Document, NodeId};

/// Where focus goes back to once a dialog has closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreTarget {
    /// The element that held focus before the dialog opened.
    Element(NodeId),
    /// Nothing was focused; fall back to the document body.
    Body,
}

/// Remembers the element focused before a dialog opened and gives focus back on close.
///
/// A target is captured at most once per open cycle: further `capture`
/// calls return the held target unchanged until `restore` or `clear`
/// consumes it.
#[derive(Debug, Default)]
pub struct FocusRestoreManager {
    target: Option<RestoreTarget>,
}

impl FocusRestoreManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the currently focused element (or the body sentinel).
    pub fn capture(&mut self, doc: &Document) -> RestoreTarget {
        if let Some(held) = self.target {
            return held;
        }
        let target = match doc.active_element() {
            Some(node) => RestoreTarget::Element(node),
            None => RestoreTarget::Body,
        };
        log::debug!("Captured restore target {:?}", target);
        self.target = Some(target);
        target
    }

    pub fn target(&self) -> Option<RestoreTarget> {
        self.target
    }

    pub fn is_captured(&self) -> bool {
        self.target.is_some()
    }

    /// Give focus back to the captured target and forget it.
    ///
    /// A target that was detached, disabled or hidden in the meantime
    /// degrades to the body. Returns where focus actually ended up, or
    /// `None` if nothing had been captured.
    pub fn restore(&mut self, doc: &mut Document) -> Option<RestoreTarget> {
        let target = self.target.take()?;
        let landed = match target {
            RestoreTarget::Element(node) if doc.focus(node) => RestoreTarget::Element(node),
            _ => {
                doc.focus_body();
                RestoreTarget::Body
            }
        };
        log::debug!("Restored focus to {:?} (captured {:?})", landed, target);
        Some(landed)
    }

    /// Drop the captured target without touching focus.
    pub fn clear(&mut self) {
        self.target = None;
    }
}
