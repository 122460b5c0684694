use super::tabbable::tabbable_elements;
use crate::constants::ATTR_AUTOFOCUS;
use crate::dom::{Document, NodeId};

/// Keeps Tab and Shift+Tab cycling inside a container.
///
/// The focusable set is recomputed on every key press, so controls that
/// appear or disappear while the trap is active are picked up without any
/// bookkeeping. The trap never restores focus on deactivation; that belongs
/// to [`FocusRestoreManager`](super::FocusRestoreManager).
#[derive(Debug, Default)]
pub struct FocusTrapController {
    container: Option<NodeId>,
}

impl FocusTrapController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.container.is_some()
    }

    pub fn container(&self) -> Option<NodeId> {
        self.container
    }

    /// Start trapping focus in `container` and move focus to the initial target.
    ///
    /// Target priority: `initial_focus` (when it is a focusable node inside
    /// the container), the first tabbable element carrying `autofocus`, the
    /// first tabbable element, and finally the container itself.
    ///
    /// Returns the element that received focus.
    pub fn activate(&mut self, doc: &mut Document, container: NodeId, initial_focus: Option<NodeId>) -> Option<NodeId> {
        self.container = Some(container);

        let tabbable = tabbable_elements(doc, container);
        let explicit = initial_focus.filter(|t| *t != container && doc.contains(container, *t) && doc.is_focusable(*t));
        let target = explicit
            .or_else(|| tabbable.iter().copied().find(|n| doc.has_attribute(*n, ATTR_AUTOFOCUS)))
            .or_else(|| tabbable.first().copied());

        let focused = match target {
            Some(target) if doc.focus(target) => Some(target),
            _ => Self::focus_container(doc, container),
        };
        log::debug!("Focus trap active on {} (initial focus {:?})", container, focused);
        focused
    }

    /// Move focus one step through the container's current tab sequence.
    ///
    /// Focus outside the sequence counts as sitting on its first element.
    /// Returns the newly focused element, or `None` when the trap is inactive.
    pub fn on_tab_key(&mut self, doc: &mut Document, shift: bool) -> Option<NodeId> {
        let container = self.container?;
        let tabbable = tabbable_elements(doc, container);
        if tabbable.is_empty() {
            return Self::focus_container(doc, container);
        }

        let len = tabbable.len();
        let current = doc
            .active_element()
            .and_then(|active| tabbable.iter().position(|n| *n == active))
            .unwrap_or(0);
        let next = if shift { (current + len - 1) % len } else { (current + 1) % len };

        let target = tabbable[next];
        doc.focus(target).then_some(target)
    }

    /// Stop intercepting Tab. Focus is left where it is.
    pub fn deactivate(&mut self) {
        if let Some(container) = self.container.take() {
            log::debug!("Focus trap released from {}", container);
        }
    }

    fn focus_container(doc: &mut Document, container: NodeId) -> Option<NodeId> {
        if doc.tab_index(container).is_none() {
            doc.set_tab_index(container, -1);
        }
        doc.focus(container).then_some(container)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Element;

    fn dialog_with(doc: &mut Document, labels: &[&str]) -> (NodeId, Vec<NodeId>) {
        let root = doc.append_element(doc.body(), Element::div()).unwrap();
        let items = labels
            .iter()
            .map(|l| doc.append_element(root, Element::button(*l)).unwrap())
            .collect();
        (root, items)
    }

    #[test]
    fn activate_focuses_first_tabbable() {
        let mut doc = Document::new();
        let (root, items) = dialog_with(&mut doc, &["a", "b"]);
        let mut trap = FocusTrapController::new();

        assert_eq!(trap.activate(&mut doc, root, None), Some(items[0]));
        assert!(trap.is_active());
        assert_eq!(doc.active_element(), Some(items[0]));
    }

    #[test]
    fn explicit_initial_focus_wins() {
        let mut doc = Document::new();
        let (root, items) = dialog_with(&mut doc, &["a", "b", "c"]);
        let mut trap = FocusTrapController::new();

        assert_eq!(trap.activate(&mut doc, root, Some(items[2])), Some(items[2]));
    }

    #[test]
    fn initial_focus_outside_container_is_ignored() {
        let mut doc = Document::new();
        let outside = doc.append_element(doc.body(), Element::button("outside")).unwrap();
        let (root, items) = dialog_with(&mut doc, &["a"]);
        let mut trap = FocusTrapController::new();

        assert_eq!(trap.activate(&mut doc, root, Some(outside)), Some(items[0]));
    }

    #[test]
    fn autofocus_attribute_is_preferred_over_first() {
        let mut doc = Document::new();
        let (root, _) = dialog_with(&mut doc, &["a"]);
        let flagged = doc
            .append_element(root, Element::input("Name").with_attribute("autofocus", ""))
            .unwrap();
        let mut trap = FocusTrapController::new();

        assert_eq!(trap.activate(&mut doc, root, None), Some(flagged));
    }

    #[test]
    fn empty_container_receives_focus_itself() {
        let mut doc = Document::new();
        let (root, _) = dialog_with(&mut doc, &[]);
        let mut trap = FocusTrapController::new();

        assert_eq!(trap.activate(&mut doc, root, None), Some(root));
        assert_eq!(doc.tab_index(root), Some(-1));
        assert_eq!(trap.on_tab_key(&mut doc, false), Some(root));
    }

    #[test]
    fn tab_wraps_both_directions() {
        let mut doc = Document::new();
        let (root, items) = dialog_with(&mut doc, &["a", "b", "c"]);
        let mut trap = FocusTrapController::new();
        trap.activate(&mut doc, root, None);

        assert_eq!(trap.on_tab_key(&mut doc, true), Some(items[2]));
        assert_eq!(trap.on_tab_key(&mut doc, false), Some(items[0]));
        assert_eq!(trap.on_tab_key(&mut doc, false), Some(items[1]));
    }

    #[test]
    fn focus_outside_set_counts_as_first() {
        let mut doc = Document::new();
        let outside = doc.append_element(doc.body(), Element::button("outside")).unwrap();
        let (root, items) = dialog_with(&mut doc, &["a", "b", "c"]);
        let mut trap = FocusTrapController::new();
        trap.activate(&mut doc, root, None);

        doc.focus(outside);
        assert_eq!(trap.on_tab_key(&mut doc, false), Some(items[1]));
        doc.focus(outside);
        assert_eq!(trap.on_tab_key(&mut doc, true), Some(items[2]));
    }

    #[test]
    fn set_is_recomputed_on_every_tab() {
        let mut doc = Document::new();
        let (root, items) = dialog_with(&mut doc, &["a", "b"]);
        let mut trap = FocusTrapController::new();
        trap.activate(&mut doc, root, None);

        let late = doc.append_element(root, Element::button("late")).unwrap();
        assert_eq!(trap.on_tab_key(&mut doc, false), Some(items[1]));
        assert_eq!(trap.on_tab_key(&mut doc, false), Some(late));

        doc.set_disabled(items[0], true);
        assert_eq!(trap.on_tab_key(&mut doc, false), Some(items[1]));
    }

    #[test]
    fn deactivate_leaves_focus_in_place() {
        let mut doc = Document::new();
        let (root, items) = dialog_with(&mut doc, &["a"]);
        let mut trap = FocusTrapController::new();
        trap.activate(&mut doc, root, None);

        trap.deactivate();
        assert!(!trap.is_active());
        assert_eq!(doc.active_element(), Some(items[0]));
        assert_eq!(trap.on_tab_key(&mut doc, false), None);
    }
}
