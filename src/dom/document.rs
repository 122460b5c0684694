use super::node::{Element, ElementKind, NodeId};
use super::DomError;
use crate::constants::{
    ATTR_ARIA_HIDDEN, ATTR_DISABLED, ATTR_HIDDEN, ATTR_ID, ATTR_INERT, ATTR_SCROLL_LOCKED, ATTR_TABINDEX,
};

#[derive(Debug, Clone)]
struct Node {
    element: Element,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Element tree with a single focus position.
///
/// The document owns every node it ever created. Removing a node only
/// detaches its subtree; the focused element is tracked here and is the one
/// piece of global state the focus trap and restore manager write to.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    body: NodeId,
    active: Option<NodeId>,
    scroll_locks: usize,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                element: Element::new(ElementKind::Body),
                parent: None,
                children: Vec::new(),
            }],
            body: NodeId(0),
            active: None,
            scroll_locks: 0,
        }
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Create a detached node.
    pub fn create_element(&mut self, element: Element) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            element,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    /// Append `child` as the last child of `parent`, moving it if it already has a parent.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        self.node(parent).ok_or(DomError::UnknownNode(parent))?;
        self.node(child).ok_or(DomError::UnknownNode(child))?;
        if child == self.body || self.contains(child, parent) {
            return Err(DomError::HierarchyRequest { parent, child });
        }

        self.unlink(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
        Ok(())
    }

    /// Create `element` and append it under `parent` in one step.
    pub fn append_element(&mut self, parent: NodeId, element: Element) -> Result<NodeId, DomError> {
        let id = self.create_element(element);
        self.append_child(parent, id)?;
        Ok(id)
    }

    /// Detach `node` and its subtree. Focus inside the subtree falls back to the body.
    pub fn remove(&mut self, node: NodeId) {
        if node == self.body || self.node(node).is_none() {
            return;
        }
        if let Some(active) = self.active {
            if self.contains(node, active) {
                log::debug!("Focused element {} detached, focus returns to body", active);
                self.active = None;
            }
        }
        self.unlink(node);
    }

    fn unlink(&mut self, node: NodeId) {
        if let Some(parent) = self.nodes[node.0].parent.take() {
            self.nodes[parent.0].children.retain(|c| *c != node);
        }
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn element(&self, id: NodeId) -> Option<&Element> {
        self.node(id).map(|n| &n.element)
    }

    pub fn kind(&self, id: NodeId) -> Option<ElementKind> {
        self.element(id).map(|e| e.kind)
    }

    pub fn text(&self, id: NodeId) -> &str {
        self.element(id).map(|e| e.text.as_str()).unwrap_or_default()
    }

    pub fn set_text(&mut self, id: NodeId, text: impl Into<String>) {
        if let Some(node) = self.nodes.get_mut(id.0) {
            node.element.text = text.into();
        }
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|n| n.parent)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(|n| n.children.as_slice()).unwrap_or_default()
    }

    /// All descendants of `id` in document (pre-)order, excluding `id` itself.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.children(next).iter().rev().copied());
        }
        out
    }

    /// Whether `node` is `ancestor` or lives somewhere below it.
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    /// Whether the node is connected to the body.
    pub fn is_attached(&self, id: NodeId) -> bool {
        self.node(id).is_some() && self.contains(self.body, id)
    }

    // --- Attributes ---

    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id).and_then(|e| e.attribute(name))
    }

    pub fn has_attribute(&self, id: NodeId, name: &str) -> bool {
        self.element(id).is_some_and(|e| e.has_attribute(name))
    }

    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: impl Into<String>) {
        if let Some(node) = self.nodes.get_mut(id.0) {
            node.element.attributes.insert(name.to_string(), value.into());
        }
    }

    pub fn remove_attribute(&mut self, id: NodeId, name: &str) {
        if let Some(node) = self.nodes.get_mut(id.0) {
            node.element.attributes.remove(name);
        }
    }

    /// Look up an attached element by its `id` attribute.
    pub fn get_element_by_id(&self, value: &str) -> Option<NodeId> {
        self.descendants(self.body)
            .into_iter()
            .find(|n| self.attribute(*n, ATTR_ID) == Some(value))
    }

    pub fn set_disabled(&mut self, id: NodeId, disabled: bool) {
        self.toggle_attribute(id, ATTR_DISABLED, disabled);
    }

    pub fn is_disabled(&self, id: NodeId) -> bool {
        self.element(id).is_some_and(Element::is_disabled)
    }

    pub fn set_hidden(&mut self, id: NodeId, hidden: bool) {
        self.toggle_attribute(id, ATTR_HIDDEN, hidden);
        if hidden {
            if let Some(active) = self.active {
                if self.contains(id, active) {
                    self.active = None;
                }
            }
        }
    }

    pub fn set_tab_index(&mut self, id: NodeId, index: i32) {
        self.set_attribute(id, ATTR_TABINDEX, index.to_string());
    }

    pub fn tab_index(&self, id: NodeId) -> Option<i32> {
        self.element(id).and_then(Element::parsed_tab_index)
    }

    fn toggle_attribute(&mut self, id: NodeId, name: &str, on: bool) {
        if on {
            self.set_attribute(id, name, "");
        } else {
            self.remove_attribute(id, name);
        }
    }

    /// Whether `id` or one of its ancestors is `hidden` or `inert`.
    pub fn is_hidden(&self, id: NodeId) -> bool {
        self.ancestor_has(id, |e| e.has_attribute(ATTR_HIDDEN) || e.has_attribute(ATTR_INERT))
    }

    /// Whether `id` sits in a subtree removed from the accessibility tree.
    pub fn is_aria_hidden(&self, id: NodeId) -> bool {
        self.ancestor_has(id, |e| e.attribute(ATTR_ARIA_HIDDEN) == Some("true"))
    }

    fn ancestor_has(&self, id: NodeId, pred: impl Fn(&Element) -> bool) -> bool {
        let mut current = Some(id);
        while let Some(node) = current {
            if self.element(node).is_some_and(&pred) {
                return true;
            }
            current = self.parent(node);
        }
        false
    }

    // --- Focus ---

    /// The focused element, `None` when focus rests on the body.
    pub fn active_element(&self) -> Option<NodeId> {
        self.active
    }

    /// Whether [`Document::focus`] would accept `id`.
    pub fn is_focusable(&self, id: NodeId) -> bool {
        let Some(element) = self.element(id) else {
            return false;
        };
        id != self.body
            && self.is_attached(id)
            && !element.is_disabled()
            && !self.is_hidden(id)
            && !self.is_aria_hidden(id)
            && (element.is_natively_focusable() || element.parsed_tab_index().is_some())
    }

    /// Move focus to `id`. Returns false and leaves focus alone when the node cannot take focus.
    pub fn focus(&mut self, id: NodeId) -> bool {
        if !self.is_focusable(id) {
            return false;
        }
        if self.active != Some(id) {
            log::trace!("Focus {:?} -> {}", self.active, id);
            self.active = Some(id);
        }
        true
    }

    pub fn focus_body(&mut self) {
        self.active = None;
    }

    // --- Scroll lock ---

    /// Take a scroll lock. Locks nest: the body stays locked until every
    /// holder has released its lock.
    pub fn lock_scroll(&mut self) {
        self.scroll_locks += 1;
        let body = self.body;
        self.toggle_attribute(body, ATTR_SCROLL_LOCKED, true);
    }

    pub fn unlock_scroll(&mut self) {
        self.scroll_locks = self.scroll_locks.saturating_sub(1);
        if self.scroll_locks == 0 {
            let body = self.body;
            self.toggle_attribute(body, ATTR_SCROLL_LOCKED, false);
        }
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locks > 0
    }
}
