use std::collections::BTreeMap;
use std::fmt;

use crate::constants::{ATTR_CONTENTEDITABLE, ATTR_DISABLED, ATTR_HIDDEN, ATTR_HREF, ATTR_ID, ATTR_TABINDEX, ATTR_TYPE};

/// Handle to a node in a [`Document`](super::Document).
///
/// Nodes are never freed, so a `NodeId` acts as a weak reference: it can
/// always be queried, but the node it names may have been detached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Body,
    Div,
    Heading,
    Paragraph,
    Button,
    Input,
    TextArea,
    Select,
    Anchor,
}

impl ElementKind {
    pub fn tag(self) -> &'static str {
        match self {
            ElementKind::Body => "body",
            ElementKind::Div => "div",
            ElementKind::Heading => "h2",
            ElementKind::Paragraph => "p",
            ElementKind::Button => "button",
            ElementKind::Input => "input",
            ElementKind::TextArea => "textarea",
            ElementKind::Select => "select",
            ElementKind::Anchor => "a",
        }
    }

    /// Controls that honour the `disabled` attribute.
    pub fn is_form_control(self) -> bool {
        matches!(
            self,
            ElementKind::Button | ElementKind::Input | ElementKind::TextArea | ElementKind::Select
        )
    }
}

/// An element description: kind, label text and attributes.
///
/// Built with the chained setters and handed to
/// [`Document::create_element`](super::Document::create_element).
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub kind: ElementKind,
    pub text: String,
    pub attributes: BTreeMap<String, String>,
}

impl Element {
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            text: String::new(),
            attributes: BTreeMap::new(),
        }
    }

    pub fn div() -> Self {
        Self::new(ElementKind::Div)
    }

    pub fn button(label: impl Into<String>) -> Self {
        Self::new(ElementKind::Button).with_text(label)
    }

    pub fn input(label: impl Into<String>) -> Self {
        Self::new(ElementKind::Input).with_text(label)
    }

    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self::new(ElementKind::Anchor).with_text(label).with_attribute(ATTR_HREF, href)
    }

    pub fn with_id(self, id: impl Into<String>) -> Self {
        self.with_attribute(ATTR_ID, id)
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn disabled(self) -> Self {
        self.with_attribute(ATTR_DISABLED, "")
    }

    pub fn hidden(self) -> Self {
        self.with_attribute(ATTR_HIDDEN, "")
    }

    pub fn tab_index(self, index: i32) -> Self {
        self.with_attribute(ATTR_TABINDEX, index.to_string())
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Parsed `tabindex`; unparsable values are ignored like a browser would.
    pub fn parsed_tab_index(&self) -> Option<i32> {
        self.attribute(ATTR_TABINDEX).and_then(|v| v.trim().parse().ok())
    }

    /// Whether the element takes focus without an explicit `tabindex`.
    pub fn is_natively_focusable(&self) -> bool {
        if self.has_attribute(ATTR_CONTENTEDITABLE) {
            return true;
        }
        match self.kind {
            ElementKind::Button | ElementKind::TextArea | ElementKind::Select => true,
            ElementKind::Input => self.attribute(ATTR_TYPE) != Some("hidden"),
            ElementKind::Anchor => self.has_attribute(ATTR_HREF),
            _ => false,
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.kind.is_form_control() && self.has_attribute(ATTR_DISABLED)
    }
}
