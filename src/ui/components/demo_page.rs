//! The page shown behind the dialog

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind};
use ratatui::{
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::dialog_frame::{create_instructions_paragraph, element_line, shortcuts};
use crate::constants::ATTR_VALUE;
use crate::dom::{Document, DomError, Element, ElementKind, NodeId};
use crate::focus::tabbable_elements;
use crate::ui::core::{Action, Component};

/// Type into the focused input. Returns whether the key was consumed.
pub fn edit_focused_input(doc: &mut Document, key: KeyEvent) -> bool {
    let Some(node) = doc.active_element() else {
        return false;
    };
    if !matches!(doc.kind(node), Some(ElementKind::Input | ElementKind::TextArea)) {
        return false;
    }

    let mut value = doc.attribute(node, ATTR_VALUE).unwrap_or_default().to_string();
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => value.push(c),
        KeyCode::Backspace => {
            value.pop();
        }
        _ => return false,
    }
    doc.set_attribute(node, ATTR_VALUE, value);
    true
}

/// A plain page with an "Open dialog" trigger. Tab moves through the page
/// controls while no dialog is open.
pub struct DemoPage {
    root: NodeId,
    open_button: NodeId,
    quit_button: NodeId,
    rows: Vec<(Rect, NodeId)>,
    pressed: Option<NodeId>,
}

impl DemoPage {
    pub fn new(doc: &mut Document) -> Result<Self, DomError> {
        let root = doc.append_element(doc.body(), Element::div())?;
        doc.append_element(root, Element::new(ElementKind::Heading).with_text("overlay-kit"))?;
        doc.append_element(
            root,
            Element::new(ElementKind::Paragraph).with_text("Open the dialog, then try Tab, Shift+Tab, Esc and clicking outside."),
        )?;
        let open_button = doc.append_element(root, Element::button("Open dialog"))?;
        doc.append_element(root, Element::input("Search"))?;
        doc.append_element(root, Element::link("Documentation", "#docs"))?;
        let quit_button = doc.append_element(root, Element::button("Quit"))?;

        doc.focus(open_button);
        Ok(Self {
            root,
            open_button,
            quit_button,
            rows: Vec::new(),
            pressed: None,
        })
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn open_button(&self) -> NodeId {
        self.open_button
    }

    fn move_focus(&self, doc: &mut Document, backwards: bool) -> Action {
        let tabbable = tabbable_elements(doc, self.root);
        if tabbable.is_empty() {
            return Action::None;
        }
        let len = tabbable.len();
        let next = match doc.active_element().and_then(|a| tabbable.iter().position(|n| *n == a)) {
            Some(i) if backwards => (i + len - 1) % len,
            Some(i) => (i + 1) % len,
            None if backwards => len - 1,
            None => 0,
        };
        let target = tabbable[next];
        if doc.focus(target) {
            Action::FocusMoved(target)
        } else {
            Action::None
        }
    }

    fn activate(&self, node: NodeId) -> Action {
        if node == self.open_button {
            Action::OpenDialog
        } else if node == self.quit_button {
            Action::Quit
        } else {
            Action::None
        }
    }

    fn hit_test(&self, column: u16, row: u16) -> Option<NodeId> {
        let position = Position::new(column, row);
        self.rows.iter().find(|(r, _)| r.contains(position)).map(|(_, n)| *n)
    }
}

impl Component for DemoPage {
    fn handle_events(&mut self, doc: &mut Document, event: Option<Event>) -> Action {
        match event {
            Some(Event::Key(key)) if key.kind == KeyEventKind::Press => self.handle_key_events(doc, key),
            Some(Event::Mouse(mouse)) => {
                let hit = self.hit_test(mouse.column, mouse.row);
                match mouse.kind {
                    MouseEventKind::Down(MouseButton::Left) => {
                        self.pressed = hit;
                        Action::None
                    }
                    MouseEventKind::Up(MouseButton::Left) => match (self.pressed.take(), hit) {
                        (Some(down), Some(up)) if down == up && doc.focus(up) => match self.activate(up) {
                            Action::None => Action::FocusMoved(up),
                            action => action,
                        },
                        _ => Action::None,
                    },
                    _ => Action::None,
                }
            }
            _ => Action::None,
        }
    }

    fn handle_key_events(&mut self, doc: &mut Document, key: KeyEvent) -> Action {
        if edit_focused_input(doc, key) {
            return Action::None;
        }
        match key.code {
            KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => self.move_focus(doc, true),
            KeyCode::Tab => self.move_focus(doc, false),
            KeyCode::BackTab => self.move_focus(doc, true),
            KeyCode::Enter | KeyCode::Char(' ') => doc.active_element().map_or(Action::None, |n| self.activate(n)),
            KeyCode::Char('o') => Action::OpenDialog,
            KeyCode::Char('l') => Action::ShowLogs,
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }

    fn render(&mut self, doc: &Document, f: &mut Frame, rect: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Page ")
            .style(Style::default().fg(Color::White));
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        self.rows.clear();
        let focused = doc.active_element();
        let mut y = inner.y;
        for node in doc.descendants(self.root) {
            if y >= inner.bottom() {
                break;
            }
            if doc.is_hidden(node) {
                continue;
            }
            let Some(line) = element_line(doc, node, focused == Some(node)) else {
                continue;
            };
            let row = Rect::new(inner.x, y, inner.width, 1);
            f.render_widget(Paragraph::new(line), row);
            self.rows.push((row, node));
            y += 1;
        }
    }
}

/// Status line: last event on the left, key hints on the right
pub fn render_status_bar(f: &mut Frame, rect: Rect, status: &str) {
    let [status_area, hints_area] = Layout::horizontal([Constraint::Min(0), Constraint::Length(48)]).areas(rect);
    f.render_widget(
        Paragraph::new(Line::from(status.to_string()))
            .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::ITALIC)),
        status_area,
    );
    let hints = create_instructions_paragraph(&[
        shortcuts::TAB_NEXT,
        shortcuts::SEPARATOR,
        shortcuts::ENTER_ACTIVATE,
        shortcuts::SEPARATOR,
        shortcuts::LOGS,
        shortcuts::SEPARATOR,
        shortcuts::QUIT,
    ]);
    f.render_widget(hints, hints_area);
}
