//! Nested dialogs.
//!
//! Dialogs opened on top of each other form a stack. Input goes to the
//! topmost dialog that is not already on its way out; every dialog keeps its
//! own restore target, so closing the inner one puts focus back inside the
//! outer one.

use crossterm::event::{Event, KeyEvent};
use ratatui::{layout::Rect, Frame};

use super::host::{DialogId, OverlayHost};
use super::state::DialogState;
use crate::dom::Document;
use crate::ui::core::{Action, Component};

#[derive(Default)]
pub struct DialogStack {
    hosts: Vec<OverlayHost>,
}

impl DialogStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put `host` on top of the stack and open it.
    pub fn push(&mut self, doc: &mut Document, mut host: OverlayHost) -> DialogId {
        let id = host.id();
        host.open(doc);
        log::debug!("Pushed {} (depth {})", id, self.hosts.len() + 1);
        self.hosts.push(host);
        id
    }

    /// Programmatically close a dialog anywhere in the stack.
    ///
    /// The host stays on the stack until its unmount completes on a tick.
    pub fn close(&mut self, doc: &mut Document, id: DialogId) -> Action {
        match self.get_mut(id) {
            Some(host) => host.update(doc, Action::CloseDialog),
            None => Action::None,
        }
    }

    /// Close the topmost dialog that is still opening or open.
    pub fn close_top(&mut self, doc: &mut Document) -> Action {
        match self.active_mut() {
            Some(host) => host.update(doc, Action::CloseDialog),
            None => Action::None,
        }
    }

    pub fn top(&self) -> Option<&OverlayHost> {
        self.hosts.last()
    }

    pub fn top_id(&self) -> Option<DialogId> {
        self.top().map(OverlayHost::id)
    }

    pub fn get(&self, id: DialogId) -> Option<&OverlayHost> {
        self.hosts.iter().find(|h| h.id() == id)
    }

    pub fn get_mut(&mut self, id: DialogId) -> Option<&mut OverlayHost> {
        self.hosts.iter_mut().find(|h| h.id() == id)
    }

    pub fn contains(&self, id: DialogId) -> bool {
        self.get(id).is_some()
    }

    pub fn depth(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    /// The dialog that receives input.
    fn active_mut(&mut self) -> Option<&mut OverlayHost> {
        self.hosts
            .iter_mut()
            .rev()
            .find(|h| matches!(h.state(), DialogState::Opening | DialogState::Open))
    }

    /// Tick every dialog, innermost first, and drop the ones that finished closing.
    pub fn tick(&mut self, doc: &mut Document) -> Vec<(DialogId, Action)> {
        let mut actions = Vec::new();
        for host in self.hosts.iter_mut().rev() {
            let action = host.tick(doc);
            if !action.is_none() {
                actions.push((host.id(), action));
            }
        }
        self.hosts.retain(|h| h.state() != DialogState::Closed);
        actions
    }
}

impl Component for DialogStack {
    fn handle_events(&mut self, doc: &mut Document, event: Option<Event>) -> Action {
        match self.active_mut() {
            Some(host) => host.handle_events(doc, event),
            None => Action::None,
        }
    }

    fn handle_key_events(&mut self, doc: &mut Document, key: KeyEvent) -> Action {
        match self.active_mut() {
            Some(host) => host.handle_key_events(doc, key),
            None => Action::None,
        }
    }

    fn update(&mut self, doc: &mut Document, action: Action) -> Action {
        match action {
            Action::CloseDialog => self.close_top(doc),
            other => other,
        }
    }

    /// Reports the innermost completion. Callers that need every
    /// completion of the tick use [`DialogStack::tick`].
    fn on_tick(&mut self, doc: &mut Document) -> Action {
        let mut actions = self.tick(doc).into_iter();
        let Some((_, first)) = actions.next() else {
            return Action::None;
        };
        for (id, action) in actions {
            log::debug!("{}: {:?} (not reported by on_tick)", id, action);
        }
        first
    }

    /// Draw bottom to top so the innermost dialog ends up on top.
    fn render(&mut self, doc: &Document, f: &mut Frame, rect: Rect) {
        for host in &mut self.hosts {
            host.render(doc, f, rect);
        }
    }
}
