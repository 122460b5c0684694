use super::actions::Action;
use crate::dom::Document;
use crossterm::event::{Event, KeyEvent};
use ratatui::{layout::Rect, Frame};

/// A piece of UI that reads and writes the shared [`Document`].
pub trait Component {
    fn handle_events(&mut self, doc: &mut Document, event: Option<Event>) -> Action {
        if let Some(Event::Key(key)) = event {
            self.handle_key_events(doc, key)
        } else {
            Action::None
        }
    }

    fn handle_key_events(&mut self, doc: &mut Document, key: KeyEvent) -> Action;

    fn update(&mut self, _doc: &mut Document, action: Action) -> Action {
        // Default implementation passes action through
        action
    }

    /// Called once per application tick.
    fn on_tick(&mut self, _doc: &mut Document) -> Action {
        Action::None
    }

    fn render(&mut self, doc: &Document, f: &mut Frame, rect: Rect);
}
