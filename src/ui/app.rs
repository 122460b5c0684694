//! Application state and event routing

use std::collections::HashMap;

use anyhow::Result;
use crossterm::event::{Event, KeyEventKind};
use ratatui::Frame;

use super::components::demo_page::{edit_focused_input, render_status_bar};
use super::components::DemoPage;
use super::core::{Action, Component};
use super::layout::LayoutManager;
use crate::config::Config;
use crate::constants::{ATTR_DISMISS, LOG_DIALOG_EMPTY, LOG_DIALOG_TITLE};
use crate::dialog::{DialogOptions, DialogStack, OverlayHost};
use crate::dom::{Document, DomError, Element, ElementKind, NodeId};
use crate::logger::Logger;

/// Buttons inside the demo dialog that the application reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DialogControl {
    OpenNested,
    Save,
}

/// Application state
pub struct App {
    pub should_quit: bool,
    pub doc: Document,
    pub page: DemoPage,
    pub dialogs: DialogStack,
    pub config: Config,
    pub logger: Logger,
    /// Last thing that happened, shown in the status bar
    pub status: String,
    controls: HashMap<NodeId, DialogControl>,
}

impl App {
    pub fn new(config: Config, logger: Logger) -> Result<Self> {
        let mut doc = Document::new();
        let page = DemoPage::new(&mut doc)?;

        Ok(Self {
            should_quit: false,
            doc,
            page,
            dialogs: DialogStack::new(),
            config,
            logger,
            status: String::new(),
            controls: HashMap::new(),
        })
    }

    /// Route a terminal event to the open dialog, or to the page when there is none.
    pub fn handle_event(&mut self, event: Event) {
        let action = if self.dialogs.is_empty() {
            self.page.handle_events(&mut self.doc, Some(event))
        } else {
            let action = self.dialogs.handle_events(&mut self.doc, Some(event.clone()));
            if let (Action::None, Event::Key(key)) = (&action, event) {
                if key.kind == KeyEventKind::Press && self.focus_in_open_dialog() {
                    edit_focused_input(&mut self.doc, key);
                }
            }
            action
        };
        self.dispatch(action);
    }

    /// Complete pending dialog mounts and unmounts.
    pub fn on_tick(&mut self) {
        let actions = self.dialogs.tick(&mut self.doc);
        if actions.iter().any(|(_, a)| *a == Action::Closed) {
            let doc = &self.doc;
            self.controls.retain(|node, _| doc.is_attached(*node));
        }
        for (id, action) in actions {
            log::info!("{}: {:?}", id, action);
            self.status = format!("{}: {}", id, status_text(&action));
        }
    }

    pub fn render(&mut self, f: &mut Frame) {
        let (page_area, status_area) = LayoutManager::main_layout(f.area());
        self.page.render(&self.doc, f, page_area);
        self.dialogs.render(&self.doc, f, f.area());
        render_status_bar(f, status_area, &self.status);
    }

    fn focus_in_open_dialog(&self) -> bool {
        match (self.dialogs.top(), self.doc.active_element()) {
            (Some(host), Some(active)) => host.is_modal_active() && self.doc.contains(host.content(), active),
            _ => false,
        }
    }

    fn dispatch(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Quit => self.should_quit = true,
            Action::OpenDialog => self.open_dialog(),
            Action::ShowLogs => self.open_log_dialog(),
            Action::Activate(node) => match self.controls.get(&node).copied() {
                Some(DialogControl::OpenNested) => self.open_dialog(),
                Some(DialogControl::Save) => {
                    let action = self.dialogs.update(&mut self.doc, Action::CloseDialog);
                    self.report(action);
                }
                None => self.report(Action::Activate(node)),
            },
            other => self.report(other),
        }
    }

    fn report(&mut self, action: Action) {
        if action.is_none() {
            return;
        }
        log::debug!("{:?}", action);
        self.status = status_text(&action);
    }

    fn open_dialog(&mut self) {
        match self.build_dialog() {
            Ok(host) => {
                let id = self.dialogs.push(&mut self.doc, host);
                self.status = format!("Opening {}", id);
            }
            Err(e) => {
                log::error!("Failed to build dialog: {}", e);
                self.status = format!("Failed to build dialog: {}", e);
            }
        }
    }

    fn open_log_dialog(&mut self) {
        match self.build_log_dialog() {
            Ok(host) => {
                let id = self.dialogs.push(&mut self.doc, host);
                self.status = format!("Showing logs in {}", id);
            }
            Err(e) => {
                log::error!("Failed to build log dialog: {}", e);
                self.status = format!("Failed to build log dialog: {}", e);
            }
        }
    }

    /// Read-only dialog listing the logger's entries, newest first
    fn build_log_dialog(&mut self) -> Result<OverlayHost, DomError> {
        let logs = self.logger.get_logs();
        let description = if logs.is_empty() {
            LOG_DIALOG_EMPTY.to_string()
        } else {
            format!("{} entries, newest first", logs.len())
        };
        let options = DialogOptions::new()
            .title(LOG_DIALOG_TITLE)
            .description(description)
            .size(80, 80);

        let host = OverlayHost::new(&mut self.doc, options)?;
        for line in logs {
            self.doc
                .append_element(host.body(), Element::new(ElementKind::Paragraph).with_text(line))?;
        }
        Ok(host)
    }

    fn build_dialog(&mut self) -> Result<OverlayHost, DomError> {
        let depth = self.dialogs.depth();
        let mut options = self
            .config
            .dialog_options()
            .description("Tab and Shift+Tab stay inside this dialog.");
        if depth > 0 {
            options = options.title(format!("{} ({})", self.config.dialog.title, depth + 1));
        }

        let mut host = OverlayHost::new(&mut self.doc, options)?;
        let body = host.body();
        let name = self.doc.append_element(body, Element::input("Name"))?;
        self.doc.append_element(body, Element::button("Archive").disabled())?;
        let nested = self.doc.append_element(body, Element::button("Open nested dialog"))?;
        let save = self.doc.append_element(body, Element::button("Save"))?;
        self.doc
            .append_element(body, Element::button("Cancel").with_attribute(ATTR_DISMISS, ""))?;

        self.controls.insert(nested, DialogControl::OpenNested);
        self.controls.insert(save, DialogControl::Save);
        host.set_initial_focus(Some(name));
        Ok(host)
    }
}

fn status_text(action: &Action) -> String {
    match action {
        Action::Opened => "Dialog opened".to_string(),
        Action::Closed => "Dialog closed".to_string(),
        Action::Dismissed(trigger) => format!("Dismissed by {:?}", trigger),
        Action::DismissDenied(trigger) => format!("{:?} ignored, dismissal not allowed", trigger),
        Action::FocusMoved(node) => format!("Focus on {}", node),
        Action::Activate(node) => format!("Activated {}", node),
        _ => String::new(),
    }
}
