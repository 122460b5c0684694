use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    widgets::{Clear, Paragraph},
    Frame,
};

use super::dismissal::{DismissalConfig, DismissalPolicy, DismissalTrigger};
use super::options::DialogOptions;
use super::state::{DialogLifecycle, DialogState, LifecycleEffect, PendingTick};
use crate::constants::{
    ATTR_ARIA_DESCRIBEDBY, ATTR_ARIA_HIDDEN, ATTR_ARIA_LABEL, ATTR_ARIA_LABELLEDBY, ATTR_ARIA_MODAL, ATTR_DISMISS,
    ATTR_OVERLAY_PART, ATTR_ROLE, CLOSE_BUTTON_ARIA_LABEL, CLOSE_BUTTON_LABEL, LOG_DISMISS_DENIED,
    LOG_MOUNT_POINT_DETACHED, PART_BACKDROP, PART_BODY, PART_CONTENT, PART_PORTAL, ROLE_DIALOG,
};
use crate::dom::{Document, DomError, Element, ElementKind, NodeId};
use crate::focus::{FocusRestoreManager, FocusTrapController, RestoreTarget};
use crate::ui::components::dialog_frame::{
    create_dialog_block, create_instructions_paragraph, element_line, shortcuts, InstructionShortcut,
};
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;

/// Global counter for unique dialog IDs.
static DIALOG_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique identifier of an overlay host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DialogId(u64);

impl DialogId {
    fn next() -> Self {
        Self(DIALOG_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    #[inline]
    pub const fn id(self) -> u64 {
        self.0
    }
}

impl fmt::Display for DialogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dialog-{}", self.0)
    }
}

/// Screen regions from the last frame, used to map mouse positions to nodes.
#[derive(Debug, Clone, Default)]
struct HitRegions {
    dialog: Rect,
    close: Option<Rect>,
    rows: Vec<(Rect, NodeId)>,
}

/// A modal dialog: backdrop, content region and the machinery that keeps
/// focus, dismissal and scroll locking consistent with its lifecycle.
///
/// The host builds its overlay subtree once, detached, and attaches it to the
/// mount point when opened. Consumer content goes under [`OverlayHost::body`].
/// Mounting and unmounting complete on the next [`OverlayHost::tick`], so a
/// frame can be drawn between `open()` and focus moving into the dialog.
///
/// Keyboard and pointer input is only acted on while the dialog is `Open`.
pub struct OverlayHost {
    id: DialogId,
    options: DialogOptions,
    lifecycle: DialogLifecycle,
    trap: FocusTrapController,
    restore: FocusRestoreManager,

    portal: NodeId,
    backdrop: NodeId,
    content: NodeId,
    title: NodeId,
    description: Option<NodeId>,
    body: NodeId,
    close_button: Option<NodeId>,

    pressed: Option<NodeId>,
    mount_warned: bool,
    regions: Option<HitRegions>,
}

impl OverlayHost {
    pub fn new(doc: &mut Document, options: DialogOptions) -> Result<Self, DomError> {
        let id = DialogId::next();
        let title_id = format!("{id}-title");

        let portal = doc.create_element(Element::div().with_attribute(ATTR_OVERLAY_PART, PART_PORTAL));
        let backdrop = doc.append_element(
            portal,
            Element::div()
                .with_attribute(ATTR_OVERLAY_PART, PART_BACKDROP)
                .with_attribute(ATTR_ARIA_HIDDEN, "true"),
        )?;
        let content = doc.append_element(
            portal,
            Element::div()
                .with_id(id.to_string())
                .with_attribute(ATTR_ROLE, ROLE_DIALOG)
                .with_attribute(ATTR_OVERLAY_PART, PART_CONTENT)
                .with_attribute(ATTR_ARIA_LABELLEDBY, &title_id),
        )?;
        let title = doc.append_element(
            content,
            Element::new(ElementKind::Heading).with_id(title_id).with_text(&options.title),
        )?;

        let description = match &options.description {
            Some(text) => {
                let description_id = format!("{id}-description");
                doc.set_attribute(content, ATTR_ARIA_DESCRIBEDBY, &description_id);
                let node = doc.append_element(
                    content,
                    Element::new(ElementKind::Paragraph).with_id(description_id).with_text(text),
                )?;
                Some(node)
            }
            None => None,
        };

        let body = doc.append_element(content, Element::div().with_attribute(ATTR_OVERLAY_PART, PART_BODY))?;

        let close_button = if options.close_button {
            let node = doc.append_element(
                content,
                Element::button(CLOSE_BUTTON_LABEL)
                    .with_attribute(ATTR_DISMISS, "")
                    .with_attribute(ATTR_ARIA_LABEL, CLOSE_BUTTON_ARIA_LABEL),
            )?;
            Some(node)
        } else {
            None
        };

        log::debug!("Created {} \"{}\"", id, options.title);

        let mut host = Self {
            id,
            options,
            lifecycle: DialogLifecycle::new(),
            trap: FocusTrapController::new(),
            restore: FocusRestoreManager::new(),
            portal,
            backdrop,
            content,
            title,
            description,
            body,
            close_button,
            pressed: None,
            mount_warned: false,
            regions: None,
        };
        host.sync_close_button(doc);
        Ok(host)
    }

    pub fn id(&self) -> DialogId {
        self.id
    }

    pub fn state(&self) -> DialogState {
        self.lifecycle.state()
    }

    pub fn options(&self) -> &DialogOptions {
        &self.options
    }

    /// True exactly while the dialog is `Open`.
    pub fn is_modal_active(&self) -> bool {
        self.state() == DialogState::Open
    }

    pub fn is_trap_active(&self) -> bool {
        self.trap.is_active()
    }

    pub fn restore_target(&self) -> Option<RestoreTarget> {
        self.restore.target()
    }

    /// Wrapper attached to the mount point while the dialog is rendered.
    pub fn portal(&self) -> NodeId {
        self.portal
    }

    pub fn backdrop(&self) -> NodeId {
        self.backdrop
    }

    /// The `role="dialog"` region focus is trapped in.
    pub fn content(&self) -> NodeId {
        self.content
    }

    pub fn title(&self) -> NodeId {
        self.title
    }

    pub fn description(&self) -> Option<NodeId> {
        self.description
    }

    /// Container for consumer content.
    pub fn body(&self) -> NodeId {
        self.body
    }

    pub fn close_button(&self) -> Option<NodeId> {
        self.close_button
    }

    pub fn set_initial_focus(&mut self, node: Option<NodeId>) {
        self.options.initial_focus = node;
    }

    pub fn set_dismissal(&mut self, doc: &mut Document, dismissal: DismissalConfig) {
        self.options.dismissal = dismissal;
        self.sync_close_button(doc);
    }

    fn sync_close_button(&self, doc: &mut Document) {
        if let Some(button) = self.close_button {
            doc.set_hidden(button, !self.options.dismissal.closable);
        }
    }

    // --- Lifecycle ---

    pub fn open(&mut self, doc: &mut Document) {
        let effects = self.lifecycle.open();
        self.apply(doc, effects);
    }

    /// Programmatic close. Always allowed, whatever the dismissal config says.
    pub fn close(&mut self, doc: &mut Document) {
        let effects = self.lifecycle.close();
        self.apply(doc, effects);
    }

    /// Complete a pending mount or unmount.
    ///
    /// A mount only completes once the overlay is attached to the document;
    /// until then the dialog stays in `Opening`.
    pub fn tick(&mut self, doc: &mut Document) -> Action {
        match self.lifecycle.pending() {
            Some(PendingTick::Mount) => {
                if !doc.is_attached(self.portal) {
                    if !self.mount_warned {
                        log::warn!("{} ({})", LOG_MOUNT_POINT_DETACHED, self.id);
                        self.mount_warned = true;
                    }
                    return Action::None;
                }
                let effects = self.lifecycle.mount_complete();
                self.apply(doc, effects);
                log::info!("Opened {}", self.id);
                Action::Opened
            }
            Some(PendingTick::Unmount) => {
                let effects = self.lifecycle.unmount_complete();
                self.apply(doc, effects);
                log::info!("Closed {}", self.id);
                Action::Closed
            }
            None => Action::None,
        }
    }

    fn apply(&mut self, doc: &mut Document, effects: &[LifecycleEffect]) {
        for effect in effects {
            match effect {
                LifecycleEffect::Mount => self.mount(doc),
                LifecycleEffect::CaptureFocus => {
                    self.restore.capture(doc);
                }
                LifecycleEffect::ActivateTrap => {
                    self.trap.activate(doc, self.content, self.options.initial_focus);
                }
                LifecycleEffect::SetAriaModal => doc.set_attribute(self.content, ATTR_ARIA_MODAL, "true"),
                LifecycleEffect::LockScroll => doc.lock_scroll(),
                LifecycleEffect::DeactivateTrap => self.trap.deactivate(),
                LifecycleEffect::ClearAriaModal => doc.remove_attribute(self.content, ATTR_ARIA_MODAL),
                LifecycleEffect::UnlockScroll => doc.unlock_scroll(),
                LifecycleEffect::RestoreFocus => {
                    // Focus already handed to another dialog stays where it is
                    let focus_here = match doc.active_element() {
                        Some(active) => doc.contains(self.portal, active),
                        None => true,
                    };
                    if focus_here {
                        self.restore.restore(doc);
                    } else {
                        log::debug!("{} closed without focus, restore skipped", self.id);
                        self.restore.clear();
                    }
                }
                LifecycleEffect::Unmount => {
                    doc.remove(self.portal);
                    self.pressed = None;
                    self.regions = None;
                }
            }
        }
    }

    fn mount(&mut self, doc: &mut Document) {
        let parent = self.options.mount_point.unwrap_or(doc.body());
        self.mount_warned = false;
        if let Err(e) = doc.append_child(parent, self.portal) {
            log::warn!("Failed to mount {}: {}", self.id, e);
        }
    }

    // --- Dismissal ---

    /// Ask for the dialog to close because of `trigger`.
    ///
    /// User triggers are ignored unless the dialog is `Open`; a programmatic
    /// request also cancels an `Opening` dialog.
    pub fn request_dismiss(&mut self, doc: &mut Document, trigger: DismissalTrigger) -> Action {
        let listening = match trigger {
            DismissalTrigger::Programmatic => matches!(self.state(), DialogState::Opening | DialogState::Open),
            _ => self.is_modal_active(),
        };
        if !listening {
            return Action::None;
        }

        if !DismissalPolicy::permits(trigger, &self.options.dismissal) {
            log::debug!("{}: {} {:?}", LOG_DISMISS_DENIED, self.id, trigger);
            return Action::DismissDenied(trigger);
        }

        log::info!("Dismissing {} ({:?})", self.id, trigger);
        self.close(doc);
        Action::Dismissed(trigger)
    }

    // --- Input ---

    pub fn key_down(&mut self, doc: &mut Document, key: KeyEvent) -> Action {
        if !self.is_modal_active() {
            return Action::None;
        }
        match key.code {
            KeyCode::Esc => self.request_dismiss(doc, DismissalTrigger::Escape),
            KeyCode::Tab => self.move_focus(doc, key.modifiers.contains(KeyModifiers::SHIFT)),
            KeyCode::BackTab => self.move_focus(doc, true),
            KeyCode::Enter | KeyCode::Char(' ') => match doc.active_element() {
                Some(node) if doc.contains(self.content, node) => self.activate(doc, node),
                _ => Action::None,
            },
            _ => Action::None,
        }
    }

    fn move_focus(&mut self, doc: &mut Document, shift: bool) -> Action {
        self.trap.on_tab_key(doc, shift).map_or(Action::None, Action::FocusMoved)
    }

    pub fn pointer_down(&mut self, node: NodeId) {
        self.pressed = self.is_modal_active().then_some(node);
    }

    /// Finish a pointer gesture started with [`OverlayHost::pointer_down`].
    ///
    /// A gesture touching the backdrop at either end is a backdrop click,
    /// which the dismissal policy only accepts when both ends are on it.
    /// Pressing and releasing on the same node inside the content is a click.
    pub fn pointer_up(&mut self, doc: &mut Document, node: NodeId) -> Action {
        let pressed = self.pressed.take();
        if !self.is_modal_active() {
            return Action::None;
        }

        let pressed_on_backdrop = pressed == Some(self.backdrop);
        let released_on_backdrop = node == self.backdrop;
        if pressed_on_backdrop || released_on_backdrop {
            return self.request_dismiss(
                doc,
                DismissalTrigger::BackdropClick {
                    pressed_on_backdrop,
                    released_on_backdrop,
                },
            );
        }

        if pressed == Some(node) {
            self.click(doc, node)
        } else {
            Action::None
        }
    }

    /// Click on a node inside the content: focus it (or its nearest focusable
    /// ancestor) and activate it.
    pub fn click(&mut self, doc: &mut Document, node: NodeId) -> Action {
        if !self.is_modal_active() || !doc.contains(self.content, node) {
            return Action::None;
        }

        let target = self.focus_target(doc, node);
        if let Some(target) = target {
            doc.focus(target);
        }
        match (self.activate(doc, target.unwrap_or(node)), target) {
            (Action::None, Some(target)) => Action::FocusMoved(target),
            (action, _) => action,
        }
    }

    fn activate(&mut self, doc: &mut Document, node: NodeId) -> Action {
        if doc.is_disabled(node) {
            return Action::None;
        }
        if self.is_close_affordance(doc, node) {
            return self.request_dismiss(doc, DismissalTrigger::CloseAffordance);
        }
        match doc.kind(node) {
            Some(ElementKind::Button | ElementKind::Anchor) => Action::Activate(node),
            _ => Action::None,
        }
    }

    fn is_close_affordance(&self, doc: &Document, node: NodeId) -> bool {
        self.ancestors_in_content(doc, node)
            .any(|n| doc.has_attribute(n, ATTR_DISMISS))
    }

    fn focus_target(&self, doc: &Document, node: NodeId) -> Option<NodeId> {
        self.ancestors_in_content(doc, node).find(|n| doc.is_focusable(*n))
    }

    /// `node` and its ancestors up to and including the content region.
    fn ancestors_in_content<'a>(&self, doc: &'a Document, node: NodeId) -> impl Iterator<Item = NodeId> + 'a {
        let content = self.content;
        let mut current = Some(node);
        std::iter::from_fn(move || {
            let node = current?;
            current = if node == content { None } else { doc.parent(node) };
            Some(node)
        })
    }

    fn handle_mouse_event(&mut self, doc: &mut Document, mouse: MouseEvent) -> Action {
        let Some(node) = self.hit_test(mouse.column, mouse.row) else {
            return Action::None;
        };
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.pointer_down(node);
                Action::None
            }
            MouseEventKind::Up(MouseButton::Left) => self.pointer_up(doc, node),
            _ => Action::None,
        }
    }

    /// The node drawn at a terminal cell in the last rendered frame.
    ///
    /// Anything outside the dialog box is the backdrop. `None` before the
    /// first frame or after unmount.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<NodeId> {
        let regions = self.regions.as_ref()?;
        let position = Position::new(column, row);

        if regions.close.is_some_and(|r| r.contains(position)) {
            return self.close_button;
        }
        if let Some((_, node)) = regions.rows.iter().find(|(r, _)| r.contains(position)) {
            return Some(*node);
        }
        if regions.dialog.contains(position) {
            Some(self.content)
        } else {
            Some(self.backdrop)
        }
    }

    fn instructions(&self) -> Vec<InstructionShortcut> {
        let mut instructions = vec![shortcuts::TAB_NEXT, shortcuts::SEPARATOR, shortcuts::ENTER_ACTIVATE];
        let dismissal = &self.options.dismissal;
        if dismissal.closable && dismissal.close_on_esc {
            instructions.push(shortcuts::SEPARATOR);
            instructions.push(shortcuts::ESC_CLOSE);
        }
        instructions
    }
}

impl Component for OverlayHost {
    fn handle_events(&mut self, doc: &mut Document, event: Option<Event>) -> Action {
        match event {
            Some(Event::Key(key)) if key.kind == KeyEventKind::Press => self.handle_key_events(doc, key),
            Some(Event::Mouse(mouse)) => self.handle_mouse_event(doc, mouse),
            _ => Action::None,
        }
    }

    fn handle_key_events(&mut self, doc: &mut Document, key: KeyEvent) -> Action {
        self.key_down(doc, key)
    }

    fn update(&mut self, doc: &mut Document, action: Action) -> Action {
        match action {
            Action::OpenDialog => {
                self.open(doc);
                Action::None
            }
            Action::CloseDialog => self.request_dismiss(doc, DismissalTrigger::Programmatic),
            other => other,
        }
    }

    fn on_tick(&mut self, doc: &mut Document) -> Action {
        self.tick(doc)
    }

    fn render(&mut self, doc: &Document, f: &mut Frame, rect: Rect) {
        if !self.state().is_rendered() || !doc.is_attached(self.portal) {
            self.regions = None;
            return;
        }

        // Backdrop dims everything underneath
        f.buffer_mut().set_style(rect, Style::default().add_modifier(Modifier::DIM));

        let dialog_area = LayoutManager::centered_rect(self.options.width_percent, self.options.height_percent, rect);
        f.render_widget(Clear, dialog_area);

        let theme = if self.is_modal_active() { Color::Cyan } else { Color::DarkGray };
        let title = format!(" {} ", doc.text(self.title));
        let block = create_dialog_block(&title, theme);
        let inner = block.inner(dialog_area);
        f.render_widget(block, dialog_area);

        let mut regions = HitRegions {
            dialog: dialog_area,
            ..HitRegions::default()
        };
        let focused = doc.active_element();
        // Last inner row is reserved for the instructions
        let bottom = inner.bottom().saturating_sub(1);
        let mut y = inner.y;

        if let Some(description) = self.description {
            if y < bottom {
                let row = Rect::new(inner.x, y, inner.width, 1);
                f.render_widget(
                    Paragraph::new(doc.text(description).to_string()).style(Style::default().fg(Color::Gray)),
                    row,
                );
                y = y.saturating_add(2);
            }
        }

        for node in doc.descendants(self.body) {
            if y >= bottom {
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
            regions.rows.push((row, node));
            y += 1;
        }

        if inner.height > 0 {
            let footer = Rect::new(inner.x, inner.bottom() - 1, inner.width, 1);
            f.render_widget(create_instructions_paragraph(&self.instructions()), footer);
        }

        if let Some(close) = self.close_button.filter(|c| !doc.is_hidden(*c)) {
            if dialog_area.width >= 6 {
                let area = Rect::new(dialog_area.right() - 4, dialog_area.y, 3, 1);
                let mut style = Style::default().fg(Color::Red).add_modifier(Modifier::BOLD);
                if focused == Some(close) {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                f.render_widget(Paragraph::new(format!(" {} ", doc.text(close))).style(style), area);
                regions.close = Some(area);
            }
        }

        self.regions = Some(regions);
    }
}
