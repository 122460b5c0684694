use crossterm::event::{Event, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use overlay_kit::dialog::{DialogOptions, DialogState, DismissalTrigger, OverlayHost};
use overlay_kit::dom::{Document, Element, NodeId};
use overlay_kit::ui::core::{Action, Component};
use ratatui::{backend::TestBackend, buffer::Buffer, style::Modifier, Terminal};

fn draw(host: &mut OverlayHost, doc: &Document) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(100, 50)).unwrap();
    terminal.draw(|f| host.render(doc, f, f.area())).unwrap();
    terminal.backend().buffer().clone()
}

/// Position of the first cell where `needle` starts.
fn find(buffer: &Buffer, needle: &str) -> Option<(u16, u16)> {
    let area = buffer.area;
    for y in area.top()..area.bottom() {
        let cells: Vec<(u16, &str)> = (area.left()..area.right()).map(|x| (x, buffer[(x, y)].symbol())).collect();
        let line: String = cells.iter().map(|(_, s)| *s).collect();
        if let Some(byte_offset) = line.find(needle) {
            let mut consumed = 0;
            for (x, symbol) in &cells {
                if consumed == byte_offset {
                    return Some((*x, y));
                }
                consumed += symbol.len();
            }
        }
    }
    None
}

fn mouse(kind: MouseEventKind, (column, row): (u16, u16)) -> Option<Event> {
    Some(Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }))
}

fn click_at(host: &mut OverlayHost, doc: &mut Document, down: (u16, u16), up: (u16, u16)) -> Action {
    host.handle_events(doc, mouse(MouseEventKind::Down(MouseButton::Left), down));
    host.handle_events(doc, mouse(MouseEventKind::Up(MouseButton::Left), up))
}

fn open_form(doc: &mut Document, options: DialogOptions) -> (OverlayHost, NodeId, NodeId) {
    let mut host = OverlayHost::new(doc, options.title("Rename")).unwrap();
    let name = doc.append_element(host.body(), Element::input("Name")).unwrap();
    let save = doc.append_element(host.body(), Element::button("Save")).unwrap();
    host.open(doc);
    host.tick(doc);
    (host, name, save)
}

#[test]
fn test_render_draws_dialog_over_dimmed_backdrop() {
    let mut doc = Document::new();
    let (mut host, _, _) = open_form(&mut doc, DialogOptions::new());
    let buffer = draw(&mut host, &doc);

    assert!(find(&buffer, " Rename ").is_some());
    assert!(find(&buffer, "Name: █").is_some());
    assert!(find(&buffer, "[ Save ]").is_some());
    assert!(find(&buffer, "✕").is_some());
    assert!(find(&buffer, "Esc Close").is_some());
    assert!(buffer[(0, 0)].modifier.contains(Modifier::DIM));

    let (x, y) = find(&buffer, "[ Save ]").unwrap();
    assert_eq!(host.hit_test(0, 0), Some(host.backdrop()));
    assert_eq!(host.hit_test(x, y), doc.children(host.body()).last().copied());
}

#[test]
fn test_closed_dialog_draws_nothing() {
    let mut doc = Document::new();
    let mut host = OverlayHost::new(&mut doc, DialogOptions::new().title("Rename")).unwrap();
    let buffer = draw(&mut host, &doc);

    assert!(find(&buffer, "Rename").is_none());
    assert!(!buffer[(0, 0)].modifier.contains(Modifier::DIM));
    assert_eq!(host.hit_test(0, 0), None);
}

#[test]
fn test_escape_hint_hidden_when_escape_cannot_close() {
    let mut doc = Document::new();
    let (mut host, _, _) = open_form(&mut doc, DialogOptions::new().close_on_esc(false));
    let buffer = draw(&mut host, &doc);
    assert!(find(&buffer, "Esc Close").is_none());
    assert!(find(&buffer, "Tab Next").is_some());
}

#[test]
fn test_mouse_click_on_backdrop_dismisses() {
    let mut doc = Document::new();
    let (mut host, _, _) = open_form(&mut doc, DialogOptions::new());
    draw(&mut host, &doc);

    assert!(matches!(
        click_at(&mut host, &mut doc, (1, 1), (2, 2)),
        Action::Dismissed(DismissalTrigger::BackdropClick { .. })
    ));
    assert_eq!(host.state(), DialogState::Closing);
}

#[test]
fn test_mouse_drag_out_of_dialog_is_not_a_backdrop_click() {
    let mut doc = Document::new();
    let (mut host, _, _) = open_form(&mut doc, DialogOptions::new());
    let buffer = draw(&mut host, &doc);
    let inside = find(&buffer, "[ Save ]").unwrap();

    assert_eq!(
        click_at(&mut host, &mut doc, inside, (0, 0)),
        Action::DismissDenied(DismissalTrigger::BackdropClick {
            pressed_on_backdrop: false,
            released_on_backdrop: true,
        })
    );
    assert_eq!(host.state(), DialogState::Open);
}

#[test]
fn test_mouse_click_on_close_button() {
    let mut doc = Document::new();
    let (mut host, _, _) = open_form(&mut doc, DialogOptions::new());
    let buffer = draw(&mut host, &doc);
    let close = find(&buffer, "✕").unwrap();

    assert_eq!(host.hit_test(close.0, close.1), host.close_button());
    assert_eq!(
        click_at(&mut host, &mut doc, close, close),
        Action::Dismissed(DismissalTrigger::CloseAffordance)
    );
}

#[test]
fn test_close_button_not_drawn_when_not_closable() {
    let mut doc = Document::new();
    let (mut host, _, _) = open_form(&mut doc, DialogOptions::new().closable(false));
    let buffer = draw(&mut host, &doc);
    assert!(find(&buffer, "✕").is_none());

    assert_eq!(click_at(&mut host, &mut doc, (0, 0), (0, 0)), Action::DismissDenied(DismissalTrigger::BackdropClick {
        pressed_on_backdrop: true,
        released_on_backdrop: true,
    }));
}

#[test]
fn test_mouse_click_on_row_focuses_and_activates() {
    let mut doc = Document::new();
    let (mut host, name, save) = open_form(&mut doc, DialogOptions::new());
    assert_eq!(doc.active_element(), Some(name));
    let buffer = draw(&mut host, &doc);
    let row = find(&buffer, "[ Save ]").unwrap();

    assert_eq!(click_at(&mut host, &mut doc, row, row), Action::Activate(save));
    assert_eq!(doc.active_element(), Some(save));

    let row = find(&buffer, "Name").unwrap();
    assert_eq!(click_at(&mut host, &mut doc, row, row), Action::FocusMoved(name));
    assert_eq!(doc.active_element(), Some(name));
}
