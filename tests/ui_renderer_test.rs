use crossterm::event::{Event, KeyCode, KeyEvent};
use overlay_kit::config::Config;
use overlay_kit::dialog::{DialogState, OverlayHost};
use overlay_kit::logger::Logger;
use overlay_kit::ui::renderer::draw_frame;
use overlay_kit::ui::App;
use ratatui::{backend::TestBackend, Terminal};

/// Description line of the demo dialog
const DIALOG_TEXT: &str = "stay inside this dialog";

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::from(code))
}

fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    terminal.backend().buffer().content().iter().map(|c| c.symbol()).collect()
}

#[test]
fn test_dialog_is_drawn_before_its_mount_completes() {
    let mut app = App::new(Config::default(), Logger::new()).unwrap();
    let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
    draw_frame(&mut terminal, &mut app).unwrap();
    assert!(!screen_text(&terminal).contains(DIALOG_TEXT));

    app.handle_event(key(KeyCode::Enter));
    let id = app.dialogs.top_id().unwrap();
    assert_eq!(app.dialogs.get(id).map(OverlayHost::state), Some(DialogState::Opening));
    assert_eq!(app.doc.active_element(), Some(app.page.open_button()));

    draw_frame(&mut terminal, &mut app).unwrap();
    assert!(screen_text(&terminal).contains(DIALOG_TEXT));
    assert_eq!(app.dialogs.get(id).map(OverlayHost::state), Some(DialogState::Open));
    assert_ne!(app.doc.active_element(), Some(app.page.open_button()));
}

#[test]
fn test_unmount_completes_after_the_closing_frame() {
    let mut app = App::new(Config::default(), Logger::new()).unwrap();
    let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
    app.handle_event(key(KeyCode::Enter));
    draw_frame(&mut terminal, &mut app).unwrap();

    app.handle_event(key(KeyCode::Esc));
    let id = app.dialogs.top_id().unwrap();
    assert_eq!(app.dialogs.get(id).map(OverlayHost::state), Some(DialogState::Closing));

    draw_frame(&mut terminal, &mut app).unwrap();
    assert!(app.dialogs.is_empty());
    assert_eq!(app.doc.active_element(), Some(app.page.open_button()));

    draw_frame(&mut terminal, &mut app).unwrap();
    assert!(!screen_text(&terminal).contains(DIALOG_TEXT));
}
