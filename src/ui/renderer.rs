//! Terminal setup and the main UI loop

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tokio::time::Duration;

use super::app::App;
use super::core::{EventHandler, EventType};
use crate::config::Config;
use crate::logger::Logger;

/// Run the main TUI application
pub async fn run_app(config: Config, logger: Logger) -> Result<()> {
    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    if config.ui.mouse_enabled {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let res = match App::new(config, logger) {
        Ok(mut app) => run_ui(&mut terminal, &mut app, tick_rate).await,
        Err(e) => Err(e),
    };

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    res
}

/// Main UI loop
async fn run_ui(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    tick_rate: Duration,
) -> Result<()> {
    let mut events = EventHandler::new(tick_rate);
    draw_frame(terminal, app)?;
    events.mark_rendered();

    loop {
        let event = events.next_event().await?;
        let is_tick = matches!(event, EventType::Tick);
        match event {
            EventType::Key(key) => app.handle_event(Event::Key(key)),
            EventType::Mouse(mouse) => app.handle_event(Event::Mouse(mouse)),
            EventType::Tick | EventType::Resize(_, _) | EventType::Other => {}
        }

        if app.should_quit {
            break;
        }

        // Ticks always redraw so pending mounts and unmounts never stall
        if is_tick || events.should_render() {
            draw_frame(terminal, app)?;
            events.mark_rendered();
        }
    }

    app.logger.flush();
    Ok(())
}

/// Draw one frame, then complete the dialog mounts and unmounts it showed.
///
/// A dialog therefore always appears on screen in `Opening` before it
/// takes focus, and is drawn one last time in `Closing`.
pub fn draw_frame<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    terminal.draw(|f| app.render(f))?;
    app.on_tick();
    Ok(())
}
