use crossterm::event::{poll, Event, KeyEvent, MouseEvent};
use tokio::time::{Duration, Instant};

/// How often the terminal is polled while waiting for the next tick
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(10);
/// Minimum time between two frames (~60 FPS)
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

pub struct EventHandler {
    tick_rate: Duration,
    last_tick: Instant,
    last_render_time: Instant,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        Self {
            tick_rate,
            last_tick: Instant::now(),
            last_render_time: Instant::now(),
        }
    }

    /// Wait for the next terminal event, or a tick once the tick rate has elapsed.
    pub async fn next_event(&mut self) -> anyhow::Result<EventType> {
        loop {
            // Check for terminal events without blocking first
            if poll(Duration::from_millis(0))? {
                return Ok(match crossterm::event::read()? {
                    Event::Key(key) => EventType::Key(key),
                    Event::Mouse(mouse) => EventType::Mouse(mouse),
                    Event::Resize(w, h) => EventType::Resize(w, h),
                    _ => EventType::Other,
                });
            }

            if self.tick_due() {
                return Ok(EventType::Tick);
            }
            tokio::time::sleep(INPUT_POLL_INTERVAL).await;
        }
    }

    /// Whether a tick is due; resets the tick clock when it is.
    pub fn tick_due(&mut self) -> bool {
        if self.last_tick.elapsed() >= self.tick_rate {
            self.last_tick = Instant::now();
            true
        } else {
            false
        }
    }

    /// Get the time since last render for frame timing
    pub fn time_since_last_render(&self) -> Duration {
        self.last_render_time.elapsed()
    }

    /// Check if we should render based on timing
    pub fn should_render(&self) -> bool {
        self.time_since_last_render() >= FRAME_INTERVAL
    }

    pub fn mark_rendered(&mut self) {
        self.last_render_time = Instant::now();
    }
}

#[derive(Debug, Clone)]
pub enum EventType {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    Tick,
    Other,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(Duration::from_millis(100)) // 10 Hz for application ticks
    }
}
