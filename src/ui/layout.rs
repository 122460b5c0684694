//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Split the screen into the page area and a one line status bar below it
    #[must_use]
    pub fn main_layout(area: Rect) -> (Rect, Rect) {
        let page_height = area.height.saturating_sub(1);
        let page_area = Rect::new(area.x, area.y, area.width, page_height);
        let status_area = Rect::new(area.x, area.y + page_height, area.width, area.height.min(1));
        (page_area, status_area)
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let percent_x = percent_x.min(100);
        let percent_y = percent_y.min(100);
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }
}
