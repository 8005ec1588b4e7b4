//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::constants::{FOLDER_PANE_MAX_WIDTH, SECTION_NAV_WIDTH};

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Split the screen into the main view area and a one-line status bar.
    #[must_use]
    pub fn main_layout(area: Rect) -> Vec<Rect> {
        let top_height = area.height.saturating_sub(1);
        let view_area = Rect::new(area.x, area.y, area.width, top_height);
        let status_area = Rect::new(area.x, area.y + top_height, area.width, 1);

        vec![view_area, status_area]
    }

    /// Two-pane module browser layout: folder pane on the left, module
    /// list taking the rest.
    #[must_use]
    pub fn module_browser_layout(area: Rect, folder_pane_width: u16) -> Vec<Rect> {
        let folder_width = folder_pane_width.min(FOLDER_PANE_MAX_WIDTH).min(area.width / 2);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(folder_width), Constraint::Min(0)])
            .split(area)
            .to_vec()
    }

    /// Info page layout: section navigation on the left, content on the
    /// right. The nav pane collapses on narrow terminals.
    #[must_use]
    pub fn info_page_layout(area: Rect) -> Vec<Rect> {
        if area.width < SECTION_NAV_WIDTH * 3 {
            return vec![Rect::new(area.x, area.y, 0, 0), area];
        }

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SECTION_NAV_WIDTH), Constraint::Min(0)])
            .split(area)
            .to_vec()
    }

    /// Calculate a centered rectangle with a fixed line height
    #[must_use]
    pub fn centered_rect_lines(percent_x: u16, lines: u16, r: Rect) -> Rect {
        let height = lines.min(r.height);
        let y = r.y + (r.height.saturating_sub(height)) / 2;
        let width = (r.width * percent_x) / 100;
        let x = r.x + (r.width.saturating_sub(width)) / 2;
        Rect::new(x, y, width, height)
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
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
