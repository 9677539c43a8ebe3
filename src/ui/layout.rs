//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Split the screen into the task list and a one-line status bar
    #[must_use]
    pub fn main_layout(area: Rect) -> (Rect, Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);
        (chunks[0], chunks[1])
    }

    /// Calculate a centered rectangle with a fixed size, shrunk to fit `r`
    #[must_use]
    pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
        let width = width.min(r.width);
        let height = height.min(r.height);
        Rect::new(
            r.x + (r.width - width) / 2,
            r.y + (r.height - height) / 2,
            width,
            height,
        )
    }

    /// Place a popup of the given size right-aligned under `anchor`.
    ///
    /// The popup flips above the anchor when there is no room below and is
    /// always clamped inside `bounds`.
    #[must_use]
    pub fn anchored_popup(anchor: Rect, width: u16, height: u16, bounds: Rect) -> Rect {
        let width = width.min(bounds.width);
        let height = height.min(bounds.height);

        let preferred_x = anchor.right().saturating_sub(width);
        let x = preferred_x.clamp(bounds.x, bounds.right().saturating_sub(width));

        let below = anchor.bottom();
        let y = if below + height <= bounds.bottom() {
            below
        } else {
            anchor.y.saturating_sub(height).max(bounds.y)
        };

        Rect::new(x, y, width, height)
    }
}
