//! Scrollbar helper utilities for components with scrollable content.
//!
//! Shared so every scrollable list gets the same scrollbar styling.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Helper for managing scrollbar state and rendering for scrollable components.
pub struct ScrollbarHelper {
    state: ScrollbarState,
}

impl Default for ScrollbarHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollbarHelper {
    pub fn new() -> Self {
        Self {
            state: ScrollbarState::new(0),
        }
    }

    /// Update the scrollbar state with current content information.
    ///
    /// # Arguments
    /// * `total_items` - Total number of items in the scrollable content
    /// * `current_position` - First visible item (0-based index)
    /// * `viewport_items` - Number of items that fit on screen
    pub fn update_state(&mut self, total_items: usize, current_position: usize, viewport_items: usize) {
        self.state = self
            .state
            .content_length(total_items)
            .position(current_position)
            .viewport_content_length(viewport_items);
    }

    /// Check if a scrollbar is needed based on content size and available space.
    pub fn needs_scrollbar(total_items: usize, viewport_items: usize) -> bool {
        total_items > viewport_items
    }

    /// Split `rect` into a content area and, when needed, a one-column scrollbar area
    pub fn calculate_areas(rect: Rect, total_items: usize, viewport_items: usize) -> (Rect, Option<Rect>) {
        if Self::needs_scrollbar(total_items, viewport_items) {
            let content_area = Rect {
                width: rect.width.saturating_sub(1), // Reserve 1 column for scrollbar
                ..rect
            };
            let scrollbar_area = Rect {
                x: rect.x + rect.width.saturating_sub(1),
                width: 1,
                ..rect
            };
            (content_area, Some(scrollbar_area))
        } else {
            (rect, None)
        }
    }

    /// Render the scrollbar widget if a scrollbar area is provided.
    pub fn render(&mut self, f: &mut Frame, scrollbar_area: Option<Rect>) {
        if let Some(area) = scrollbar_area {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"))
                .track_symbol(Some("│"))
                .thumb_symbol("█")
                .style(Style::default().fg(Color::DarkGray))
                .thumb_style(Style::default().fg(Color::DarkGray));

            f.render_stateful_widget(scrollbar, area, &mut self.state);
        }
    }
}
