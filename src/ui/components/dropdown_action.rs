//! The two-action overflow menu shown for a history row.
//!
//! The menu is a stateless leaf: it draws "Recover" and "Delete" side by side,
//! maps input onto one of the two items and invokes exactly the matching
//! callback. Whoever owns the menu decides what the callbacks do.

use crate::constants::{ICON_DELETE, ICON_RECOVER, MENU_DELETE, MENU_RECOVER};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

/// One of the two menu controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Recover,
    Delete,
}

/// Screen areas of the rendered controls, used for mouse hit-testing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DropdownLayout {
    pub area: Rect,
    pub recover: Rect,
    pub delete: Rect,
}

impl DropdownLayout {
    /// Item under the given terminal cell, if any
    pub fn hit_test(&self, column: u16, row: u16) -> Option<MenuItem> {
        let position = Position::new(column, row);
        if self.recover.contains(position) {
            Some(MenuItem::Recover)
        } else if self.delete.contains(position) {
            Some(MenuItem::Delete)
        } else {
            None
        }
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.area.contains(Position::new(column, row))
    }
}

pub struct DropdownAction;

impl DropdownAction {
    /// Invoke the callback matching `item` on `target`
    pub fn activate<C, T>(
        item: MenuItem,
        target: &mut C,
        on_recover: impl FnOnce(&mut C) -> T,
        on_delete: impl FnOnce(&mut C) -> T,
    ) -> T {
        match item {
            MenuItem::Recover => on_recover(target),
            MenuItem::Delete => on_delete(target),
        }
    }

    /// Keyboard shortcut for each control
    pub fn item_for_key(key: KeyEvent) -> Option<MenuItem> {
        match key.code {
            KeyCode::Char('r') | KeyCode::Char('u') => Some(MenuItem::Recover),
            KeyCode::Char('d') | KeyCode::Char('x') | KeyCode::Delete => Some(MenuItem::Delete),
            _ => None,
        }
    }

    /// Compute where each control lands inside `area` without drawing
    pub fn layout(area: Rect) -> DropdownLayout {
        let inner = Block::default().borders(Borders::ALL).inner(area);
        let [recover, delete] = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(inner);

        DropdownLayout { area, recover, delete }
    }

    pub fn render(f: &mut Frame, area: Rect) -> DropdownLayout {
        let layout = Self::layout(area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Gray));

        f.render_widget(Clear, area);
        f.render_widget(block, area);
        f.render_widget(Self::label(ICON_RECOVER, MENU_RECOVER), layout.recover);
        f.render_widget(Self::label(ICON_DELETE, MENU_DELETE), layout.delete);

        layout
    }

    fn label(icon: &'static str, text: &'static str) -> Paragraph<'static> {
        Paragraph::new(Line::from(vec![
            Span::styled(icon, Style::default().fg(Color::Magenta)),
            Span::raw(" "),
            Span::styled(text, Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        ]))
        .alignment(Alignment::Center)
    }
}
