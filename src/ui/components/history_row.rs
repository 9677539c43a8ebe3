//! A single entry of the history dialog.

use crate::constants::{ELLIPSIS, ICON_MORE_OPTIONS};
use crate::entities::DeletedTask;
use crate::ui::components::dropdown_action::{DropdownAction, MenuItem};
use crate::ui::core::Action;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Columns reserved on the right of a row for the menu trigger
const TRIGGER_COLUMNS: u16 = 3;

/// Open/closed state of a row's overflow menu
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// One deleted task plus the state of its overflow menu.
///
/// The menu only ever moves `Closed -> Open` through the trigger and back to
/// `Closed` through one of the two actions or a dismissal. Only the actions
/// produce an outbound [`Action`].
#[derive(Debug, Clone)]
pub struct HistoryRow {
    task: DeletedTask,
    menu: MenuState,
}

impl HistoryRow {
    pub fn new(task: DeletedTask) -> Self {
        Self {
            task,
            menu: MenuState::Closed,
        }
    }

    pub fn task(&self) -> &DeletedTask {
        &self.task
    }

    pub fn menu_state(&self) -> MenuState {
        self.menu
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu == MenuState::Open
    }

    /// The "more options" trigger was activated
    pub fn activate_trigger(&mut self) {
        if self.menu == MenuState::Closed {
            log::debug!("History: opened menu for '{}'", self.task.title);
            self.menu = MenuState::Open;
        }
    }

    /// Close the menu without choosing an action
    pub fn dismiss_menu(&mut self) {
        self.menu = MenuState::Closed;
    }

    pub fn recover(&mut self) -> Action {
        self.emit_and_close(Action::UndoDelete(self.task.clone()))
    }

    pub fn delete_forever(&mut self) -> Action {
        self.emit_and_close(Action::DeleteForever(self.task.clone()))
    }

    /// Run the menu item the user picked
    pub fn choose(&mut self, item: MenuItem) -> Action {
        DropdownAction::activate(item, self, Self::recover, Self::delete_forever)
    }

    /// Keyboard input while the menu is open
    pub fn handle_menu_key(&mut self, key: KeyEvent) -> Action {
        if let Some(item) = DropdownAction::item_for_key(key) {
            return self.choose(item);
        }

        match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('q') => {
                self.dismiss_menu();
                Action::None
            }
            _ => Action::None,
        }
    }

    fn emit_and_close(&mut self, action: Action) -> Action {
        if self.menu == MenuState::Closed {
            return Action::None;
        }
        self.menu = MenuState::Closed;
        action
    }

    /// Draw the row into `area` and return the trigger's screen area.
    ///
    /// The first line holds the title and the trigger, the second the
    /// formatted deletion time.
    pub fn render(&self, f: &mut Frame, area: Rect, formatted_time: &str, selected: bool) -> Rect {
        let title_width = area.width.saturating_sub(TRIGGER_COLUMNS) as usize;

        let title_style = if selected {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        let marker = if selected { "▌" } else { " " };

        let lines = vec![
            Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Yellow)),
                Span::styled(
                    truncate_with_ellipsis(&self.task.title, title_width.saturating_sub(1)),
                    title_style,
                ),
            ]),
            Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Yellow)),
                Span::styled(formatted_time.to_string(), Style::default().fg(Color::DarkGray)),
            ]),
        ];
        f.render_widget(Paragraph::new(lines), area);

        let trigger = Rect::new(area.right().saturating_sub(2), area.y, 1, 1.min(area.height));
        let trigger_style = if self.is_menu_open() {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        f.render_widget(Paragraph::new(Span::styled(ICON_MORE_OPTIONS, trigger_style)), trigger);

        trigger
    }
}

/// Shorten `text` to at most `max_width` terminal columns, ending in "…" when cut
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - ELLIPSIS.width();
    let mut used = 0;
    let mut truncated = String::new();
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > budget {
            break;
        }
        used += ch_width;
        truncated.push(ch);
    }
    truncated.push_str(ELLIPSIS);
    truncated
}
