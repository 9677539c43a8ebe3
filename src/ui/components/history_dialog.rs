//! Modal dialog listing soft-deleted tasks.
//!
//! The dialog subscribes to the store's deletion history and renders one
//! [`HistoryRow`] per record, in the order the store publishes them. Every
//! user decision leaves the dialog as an [`Action`]:
//!
//! - dismissing the dialog emits [`Action::HideHistory`]
//! - "Recover" on a row emits [`Action::UndoDelete`]
//! - "Delete" on a row emits [`Action::DeleteForever`]
//!
//! The dialog never edits the history itself. Changes come back as a new
//! snapshot, picked up by [`HistoryDialog::refresh`].

use crate::constants::{
    HISTORY_DEFAULT_WIDTH, HISTORY_EMPTY, HISTORY_HEIGHT, HISTORY_ROW_HEIGHT, HISTORY_TITLE, MENU_HEIGHT, MENU_WIDTH,
};
use crate::entities::DeletedTask;
use crate::store::TimestampFormatter;
use crate::ui::components::dialogs::common::{create_dialog_block, create_instructions_paragraph, shortcuts};
use crate::ui::components::dropdown_action::{DropdownAction, DropdownLayout};
use crate::ui::components::history_row::HistoryRow;
use crate::ui::components::scrollbar_helper::ScrollbarHelper;
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    widgets::{Clear, Paragraph},
    Frame,
};
use std::sync::Arc;
use tokio::sync::watch;

/// Geometry of the last frame, kept for mouse hit-testing
#[derive(Debug, Default)]
struct RenderedLayout {
    dialog: Rect,
    rows: Vec<(usize, Rect)>,
    triggers: Vec<(usize, Rect)>,
    menu: Option<DropdownLayout>,
}

impl RenderedLayout {
    fn index_at(areas: &[(usize, Rect)], column: u16, row: u16) -> Option<usize> {
        areas
            .iter()
            .find(|(_, area)| area.contains(Position::new(column, row)))
            .map(|(index, _)| *index)
    }
}

pub struct HistoryDialog {
    source: watch::Receiver<Vec<DeletedTask>>,
    formatter: Arc<dyn TimestampFormatter>,
    rows: Vec<HistoryRow>,
    selected: usize,
    scroll_offset: usize,
    width: u16,
    scrollbar: ScrollbarHelper,
    layout: RenderedLayout,
}

impl HistoryDialog {
    pub fn new(source: watch::Receiver<Vec<DeletedTask>>, formatter: Arc<dyn TimestampFormatter>) -> Self {
        let mut dialog = Self {
            source,
            formatter,
            rows: Vec::new(),
            selected: 0,
            scroll_offset: 0,
            width: HISTORY_DEFAULT_WIDTH,
            scrollbar: ScrollbarHelper::new(),
            layout: RenderedLayout::default(),
        };
        let snapshot = dialog.source.borrow_and_update().clone();
        dialog.rebuild_rows(snapshot);
        dialog
    }

    /// Set the dialog width in columns
    pub fn with_width(mut self, width: u16) -> Self {
        self.width = width;
        self
    }

    /// Pick up a newly published history snapshot.
    ///
    /// Returns `true` when the rows were rebuilt. Rebuilt rows start with
    /// their menu closed.
    pub fn refresh(&mut self) -> bool {
        match self.source.has_changed() {
            Ok(true) => {
                let snapshot = self.source.borrow_and_update().clone();
                self.rebuild_rows(snapshot);
                true
            }
            // An unchanged snapshot or a dropped store leaves the rows as they are
            Ok(false) | Err(_) => false,
        }
    }

    fn rebuild_rows(&mut self, snapshot: Vec<DeletedTask>) {
        log::debug!("History: rendering {} deleted tasks", snapshot.len());
        self.rows = snapshot.into_iter().map(HistoryRow::new).collect();
        self.selected = self.selected.min(self.rows.len().saturating_sub(1));
        // Row geometry belongs to the old snapshot until the next render
        self.layout = RenderedLayout {
            dialog: self.layout.dialog,
            ..RenderedLayout::default()
        };
    }

    pub fn rows(&self) -> &[HistoryRow] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Index of the row whose menu is open, if any
    pub fn open_row(&self) -> Option<usize> {
        self.rows.iter().position(HistoryRow::is_menu_open)
    }

    pub fn select_next(&mut self) {
        if !self.rows.is_empty() {
            self.selected = (self.selected + 1).min(self.rows.len() - 1);
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.rows.len().saturating_sub(1);
    }

    /// Activate the trigger of the selected row
    pub fn open_selected_menu(&mut self) {
        if let Some(row) = self.rows.get_mut(self.selected) {
            row.activate_trigger();
        }
    }

    /// Close the dialog
    pub fn dismiss(&self) -> Action {
        log::debug!("History: dismissed");
        Action::HideHistory
    }

    fn handle_left_click(&mut self, column: u16, row: u16) -> Action {
        if let Some(open) = self.rows.iter_mut().find(|row| row.is_menu_open()) {
            if let Some(item) = self.layout.menu.and_then(|menu| menu.hit_test(column, row)) {
                return open.choose(item);
            }
            // Clicks inside the menu's border do nothing, anything else closes it
            if !self.layout.menu.is_some_and(|menu| menu.contains(column, row)) {
                open.dismiss_menu();
            }
            return Action::None;
        }

        if !self.layout.dialog.contains(Position::new(column, row)) {
            return self.dismiss();
        }

        if let Some(index) = RenderedLayout::index_at(&self.layout.triggers, column, row) {
            if let Some(target) = self.rows.get_mut(index) {
                target.activate_trigger();
                self.selected = index;
            }
        } else if let Some(index) = RenderedLayout::index_at(&self.layout.rows, column, row) {
            if index < self.rows.len() {
                self.selected = index;
            }
        }
        Action::None
    }

    /// Keep the selected row inside the visible window
    fn adjust_scroll(&mut self, visible_rows: usize) {
        if visible_rows == 0 {
            return;
        }
        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        } else if self.selected >= self.scroll_offset + visible_rows {
            self.scroll_offset = self.selected + 1 - visible_rows;
        }
        let max_offset = self.rows.len().saturating_sub(visible_rows);
        self.scroll_offset = self.scroll_offset.min(max_offset);
    }

    fn render_rows(&mut self, f: &mut Frame, list_area: Rect) {
        let visible_rows = (list_area.height / HISTORY_ROW_HEIGHT) as usize;
        self.adjust_scroll(visible_rows);

        let (content_area, scrollbar_area) =
            ScrollbarHelper::calculate_areas(list_area, self.rows.len(), visible_rows);
        self.scrollbar
            .update_state(self.rows.len(), self.scroll_offset, visible_rows);

        let mut y = content_area.y;
        for (index, row) in self.rows.iter().enumerate().skip(self.scroll_offset).take(visible_rows) {
            let row_area = Rect::new(content_area.x, y, content_area.width, HISTORY_ROW_HEIGHT - 1);
            let formatted = self.formatter.format_timestamp(row.task().deleted_at);
            let trigger = row.render(f, row_area, &formatted, index == self.selected);

            self.layout.rows.push((index, row_area));
            self.layout.triggers.push((index, trigger));
            y += HISTORY_ROW_HEIGHT;
        }

        self.scrollbar.render(f, scrollbar_area);
    }

    fn render_footer(&self, f: &mut Frame, area: Rect) {
        let instructions = if self.open_row().is_some() {
            create_instructions_paragraph(&[
                shortcuts::RECOVER,
                shortcuts::SEPARATOR,
                shortcuts::DELETE,
                shortcuts::SEPARATOR,
                shortcuts::ESC_BACK,
            ])
        } else {
            create_instructions_paragraph(&[shortcuts::ENTER_OPTIONS, shortcuts::SEPARATOR, shortcuts::ESC_CLOSE])
        };
        f.render_widget(instructions, area);
    }
}

impl Component for HistoryDialog {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        // An open menu captures input until it closes
        if let Some(open) = self.rows.iter_mut().find(|row| row.is_menu_open()) {
            return open.handle_menu_key(key);
        }

        match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('q') => self.dismiss(),
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_previous();
                Action::None
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.select_first();
                Action::None
            }
            KeyCode::End | KeyCode::Char('G') => {
                self.select_last();
                Action::None
            }
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('m') | KeyCode::Char('.') => {
                self.open_selected_menu();
                Action::None
            }
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.handle_left_click(mouse.column, mouse.row),
            MouseEventKind::ScrollDown if self.open_row().is_none() => {
                self.select_next();
                Action::None
            }
            MouseEventKind::ScrollUp if self.open_row().is_none() => {
                self.select_previous();
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let dialog_area = LayoutManager::centered_rect_fixed(self.width, HISTORY_HEIGHT, rect);
        self.layout = RenderedLayout {
            dialog: dialog_area,
            ..RenderedLayout::default()
        };

        let block = create_dialog_block(HISTORY_TITLE, Color::Cyan);
        let inner = block.inner(dialog_area);
        f.render_widget(Clear, dialog_area);
        f.render_widget(block, dialog_area);

        let [list_area, footer_area] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

        if self.rows.is_empty() {
            let placeholder = Paragraph::new(HISTORY_EMPTY)
                .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC))
                .alignment(Alignment::Center);
            f.render_widget(placeholder, list_area);
        } else {
            self.render_rows(f, list_area);
        }

        self.render_footer(f, footer_area);

        // The menu is drawn last so it overlaps the rows below its trigger
        if let Some(open) = self.open_row() {
            if let Some((_, trigger)) = self.layout.triggers.iter().find(|(index, _)| *index == open) {
                let menu_area = LayoutManager::anchored_popup(*trigger, MENU_WIDTH, MENU_HEIGHT, rect);
                self.layout.menu = Some(DropdownAction::render(f, menu_area));
            }
        }
    }
}
