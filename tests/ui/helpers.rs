use chrono::{DateTime, TimeZone, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use minitodo::store::TimestampFormatter;
use minitodo::DeletedTask;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use std::sync::Arc;
use tokio::sync::watch;
use uuid::Uuid;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Formats instants as plain UTC so assertions don't depend on the local timezone
pub struct FixedFormatter;

impl TimestampFormatter for FixedFormatter {
    fn format_timestamp(&self, at: DateTime<Utc>) -> String {
        at.format("deleted %Y-%m-%d %H:%M").to_string()
    }
}

pub fn formatter() -> Arc<dyn TimestampFormatter> {
    Arc::new(FixedFormatter)
}

pub fn instant(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, hour, 30, 0).unwrap()
}

pub fn deleted(title: &str, hour: u32) -> DeletedTask {
    DeletedTask {
        id: Uuid::new_v4(),
        title: title.to_string(),
        created_at: instant(0),
        deleted_at: instant(hour),
    }
}

pub fn source(tasks: Vec<DeletedTask>) -> (watch::Sender<Vec<DeletedTask>>, watch::Receiver<Vec<DeletedTask>>) {
    watch::channel(tasks)
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn char_key(c: char) -> KeyEvent {
    key(KeyCode::Char(c))
}

pub fn left_click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    lines.join("\n")
}

/// Screen position of the first cell showing `needle`
pub fn find_cell(screen: &str, needle: &str) -> Option<(u16, u16)> {
    screen.lines().enumerate().find_map(|(row, line)| {
        line.find(needle).map(|byte_index| {
            let column = line[..byte_index].chars().count();
            (column as u16, row as u16)
        })
    })
}
