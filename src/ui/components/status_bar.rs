//! Status bar component

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

const SHORTCUTS: &str = "j/k: move • d: delete • H: history • q: quit";

/// Outcome of the last store operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    Info(String),
    Error(String),
}

/// Status bar component
#[derive(Debug, Default)]
pub struct StatusBar {
    message: Option<StatusMessage>,
}

impl StatusBar {
    pub fn set_message(&mut self, message: StatusMessage) {
        self.message = Some(message);
    }

    pub fn message(&self) -> Option<&StatusMessage> {
        self.message.as_ref()
    }

    pub fn clear(&mut self) {
        self.message = None;
    }

    /// Render the status bar
    pub fn render(&self, f: &mut Frame, area: Rect) {
        let (text, color) = match &self.message {
            Some(StatusMessage::Info(text)) => (format!("{} • {}", text, SHORTCUTS), Color::Green),
            Some(StatusMessage::Error(text)) => (format!("{} • {}", text, SHORTCUTS), Color::Red),
            None => (SHORTCUTS.to_string(), Color::Gray),
        };

        let status_bar = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(color));

        f.render_widget(status_bar, area);
    }
}
