//! Help footer listing the key bindings.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use super::Component;

/// Footer widget displayed at the bottom of the picker.
pub struct StatusBar {
    /// Key binding hints as (key, description) pairs.
    pub hints: Vec<(String, String)>,
}

impl StatusBar {
    /// Create a StatusBar with the picker's key bindings.
    pub fn new() -> Self {
        Self {
            hints: vec![
                ("↑/k".into(), "Up".into()),
                ("↓/j".into(), "Down".into()),
                ("u".into(), "Set UP".into()),
                ("d".into(), "Set DOWN".into()),
                ("Enter".into(), "Apply".into()),
                ("q".into(), "Quit".into()),
            ],
        }
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for StatusBar {
    fn render(&self, frame: &mut Frame, area: Rect) {
        let key_style = Style::default()
            .fg(Color::Black)
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD);
        let desc_style = Style::default().fg(Color::Gray);
        let sep_style = Style::default().fg(Color::DarkGray);

        let mut spans = Vec::new();
        for (i, (key, desc)) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", sep_style));
            }
            spans.push(Span::styled(format!(" {} ", key), key_style));
            spans.push(Span::styled(format!(" {}", desc), desc_style));
        }

        let paragraph = Paragraph::new(Line::from(spans)).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}
