//! Tunnel list with the highlight marker.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};

use super::Component;
use crate::theme::Theme;
use crate::tui::session::SessionState;

/// Marker drawn in front of the highlighted tunnel.
pub const HIGHLIGHT_SYMBOL: &str = "-> ";

pub struct ConfigList<'a> {
    state: &'a SessionState,
    theme: &'a Theme,
}

impl<'a> ConfigList<'a> {
    pub fn new(state: &'a SessionState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl Component for ConfigList<'_> {
    fn render(&self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .state
            .configs()
            .iter()
            .map(|name| {
                let mut spans = vec![Span::styled(name.as_str(), self.theme.config_entry)];
                if self.state.active() == Some(name.as_str()) {
                    spans.push(Span::styled(" (active)", self.theme.info));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(" Tunnels "))
            .highlight_style(self.theme.config_entry.add_modifier(Modifier::BOLD))
            .highlight_symbol(HIGHLIGHT_SYMBOL);

        let mut list_state = ListState::default();
        list_state.select(self.state.selected().map(|_| self.state.cursor()));
        frame.render_stateful_widget(list, area, &mut list_state);
    }
}
