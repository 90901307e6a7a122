use std::time::Duration;

use ratatui::{DefaultTerminal, Frame};
use ratatui::layout::{Constraint, Layout};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::components::Component;
use super::components::config_list::ConfigList;
use super::components::status_bar::StatusBar;
use super::event::EventHandler;
use super::session::{Command, SessionState};
use super::terminal;
use crate::error::WgError;
use crate::theme::Theme;
use crate::wireguard::TunnelRunner;

pub const TITLE: &str = "WireGuard Configuration Manager";

/// Render the whole picker for the current state.
pub fn render(frame: &mut Frame, state: &SessionState, theme: &Theme) {
    // Layout: title (2 rows), tunnel list (fills), pending action (2 rows), footer
    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(3),
        Constraint::Length(2),
        Constraint::Length(2),
    ])
    .split(frame.area());

    frame.render_widget(Paragraph::new(Line::styled(TITLE, theme.title)), chunks[0]);

    ConfigList::new(state, theme).render(frame, chunks[1]);

    let mut state_line = vec![Span::raw("State:")];
    if let Some(action) = state.action() {
        state_line.push(Span::styled(format!(" [{}]", action.label()), theme.info));
    }
    frame.render_widget(Paragraph::new(Line::from(state_line)), chunks[2]);

    StatusBar::new().render(frame, chunks[3]);
}

/// Run the picker loop until the session terminates.
///
/// Initializes the terminal, redraws after every event, and restores the
/// terminal before returning the command chosen by the user, if any.
pub async fn run_app(
    mut state: SessionState,
    tick_rate: Duration,
    theme: Theme,
) -> Result<Option<Command>, std::io::Error> {
    let mut terminal = match terminal::init() {
        Ok(terminal) => terminal,
        Err(e) => {
            terminal::restore();
            return Err(e);
        }
    };
    let mut events = EventHandler::new(tick_rate);

    let result = event_loop(&mut terminal, &mut state, &mut events, &theme).await;

    terminal::restore();
    result
}

async fn event_loop(
    terminal: &mut DefaultTerminal,
    state: &mut SessionState,
    events: &mut EventHandler,
    theme: &Theme,
) -> Result<Option<Command>, std::io::Error> {
    terminal.draw(|frame| render(frame, state, theme))?;
    loop {
        let event = events.next().await;
        let command = state.update(&event);
        if !state.is_running() {
            return Ok(command);
        }
        terminal.draw(|frame| render(frame, state, theme))?;
    }
}

/// Execute a command emitted by the session. Failures are not retried.
pub fn execute<R: TunnelRunner + ?Sized>(command: &Command, runner: &R) -> Result<(), WgError> {
    match command {
        Command::Apply { name, action } => runner.apply(name, *action),
    }
}
