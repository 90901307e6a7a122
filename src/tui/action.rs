use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// User intents recognised by the picker.
///
/// Key presses are translated into an Action before they reach
/// the session reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Key has no binding.
    Noop,
    /// Leave the picker without touching any tunnel.
    Quit,
    /// Move the highlight one entry up.
    MoveUp,
    /// Move the highlight one entry down.
    MoveDown,
    /// Select "up" as the pending action, or clear it if already selected.
    ToggleUp,
    /// Select "down" as the pending action, or clear it if already selected.
    ToggleDown,
    /// Apply the pending action to the highlighted tunnel.
    Confirm,
}

impl From<KeyEvent> for Action {
    fn from(key: KeyEvent) -> Self {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Action::Quit,
                _ => Action::Noop,
            };
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            KeyCode::Up | KeyCode::Char('k') => Action::MoveUp,
            KeyCode::Down | KeyCode::Char('j') => Action::MoveDown,
            KeyCode::Char('u') => Action::ToggleUp,
            KeyCode::Char('d') => Action::ToggleDown,
            KeyCode::Enter => Action::Confirm,
            _ => Action::Noop,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::crossterm::event::{KeyEventKind, KeyEventState};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    #[test]
    fn navigation_keys() {
        let none = KeyModifiers::empty();
        assert_eq!(Action::from(key(KeyCode::Up, none)), Action::MoveUp);
        assert_eq!(Action::from(key(KeyCode::Char('k'), none)), Action::MoveUp);
        assert_eq!(Action::from(key(KeyCode::Down, none)), Action::MoveDown);
        assert_eq!(Action::from(key(KeyCode::Char('j'), none)), Action::MoveDown);
    }

    #[test]
    fn toggle_and_confirm_keys() {
        let none = KeyModifiers::empty();
        assert_eq!(Action::from(key(KeyCode::Char('u'), none)), Action::ToggleUp);
        assert_eq!(Action::from(key(KeyCode::Char('d'), none)), Action::ToggleDown);
        assert_eq!(Action::from(key(KeyCode::Enter, none)), Action::Confirm);
    }

    #[test]
    fn quit_keys() {
        assert_eq!(Action::from(key(KeyCode::Char('q'), KeyModifiers::empty())), Action::Quit);
        assert_eq!(Action::from(key(KeyCode::Esc, KeyModifiers::empty())), Action::Quit);
        assert_eq!(Action::from(key(KeyCode::Char('c'), KeyModifiers::CONTROL)), Action::Quit);
    }

    #[test]
    fn control_chords_do_not_trigger_plain_bindings() {
        assert_eq!(Action::from(key(KeyCode::Char('d'), KeyModifiers::CONTROL)), Action::Noop);
        assert_eq!(Action::from(key(KeyCode::Char('x'), KeyModifiers::empty())), Action::Noop);
    }
}
