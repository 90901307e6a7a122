//! Picker state and the reducer that drives it.
//!
//! `SessionState::update` is pure: it mutates the state for one event and
//! returns the external command to run, if any. Running commands is left
//! to the caller so the state machine can be exercised without a terminal
//! or WireGuard installed.

use crate::wireguard::status::active_interfaces;
use crate::wireguard::TunnelAction;

use super::action::Action;
use super::event::Event;

/// Side effect requested by the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run `wg-quick <action> <name>`.
    Apply { name: String, action: TunnelAction },
}

/// Everything the picker knows between two events.
#[derive(Debug, Clone)]
pub struct SessionState {
    configs: Vec<String>,
    cursor: usize,
    action: Option<TunnelAction>,
    active: Option<String>,
    running: bool,
}

impl SessionState {
    /// Start with the first entry highlighted and no pending action.
    pub fn new(configs: Vec<String>) -> Self {
        Self {
            configs,
            cursor: 0,
            action: None,
            active: None,
            running: true,
        }
    }

    /// Seed the cursor from a status query.
    ///
    /// The first reported interface that matches a configuration gets the
    /// highlight. With `preselect_down`, its pending action starts as
    /// "down", since that is the only useful thing to do to a running tunnel.
    pub fn seeded_from_status(mut self, status: &str, preselect_down: bool) -> Self {
        let found = active_interfaces(status).into_iter().find_map(|iface| {
            self.configs
                .iter()
                .position(|name| *name == iface)
                .map(|index| (index, iface))
        });

        if let Some((index, iface)) = found {
            tracing::debug!(tunnel = %iface, "Active tunnel detected");
            self.cursor = index;
            self.active = Some(iface);
            if preselect_down {
                self.action = Some(TunnelAction::Down);
            }
        }
        self
    }

    pub fn configs(&self) -> &[String] {
        &self.configs
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn action(&self) -> Option<TunnelAction> {
        self.action
    }

    /// Tunnel that was active when the session started.
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Name under the cursor, `None` only for an empty list.
    pub fn selected(&self) -> Option<&str> {
        self.configs.get(self.cursor).map(String::as_str)
    }

    /// Process one event.
    ///
    /// Events arriving after the session terminated are ignored.
    pub fn update(&mut self, event: &Event) -> Option<Command> {
        if !self.running {
            return None;
        }
        match event {
            Event::Key(key) => self.dispatch(Action::from(*key)),
            Event::Tick | Event::Resize(_, _) => None,
            Event::Quit => {
                self.running = false;
                None
            }
        }
    }

    /// Apply a single user intent.
    pub fn dispatch(&mut self, action: Action) -> Option<Command> {
        match action {
            Action::Noop => {}
            Action::Quit => self.running = false,
            Action::MoveUp => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                }
            }
            Action::MoveDown => {
                if self.cursor + 1 < self.configs.len() {
                    self.cursor += 1;
                }
            }
            Action::ToggleUp => self.toggle(TunnelAction::Up),
            Action::ToggleDown => self.toggle(TunnelAction::Down),
            Action::Confirm => {
                let (Some(action), Some(name)) = (self.action, self.selected()) else {
                    return None;
                };
                let command = Command::Apply {
                    name: name.to_string(),
                    action,
                };
                self.running = false;
                return Some(command);
            }
        }
        None
    }

    fn toggle(&mut self, action: TunnelAction) {
        self.action = if self.action == Some(action) {
            None
        } else {
            Some(action)
        };
    }
}
