//! Collaborators around the external WireGuard tooling.
//!
//! Nothing here speaks the WireGuard protocol: configurations are only
//! listed by file name, and tunnels are driven through `wg` / `wg-quick`.

pub mod configs;
pub mod ip;
pub mod runner;
pub mod status;

use std::fmt;

pub use configs::list_configs;
pub use runner::{TunnelRunner, WgTools};

/// State change applied to a tunnel by `wg-quick`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum TunnelAction {
    Up,
    Down,
}

impl TunnelAction {
    /// Argument passed to `wg-quick`.
    pub fn as_arg(self) -> &'static str {
        match self {
            TunnelAction::Up => "up",
            TunnelAction::Down => "down",
        }
    }

    /// Upper-case label shown in the picker.
    pub fn label(self) -> &'static str {
        match self {
            TunnelAction::Up => "UP",
            TunnelAction::Down => "DOWN",
        }
    }
}

impl fmt::Display for TunnelAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_arg())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_arguments_and_labels() {
        assert_eq!(TunnelAction::Up.as_arg(), "up");
        assert_eq!(TunnelAction::Down.as_arg(), "down");
        assert_eq!(TunnelAction::Up.label(), "UP");
        assert_eq!(TunnelAction::Down.to_string(), "down");
    }
}
