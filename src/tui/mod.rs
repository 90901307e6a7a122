mod action;
mod app;
mod components;
mod event;
mod session;
mod terminal;

use std::path::Path;

pub use session::Command;
use session::SessionState;

use crate::config::types::Settings;
use crate::error::WgError;
use crate::theme::Theme;
use crate::wireguard::{list_configs, TunnelRunner};

/// Launch the interactive tunnel picker.
///
/// Refuses to start without at least one configuration in `config_dir`.
/// A single status query seeds the highlight; if it fails the picker starts
/// as if nothing were active. The chosen command runs after the terminal
/// is restored and is returned so the caller can report it.
pub fn launch_tui<R: TunnelRunner + ?Sized>(
    settings: &Settings,
    runner: &R,
    config_dir: &Path,
) -> Result<Option<Command>, WgError> {
    let configs = list_configs(config_dir);
    if configs.is_empty() {
        return Err(WgError::EmptyConfigList {
            dir: config_dir.to_path_buf(),
        });
    }

    let status = runner.query_status().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Status query failed, assuming no active tunnel");
        String::new()
    });
    let state = SessionState::new(configs).seeded_from_status(&status, settings.preselect_down);

    let rt = tokio::runtime::Runtime::new()?;
    let command = rt.block_on(app::run_app(state, settings.tick_rate(), Theme::COLORED))?;

    match command {
        Some(command) => {
            tracing::debug!(?command, "Executing picker command");
            app::execute(&command, runner)?;
            Ok(Some(command))
        }
        None => {
            tracing::debug!("Picker closed without action");
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wireguard::WgTools;

    #[test]
    fn empty_config_dir_refuses_to_start() {
        let dir = tempfile::TempDir::new().unwrap();
        let runner = WgTools::new("wg-manager-test-no-such-wg", "wg-manager-test-no-such-wg-quick");
        let err = launch_tui(&Settings::default(), &runner, dir.path()).unwrap_err();
        match err {
            WgError::EmptyConfigList { dir: reported } => assert_eq!(reported, dir.path()),
            other => panic!("Expected EmptyConfigList, got: {:?}", other),
        }
    }

    /// Whether a controlling terminal is available; the picker would take it over.
    fn has_tty() -> bool {
        std::fs::OpenOptions::new()
            .read(true)
            .write(true)
            .open("/dev/tty")
            .is_ok()
    }

    #[cfg(unix)]
    #[test]
    fn missing_terminal_is_an_error_not_a_panic() {
        if has_tty() {
            return;
        }
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("home.conf"), "[Interface]\n").unwrap();
        let runner = WgTools::new("true", "true");

        let err = launch_tui(&Settings::default(), &runner, dir.path()).unwrap_err();
        assert!(matches!(err, WgError::Io { .. }), "got: {:?}", err);
    }
}
