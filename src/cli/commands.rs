//! Non-interactive commands and the picker entry point.
//!
//! Styled output goes to stdout; logs and errors go to stderr.

use std::io::Write;
use std::path::Path;

use clap::CommandFactory;
use ratatui::text::Line;

use super::args::Cli;
use crate::config::types::Settings;
use crate::error::WgError;
use crate::theme::{self, Theme};
use crate::tui::{self, Command};
use crate::wireguard::status;
use crate::wireguard::{ip, list_configs, TunnelAction, TunnelRunner};

fn print_line(line: &Line<'_>) {
    println!("{}", theme::to_ansi(line));
}

/// Print the available configurations.
pub fn list(config_dir: &Path, theme: &Theme) -> Result<(), WgError> {
    let configs = list_configs(config_dir);
    if configs.is_empty() {
        return Err(WgError::EmptyConfigList {
            dir: config_dir.to_path_buf(),
        });
    }

    print_line(&Line::styled("Available WireGuard configurations:", theme.title));
    for name in &configs {
        print_line(&Line::styled(name.as_str(), theme.config_entry));
    }
    Ok(())
}

/// Bring a tunnel up or down with `wg-quick`.
pub fn apply<R: TunnelRunner + ?Sized>(
    runner: &R,
    name: &str,
    action: TunnelAction,
    theme: &Theme,
) -> Result<(), WgError> {
    runner.apply(name, action)?;
    print_line(&Line::styled(
        format!("Tunnel {} is now {}", name, action.as_arg()),
        theme.info,
    ));
    Ok(())
}

/// Print the formatted output of `wg`.
pub fn check<R: TunnelRunner + ?Sized>(runner: &R, theme: &Theme) -> Result<(), WgError> {
    let raw = runner.query_status()?;
    for line in status::format(&raw, theme).lines.iter() {
        print_line(line);
    }
    Ok(())
}

/// Print the public IP address.
pub fn public_ip(settings: &Settings, theme: &Theme) -> Result<(), WgError> {
    let address = ip::public_ip(&settings.ip_service_url, settings.ip_timeout())?;
    print_line(&Line::styled(format!("Public IP: {}", address), theme.info));
    Ok(())
}

/// Write a completion script for `shell` to stdout.
pub fn completions(shell: clap_complete::Shell) -> Result<(), WgError> {
    let mut cmd = Cli::command();
    let mut stdout = std::io::stdout();
    clap_complete::generate(shell, &mut cmd, "wg-manager", &mut stdout);
    stdout.flush()?;
    Ok(())
}

/// Run the picker and report what it did.
pub fn interactive<R: TunnelRunner + ?Sized>(
    settings: &Settings,
    runner: &R,
    config_dir: &Path,
    theme: &Theme,
) -> Result<(), WgError> {
    if let Some(Command::Apply { name, action }) = tui::launch_tui(settings, runner, config_dir)? {
        print_line(&Line::styled(
            format!("Tunnel {} is now {}", name, action.as_arg()),
            theme.info,
        ));
    }
    Ok(())
}
