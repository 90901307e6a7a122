use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod config;
mod error;
mod theme;
mod tui;
mod wireguard;

use cli::args::{Cli, Mode};
use cli::commands;
use config::paths;
use config::types::{Settings, Verbosity};
use error::WgError;
use theme::Theme;
use wireguard::WgTools;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Usage errors exit 1 rather than clap's default 2
            let code = match err.kind() {
                ErrorKind::DisplayHelp
                | ErrorKind::DisplayVersion
                | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => 0,
                _ => 1,
            };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    // Convert CLI flags to verbosity level
    let verbosity = Verbosity::from((cli.quiet, cli.verbose));

    // RUST_LOG env var overrides CLI flags
    let filter = verbosity.as_tracing_filter(cli.is_interactive());

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr) // Keep stdout clean for output
        .init();

    tracing::debug!("Verbosity level: {:?}", verbosity);

    if let Err(err) = run(cli) {
        display_error(&err);
        std::process::exit(1);
    }
}

/// Execute the mode selected on the command line.
fn run(cli: Cli) -> Result<(), WgError> {
    match cli.mode()? {
        Mode::Completions(shell) => commands::completions(shell),
        Mode::List => commands::list(paths::wireguard_dir(), &Theme::for_stdout()),
        mode => run_with_settings(mode),
    }
}

/// Modes that talk to WireGuard or the network need the user's settings.
fn run_with_settings(mode: Mode) -> Result<(), WgError> {
    let settings = Settings::load(&paths::settings_dir()?)?;
    let runner = WgTools::from_settings(&settings);
    let theme = Theme::for_stdout();
    let config_dir = paths::wireguard_dir();

    match mode {
        Mode::Direct { apply, check, ip } => {
            if let Some((name, action)) = apply {
                tracing::info!(tunnel = %name, action = %action, "Apply command received");
                commands::apply(&runner, &name, action, &theme)?;
            }
            if check {
                commands::check(&runner, &theme)?;
            }
            if ip {
                commands::public_ip(&settings, &theme)?;
            }
            Ok(())
        }
        Mode::Interactive => commands::interactive(&settings, &runner, config_dir, &theme),
        Mode::Completions(shell) => commands::completions(shell),
        Mode::List => commands::list(config_dir, &theme),
    }
}

/// Display a WgError with optional suggestion hint to stderr.
fn display_error(err: &WgError) {
    eprintln!("error: {}", err);
    if let Some(suggestion) = err.suggestion() {
        eprintln!("  hint: {}", suggestion);
    }
}
