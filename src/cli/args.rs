use clap::Parser;

use crate::error::WgError;
use crate::wireguard::TunnelAction;

#[derive(Parser, Debug)]
#[command(
    name = "wg-manager",
    version,
    about = "Manage WireGuard tunnels from the terminal",
    long_about = "Manage WireGuard tunnels from the terminal.\n\n\
                  Without flags an interactive picker lists the configurations in \
                  /etc/wireguard and applies the chosen state with wg-quick."
)]
pub struct Cli {
    /// Configuration name to apply (file name in /etc/wireguard without .conf)
    #[arg(short, long, value_name = "CONFIG_NAME")]
    pub config: Option<String>,

    /// State to apply to --config
    #[arg(short, long, value_enum)]
    pub state: Option<TunnelAction>,

    /// List available WireGuard configuration files
    #[arg(short, long)]
    pub list: bool,

    /// Run the wg command and display its output with formatting
    #[arg(long)]
    pub check: bool,

    /// Show the public IP address seen from the internet
    #[arg(long)]
    pub ip: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<clap_complete::Shell>,

    /// Increase verbosity (-v for verbose, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode: suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// What the invocation asks for, after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Completions(clap_complete::Shell),
    List,
    /// Flag-driven run: optional apply, then optional status and IP checks.
    Direct {
        apply: Option<(String, TunnelAction)>,
        check: bool,
        ip: bool,
    },
    Interactive,
}

impl Cli {
    /// Resolve the flags into a mode.
    ///
    /// `--config` and `--state` only make sense together.
    pub fn mode(&self) -> Result<Mode, WgError> {
        if let Some(shell) = self.completions {
            return Ok(Mode::Completions(shell));
        }
        if self.list {
            return Ok(Mode::List);
        }

        let apply = match (&self.config, self.state) {
            (Some(name), Some(state)) => {
                if name.trim().is_empty() {
                    return Err(WgError::Argument("Missing value for --config".into()));
                }
                Some((name.clone(), state))
            }
            (None, Some(_)) => {
                return Err(WgError::Argument(
                    "Configuration file name is required for --state".into(),
                ));
            }
            (Some(_), None) => {
                return Err(WgError::Argument(
                    "State (up/down) is required for --config".into(),
                ));
            }
            (None, None) => None,
        };

        if apply.is_none() && !self.check && !self.ip {
            return Ok(Mode::Interactive);
        }
        Ok(Mode::Direct {
            apply,
            check: self.check,
            ip: self.ip,
        })
    }

    /// Whether this invocation will take over the terminal.
    pub fn is_interactive(&self) -> bool {
        matches!(self.mode(), Ok(Mode::Interactive))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["wg-manager"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).expect("arguments should parse")
    }

    #[test]
    fn no_flags_is_interactive() {
        let cli = parse(&[]);
        assert_eq!(cli.mode().unwrap(), Mode::Interactive);
        assert!(cli.is_interactive());
    }

    #[test]
    fn config_and_state_apply() {
        let cli = parse(&["--config", "home", "--state", "up"]);
        assert_eq!(
            cli.mode().unwrap(),
            Mode::Direct {
                apply: Some(("home".into(), TunnelAction::Up)),
                check: false,
                ip: false,
            }
        );
        assert!(!cli.is_interactive());
    }

    #[test]
    fn short_flags() {
        let cli = parse(&["-c", "office", "-s", "down", "--check"]);
        assert_eq!(
            cli.mode().unwrap(),
            Mode::Direct {
                apply: Some(("office".into(), TunnelAction::Down)),
                check: true,
                ip: false,
            }
        );
    }

    #[test]
    fn config_without_state_is_error() {
        let err = parse(&["--config", "home"]).mode().unwrap_err();
        assert_eq!(err.to_string(), "State (up/down) is required for --config");
    }

    #[test]
    fn state_without_config_is_error() {
        let err = parse(&["--state", "down"]).mode().unwrap_err();
        assert_eq!(err.to_string(), "Configuration file name is required for --state");
    }

    #[test]
    fn list_wins_over_other_flags() {
        let cli = parse(&["--check", "--list"]);
        assert_eq!(cli.mode().unwrap(), Mode::List);
    }

    #[test]
    fn check_alone_is_direct() {
        let cli = parse(&["--check"]);
        assert_eq!(
            cli.mode().unwrap(),
            Mode::Direct {
                apply: None,
                check: true,
                ip: false,
            }
        );
    }

    #[test]
    fn invalid_state_value_rejected_by_parser() {
        assert!(Cli::try_parse_from(["wg-manager", "--config", "home", "--state", "sideways"]).is_err());
    }

    #[test]
    fn unknown_flag_rejected_by_parser() {
        assert!(Cli::try_parse_from(["wg-manager", "--frobnicate"]).is_err());
    }

    #[test]
    fn completions_mode() {
        let cli = parse(&["--completions", "bash"]);
        assert_eq!(cli.mode().unwrap(), Mode::Completions(clap_complete::Shell::Bash));
    }
}
