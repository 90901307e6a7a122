use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::WgError;

/// Verbosity level controlling tracing output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Suppress all output except errors
    Quiet,
    /// Normal output
    Normal,
    /// Verbose output (debug level)
    Verbose,
    /// Maximum output (trace level)
    Trace,
}

impl From<(bool, u8)> for Verbosity {
    /// Convert from (quiet_flag, verbose_count) to Verbosity.
    ///
    /// - quiet=true -> Quiet (regardless of verbose count)
    /// - verbose=0  -> Normal
    /// - verbose=1  -> Verbose
    /// - verbose=2+ -> Trace
    fn from((quiet, verbose_count): (bool, u8)) -> Self {
        if quiet {
            Verbosity::Quiet
        } else {
            match verbose_count {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::Trace,
            }
        }
    }
}

impl Verbosity {
    /// Return the tracing filter string for this verbosity level.
    ///
    /// Interactive mode draws on the alternate screen, so normal verbosity
    /// only lets warnings through there.
    pub fn as_tracing_filter(&self, interactive: bool) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal if interactive => "warn",
            Verbosity::Normal => "info",
            Verbosity::Verbose => "debug",
            Verbosity::Trace => "trace",
        }
    }
}

/// User settings loaded from `config.toml`.
///
/// Every field is optional in the file; missing fields fall back to
/// the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Redraw interval of the interactive picker, in milliseconds.
    pub tick_rate_ms: u64,
    /// Program used for status queries.
    pub wg_command: String,
    /// Program used to bring tunnels up and down.
    pub wg_quick_command: String,
    /// Pre-select "down" when a tunnel is already active at startup.
    pub preselect_down: bool,
    /// Plain-text IP echo service used by `--ip`.
    pub ip_service_url: String,
    /// Timeout for the public IP lookup, in seconds.
    pub ip_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_rate_ms: 100,
            wg_command: "wg".into(),
            wg_quick_command: "wg-quick".into(),
            preselect_down: true,
            ip_service_url: "https://api.ipify.org?format=text".into(),
            ip_timeout_secs: 5,
        }
    }
}

impl Settings {
    /// Load settings from `config.toml` in the given directory.
    ///
    /// Returns defaults if the file does not exist.
    pub fn load(config_dir: &Path) -> Result<Self, WgError> {
        let path = config_dir.join("config.toml");
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No settings file, using defaults");
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(&path)?;
        let settings = Self::parse(&contents)?;
        tracing::debug!(path = %path.display(), ?settings, "Loaded settings");
        Ok(settings)
    }

    /// Parse and validate settings from TOML text.
    pub fn parse(contents: &str) -> Result<Self, WgError> {
        let settings: Settings = toml::from_str(contents)?;
        if settings.tick_rate_ms == 0 {
            return Err(WgError::Config("tick_rate_ms must be greater than 0".into()));
        }
        if settings.wg_command.trim().is_empty() || settings.wg_quick_command.trim().is_empty() {
            return Err(WgError::Config("command names must not be empty".into()));
        }
        Ok(settings)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    pub fn ip_timeout(&self) -> Duration {
        Duration::from_secs(self.ip_timeout_secs)
    }
}
