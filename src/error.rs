use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WgError {
    #[error("{0}")]
    Argument(String),

    #[error("No WireGuard configuration found at {}", dir.display())]
    EmptyConfigList { dir: PathBuf },

    #[error("Required tool '{program}' was not found")]
    ToolNotFound { program: String },

    #[error("Error running {program} ({status}): {output}")]
    Exec {
        program: String,
        status: String,
        output: String,
    },

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Public IP lookup failed: {0}")]
    Http(String),
}

impl WgError {
    /// Returns a user-friendly suggestion for how to fix the error.
    pub fn suggestion(&self) -> Option<&str> {
        match self {
            WgError::Argument(_) => Some("Run 'wg-manager --help' for usage."),
            WgError::EmptyConfigList { .. } => {
                Some("Add a <name>.conf file to /etc/wireguard and try again.")
            }
            WgError::ToolNotFound { .. } => {
                Some("Install wireguard-tools and make sure wg and wg-quick are on PATH.")
            }
            WgError::Exec { .. } => {
                Some("wg-quick usually needs root; try running with sudo.")
            }
            WgError::Config(_) => Some("Check config.toml in the wg-manager config directory."),
            WgError::Http(_) => Some("Check your network connection."),
            WgError::Io { .. } => None,
        }
    }
}

impl From<toml::de::Error> for WgError {
    fn from(err: toml::de::Error) -> Self {
        WgError::Config(format!("invalid config.toml: {}", err))
    }
}

impl From<reqwest::Error> for WgError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            WgError::Http("request timed out".into())
        } else {
            WgError::Http(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_list_display_and_suggestion() {
        let err = WgError::EmptyConfigList {
            dir: PathBuf::from("/etc/wireguard"),
        };
        let msg = format!("{}", err);
        assert_eq!(msg, "No WireGuard configuration found at /etc/wireguard");
        assert!(err.suggestion().unwrap().contains(".conf"));
    }

    #[test]
    fn exec_error_carries_output() {
        let err = WgError::Exec {
            program: "wg-quick".into(),
            status: "exit status: 1".into(),
            output: "wg-quick: `home' already exists".into(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("wg-quick"));
        assert!(msg.contains("already exists"));
        assert!(err.suggestion().is_some());
    }

    #[test]
    fn tool_not_found_suggestion() {
        let err = WgError::ToolNotFound {
            program: "wg".into(),
        };
        assert!(format!("{}", err).contains("'wg'"));
        assert_eq!(
            err.suggestion(),
            Some("Install wireguard-tools and make sure wg and wg-quick are on PATH.")
        );
    }

    #[test]
    fn argument_error_is_shown_verbatim() {
        let err = WgError::Argument("State (up/down) is required for --config".into());
        assert_eq!(format!("{}", err), "State (up/down) is required for --config");
    }

    #[test]
    fn io_error_no_suggestion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let err: WgError = io_err.into();
        assert!(err.suggestion().is_none());
    }

    #[test]
    fn toml_error_maps_to_config() {
        let parsed: Result<toml::Value, _> = toml::from_str("tick_rate_ms = ");
        let err: WgError = parsed.unwrap_err().into();
        match err {
            WgError::Config(msg) => assert!(msg.contains("config.toml")),
            other => panic!("Expected Config variant, got: {:?}", other),
        }
    }
}
