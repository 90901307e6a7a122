//! Invocation of the external `wg` and `wg-quick` programs.

use std::io::ErrorKind;
use std::process::{Command, Output};

use crate::config::types::Settings;
use crate::error::WgError;

use super::TunnelAction;

/// Boundary to the programs that actually manage tunnels.
///
/// Both calls block until the external process exits.
pub trait TunnelRunner {
    /// Bring the named tunnel up or down.
    fn apply(&self, name: &str, action: TunnelAction) -> Result<(), WgError>;

    /// Raw status text. Empty output means no tunnel is active.
    fn query_status(&self) -> Result<String, WgError>;
}

/// `TunnelRunner` backed by the host's wireguard-tools.
#[derive(Debug, Clone)]
pub struct WgTools {
    wg: String,
    wg_quick: String,
}

impl WgTools {
    pub fn new(wg: impl Into<String>, wg_quick: impl Into<String>) -> Self {
        Self {
            wg: wg.into(),
            wg_quick: wg_quick.into(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(&settings.wg_command, &settings.wg_quick_command)
    }
}

impl Default for WgTools {
    fn default() -> Self {
        Self::new("wg", "wg-quick")
    }
}

impl TunnelRunner for WgTools {
    fn apply(&self, name: &str, action: TunnelAction) -> Result<(), WgError> {
        tracing::info!(tunnel = name, action = %action, "Running {}", self.wg_quick);
        run(&self.wg_quick, &[action.as_arg(), name])?;
        Ok(())
    }

    fn query_status(&self) -> Result<String, WgError> {
        tracing::debug!("Querying tunnel status with {}", self.wg);
        run(&self.wg, &[])
    }
}

/// Run `program` with `args`, returning stdout followed by stderr.
fn run(program: &str, args: &[&str]) -> Result<String, WgError> {
    let output = Command::new(program).args(args).output().map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            WgError::ToolNotFound {
                program: program.to_string(),
            }
        } else {
            WgError::Io { source: e }
        }
    })?;

    let combined = combined_output(&output);
    if !output.status.success() {
        tracing::debug!(program, status = %output.status, "External command failed");
        return Err(WgError::Exec {
            program: program.to_string(),
            status: output.status.to_string(),
            output: combined.trim().to_string(),
        });
    }
    Ok(combined)
}

fn combined_output(output: &Output) -> String {
    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    text.push_str(&String::from_utf8_lossy(&output.stderr));
    text
}
