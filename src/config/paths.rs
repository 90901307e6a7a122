//! Filesystem locations used by wg-manager.
//!
//! The WireGuard configuration directory is fixed. The settings directory
//! comes from the `dirs` crate and can be redirected with
//! `WG_MANAGER_CONFIG_DIR`:
//! - Linux: `~/.config/wg-manager/`
//! - macOS: `~/Library/Application Support/wg-manager/`

use std::path::{Path, PathBuf};

use crate::error::WgError;

/// Directory holding WireGuard tunnel configurations.
pub const WIREGUARD_DIR: &str = "/etc/wireguard";

/// Environment variable overriding the settings directory.
pub const CONFIG_DIR_ENV: &str = "WG_MANAGER_CONFIG_DIR";

pub fn wireguard_dir() -> &'static Path {
    Path::new(WIREGUARD_DIR)
}

/// Get the wg-manager settings directory.
///
/// Unlike the WireGuard directory this is never created; a missing
/// directory simply means default settings.
pub fn settings_dir() -> Result<PathBuf, WgError> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    let base = dirs::config_dir()
        .ok_or_else(|| WgError::Config("Could not determine config directory".into()))?;
    Ok(base.join("wg-manager"))
}
