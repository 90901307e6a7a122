//! Classification and styling of `wg` status output.
//!
//! Parsing is line-oriented and tolerant: anything unrecognised is
//! rendered as plain text.

use ratatui::style::Style;
use ratatui::text::{Line, Text};

use crate::theme::Theme;

/// Shown instead of the status when `wg` printed nothing.
pub const INACTIVE_MESSAGE: &str = "No VPN is currently active.";

const INTERFACE_PREFIX: &str = "interface:";
const PEER_PREFIX: &str = "peer:";
const KEY_INFO_PREFIXES: &[&str] = &["public key:", "private key:", "listening port:"];
const CONNECTION_INFO_PREFIXES: &[&str] = &[
    "endpoint:",
    "allowed ips:",
    "latest handshake:",
    "transfer:",
];

/// Display category of one line of status output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLine {
    InterfaceHeader,
    PeerHeader,
    KeyInfo,
    ConnectionInfo,
    Plain,
}

impl StatusLine {
    fn style(self, theme: &Theme) -> Style {
        match self {
            StatusLine::InterfaceHeader | StatusLine::PeerHeader => theme.title,
            StatusLine::KeyInfo => theme.config_entry,
            StatusLine::ConnectionInfo => theme.info,
            StatusLine::Plain => Style::new(),
        }
    }
}

/// Classify a line by its (case-sensitive) prefix after trimming.
pub fn classify(line: &str) -> StatusLine {
    let line = line.trim();
    if line.starts_with(INTERFACE_PREFIX) {
        StatusLine::InterfaceHeader
    } else if line.starts_with(PEER_PREFIX) {
        StatusLine::PeerHeader
    } else if KEY_INFO_PREFIXES.iter().any(|p| line.starts_with(p)) {
        StatusLine::KeyInfo
    } else if CONNECTION_INFO_PREFIXES.iter().any(|p| line.starts_with(p)) {
        StatusLine::ConnectionInfo
    } else {
        StatusLine::Plain
    }
}

/// Style every line of `raw` by its classification.
///
/// Empty output from `wg` means no interface is up, which is reported
/// with [`INACTIVE_MESSAGE`] rather than a blank block.
pub fn format(raw: &str, theme: &Theme) -> Text<'static> {
    if raw.trim().is_empty() {
        return Text::from(Line::styled(INACTIVE_MESSAGE, theme.error));
    }

    raw.lines()
        .map(|line| {
            let line = line.trim();
            Line::styled(line.to_string(), classify(line).style(theme))
        })
        .collect::<Vec<_>>()
        .into()
}

/// Names of the interfaces reported in `raw`, in output order.
pub fn active_interfaces(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter_map(|line| line.strip_prefix(INTERFACE_PREFIX))
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect()
}
