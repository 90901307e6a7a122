//! Public IP lookup, handy for checking whether traffic leaves via a tunnel.

use std::time::Duration;

use crate::error::WgError;

/// Fetch the caller's public IP address from a plain-text echo service.
///
/// The whole request, including connecting, is bounded by `timeout`.
pub fn public_ip(url: &str, timeout: Duration) -> Result<String, WgError> {
    tracing::debug!(url, ?timeout, "Looking up public IP");
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()?;
    let body = client.get(url).send()?.error_for_status()?.text()?;
    parse_ip_body(&body)
}

fn parse_ip_body(body: &str) -> Result<String, WgError> {
    let ip = body.trim();
    if ip.is_empty() {
        return Err(WgError::Http("empty response from IP service".into()));
    }
    Ok(ip.to_string())
}
