use ratatui::DefaultTerminal;

/// Switch the terminal into picker mode.
///
/// `ratatui::try_init()` enables raw mode and the alternate screen, and
/// installs a panic hook that restores the terminal before the panic message
/// prints. Fails when there is no terminal to draw on (cron, `ssh` without
/// `-t`, redirected input).
pub fn init() -> std::io::Result<DefaultTerminal> {
    ratatui::try_init()
}

/// Leave raw mode and the alternate screen.
///
/// Must run before any `wg-quick` output or error is printed.
pub fn restore() {
    ratatui::restore();
}
