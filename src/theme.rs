//! Style roles shared by the picker and the plain CLI output.

use crossterm::style::{Attribute, Color as TermColor, ContentStyle};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;

/// Immutable set of styles handed to every renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Titles, interface and peer headers.
    pub title: Style,
    /// Tunnel names and key material.
    pub config_entry: Style,
    /// Connection details and the pending action label.
    pub info: Style,
    /// Errors and the "no VPN active" notice.
    pub error: Style,
}

impl Theme {
    pub const COLORED: Theme = Theme {
        title: Style::new().fg(Color::LightCyan).add_modifier(Modifier::BOLD),
        config_entry: Style::new().fg(Color::LightGreen),
        info: Style::new().fg(Color::LightCyan),
        error: Style::new().fg(Color::LightRed),
    };

    /// No colors or attributes, for output that is not a terminal.
    pub const PLAIN: Theme = Theme {
        title: Style::new(),
        config_entry: Style::new(),
        info: Style::new(),
        error: Style::new(),
    };

    /// Pick a theme for stdout: colored on a terminal unless `NO_COLOR` is set.
    pub fn for_stdout() -> Theme {
        use std::io::IsTerminal;

        if std::env::var_os("NO_COLOR").is_some() || !std::io::stdout().is_terminal() {
            Theme::PLAIN
        } else {
            Theme::COLORED
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::COLORED
    }
}

/// Render a styled line as a string with ANSI escape sequences.
pub fn to_ansi(line: &Line<'_>) -> String {
    let mut out = String::new();
    for span in &line.spans {
        let style = line.style.patch(span.style);
        out.push_str(&content_style(style).apply(span.content.as_ref()).to_string());
    }
    out
}

fn content_style(style: Style) -> ContentStyle {
    let mut content = ContentStyle::new();
    content.foreground_color = style.fg.map(term_color);
    content.background_color = style.bg.map(term_color);
    if style.add_modifier.contains(Modifier::BOLD) {
        content.attributes.set(Attribute::Bold);
    }
    if style.add_modifier.contains(Modifier::DIM) {
        content.attributes.set(Attribute::Dim);
    }
    if style.add_modifier.contains(Modifier::UNDERLINED) {
        content.attributes.set(Attribute::Underlined);
    }
    content
}

// ratatui names the normal ANSI colors plainly and the bright ones "Light";
// crossterm uses "Dark" for normal and plain names for bright.
fn term_color(color: Color) -> TermColor {
    match color {
        Color::Reset => TermColor::Reset,
        Color::Black => TermColor::Black,
        Color::Red => TermColor::DarkRed,
        Color::Green => TermColor::DarkGreen,
        Color::Yellow => TermColor::DarkYellow,
        Color::Blue => TermColor::DarkBlue,
        Color::Magenta => TermColor::DarkMagenta,
        Color::Cyan => TermColor::DarkCyan,
        Color::Gray => TermColor::Grey,
        Color::DarkGray => TermColor::DarkGrey,
        Color::LightRed => TermColor::Red,
        Color::LightGreen => TermColor::Green,
        Color::LightYellow => TermColor::Yellow,
        Color::LightBlue => TermColor::Blue,
        Color::LightMagenta => TermColor::Magenta,
        Color::LightCyan => TermColor::Cyan,
        Color::White => TermColor::White,
        Color::Rgb(r, g, b) => TermColor::Rgb { r, g, b },
        Color::Indexed(i) => TermColor::AnsiValue(i),
    }
}
