//! Widgets making up the picker screen.
//!
//! Components are views over the session state; all input handling
//! lives in the session reducer.

pub mod config_list;
pub mod status_bar;

use ratatui::Frame;
use ratatui::layout::Rect;

/// Trait for TUI view components.
pub trait Component {
    /// Render the component into the given area of the frame.
    fn render(&self, frame: &mut Frame, area: Rect);
}
