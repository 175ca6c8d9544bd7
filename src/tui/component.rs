//! Keyboard-driven widgets that own their state.

use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

use crate::tui::Theme;

/// A widget that takes over the keyboard while it is active.
pub trait Component {
    /// What the widget reports back to `AppState`
    type Event;

    /// Consumes a key press. `None` means the key was handled internally.
    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event>;

    /// Draws the widget into `area`.
    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme);

    /// True once the widget has finished and can be dropped.
    fn should_close(&self) -> bool {
        false
    }
}
