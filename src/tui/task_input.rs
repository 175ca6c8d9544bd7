//! Single-line input that appends a task on Enter.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{Component, Theme};

/// Events emitted by [`TaskInput`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskInputEvent {
    /// Enter was pressed; carries the text, which may be empty
    Submitted(String),
    /// Focus left the input
    Unfocused,
}

/// New-task text field.
#[derive(Debug, Clone, Default)]
pub struct TaskInput {
    value: String,
    focused: bool,
}

impl TaskInput {
    /// Creates an empty, unfocused input.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether keystrokes go to the input.
    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    /// Gives the input keyboard focus.
    pub fn focus(&mut self) {
        self.focused = true;
    }

    /// Removes keyboard focus, keeping the typed text.
    pub fn blur(&mut self) {
        self.focused = false;
    }
}

impl Component for TaskInput {
    type Event = TaskInputEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Enter => Some(TaskInputEvent::Submitted(std::mem::take(&mut self.value))),
            KeyCode::Esc => {
                self.blur();
                Some(TaskInputEvent::Unfocused)
            }
            KeyCode::Backspace => {
                self.value.pop();
                None
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.blur();
                Some(TaskInputEvent::Unfocused)
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.value.push(c);
                None
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let (text, style) = if self.focused {
            (
                format!("{}█", self.value),
                Style::default().fg(theme.text),
            )
        } else if self.value.is_empty() {
            (
                "Add a new task".to_string(),
                Style::default().fg(theme.text_muted),
            )
        } else {
            (self.value.clone(), Style::default().fg(theme.text))
        };

        let border_color = if self.focused {
            theme.accent
        } else {
            theme.text_muted
        };

        let input = Paragraph::new(text).style(style).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        );
        f.render_widget(input, area);
    }
}
