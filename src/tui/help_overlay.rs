//! Help overlay widget showing all keyboard and mouse shortcuts.
//!
//! Opened with '?', scrollable with the arrow keys, closed with '?', 'q' or Esc.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap,
    },
    Frame,
};

use super::{Component, Theme};

/// Shortcut sections: (title, [(keys, description)]).
const HELP_SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "TIMER",
        &[
            ("Space", "Start or pause the countdown"),
            ("s / p", "Start / pause"),
            ("r", "Reset to the first focus interval, cycle 1"),
        ],
    ),
    (
        "TASKS",
        &[
            ("a / i", "Focus the new-task input"),
            ("Enter", "Add the typed task (input stays focused)"),
            ("Esc", "Leave the input"),
            ("↑/↓  k/j", "Select task"),
            ("Shift+↑/↓  K/J", "Move selected task up/down"),
            ("m", "Grab task, move with ↑/↓, drop with m"),
            ("x / Delete", "Delete selected task"),
        ],
    ),
    (
        "MOUSE",
        &[
            ("Click button", "Start/pause, reset, dark/light"),
            ("Drag row", "Press on a task, release on another to reorder"),
            ("Click ✕", "Delete task"),
            ("Click input", "Focus the new-task input"),
        ],
    ),
    (
        "GENERAL",
        &[
            ("t", "Toggle dark/light mode"),
            ("?", "Toggle this help"),
            ("Esc", "Cancel drag, clear status"),
            ("q / Ctrl+C", "Quit"),
        ],
    ),
];

/// Events emitted by [`HelpOverlay`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpOverlayEvent {
    /// Overlay was dismissed
    Closed,
}

/// Scrollable help overlay.
#[derive(Debug, Clone)]
pub struct HelpOverlay {
    /// Current scroll offset (line number)
    pub scroll_offset: usize,
    total_lines: usize,
    closed: bool,
}

impl HelpOverlay {
    /// Creates a new help overlay scrolled to the top.
    #[must_use]
    pub fn new() -> Self {
        let total_lines = Self::help_content(&Theme::default()).len();
        Self {
            scroll_offset: 0,
            total_lines,
            closed: false,
        }
    }

    /// Scroll up by one line.
    pub const fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll down by one line.
    pub const fn scroll_down(&mut self) {
        if self.scroll_offset + 1 < self.total_lines {
            self.scroll_offset += 1;
        }
    }

    fn help_content(theme: &Theme) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled(
                "Pomodoro Timer - Help",
                Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        for (title, entries) in HELP_SECTIONS {
            lines.push(Line::from(Span::styled(
                format!("═══ {title} ═══"),
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            )));
            for (keys, description) in *entries {
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(format!("{keys:<18}"), Style::default().fg(theme.success)),
                    Span::styled(*description, Style::default().fg(theme.text)),
                ]));
            }
            lines.push(Line::from(""));
        }

        lines
    }
}

impl Default for HelpOverlay {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for HelpOverlay {
    type Event = HelpOverlayEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?' | 'q') => {
                self.closed = true;
                Some(HelpOverlayEvent::Closed)
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll_up();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll_down();
                None
            }
            KeyCode::Home => {
                self.scroll_offset = 0;
                None
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        // Centered modal, 70% width, 80% height
        let [modal_area] = Layout::horizontal([Constraint::Percentage(70)])
            .flex(Flex::Center)
            .areas(area);
        let [modal_area] = Layout::vertical([Constraint::Percentage(80)])
            .flex(Flex::Center)
            .areas(modal_area);

        f.render_widget(Clear, modal_area);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(modal_area);

        let content_area = chunks[0];
        let visible_height = content_area.height.saturating_sub(2) as usize;

        let paragraph = Paragraph::new(Self::help_content(theme))
            .block(
                Block::default()
                    .title(" Help - Shortcuts ")
                    .title_alignment(Alignment::Center)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary)),
            )
            .style(Style::default().fg(theme.text).bg(theme.background))
            .wrap(Wrap { trim: false })
            .scroll((u16::try_from(self.scroll_offset).unwrap_or(u16::MAX), 0));

        f.render_widget(paragraph, content_area);

        let scrollbar = Scrollbar::default()
            .orientation(ScrollbarOrientation::VerticalRight)
            .style(Style::default().fg(theme.primary));
        let mut scrollbar_state =
            ScrollbarState::new(self.total_lines.saturating_sub(visible_height))
                .position(self.scroll_offset);

        f.render_stateful_widget(scrollbar, chunks[1], &mut scrollbar_state);
    }

    fn should_close(&self) -> bool {
        self.closed
    }
}
