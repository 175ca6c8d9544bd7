//! Status bar widget for displaying status messages and help

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Theme};
use crate::shortcuts::Action;

/// Which hint set the bottom line shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintContext {
    /// Main screen
    Main,
    /// Typing into the new-task input
    Input,
    /// Moving a grabbed task
    Drag,
    /// Help overlay open
    Help,
}

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar with contextual help
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let content = if state.status_message.is_empty() {
            Self::hints_line(Self::context(state), theme)
        } else {
            Line::from(Span::styled(
                state.status_message.as_str(),
                Style::default().fg(theme.text),
            ))
        };

        let status = Paragraph::new(content)
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.text_muted))
                    .title(" Status ")
                    .title_bottom(Self::mode_indicator(state, theme))
                    .style(Style::default().bg(theme.background)),
            );

        f.render_widget(status, area);
    }

    /// Hint set for the current interaction.
    #[must_use]
    pub fn context(state: &AppState) -> HintContext {
        if state.help_overlay.is_some() {
            HintContext::Help
        } else if state.input.is_focused() {
            HintContext::Input
        } else if state.drag.is_some() {
            HintContext::Drag
        } else {
            HintContext::Main
        }
    }

    /// Key/label pairs shown for a context.
    #[must_use]
    pub fn hints(context: HintContext) -> Vec<(&'static str, &'static str)> {
        match context {
            HintContext::Main => vec![
                ("Space", Action::ToggleTimer.label()),
                ("r", Action::ResetTimer.label()),
                ("a", Action::FocusInput.label()),
                ("m", Action::GrabTask.label()),
                ("x", Action::DeleteTask.label()),
                ("t", Action::ToggleDisplayMode.label()),
                ("?", Action::ToggleHelp.label()),
                ("q", Action::Quit.label()),
            ],
            HintContext::Input => vec![("Enter", "add task"), ("Esc", "done")],
            HintContext::Drag => vec![("↑/↓", "choose position"), ("m", "drop"), ("Esc", "cancel")],
            HintContext::Help => vec![("↑/↓", "scroll"), ("Esc/?", "close")],
        }
    }

    fn hints_line(context: HintContext, theme: &Theme) -> Line<'static> {
        let mut spans: Vec<Span<'static>> = Vec::new();
        for (i, (key, action)) in Self::hints(context).into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(
                key,
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(action, Style::default().fg(theme.text_muted)));
        }
        Line::from(spans)
    }

    fn mode_indicator(state: &AppState, theme: &Theme) -> Line<'static> {
        let running = if state.timer.is_running() {
            Span::styled(" RUNNING ", Style::default().fg(theme.success))
        } else {
            Span::styled(" PAUSED ", Style::default().fg(theme.warning))
        };
        Line::from(vec![
            running,
            Span::styled(
                format!(" {} mode ", state.display_mode),
                Style::default().fg(theme.text_muted),
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, ThemeMode};
    use crate::tui::DragSource;

    fn state() -> AppState {
        let mut config = Config::default();
        config.ui.theme_mode = ThemeMode::Light;
        AppState::new(config)
    }

    #[test]
    fn test_context_follows_interaction() {
        let mut state = state();
        assert_eq!(StatusBar::context(&state), HintContext::Main);

        state.add_task("a");
        state.begin_drag(0, DragSource::Keyboard);
        assert_eq!(StatusBar::context(&state), HintContext::Drag);

        state.input.focus();
        assert_eq!(StatusBar::context(&state), HintContext::Input);

        state.open_help();
        assert_eq!(StatusBar::context(&state), HintContext::Help);
    }

    #[test]
    fn test_main_hints_use_action_labels() {
        let hints = StatusBar::hints(HintContext::Main);
        assert!(hints.contains(&("Space", "start/pause")));
        assert!(hints.contains(&("q", "quit")));
    }
}
