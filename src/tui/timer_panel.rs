//! Timer panel: countdown readout, cycle line, progress gauge and buttons.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use super::{AppLayout, AppState, Theme};
use crate::models::{format_time, IntervalKind};

/// Draws the timer panel into the regions computed by [`AppLayout`].
pub fn render(f: &mut Frame, layout: &AppLayout, state: &AppState) {
    let theme = &state.theme;
    let timer = &state.timer;
    let color = interval_color(timer.interval(), theme);

    let block = Block::default()
        .title(format!(" {} ", timer.interval()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .style(Style::default().bg(theme.background));
    f.render_widget(block, layout.timer);

    let countdown = Paragraph::new(Line::from(Span::styled(
        format_time(timer.remaining_seconds()),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    f.render_widget(countdown, layout.countdown);

    let status = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("Cycle {}", timer.cycle()),
            Style::default().fg(theme.text),
        ),
        Span::styled(" / ", Style::default().fg(theme.text_muted)),
        Span::styled(
            running_label(timer.is_running()),
            Style::default().fg(if timer.is_running() {
                theme.success
            } else {
                theme.warning
            }),
        ),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(status, layout.status_line);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(color).bg(theme.surface))
        .ratio(timer.progress().clamp(0.0, 1.0))
        .label("");
    f.render_widget(gauge, layout.gauge);

    let start_label = if timer.is_running() { "Pause" } else { "Start" };
    render_button(f, layout.start_button, start_label, theme.primary, theme);
    render_button(f, layout.reset_button, "Reset", theme.text_muted, theme);
}

/// Text of the running/stopped readout.
#[must_use]
pub const fn running_label(running: bool) -> &'static str {
    if running {
        "Running"
    } else {
        "Paused"
    }
}

fn interval_color(kind: IntervalKind, theme: &Theme) -> Color {
    match kind {
        IntervalKind::Work => theme.primary,
        IntervalKind::ShortBreak => theme.success,
        IntervalKind::LongBreak => theme.accent,
    }
}

fn render_button(f: &mut Frame, area: Rect, label: &str, color: Color, theme: &Theme) {
    let button = Paragraph::new(Span::styled(
        label.to_string(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .style(Style::default().bg(theme.surface)),
    );
    f.render_widget(button, area);
}
