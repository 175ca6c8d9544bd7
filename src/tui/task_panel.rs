//! Task panel: one row per task with a drag handle and a delete affordance.

// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::layout::DELETE_WIDTH;
use super::{AppLayout, AppState};

const DRAG_HANDLE: &str = "⠿ ";
const DROP_MARKER: &str = "» ";
const DELETE_GLYPH: &str = " ✕ ";

/// Draws the task list. The input below it is drawn separately.
pub fn render(f: &mut Frame, layout: &AppLayout, state: &AppState) {
    let theme = &state.theme;

    let title = if state.tasks.is_empty() {
        " Tasks ".to_string()
    } else {
        format!(" Tasks ({}) ", state.tasks.len())
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.primary))
        .style(Style::default().bg(theme.background));
    f.render_widget(block, layout.tasks);

    let rows = layout.task_rows;
    if rows.height == 0 || rows.width == 0 {
        return;
    }

    if state.tasks.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "No tasks yet - press 'a' to add one",
            Style::default().fg(theme.text_muted),
        ));
        f.render_widget(empty, Rect { height: 1, ..rows });
        return;
    }

    let offset = state.task_list_offset();
    let delete_width = DELETE_WIDTH.min(rows.width);

    for (line, (index, task)) in state
        .tasks
        .iter()
        .enumerate()
        .skip(offset)
        .take(rows.height as usize)
        .enumerate()
    {
        let y = rows.y + line as u16;
        let selected = state.selected_task == Some(index);
        let dragged = state.drag.is_some_and(|drag| drag.from == index);
        let drop_target = state
            .drag
            .is_some_and(|drag| drag.target == index && drag.from != index);

        let row_style = if selected {
            Style::default().bg(theme.highlight_bg)
        } else {
            Style::default().bg(theme.background)
        };

        let (prefix, prefix_style) = if drop_target {
            (DROP_MARKER, Style::default().fg(theme.accent))
        } else {
            (DRAG_HANDLE, Style::default().fg(theme.text_muted))
        };

        let text_style = if dragged {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD | Modifier::ITALIC)
        } else if task.is_empty() {
            Style::default().fg(theme.text_muted)
        } else if selected {
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text)
        };
        let label = if task.is_empty() { "(empty)" } else { task };

        let body = Paragraph::new(Line::from(vec![
            Span::styled(prefix, prefix_style),
            Span::styled(label.to_string(), text_style),
        ]))
        .style(row_style);
        f.render_widget(
            body,
            Rect {
                x: rows.x,
                y,
                width: rows.width - delete_width,
                height: 1,
            },
        );

        let delete = Paragraph::new(Span::styled(DELETE_GLYPH, Style::default().fg(theme.error)))
            .style(row_style);
        f.render_widget(
            delete,
            Rect {
                x: rows.right() - delete_width,
                y,
                width: delete_width,
                height: 1,
            },
        );
    }
}
