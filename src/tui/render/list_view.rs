use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::controller::{Mode, Screen};
use crate::tui::list::Row;
use crate::tui::theme::Theme;
use crate::util::unicode::{display_width, truncate_to_width};

/// Lines above the first row: title and a blank spacer
const HEADER_LINES: usize = 2;

/// Render the breadcrumb title and the rows of the current list
pub fn render_list_view(frame: &mut Frame, screen: Screen<'_>, theme: &Theme, area: Rect) {
    let width = area.width as usize;
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(
        format!(" {}", truncate_to_width(screen.list.title(), width.saturating_sub(1))),
        Style::default()
            .fg(theme.text_bright)
            .bg(theme.background)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    if screen.list.is_empty() {
        let hint = match screen.mode {
            Mode::ViewingTasks(_) => "   No tasks yet. Press a to add one.",
            _ => "   No projects yet. Press a to add one.",
        };
        lines.push(Line::from(Span::styled(
            hint,
            Style::default().fg(theme.dim).bg(theme.background),
        )));
    } else {
        let visible = (area.height as usize).saturating_sub(HEADER_LINES).max(1);
        let offset = scroll_offset(screen.list.selected_index(), visible);
        for (i, row) in screen
            .list
            .items()
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
        {
            let is_cursor = screen.list.selected_index() == Some(i);
            lines.push(render_row(row, i, is_cursor, theme, width));
        }
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(theme.background));
    frame.render_widget(paragraph, area);
}

/// First visible row, chosen so the cursor is always on screen
fn scroll_offset(selected: Option<usize>, visible: usize) -> usize {
    match selected {
        Some(i) if i >= visible => i + 1 - visible,
        _ => 0,
    }
}

fn render_row(
    row: &Row,
    index: usize,
    is_cursor: bool,
    theme: &Theme,
    width: usize,
) -> Line<'static> {
    let marker = if is_cursor { "> " } else { "  " };
    let checkbox = match row {
        Row::Project { .. } => "",
        Row::Task { done: true, .. } => "[x] ",
        Row::Task { done: false, .. } => "[ ] ",
    };
    let prefix = format!(" {}{}. {}", marker, index + 1, checkbox);
    let label_budget = width.saturating_sub(display_width(&prefix));
    let label = truncate_to_width(row.label(), label_budget);

    let base = if is_cursor {
        Style::default().fg(theme.selection_fg).bg(theme.highlight)
    } else if row.is_done() {
        Style::default().fg(theme.dim).bg(theme.background)
    } else {
        Style::default().fg(theme.text).bg(theme.background)
    };
    let label_style = if row.is_done() {
        base.add_modifier(Modifier::CROSSED_OUT)
    } else {
        base
    };

    let mut spans = vec![
        Span::styled(prefix, base),
        Span::styled(label, label_style),
    ];

    // Pad cursor line
    if is_cursor {
        let content_width: usize = spans.iter().map(|s| display_width(&s.content)).sum();
        if content_width < width {
            spans.push(Span::styled(" ".repeat(width - content_width), base));
        }
    }

    Line::from(spans)
}
