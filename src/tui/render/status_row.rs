use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::controller::{Mode, Notice, Screen};
use crate::tui::theme::Theme;
use crate::util::unicode::truncate_to_width;

/// Key hints for the current mode
fn hints(mode: &Mode) -> &'static str {
    match mode {
        Mode::ViewingProjects => "a add  enter open  d delete  q quit",
        Mode::ViewingTasks(_) => "a add  enter done  d delete  esc back  q quit",
        Mode::AddingProject | Mode::AddingTask(_) => "enter save  esc cancel",
    }
}

/// Render the status row (bottom of screen). A notice replaces the hints.
pub fn render_status_row(
    frame: &mut Frame,
    screen: Screen<'_>,
    theme: &Theme,
    show_hints: bool,
    area: Rect,
) {
    let bg = theme.background;
    let width = (area.width as usize).saturating_sub(1);

    let line = match screen.notice {
        Some(Notice::Error(msg)) => Line::from(Span::styled(
            format!(" {}", truncate_to_width(msg, width)),
            Style::default().fg(theme.red).bg(bg),
        )),
        Some(Notice::Info(msg)) => Line::from(Span::styled(
            format!(" {}", truncate_to_width(msg, width)),
            Style::default().fg(theme.green).bg(bg),
        )),
        None if show_hints => Line::from(Span::styled(
            format!(" {}", truncate_to_width(hints(screen.mode), width)),
            Style::default().fg(theme.dim).bg(bg),
        )),
        None => Line::from(""),
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
