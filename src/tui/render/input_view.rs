use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_segmentation::UnicodeSegmentation;

use crate::tui::controller::{Mode, Screen};
use crate::tui::theme::Theme;
use crate::util::unicode::{display_width, truncate_to_width};

const FIELD_PREFIX: &str = " > ";
const FIELD_ROW: u16 = 2;

/// Render the prompt, the edit field and its char counter
pub fn render_input_view(frame: &mut Frame, screen: Screen<'_>, theme: &Theme, area: Rect) {
    let width = area.width as usize;
    let bg = theme.background;

    let (prompt, note) = match screen.mode {
        Mode::AddingTask(project) => (format!("Add a task to {}:", project.name), None),
        _ => (
            "Add a new project:".to_string(),
            Some("project names must be unique"),
        ),
    };

    let field_width = width.saturating_sub(display_width(FIELD_PREFIX) + 1);
    let (visible, cursor_col) = visible_window(
        screen.input.value(),
        screen.input.cursor_col(),
        field_width,
    );

    let counter = format!(
        "{}/{}",
        screen.input.value().chars().count(),
        screen.input.limit()
    );
    let mut footer = vec![Span::styled(
        format!(" {counter}"),
        Style::default().fg(theme.dim).bg(bg),
    )];
    if let Some(note) = note {
        footer.push(Span::styled(
            format!("  {note}"),
            Style::default()
                .fg(theme.dim)
                .bg(bg)
                .add_modifier(Modifier::ITALIC),
        ));
    }

    let lines = vec![
        Line::from(Span::styled(
            format!(" {}", truncate_to_width(&prompt, width.saturating_sub(1))),
            Style::default()
                .fg(theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(FIELD_PREFIX, Style::default().fg(theme.highlight).bg(bg)),
            Span::styled(visible, Style::default().fg(theme.text).bg(bg)),
        ]),
        Line::from(""),
        Line::from(footer),
    ];

    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(bg)),
        area,
    );

    if screen.input.is_focused() && area.height > FIELD_ROW {
        let x = area.x + (display_width(FIELD_PREFIX) + cursor_col) as u16;
        frame.set_cursor_position((x.min(area.right().saturating_sub(1)), area.y + FIELD_ROW));
    }
}

/// Slice of `value` that fits in `width` cells with the cursor visible.
/// Returns the slice and the cursor column within it.
fn visible_window(value: &str, cursor_col: usize, width: usize) -> (String, usize) {
    if cursor_col <= width && display_width(value) <= width {
        return (value.to_string(), cursor_col);
    }
    // Drop leading graphemes until the cursor fits
    let mut skipped = 0;
    let mut graphemes = value.graphemes(true);
    while cursor_col.saturating_sub(skipped) > width {
        match graphemes.next() {
            Some(g) => skipped += display_width(g),
            None => break,
        }
    }
    let rest: String = graphemes.collect();
    (
        truncate_to_width(&rest, width),
        cursor_col.saturating_sub(skipped),
    )
}
