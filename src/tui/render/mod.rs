pub mod input_view;
pub mod list_view;
pub mod status_row;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::controller::Screen;
use super::theme::Theme;

/// Main render function. Reads the screen snapshot and mutates nothing.
pub fn render(frame: &mut Frame, screen: Screen<'_>, theme: &Theme, show_hints: bool) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: top margin (1 row) | content | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    if screen.mode.is_adding() {
        input_view::render_input_view(frame, screen, theme, chunks[1]);
    } else {
        list_view::render_list_view(frame, screen, theme, chunks[1]);
    }

    status_row::render_status_row(frame, screen, theme, show_hints, chunks[2]);
}
