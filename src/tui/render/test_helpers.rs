use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::store::{MemoryStore, Store};
use crate::tui::controller::Controller;

pub const TERM_W: u16 = 60;
pub const TERM_H: u16 = 12;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    render_to_buffer(w, h, f)
        .content
        .chunks(w as usize)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
        .trim_end()
        .to_string()
}

/// Render into an in-memory buffer and return it with styles intact.
pub fn render_to_buffer<F>(w: u16, h: u16, f: F) -> ratatui::buffer::Buffer
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();
    terminal.backend().buffer().clone()
}

/// Row `y` of a buffer as plain text
pub fn buffer_line(buf: &ratatui::buffer::Buffer, y: u16) -> String {
    (0..buf.area.width)
        .map(|x| buf[(x, y)].symbol())
        .collect::<String>()
        .trim_end()
        .to_string()
}

/// A controller over one "Groceries" project holding "Milk" and "Eggs".
pub fn controller_with_groceries() -> Controller<MemoryStore> {
    let mut store = MemoryStore::new();
    let p = store.create_project("Groceries").unwrap();
    store.create_task(p, "Milk").unwrap();
    store.create_task(p, "Eggs").unwrap();
    Controller::new(store, 100).unwrap()
}

/// A controller over projects with the given names and no tasks.
pub fn controller_with_projects(names: &[&str]) -> Controller<MemoryStore> {
    let mut store = MemoryStore::new();
    for name in names {
        store.create_project(name).unwrap();
    }
    Controller::new(store, 100).unwrap()
}
