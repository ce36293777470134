//! Key bindings: terminal keys to semantic [`Action`]s.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::controller::{Action, Mode};

/// Rows skipped by PageUp/PageDown
const PAGE: isize = 10;

/// Decode a key press for the given mode. `None` means the key is unbound.
pub fn map_key(mode: &Mode, key: KeyEvent) -> Option<Action> {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return None;
    }
    match mode {
        Mode::AddingProject | Mode::AddingTask(_) => map_editing_key(key),
        Mode::ViewingProjects => map_viewing_key(key, true),
        Mode::ViewingTasks(_) => map_viewing_key(key, false),
    }
}

/// `at_root` is true on the project list, where Esc leaves the app
fn map_viewing_key(key: KeyEvent, at_root: bool) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let action = match key.code {
        KeyCode::Char('c') if ctrl => Action::Quit,
        KeyCode::Char('a') if ctrl => Action::Add,
        _ if ctrl => return None,
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Esc if at_root => Action::Quit,
        KeyCode::Char('a') => Action::Add,
        KeyCode::Enter => Action::Select,
        KeyCode::Char('d') | KeyCode::Delete => Action::Delete,
        KeyCode::Backspace | KeyCode::Esc | KeyCode::Left | KeyCode::Char('h') => Action::Back,
        KeyCode::Down | KeyCode::Char('j') => Action::Move(1),
        KeyCode::Up | KeyCode::Char('k') => Action::Move(-1),
        KeyCode::PageDown => Action::Move(PAGE),
        KeyCode::PageUp => Action::Move(-PAGE),
        KeyCode::Home | KeyCode::Char('g') => Action::First,
        KeyCode::End | KeyCode::Char('G') => Action::Last,
        _ => return None,
    };
    Some(action)
}

fn map_editing_key(key: KeyEvent) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let action = match key.code {
        KeyCode::Char('c') if ctrl => Action::Cancel,
        KeyCode::Char('a') if ctrl => Action::CursorHome,
        KeyCode::Char('e') if ctrl => Action::CursorEnd,
        _ if ctrl => return None,
        KeyCode::Enter => Action::Submit,
        KeyCode::Esc | KeyCode::Tab => Action::Cancel,
        KeyCode::Backspace => Action::Backspace,
        KeyCode::Delete => Action::DeleteForward,
        KeyCode::Left => Action::CursorLeft,
        KeyCode::Right => Action::CursorRight,
        KeyCode::Home => Action::CursorHome,
        KeyCode::End => Action::CursorEnd,
        KeyCode::Char(c) => Action::Type(c),
        _ => return None,
    };
    Some(action)
}
