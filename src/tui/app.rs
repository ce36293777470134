use std::io;
use std::time::Duration;

use crossterm::event::{
    self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::model::Config;
use crate::store::Store;

use super::controller::{Action, Controller, Flow};
use super::input;
use super::render;
use super::theme::Theme;

/// Run the interactive session until the user quits
pub fn run<S: Store>(store: S, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut controller = Controller::new(store, config.input.char_limit)?;
    let theme = Theme::from_config(&config.ui);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    tracing::info!("session started");
    let result = run_event_loop(&mut terminal, &mut controller, &theme, config.ui.show_key_hints);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    tracing::info!("session ended");

    result
}

fn run_event_loop<S: Store>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    controller: &mut Controller<S>,
    theme: &Theme,
    show_hints: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, controller.screen(), theme, show_hints))?;

        if event::poll(Duration::from_millis(250))?
            && dispatch(controller, event::read()?) == Flow::Quit
        {
            break;
        }
    }
    Ok(())
}

/// Decode one terminal event and apply it. Events with no meaning in the
/// current mode are dropped.
fn dispatch<S: Store>(controller: &mut Controller<S>, ev: Event) -> Flow {
    let action = match ev {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            input::map_key(controller.mode(), key)
        }
        Event::Paste(text) if controller.mode().is_adding() => Some(Action::Paste(text)),
        Event::Resize(..) => Some(Action::Resize),
        _ => None,
    };
    match action {
        Some(action) => controller.handle(action),
        None => Flow::Continue,
    }
}
