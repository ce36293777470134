use ratatui::style::Color;

use crate::model::UiConfig;

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub dim: Color,
    pub highlight: Color,
    pub selection_fg: Color,
    pub red: Color,
    pub green: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Reset,
            text: Color::Rgb(0xD4, 0xC6, 0xA9),
            text_bright: Color::Rgb(0xFB, 0xF1, 0xC7),
            dim: Color::Rgb(0x70, 0x69, 0x5A),
            highlight: Color::Rgb(0xD4, 0xC6, 0xA9),
            selection_fg: Color::Rgb(0x1F, 0x1D, 0x19),
            red: Color::Rgb(0xFB, 0x49, 0x34),
            green: Color::Rgb(0xB8, 0xBB, 0x26),
        }
    }
}

/// Parse a hex color string like "#FB4934" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from the `[ui]` config, falling back to defaults.
    /// Unknown slots and malformed colors are skipped with a warning.
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            let Some(color) = parse_hex_color(value) else {
                tracing::warn!(slot = %key, value = %value, "ignoring malformed color");
                continue;
            };
            match key.as_str() {
                "background" => theme.background = color,
                "text" => theme.text = color,
                "text_bright" => theme.text_bright = color,
                "dim" => theme.dim = color,
                "highlight" => theme.highlight = color,
                "selection_fg" => theme.selection_fg = color,
                "red" => theme.red = color,
                "green" => theme.green = color,
                _ => tracing::warn!(slot = %key, "ignoring unknown color slot"),
            }
        }

        theme
    }
}
