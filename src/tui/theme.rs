use ratatui::style::Color;

use crate::model::{TaskStatus, UiConfig};

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub selection_bg: Color,
    pub todo: Color,
    pub complete: Color,
    pub cancel: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x28, 0x28, 0x28),
            text: Color::Rgb(0xE6, 0xE6, 0xE6),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0x50, 0xA0, 0x50),
            dim: Color::Rgb(0x8C, 0x8C, 0x8C),
            selection_bg: Color::Rgb(0x46, 0x46, 0x46),
            todo: Color::Rgb(0xFF, 0xD7, 0x00),
            complete: Color::Rgb(0x44, 0xFF, 0x88),
            cancel: Color::Rgb(0xFF, 0x50, 0x50),
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
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
    /// Create a theme from UI config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            let Some(color) = parse_hex_color(value) else {
                tracing::warn!(slot = %key, value = %value, "ignoring invalid color");
                continue;
            };
            match key.as_str() {
                "background" => theme.background = color,
                "text" => theme.text = color,
                "text_bright" => theme.text_bright = color,
                "highlight" => theme.highlight = color,
                "dim" => theme.dim = color,
                "selection_bg" => theme.selection_bg = color,
                "todo" => theme.todo = color,
                "complete" => theme.complete = color,
                "cancel" => theme.cancel = color,
                other => tracing::warn!(slot = %other, "unknown color slot"),
            }
        }

        theme
    }

    /// Tint for a task's text
    pub fn status_color(&self, status: TaskStatus) -> Color {
        match status {
            TaskStatus::Todo => self.todo,
            TaskStatus::Complete => self.complete,
            TaskStatus::Cancel => self.cancel,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(
            parse_hex_color("#FF4444"),
            Some(Color::Rgb(0xFF, 0x44, 0x44))
        );
        assert_eq!(parse_hex_color("#0c001b"), Some(Color::Rgb(0x0C, 0x00, 0x1B)));
        assert_eq!(parse_hex_color("FF4444"), None); // missing #
        assert_eq!(parse_hex_color("#FF44"), None);
        assert_eq!(parse_hex_color("#ZZZZZZ"), None);
        assert_eq!(parse_hex_color("#写写"), None);
    }

    #[test]
    fn test_from_config_overrides() {
        let mut ui = UiConfig::default();
        ui.colors.insert("todo".into(), "#112233".into());
        ui.colors.insert("background".into(), "#000000".into());
        ui.colors.insert("cancel".into(), "not-a-color".into());

        let theme = Theme::from_config(&ui);
        assert_eq!(theme.todo, Color::Rgb(0x11, 0x22, 0x33));
        assert_eq!(theme.background, Color::Rgb(0, 0, 0));
        // Invalid value leaves the default
        assert_eq!(theme.cancel, Theme::default().cancel);
    }

    #[test]
    fn test_status_color() {
        let theme = Theme::default();
        assert_eq!(theme.status_color(TaskStatus::Todo), theme.todo);
        assert_eq!(theme.status_color(TaskStatus::Complete), theme.complete);
        assert_eq!(theme.status_color(TaskStatus::Cancel), theme.cancel);
    }
}
