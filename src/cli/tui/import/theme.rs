use ratatui::style::{Color, Modifier, Style};

use crate::wizard::state::ImportMethod;

/// Consistent theme for the TUI
pub struct Theme {
    pub selected: Style,
    pub error: Style,
    pub success: Style,
    pub muted: Style,
    pub highlight: Style,
    pub step_done: Style,
    pub step_current: Style,
    pub step_future: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            selected: Style::default()
                .bg(Color::Rgb(50, 50, 80))
                .add_modifier(Modifier::BOLD),
            error: Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
            success: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            muted: Style::default()
                .fg(Color::DarkGray),
            highlight: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            step_done: Style::default()
                .fg(Color::Green),
            step_current: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            step_future: Style::default()
                .fg(Color::DarkGray),
        }
    }
}

impl Theme {
    /// Accent color for source cards
    pub fn method_color(&self, method: ImportMethod) -> Color {
        match method {
            ImportMethod::TypeOrPaste => Color::White,
            ImportMethod::WebLink => Color::Cyan,
            ImportMethod::AudioFile => Color::Blue,
            ImportMethod::Document => Color::Yellow,
            ImportMethod::Spotify => Color::Green,
            ImportMethod::Netflix => Color::Red,
            ImportMethod::PrimeVideo => Color::LightBlue,
            ImportMethod::YouTube => Color::LightRed,
            ImportMethod::Instagram => Color::Magenta,
            ImportMethod::TikTok => Color::LightMagenta,
            ImportMethod::Scan => Color::Gray,
        }
    }
}
