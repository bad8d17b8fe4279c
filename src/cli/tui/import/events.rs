use ratatui::crossterm::event::KeyEvent;

use crate::wizard::timer::GenerationToken;

/// All possible events in the wizard
#[derive(Debug)]
pub enum AppEvent {
    // Input events
    Key(KeyEvent),
    Resize(u16, u16),

    // Async task events
    GenerationFinished(GenerationToken),
    ClipboardText(String),

    // UI events
    Tick, // drives the generation spinner
}
