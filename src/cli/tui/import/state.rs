//! View-only state for each screen. Wizard semantics live in
//! `crate::wizard::controller`; nothing here gates a transition.

use tui_input::Input;

use crate::wizard::validate::ValidationError;

/// Cursor position on the source picker
#[derive(Debug, Default)]
pub struct SelectSourceView {
    pub selected_index: usize,
}

/// Text buffer and inline error for the Add Content screen
#[derive(Debug, Default)]
pub struct AddContentView {
    pub input: Input,
    pub error: Option<ValidationError>,
}

impl AddContentView {
    pub fn reset(&mut self) {
        self.input.reset();
        self.error = None;
    }
}

/// Spinner frame counter for the generating overlay
#[derive(Debug, Default)]
pub struct GeneratingView {
    pub ticks: u64,
}
