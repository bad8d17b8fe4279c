//! Loading overlay shown while the simulated generation runs. It replaces
//! the active input screen entirely.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::cli::tui::import::state::GeneratingView;
use crate::cli::tui::import::theme::Theme;

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

pub fn render(frame: &mut Frame, view: &GeneratingView, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Min(0),
        ])
        .split(frame.area());

    let spinner = SPINNER[(view.ticks as usize) % SPINNER.len()];
    let lines = vec![
        Line::from(Span::styled(
            format!("{spinner} Generating your lesson..."),
            theme.highlight,
        )),
        Line::from(""),
        Line::from(Span::styled(
            "This usually takes a few seconds.",
            theme.muted,
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        chunks[1],
    );
}
