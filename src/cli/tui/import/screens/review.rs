//! Review & Edit screen (mocked edit surface before generation)

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::cli::tui::import::theme::Theme;
use crate::wizard::state::{ImportMethod, WizardState};

pub fn render(frame: &mut Frame, method: ImportMethod, state: &WizardState, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Step indicator
            Constraint::Min(0),    // Summary
            Constraint::Length(1), // Help bar
        ])
        .split(frame.area());

    super::step_indicator::render(frame, chunks[0], state, theme);
    render_summary(frame, chunks[1], method, state, theme);

    let help = Line::from(Span::styled(
        " g generate lesson   Esc back",
        theme.muted,
    ));
    frame.render_widget(Paragraph::new(help), chunks[2]);
}

fn render_summary(
    frame: &mut Frame,
    area: Rect,
    method: ImportMethod,
    state: &WizardState,
    theme: &Theme,
) {
    let mut lines = vec![
        Line::from(Span::styled("Review & Edit", theme.highlight)),
        Line::from(""),
        Line::from(format!("Source: {}", method.label())),
    ];
    if let Some(file) = &state.uploaded_file {
        lines.push(Line::from(format!(
            "File: {} ({})",
            file.name, file.size_label
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Lesson details are editable here in the full product.",
        theme.muted,
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[g] Generate Lesson",
        theme.success,
    )));

    let block = Block::default().borders(Borders::ALL);
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(block),
        area,
    );
}
