//! Shared three-step progress line shown above the wizard screens

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::cli::tui::import::theme::Theme;
use crate::wizard::state::{Step, WizardState};

const STEPS: [Step; 3] = [Step::SelectSource, Step::AddContent, Step::ReviewEdit];

pub fn render(frame: &mut Frame, area: Rect, state: &WizardState, theme: &Theme) {
    // Uploading a file auto-configures the edit step, so the indicator
    // shows both remaining steps as done while still on Add Content.
    let file_shortcut = state.step == Step::AddContent && state.uploaded_file.is_some();

    let mut spans: Vec<Span> = Vec::new();
    for (i, step) in STEPS.iter().enumerate() {
        let done = *step < state.step || (file_shortcut && step.number() >= 2);
        let (marker, style) = if done {
            ("(✓)".to_string(), theme.step_done)
        } else if *step == state.step {
            (format!("({})", step.number()), theme.step_current)
        } else {
            (format!("({})", step.number()), theme.step_future)
        };
        spans.push(Span::styled(marker, style));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(step.title(), style));
        if i < STEPS.len() - 1 {
            let connector_done = STEPS[i + 1].number() <= state.step.number() || file_shortcut;
            let connector_style = if connector_done {
                theme.step_done
            } else {
                theme.step_future
            };
            spans.push(Span::styled("  ──  ", connector_style));
        }
    }

    let mut lines = vec![Line::from(spans)];
    if file_shortcut {
        lines.push(Line::from(Span::styled(
            "auto-configured on upload",
            theme.muted,
        )));
    }

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
