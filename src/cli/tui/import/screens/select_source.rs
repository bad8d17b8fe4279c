//! Source picker: three columns of content sources

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::cli::tui::import::state::SelectSourceView;
use crate::cli::tui::import::theme::Theme;
use crate::wizard::state::{ImportMethod, WizardState};

/// Display groups, mirroring the product's source picker layout
const GROUPS: [(&str, &str, &[ImportMethod]); 3] = [
    (
        "Do it Yourself",
        "Build a lesson with just a link, file, or copy & pasted text.",
        &[
            ImportMethod::TypeOrPaste,
            ImportMethod::WebLink,
            ImportMethod::AudioFile,
            ImportMethod::Document,
            ImportMethod::Scan,
        ],
    ),
    (
        "Streaming Platforms",
        "Turn your favorite song, podcast, video or TV series into a lesson.",
        &[
            ImportMethod::Spotify,
            ImportMethod::Netflix,
            ImportMethod::PrimeVideo,
            ImportMethod::YouTube,
        ],
    ),
    (
        "Socials",
        "Create lessons from Reels and Tik Toks to get more out of scrolling.",
        &[ImportMethod::Instagram, ImportMethod::TikTok],
    ),
];

pub fn method_count() -> usize {
    GROUPS.iter().map(|(_, _, methods)| methods.len()).sum()
}

/// Method under the flattened cursor index
pub fn method_at(index: usize) -> ImportMethod {
    let mut remaining = index;
    for (_, _, methods) in GROUPS {
        if remaining < methods.len() {
            return methods[remaining];
        }
        remaining -= methods.len();
    }
    // Cursor is clamped by the key handler; fall back to the first entry
    ImportMethod::TypeOrPaste
}

pub fn render(frame: &mut Frame, view: &SelectSourceView, state: &WizardState, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Step indicator
            Constraint::Length(3), // Heading
            Constraint::Min(0),    // Source columns
            Constraint::Length(1), // Help bar
        ])
        .split(frame.area());

    super::step_indicator::render(frame, chunks[0], state, theme);
    render_heading(frame, chunks[1], theme);
    render_groups(frame, chunks[2], view, theme);
    render_help(frame, chunks[3], theme);
}

fn render_heading(frame: &mut Frame, area: Rect, theme: &Theme) {
    let lines = vec![
        Line::from(vec![
            Span::raw("Real progress starts with "),
            Span::styled("real content.", theme.highlight),
        ]),
        Line::from(Span::styled(
            "Create your own lessons from stuff you love.",
            theme.muted,
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_groups(frame: &mut Frame, area: Rect, view: &SelectSourceView, theme: &Theme) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let selected = method_at(view.selected_index);
    for (column, (title, blurb, methods)) in columns.iter().zip(GROUPS) {
        let mut lines = vec![Line::from(Span::styled(blurb, theme.muted)), Line::from("")];
        for method in methods {
            let marker = if *method == selected { "▶ " } else { "  " };
            let style = if *method == selected {
                theme.selected
            } else {
                Style::default().fg(theme.method_color(*method))
            };
            lines.push(Line::from(vec![
                Span::raw(marker),
                Span::styled(method.label(), style),
            ]));
        }
        let block = Block::default().borders(Borders::ALL).title(title);
        frame.render_widget(Paragraph::new(lines).block(block), *column);
    }
}

fn render_help(frame: &mut Frame, area: Rect, theme: &Theme) {
    let help = Line::from(Span::styled(
        " ↑/↓ choose source   Enter continue   q quit",
        theme.muted,
    ));
    frame.render_widget(Paragraph::new(help), area);
}
