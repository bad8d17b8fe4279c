//! Add Content screen: one parameterized form per input kind instead of one
//! component per source.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::cli::tui::import::state::AddContentView;
use crate::cli::tui::import::theme::Theme;
use crate::wizard::flow::{Flow, InputKind};
use crate::wizard::state::{FileKind, ImportMethod, WizardState};

pub struct Context<'a> {
    pub method: ImportMethod,
    pub state: &'a WizardState,
    pub view: &'a AddContentView,
    pub extension_installed: bool,
}

pub fn render(frame: &mut Frame, ctx: &Context, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Step indicator
            Constraint::Length(2), // Title
            Constraint::Min(0),    // Form
            Constraint::Length(1), // Help bar
        ])
        .split(frame.area());

    super::step_indicator::render(frame, chunks[0], ctx.state, theme);
    render_title(frame, chunks[1], ctx, theme);

    match ctx.method.config().input {
        InputKind::Text => render_text_form(frame, chunks[2], ctx, theme),
        InputKind::Url | InputKind::SpotifyUrl => render_url_form(frame, chunks[2], ctx, theme),
        InputKind::File(kind) => render_file_form(frame, chunks[2], ctx, kind, theme),
        InputKind::None => render_guide(frame, chunks[2], ctx, theme),
    }

    render_help(frame, chunks[3], ctx, theme);
}

fn render_title(frame: &mut Frame, area: Rect, ctx: &Context, theme: &Theme) {
    let title = match ctx.method.config().input {
        InputKind::Text => "Type or paste any text".to_string(),
        InputKind::Url | InputKind::SpotifyUrl => format!("Import from {}", ctx.method.label()),
        InputKind::File(FileKind::Audio) => "Upload an Audio File".to_string(),
        InputKind::File(FileKind::Document) => "Upload a Document".to_string(),
        InputKind::None => format!("Import from {}", ctx.method.label()),
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(title, theme.highlight)))
            .alignment(Alignment::Center),
        area,
    );
}

fn render_text_form(frame: &mut Frame, area: Rect, ctx: &Context, theme: &Theme) {
    let chunks = form_chunks(area);
    let block = Block::default().borders(Borders::ALL).title("Input text ...");
    frame.render_widget(Paragraph::new(ctx.view.input.value()).block(block), chunks[0]);
    render_readiness(frame, chunks[1], ctx, theme);
}

fn render_url_form(frame: &mut Frame, area: Rect, ctx: &Context, theme: &Theme) {
    let chunks = form_chunks(area);
    let border_style = if ctx.view.error.is_some() {
        theme.error
    } else {
        Default::default()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title("Enter a URL ...");
    frame.render_widget(Paragraph::new(ctx.view.input.value()).block(block), chunks[0]);

    if let Some(error) = &ctx.view.error {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(error.to_string(), theme.error))),
            chunks[1],
        );
    } else {
        render_readiness(frame, chunks[1], ctx, theme);
    }
}

fn render_file_form(frame: &mut Frame, area: Rect, ctx: &Context, kind: FileKind, theme: &Theme) {
    let chunks = form_chunks(area);
    match &ctx.state.uploaded_file {
        Some(file) => {
            let lines = vec![
                Line::from(Span::styled(file.name.clone(), theme.success)),
                Line::from(Span::styled(
                    format!("{} • Uploaded at {}", file.size_label, file.uploaded_at_label),
                    theme.muted,
                )),
            ];
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(theme.success)
                .title("Uploaded");
            frame.render_widget(Paragraph::new(lines).block(block), chunks[0]);
        }
        None => {
            let lines = vec![
                Line::from("Press [u] to select a file"),
                Line::from(Span::styled(kind.upload_hint(), theme.muted)),
            ];
            let block = Block::default().borders(Borders::ALL).title("Drop zone");
            frame.render_widget(Paragraph::new(lines).block(block), chunks[0]);
        }
    }
    render_readiness(frame, chunks[1], ctx, theme);
}

fn render_guide(frame: &mut Frame, area: Rect, ctx: &Context, theme: &Theme) {
    let config = ctx.method.config();
    let mut lines = Vec::new();

    if ctx.method == ImportMethod::Scan {
        lines.push(Line::from(
            "Use scan on our mobile app to point, shoot & transform",
        ));
        lines.push(Line::from("text around you into lesson content."));
    } else {
        if config.requires_extension {
            if ctx.extension_installed {
                lines.push(Line::from(vec![
                    Span::styled("✓ ", theme.success),
                    Span::raw("Extension installed."),
                ]));
            } else {
                lines.push(Line::from("1. Install the companion extension  [i]"));
            }
        }
        if config.destination.is_some() {
            lines.push(Line::from(format!(
                "2. Continue to browse on {}  [o]",
                ctx.method.label()
            )));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "The companion extension is required for this import method.",
            theme.muted,
        )));
    }

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        centered(area),
    );
}

fn render_readiness(frame: &mut Frame, area: Rect, ctx: &Context, theme: &Theme) {
    if !ctx.state.content_ready {
        return;
    }
    let action = match ctx.method.config().flow {
        Flow::EditThenGenerate => "[Enter] Review & Save",
        Flow::QuickGenerate => "[Enter] Generate Lesson",
        Flow::Guide => return,
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(action, theme.success))),
        area,
    );
}

fn render_help(frame: &mut Frame, area: Rect, ctx: &Context, theme: &Theme) {
    let help = match ctx.method.config().input {
        InputKind::File(_) => " u upload   r replace   d delete   Enter continue   Esc back",
        InputKind::None => " i install extension   o open platform   Esc back",
        _ => " type to edit   Ctrl+V paste   Enter continue   Esc back",
    };
    frame.render_widget(Paragraph::new(Line::from(Span::styled(help, theme.muted))), area);
}

fn form_chunks(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Input / upload card
            Constraint::Length(2), // Error or call to action
            Constraint::Min(0),
        ])
        .split(area)
}

fn centered(area: Rect) -> Rect {
    let vertical_padding = area.height.saturating_sub(8) / 2;
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(vertical_padding),
            Constraint::Min(0),
        ])
        .split(area)[1]
}
