use std::sync::Arc;
use std::time::Duration;

use ratatui::{
    crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    DefaultTerminal, Frame,
};
use tokio::sync::mpsc;
use tokio::time;
use tui_input::backend::crossterm::EventHandler;

use crate::wizard::controller::{BackOutcome, WizardController};
use crate::wizard::external::{
    read_clipboard, ClipboardReader, ExtensionProbe, ExternalNavigator, FixedProbe, LogNavigator,
    UnavailableClipboard,
};
use crate::wizard::flow::{Flow, InputKind, WEBSTORE_URL};
use crate::wizard::state::{FileKind, ImportMethod, Step};
use crate::wizard::timer::{GenerationTimer, GenerationToken};
use crate::wizard::validate::ValidationError;
use crate::Result;

use super::events::AppEvent;
use super::screens;
use super::state::{AddContentView, GeneratingView, SelectSourceView};
use super::theme::Theme;

/// Main application struct
pub struct App {
    /// Wizard semantics; the app never touches `WizardState` directly
    controller: WizardController,
    /// In-flight generation delay, cancelled on teardown
    timer: GenerationTimer,
    navigator: Box<dyn ExternalNavigator>,
    clipboard: Arc<dyn ClipboardReader>,
    /// Whether the companion extension is treated as installed
    extension_installed: bool,
    theme: Theme,
    should_quit: bool,
    /// Event sender for background tasks
    event_tx: Option<mpsc::UnboundedSender<AppEvent>>,
    select_view: SelectSourceView,
    content_view: AddContentView,
    generating_view: GeneratingView,
}

impl App {
    /// Create a new app instance, optionally preselecting a source.
    pub fn new(method: Option<ImportMethod>, extension_installed: bool) -> Self {
        let controller = match method {
            Some(method) => WizardController::with_method(method),
            None => WizardController::new(),
        };
        let probe = FixedProbe(extension_installed);
        Self {
            controller,
            timer: GenerationTimer::new(),
            navigator: Box::new(LogNavigator),
            clipboard: Arc::new(UnavailableClipboard),
            extension_installed: probe.is_installed(),
            theme: Theme::default(),
            should_quit: false,
            event_tx: None,
            select_view: SelectSourceView::default(),
            content_view: AddContentView::default(),
            generating_view: GeneratingView::default(),
        }
    }

    /// Run the application
    pub async fn run(mut self) -> Result<()> {
        let mut terminal = ratatui::init();
        terminal.clear()?;

        let (event_tx, mut event_rx) = mpsc::unbounded_channel();
        self.event_tx = Some(event_tx.clone());

        // Spawn input handler
        let input_tx = event_tx.clone();
        tokio::spawn(async move {
            loop {
                if let Ok(event) = event::read() {
                    match event {
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            let _ = input_tx.send(AppEvent::Key(key));
                        }
                        Event::Resize(width, height) => {
                            let _ = input_tx.send(AppEvent::Resize(width, height));
                        }
                        _ => {}
                    }
                }
            }
        });

        let result = self.main_loop(&mut terminal, &mut event_rx).await;

        // Cleanup; dropping `self.timer` aborts any in-flight generation
        ratatui::restore();
        result
    }

    /// Main event loop
    async fn main_loop(
        &mut self,
        terminal: &mut DefaultTerminal,
        event_rx: &mut mpsc::UnboundedReceiver<AppEvent>,
    ) -> Result<()> {
        loop {
            terminal.draw(|frame| self.render(frame))?;

            // Handle events with a timeout so the spinner keeps moving
            match time::timeout(Duration::from_millis(50), event_rx.recv()).await {
                Ok(Some(event)) => self.handle_event(event),
                Ok(None) => break, // Channel closed
                Err(_) => self.handle_event(AppEvent::Tick),
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Render the screen for the current wizard state
    fn render(&mut self, frame: &mut Frame) {
        let state = self.controller.state();
        if state.is_generating() {
            screens::generating::render(frame, &self.generating_view, &self.theme);
            return;
        }
        match (state.step, state.selected_method) {
            (Step::AddContent, Some(method)) => {
                let ctx = screens::add_content::Context {
                    method,
                    state,
                    view: &self.content_view,
                    extension_installed: self.extension_installed,
                };
                screens::add_content::render(frame, &ctx, &self.theme);
            }
            (Step::ReviewEdit, Some(method)) => {
                screens::review::render(frame, method, state, &self.theme);
            }
            _ => {
                screens::select_source::render(frame, &self.select_view, state, &self.theme);
            }
        }
    }

    /// Handle an event
    fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::GenerationFinished(token) => self.handle_generation_finished(token),
            AppEvent::ClipboardText(text) => self.handle_clipboard_text(text),
            AppEvent::Resize(_, _) => {}
            AppEvent::Tick => {
                if self.controller.state().is_generating() {
                    self.generating_view.ticks += 1;
                }
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // The loading overlay suppresses the input screen entirely
        if self.controller.state().is_generating() {
            return;
        }

        match self.controller.state().step {
            Step::SelectSource => self.handle_select_source_key(key),
            Step::AddContent => self.handle_add_content_key(key),
            Step::ReviewEdit => self.handle_review_key(key),
        }
    }

    fn handle_select_source_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if self.select_view.selected_index > 0 {
                    self.select_view.selected_index -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let last = screens::select_source::method_count() - 1;
                if self.select_view.selected_index < last {
                    self.select_view.selected_index += 1;
                }
            }
            KeyCode::Enter => {
                let method = screens::select_source::method_at(self.select_view.selected_index);
                self.controller.select_method(method);
                self.content_view.reset();
            }
            _ => {}
        }
    }

    fn handle_add_content_key(&mut self, key: KeyEvent) {
        let Some(method) = self.controller.state().selected_method else {
            return;
        };
        let config = method.config();

        if key.code == KeyCode::Esc {
            self.go_back();
            return;
        }

        match config.input {
            InputKind::Text | InputKind::Url | InputKind::SpotifyUrl => match key.code {
                KeyCode::Enter => self.advance(config.flow),
                KeyCode::Char('v') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.spawn_clipboard_read();
                }
                _ => {
                    self.content_view.input.handle_event(&Event::Key(key));
                    self.revalidate();
                }
            },
            InputKind::File(kind) => self.handle_file_key(key, kind, config.flow),
            InputKind::None => self.handle_guide_key(key, method),
        }
    }

    fn handle_file_key(&mut self, key: KeyEvent, kind: FileKind, flow: Flow) {
        let has_file = self.controller.state().uploaded_file.is_some();
        match key.code {
            KeyCode::Char('u') if !has_file => self.controller.upload_file(kind),
            KeyCode::Char('r') if has_file => self.controller.replace_file(kind),
            KeyCode::Char('d') if has_file => self.controller.delete_file(),
            KeyCode::Enter => self.advance(flow),
            _ => {}
        }
    }

    fn handle_guide_key(&mut self, key: KeyEvent, method: ImportMethod) {
        let config = method.config();
        match key.code {
            KeyCode::Char('i') if config.requires_extension && !self.extension_installed => {
                self.navigator.open(WEBSTORE_URL);
                self.extension_installed = true;
            }
            KeyCode::Char('o') => {
                if let Some(destination) = config.destination {
                    self.navigator.open(destination);
                }
            }
            _ => {}
        }
    }

    fn handle_review_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.go_back(),
            KeyCode::Enter | KeyCode::Char('g') => self.start_generation(),
            _ => {}
        }
    }

    fn handle_generation_finished(&mut self, token: GenerationToken) {
        if self.controller.finish_generation(token) {
            // Fresh wizard, fresh views
            self.select_view = SelectSourceView::default();
            self.content_view.reset();
            self.generating_view = GeneratingView::default();
        }
    }

    fn handle_clipboard_text(&mut self, text: String) {
        for ch in text.chars() {
            self.content_view.input.handle_event(&Event::Key(KeyEvent::new(
                KeyCode::Char(ch),
                KeyModifiers::NONE,
            )));
        }
        self.revalidate();
    }

    /// Move forward from Add Content per the method's flow
    fn advance(&mut self, flow: Flow) {
        match flow {
            Flow::EditThenGenerate => {
                if self.controller.proceed_to_edit() {
                    self.content_view.error = None;
                }
            }
            Flow::QuickGenerate => self.start_generation(),
            Flow::Guide => {}
        }
    }

    fn start_generation(&mut self) {
        let Some(token) = self.controller.request_generation() else {
            return;
        };
        let Some(event_tx) = self.event_tx.clone() else {
            return;
        };
        // The timer reports on its own channel; forward into the app loop.
        // Aborting the timer drops the sender and ends the forwarder.
        let (done_tx, mut done_rx) = mpsc::unbounded_channel();
        self.timer.start(token, done_tx);
        tokio::spawn(async move {
            if let Some(token) = done_rx.recv().await {
                let _ = event_tx.send(AppEvent::GenerationFinished(token));
            }
        });
    }

    /// Best-effort clipboard read; a failure is logged and nothing happens
    fn spawn_clipboard_read(&self) {
        let Some(event_tx) = self.event_tx.clone() else {
            return;
        };
        let clipboard = Arc::clone(&self.clipboard);
        tokio::spawn(async move {
            if let Some(text) = read_clipboard(clipboard.as_ref()).await {
                let _ = event_tx.send(AppEvent::ClipboardText(text));
            }
        });
    }

    fn go_back(&mut self) {
        match self.controller.go_back() {
            BackOutcome::ExitWizard => self.should_quit = true,
            BackOutcome::MovedBack => {
                self.content_view.reset();
            }
            BackOutcome::Stayed => {}
        }
    }

    /// Re-run validation for the current buffer and update the inline error.
    /// An empty buffer is not an error, it is just not ready yet.
    fn revalidate(&mut self) {
        let value = self.content_view.input.value().to_string();
        self.content_view.error = match self.controller.submit_input(&value) {
            Ok(()) | Err(ValidationError::EmptyText) => None,
            Err(err) => Some(err),
        };
    }
}
