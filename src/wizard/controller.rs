//! The wizard state machine. `WizardController` is the sole owner of
//! `WizardState`; every mutation goes through a transition method here, so
//! the reset rules live in exactly one place.

use tracing::debug;

use crate::wizard::flow::{Flow, InputKind};
use crate::wizard::state::{
    FileKind, GenerationPhase, ImportMethod, Step, UploadedFile, WizardState,
};
use crate::wizard::timer::GenerationToken;
use crate::wizard::validate::{self, ValidationError};

/// Result of a back navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackOutcome {
    /// Nothing happened (a generation is in flight)
    Stayed,
    MovedBack,
    /// Already at the first step; the host decides what leaving means
    ExitWizard,
}

#[derive(Debug, Default)]
pub struct WizardController {
    state: WizardState,
    /// Monotonic counter; each accepted generation gets the next value
    generation_seq: u64,
    in_flight: Option<u64>,
}

impl WizardController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session directly at Add Content with a preselected source.
    pub fn with_method(method: ImportMethod) -> Self {
        let mut controller = Self::new();
        controller.select_method(method);
        controller
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    /// Pick a content source. Only meaningful at Select Source; the tag is
    /// always one of the closed set offered by the UI, so misuse is a
    /// logged no-op rather than an error.
    pub fn select_method(&mut self, method: ImportMethod) {
        if self.state.step != Step::SelectSource {
            debug!(method = method.tag(), "select_method ignored outside Select Source");
            return;
        }
        self.state.selected_method = Some(method);
        self.state.step = Step::AddContent;
        self.state.content_ready = false;
        self.state.uploaded_file = None;
    }

    /// Called by the active input screen on every change. Idempotent.
    /// Content can never be ready while no source is selected.
    pub fn report_content_ready(&mut self, ready: bool) {
        if self.state.selected_method.is_none() {
            return;
        }
        self.state.content_ready = ready;
    }

    /// Validate raw input for the selected method and update readiness from
    /// the outcome. The rejection is returned so the view can surface it
    /// inline; it is not an error of the controller.
    pub fn submit_input(&mut self, raw: &str) -> Result<(), ValidationError> {
        let Some(method) = self.state.selected_method else {
            return Ok(());
        };
        match method.config().input {
            InputKind::File(_) | InputKind::None => Ok(()),
            _ => match validate::validate_for_method(method, raw) {
                Ok(()) => {
                    self.report_content_ready(true);
                    Ok(())
                }
                Err(err) => {
                    self.report_content_ready(false);
                    Err(err)
                }
            },
        }
    }

    /// Advance Add Content -> Review & Edit for methods whose flow routes
    /// through the edit step. Returns whether the step changed.
    pub fn proceed_to_edit(&mut self) -> bool {
        let Some(method) = self.state.selected_method else {
            return false;
        };
        if self.state.step != Step::AddContent
            || !self.state.content_ready
            || self.state.is_generating()
            || method.config().flow != Flow::EditThenGenerate
        {
            return false;
        }
        self.state.step = Step::ReviewEdit;
        true
    }

    /// Begin the simulated generation. Valid only when the readiness gate
    /// holds and no generation is in flight; the caller owns scheduling the
    /// returned token on a `GenerationTimer`. Re-entrant calls are rejected
    /// even though the UI disables the button.
    pub fn request_generation(&mut self) -> Option<GenerationToken> {
        if self.state.generation_phase != GenerationPhase::Idle {
            debug!("re-entrant request_generation ignored");
            return None;
        }
        let gated = match self.state.step {
            Step::SelectSource => false,
            Step::AddContent => self.state.content_ready,
            // Reaching Review & Edit already required ready content
            Step::ReviewEdit => true,
        };
        if !gated {
            debug!("request_generation ignored: content not ready");
            return None;
        }
        self.generation_seq += 1;
        self.in_flight = Some(self.generation_seq);
        self.state.generation_phase = GenerationPhase::Generating;
        debug!(seq = self.generation_seq, "generation started");
        Some(GenerationToken::new(self.generation_seq))
    }

    /// Complete the generation the token belongs to. Stale tokens (from a
    /// superseded or torn-down session) are ignored. A finished generation
    /// hands the user a fresh wizard: the whole state resets to the initial
    /// Select Source step.
    pub fn finish_generation(&mut self, token: GenerationToken) -> bool {
        if self.state.generation_phase != GenerationPhase::Generating
            || self.in_flight != Some(token.seq())
        {
            debug!(seq = token.seq(), "stale generation completion ignored");
            return false;
        }
        self.state.generation_phase = GenerationPhase::Done;
        debug!(seq = token.seq(), "generation finished, resetting wizard");
        self.in_flight = None;
        self.state = WizardState::default();
        true
    }

    /// Pop to the previous step. Leaving Review & Edit keeps the selected
    /// method but clears content state; leaving Add Content clears the
    /// method too.
    pub fn go_back(&mut self) -> BackOutcome {
        if self.state.is_generating() {
            return BackOutcome::Stayed;
        }
        match self.state.step {
            Step::ReviewEdit => {
                self.state.step = Step::AddContent;
                self.state.content_ready = false;
                self.state.uploaded_file = None;
                BackOutcome::MovedBack
            }
            Step::AddContent => {
                self.state.step = Step::SelectSource;
                self.state.selected_method = None;
                self.state.content_ready = false;
                self.state.uploaded_file = None;
                BackOutcome::MovedBack
            }
            Step::SelectSource => BackOutcome::ExitWizard,
        }
    }

    /// Simulated upload; always succeeds and replaces any previous file.
    pub fn upload_file(&mut self, kind: FileKind) {
        if self.state.selected_method.is_none() || self.state.is_generating() {
            return;
        }
        self.state.uploaded_file = Some(UploadedFile::example(kind));
        self.report_content_ready(true);
    }

    pub fn replace_file(&mut self, kind: FileKind) {
        self.upload_file(kind);
    }

    pub fn delete_file(&mut self) {
        if self.state.is_generating() {
            return;
        }
        self.state.uploaded_file = None;
        self.report_content_ready(false);
    }
}
