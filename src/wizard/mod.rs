//! Import wizard core: the step state machine, the per-method flow table,
//! input validation, and the simulated generation timer. Everything here is
//! UI-agnostic; the TUI in `crate::cli::tui` is one front-end over it.

pub mod controller;
pub mod external;
pub mod flow;
pub mod state;
pub mod timer;
pub mod validate;

pub use controller::{BackOutcome, WizardController};
pub use state::{FileKind, GenerationPhase, ImportMethod, Step, UploadedFile, WizardState};
pub use timer::{GenerationTimer, GenerationToken, GENERATION_DELAY};
