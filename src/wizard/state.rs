use chrono::Local;

/// Wizard steps in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Step {
    SelectSource,
    AddContent,
    ReviewEdit,
}

impl Step {
    /// 1-based ordinal shown in the step indicator
    pub fn number(&self) -> u8 {
        match self {
            Step::SelectSource => 1,
            Step::AddContent => 2,
            Step::ReviewEdit => 3,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Step::SelectSource => "Select Source",
            Step::AddContent => "Add Content",
            Step::ReviewEdit => "Review & Edit",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Step::SelectSource => "Choose your content source",
            Step::AddContent => "Add your content",
            Step::ReviewEdit => "Customize your lesson",
        }
    }
}

/// Phase of the simulated lesson generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationPhase {
    Idle,
    Generating,
    Done,
}

/// Closed set of content sources offered by the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImportMethod {
    TypeOrPaste,
    WebLink,
    AudioFile,
    Document,
    Spotify,
    Netflix,
    PrimeVideo,
    YouTube,
    Instagram,
    TikTok,
    Scan,
}

impl ImportMethod {
    pub const ALL: [ImportMethod; 11] = [
        ImportMethod::TypeOrPaste,
        ImportMethod::WebLink,
        ImportMethod::AudioFile,
        ImportMethod::Document,
        ImportMethod::Spotify,
        ImportMethod::Netflix,
        ImportMethod::PrimeVideo,
        ImportMethod::YouTube,
        ImportMethod::Instagram,
        ImportMethod::TikTok,
        ImportMethod::Scan,
    ];

    /// Stable identifier used by the CLI and persisted nowhere
    pub fn tag(&self) -> &'static str {
        match self {
            ImportMethod::TypeOrPaste => "type-or-paste",
            ImportMethod::WebLink => "web-link",
            ImportMethod::AudioFile => "audio-file",
            ImportMethod::Document => "document",
            ImportMethod::Spotify => "spotify",
            ImportMethod::Netflix => "netflix",
            ImportMethod::PrimeVideo => "prime-video",
            ImportMethod::YouTube => "youtube",
            ImportMethod::Instagram => "instagram",
            ImportMethod::TikTok => "tiktok",
            ImportMethod::Scan => "scan",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|m| m.tag() == tag)
    }

    /// Display name as shown on the source picker cards
    pub fn label(&self) -> &'static str {
        match self {
            ImportMethod::TypeOrPaste => "Type or Paste",
            ImportMethod::WebLink => "Web Links",
            ImportMethod::AudioFile => "Audio Files",
            ImportMethod::Document => "Files & E-books",
            ImportMethod::Spotify => "Spotify",
            ImportMethod::Netflix => "Netflix",
            ImportMethod::PrimeVideo => "Prime Video",
            ImportMethod::YouTube => "YouTube",
            ImportMethod::Instagram => "Instagram",
            ImportMethod::TikTok => "Tik Tok",
            ImportMethod::Scan => "Scan",
        }
    }
}

/// Kind of simulated upload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Audio,
    Document,
}

impl FileKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileKind::Audio => "audio",
            FileKind::Document => "document",
        }
    }

    /// Placeholder file name used by the simulated picker
    pub fn example_name(&self) -> &'static str {
        match self {
            FileKind::Audio => "audio-example.mp3",
            FileKind::Document => "document-example.pdf",
        }
    }

    pub fn example_size_label(&self) -> &'static str {
        match self {
            FileKind::Audio => "15.2 MB",
            FileKind::Document => "2.4 MB",
        }
    }

    /// Constraint text shown under the drop zone
    pub fn upload_hint(&self) -> &'static str {
        match self {
            FileKind::Audio => "Audio files must be less than 200MB. Supported: .mp3, .m4a, .wav",
            FileKind::Document => "Documents must be less than 50MB. Supported: .pdf, .epub, .txt",
        }
    }
}

/// Cosmetic record of the one simulated upload; replaced wholesale on every
/// upload or replace, cleared on delete. No history is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub name: String,
    pub kind: FileKind,
    pub size_label: String,
    pub uploaded_at_label: String,
}

impl UploadedFile {
    /// Simulated picker result; always succeeds
    pub fn example(kind: FileKind) -> Self {
        Self {
            name: kind.example_name().to_string(),
            kind,
            size_label: kind.example_size_label().to_string(),
            uploaded_at_label: Local::now().format("%H:%M").to_string(),
        }
    }
}

/// The whole wizard state. Created fresh per session, mutated only through
/// `WizardController` transitions, discarded on teardown or completion.
#[derive(Debug, Clone, PartialEq)]
pub struct WizardState {
    pub step: Step,
    pub selected_method: Option<ImportMethod>,
    pub content_ready: bool,
    pub generation_phase: GenerationPhase,
    pub uploaded_file: Option<UploadedFile>,
}

impl Default for WizardState {
    fn default() -> Self {
        Self {
            step: Step::SelectSource,
            selected_method: None,
            content_ready: false,
            generation_phase: GenerationPhase::Idle,
            uploaded_file: None,
        }
    }
}

impl WizardState {
    pub fn is_generating(&self) -> bool {
        self.generation_phase == GenerationPhase::Generating
    }
}
