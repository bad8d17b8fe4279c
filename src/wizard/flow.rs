//! Per-method flow configuration. Some sources generate straight from the
//! Add Content step, others route through Review & Edit first, and the
//! extension-driven platforms only point the user elsewhere. Modeling this
//! as one table keeps the screen code free of per-platform branching.

use crate::wizard::state::{FileKind, ImportMethod};

/// Chrome Web Store listing for the companion extension
pub const WEBSTORE_URL: &str = "https://chrome.google.com/webstore";

/// How a method reaches lesson generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Generate directly from Add Content once content is ready
    QuickGenerate,
    /// Route through the Review & Edit step before generating
    EditThenGenerate,
    /// No inline input; the screen only guides the user to an extension,
    /// an external platform, or the mobile app
    Guide,
}

/// What the Add Content screen collects for a method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Url,
    /// URL with the Spotify-specific "no show links" rule
    SpotifyUrl,
    File(FileKind),
    None,
}

/// Static configuration for one import method
#[derive(Debug, Clone, Copy)]
pub struct MethodConfig {
    pub flow: Flow,
    pub input: InputKind,
    pub requires_extension: bool,
    /// External platform home, opened fire-and-forget in a new context
    pub destination: Option<&'static str>,
}

impl ImportMethod {
    pub fn config(&self) -> MethodConfig {
        match self {
            ImportMethod::TypeOrPaste => MethodConfig {
                flow: Flow::QuickGenerate,
                input: InputKind::Text,
                requires_extension: false,
                destination: None,
            },
            ImportMethod::WebLink => MethodConfig {
                flow: Flow::EditThenGenerate,
                input: InputKind::Url,
                requires_extension: false,
                destination: None,
            },
            ImportMethod::AudioFile => MethodConfig {
                flow: Flow::EditThenGenerate,
                input: InputKind::File(FileKind::Audio),
                requires_extension: false,
                destination: None,
            },
            ImportMethod::Document => MethodConfig {
                flow: Flow::EditThenGenerate,
                input: InputKind::File(FileKind::Document),
                requires_extension: false,
                destination: None,
            },
            ImportMethod::Spotify => MethodConfig {
                flow: Flow::QuickGenerate,
                input: InputKind::SpotifyUrl,
                requires_extension: true,
                destination: Some("https://spotify.com"),
            },
            ImportMethod::Netflix => MethodConfig {
                flow: Flow::Guide,
                input: InputKind::None,
                requires_extension: true,
                destination: Some("https://netflix.com"),
            },
            ImportMethod::PrimeVideo => MethodConfig {
                flow: Flow::Guide,
                input: InputKind::None,
                requires_extension: true,
                destination: Some("https://primevideo.com"),
            },
            ImportMethod::YouTube => MethodConfig {
                flow: Flow::QuickGenerate,
                input: InputKind::Url,
                requires_extension: true,
                destination: Some("https://youtube.com"),
            },
            ImportMethod::Instagram => MethodConfig {
                flow: Flow::QuickGenerate,
                input: InputKind::Url,
                requires_extension: true,
                destination: Some("https://instagram.com"),
            },
            ImportMethod::TikTok => MethodConfig {
                flow: Flow::QuickGenerate,
                input: InputKind::Url,
                requires_extension: true,
                destination: Some("https://tiktok.com"),
            },
            ImportMethod::Scan => MethodConfig {
                flow: Flow::Guide,
                input: InputKind::None,
                requires_extension: false,
                destination: None,
            },
        }
    }
}
