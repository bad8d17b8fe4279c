//! Collaborator seams for side effects the wizard triggers but never awaits:
//! opening external sites, best-effort clipboard reads, and detection of the
//! companion browser extension.

use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, warn};

/// Fire-and-forget navigation to an external destination. The wizard never
/// observes the result.
pub trait ExternalNavigator: Send + Sync {
    fn open(&self, url: &str);
}

/// Prototype navigator: records where a real client would go.
#[derive(Debug, Default)]
pub struct LogNavigator;

impl ExternalNavigator for LogNavigator {
    fn open(&self, url: &str) {
        info!(url, "opening external destination");
    }
}

#[derive(Debug, Default)]
pub struct NoopNavigator;

impl ExternalNavigator for NoopNavigator {
    fn open(&self, _url: &str) {}
}

/// Clipboard read denied or unavailable. Logged, never surfaced to the
/// state machine.
#[derive(Error, Debug)]
#[error("clipboard unavailable: {0}")]
pub struct ClipboardError(pub String);

#[async_trait]
pub trait ClipboardReader: Send + Sync {
    async fn read_text(&self) -> Result<String, ClipboardError>;
}

/// Prototype clipboard for terminal builds without clipboard access.
#[derive(Debug, Default)]
pub struct UnavailableClipboard;

#[async_trait]
impl ClipboardReader for UnavailableClipboard {
    async fn read_text(&self) -> Result<String, ClipboardError> {
        Err(ClipboardError("not supported in this build".to_string()))
    }
}

/// Clipboard with fixed contents, for tests and demos.
#[derive(Debug)]
pub struct StaticClipboard(pub String);

#[async_trait]
impl ClipboardReader for StaticClipboard {
    async fn read_text(&self) -> Result<String, ClipboardError> {
        Ok(self.0.clone())
    }
}

/// Best-effort clipboard read; failure is logged and the caller gets `None`.
pub async fn read_clipboard(reader: &dyn ClipboardReader) -> Option<String> {
    match reader.read_text().await {
        Ok(text) => Some(text),
        Err(err) => {
            warn!(%err, "clipboard read failed");
            None
        }
    }
}

/// Detects whether the companion browser extension is installed.
pub trait ExtensionProbe: Send + Sync {
    fn is_installed(&self) -> bool;
}

/// Probe with a fixed answer, wired from configuration.
#[derive(Debug, Clone, Copy)]
pub struct FixedProbe(pub bool);

impl ExtensionProbe for FixedProbe {
    fn is_installed(&self) -> bool {
        self.0
    }
}
