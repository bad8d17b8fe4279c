//! Input validation, per method. Validation is local and recoverable: a
//! rejection is surfaced inline next to the input and withholds content
//! readiness, it never propagates as a failure.

use serde::Serialize;
use thiserror::Error;
use url::Url;

use crate::wizard::flow::InputKind;
use crate::wizard::state::ImportMethod;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please type or paste some text.")]
    EmptyText,

    #[error("Invalid URL: Please enter a complete link.")]
    MalformedUrl,

    #[error("Invalid URL: Please link only individual tracks and podcast episodes.")]
    SpotifyShowUrl,
}

/// Serializable validation report for the CLI surface
#[derive(Debug, Serialize)]
pub struct Validation {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl Validation {
    pub fn from_result(result: &Result<(), ValidationError>) -> Self {
        match result {
            Ok(()) => Self {
                valid: true,
                reason: None,
            },
            Err(err) => Self {
                valid: false,
                reason: Some(err.to_string()),
            },
        }
    }
}

/// Text is valid iff it is non-empty after trimming
pub fn validate_text(raw: &str) -> Result<(), ValidationError> {
    if raw.trim().is_empty() {
        Err(ValidationError::EmptyText)
    } else {
        Ok(())
    }
}

/// A generic link is valid iff it parses as an absolute URI
pub fn validate_url(raw: &str) -> Result<(), ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyText);
    }
    Url::parse(trimmed).map_err(|_| ValidationError::MalformedUrl)?;
    Ok(())
}

/// Spotify accepts individual track and episode links only; any URL that
/// mentions a show is rejected with the product-specific message.
pub fn validate_spotify_url(raw: &str) -> Result<(), ValidationError> {
    validate_url(raw)?;
    if raw.trim().to_lowercase().contains("show") {
        return Err(ValidationError::SpotifyShowUrl);
    }
    Ok(())
}

/// Dispatch on the method's input kind. File inputs have no validation:
/// the simulated upload always succeeds.
pub fn validate_for_method(method: ImportMethod, raw: &str) -> Result<(), ValidationError> {
    match method.config().input {
        InputKind::Text => validate_text(raw),
        InputKind::Url => validate_url(raw),
        InputKind::SpotifyUrl => validate_spotify_url(raw),
        InputKind::File(_) | InputKind::None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_requires_non_whitespace() {
        assert_eq!(validate_text("   "), Err(ValidationError::EmptyText));
        assert_eq!(validate_text("  bonjour  "), Ok(()));
    }

    #[test]
    fn relative_urls_are_rejected() {
        assert_eq!(
            validate_url("open.spotify.com/track/abc123"),
            Err(ValidationError::MalformedUrl)
        );
        assert_eq!(validate_url("https://open.spotify.com/track/abc123"), Ok(()));
    }

    #[test]
    fn spotify_show_check_is_case_insensitive() {
        assert_eq!(
            validate_spotify_url("https://open.spotify.com/SHOW/abc123"),
            Err(ValidationError::SpotifyShowUrl)
        );
    }
}
