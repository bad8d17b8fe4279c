use lesson_import::wizard::state::ImportMethod;
use lesson_import::wizard::validate::{validate_for_method, Validation, ValidationError};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn spotify_track_and_episode_links_are_accepted() {
    for url in [
        "https://open.spotify.com/track/4uLU6hMCjMI75M1A2tKUQC",
        "https://open.spotify.com/episode/512ojhOuo1ktJprKbVcKyQ",
    ] {
        assert_eq!(validate_for_method(ImportMethod::Spotify, url), Ok(()));
    }
}

#[test]
fn spotify_show_links_get_the_specific_message() {
    let result = validate_for_method(
        ImportMethod::Spotify,
        "https://open.spotify.com/show/4rOoJ6Egrf8K2IrywzwOMk",
    );
    assert_eq!(result, Err(ValidationError::SpotifyShowUrl));
    assert_eq!(
        result.unwrap_err().to_string(),
        "Invalid URL: Please link only individual tracks and podcast episodes."
    );
}

#[test]
fn non_urls_get_the_generic_message() {
    for method in [ImportMethod::Spotify, ImportMethod::WebLink, ImportMethod::YouTube] {
        let result = validate_for_method(method, "not a link at all");
        assert_eq!(result, Err(ValidationError::MalformedUrl), "{}", method.tag());
        assert_eq!(
            result.unwrap_err().to_string(),
            "Invalid URL: Please enter a complete link."
        );
    }
}

#[test]
fn text_input_only_needs_non_whitespace_content() {
    assert_eq!(
        validate_for_method(ImportMethod::TypeOrPaste, "\n\t "),
        Err(ValidationError::EmptyText)
    );
    assert_eq!(validate_for_method(ImportMethod::TypeOrPaste, "hola"), Ok(()));
}

#[test]
fn file_and_guide_methods_have_no_input_validation() {
    for method in [
        ImportMethod::AudioFile,
        ImportMethod::Document,
        ImportMethod::Netflix,
        ImportMethod::PrimeVideo,
        ImportMethod::Scan,
    ] {
        assert_eq!(
            validate_for_method(method, "anything, even garbage"),
            Ok(()),
            "{}",
            method.tag()
        );
    }
}

#[test]
fn json_report_omits_the_reason_when_valid() {
    let ok = Validation::from_result(&Ok(()));
    assert_eq!(serde_json::to_value(&ok).unwrap(), json!({ "valid": true }));

    let rejected = Validation::from_result(&Err(ValidationError::MalformedUrl));
    assert_eq!(
        serde_json::to_value(&rejected).unwrap(),
        json!({
            "valid": false,
            "reason": "Invalid URL: Please enter a complete link.",
        })
    );
}
