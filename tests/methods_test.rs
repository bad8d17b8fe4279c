use lesson_import::wizard::flow::{Flow, InputKind};
use lesson_import::wizard::state::{FileKind, ImportMethod};
use pretty_assertions::assert_eq;

#[test]
fn the_source_set_is_closed_and_tags_round_trip() {
    assert_eq!(ImportMethod::ALL.len(), 11);
    for method in ImportMethod::ALL {
        assert_eq!(ImportMethod::from_tag(method.tag()), Some(method));
    }
    assert_eq!(ImportMethod::from_tag("carrier-pigeon"), None);
    assert_eq!(ImportMethod::from_tag("Spotify"), None);
}

#[test]
fn edit_flow_covers_exactly_the_sources_with_an_edit_step() {
    let edit_methods: Vec<_> = ImportMethod::ALL
        .into_iter()
        .filter(|m| m.config().flow == Flow::EditThenGenerate)
        .collect();
    assert_eq!(
        edit_methods,
        vec![
            ImportMethod::WebLink,
            ImportMethod::AudioFile,
            ImportMethod::Document,
        ]
    );
}

#[test]
fn guide_methods_collect_no_inline_input() {
    for method in ImportMethod::ALL {
        let config = method.config();
        if config.flow == Flow::Guide {
            assert_eq!(config.input, InputKind::None, "{}", method.tag());
        } else {
            assert_ne!(config.input, InputKind::None, "{}", method.tag());
        }
    }
}

#[test]
fn extension_platforms_have_a_destination() {
    for method in ImportMethod::ALL {
        let config = method.config();
        if config.requires_extension {
            assert!(config.destination.is_some(), "{}", method.tag());
        }
    }
    // Scan guides to the mobile app, not a website
    let scan = ImportMethod::Scan.config();
    assert!(!scan.requires_extension);
    assert_eq!(scan.destination, None);
}

#[test]
fn file_methods_use_the_matching_upload_kind() {
    assert_eq!(
        ImportMethod::AudioFile.config().input,
        InputKind::File(FileKind::Audio)
    );
    assert_eq!(
        ImportMethod::Document.config().input,
        InputKind::File(FileKind::Document)
    );
    assert_eq!(FileKind::Audio.example_name(), "audio-example.mp3");
    assert_eq!(FileKind::Document.example_name(), "document-example.pdf");
}
