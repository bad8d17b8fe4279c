use lesson_import::wizard::controller::{BackOutcome, WizardController};
use lesson_import::wizard::state::{FileKind, ImportMethod, Step, WizardState};
use lesson_import::wizard::validate::ValidationError;
use pretty_assertions::assert_eq;

#[test]
fn select_method_advances_to_add_content_for_every_source() {
    for method in ImportMethod::ALL {
        let mut controller = WizardController::new();
        controller.select_method(method);
        let state = controller.state();
        assert_eq!(state.step, Step::AddContent, "method {}", method.tag());
        assert_eq!(state.selected_method, Some(method));
        assert!(!state.content_ready);
        assert_eq!(state.uploaded_file, None);
    }
}

#[test]
fn select_method_is_ignored_outside_select_source() {
    let mut controller = WizardController::with_method(ImportMethod::WebLink);
    controller.select_method(ImportMethod::Spotify);
    assert_eq!(
        controller.state().selected_method,
        Some(ImportMethod::WebLink)
    );
    assert_eq!(controller.state().step, Step::AddContent);
}

#[test]
fn content_cannot_be_ready_without_a_source() {
    let mut controller = WizardController::new();
    controller.report_content_ready(true);
    assert!(!controller.state().content_ready);
}

#[test]
fn submit_input_gates_readiness_on_validation() {
    let mut controller = WizardController::with_method(ImportMethod::TypeOrPaste);
    assert_eq!(controller.submit_input("bonjour"), Ok(()));
    assert!(controller.state().content_ready);
    assert_eq!(controller.submit_input("   "), Err(ValidationError::EmptyText));
    assert!(!controller.state().content_ready);

    let mut controller = WizardController::with_method(ImportMethod::Spotify);
    assert_eq!(
        controller.submit_input("https://open.spotify.com/track/abc123"),
        Ok(())
    );
    assert!(controller.state().content_ready);
    assert_eq!(
        controller.submit_input("https://open.spotify.com/show/abc123"),
        Err(ValidationError::SpotifyShowUrl)
    );
    assert!(!controller.state().content_ready);
}

#[test]
fn go_back_from_add_content_always_clears_the_method() {
    let mut controller = WizardController::with_method(ImportMethod::AudioFile);
    controller.upload_file(FileKind::Audio);
    assert!(controller.state().content_ready);

    assert_eq!(controller.go_back(), BackOutcome::MovedBack);
    let state = controller.state();
    assert_eq!(state.step, Step::SelectSource);
    assert_eq!(state.selected_method, None);
    assert!(!state.content_ready);
    assert_eq!(state.uploaded_file, None);
}

#[test]
fn go_back_from_review_keeps_the_method_but_clears_content() {
    let mut controller = WizardController::with_method(ImportMethod::WebLink);
    controller
        .submit_input("https://example.com/article")
        .expect("valid URL");
    assert!(controller.proceed_to_edit());
    assert_eq!(controller.state().step, Step::ReviewEdit);

    assert_eq!(controller.go_back(), BackOutcome::MovedBack);
    let state = controller.state();
    assert_eq!(state.step, Step::AddContent);
    assert_eq!(state.selected_method, Some(ImportMethod::WebLink));
    assert!(!state.content_ready);
    assert_eq!(state.uploaded_file, None);
}

#[test]
fn go_back_at_select_source_delegates_to_the_host() {
    let mut controller = WizardController::new();
    assert_eq!(controller.go_back(), BackOutcome::ExitWizard);
    assert_eq!(*controller.state(), WizardState::default());
}

#[test]
fn upload_then_delete_restores_initial_content_state() {
    let mut controller = WizardController::with_method(ImportMethod::AudioFile);
    controller.upload_file(FileKind::Audio);
    let file = controller
        .state()
        .uploaded_file
        .clone()
        .expect("file uploaded");
    assert_eq!(file.name, "audio-example.mp3");
    assert!(controller.state().content_ready);

    controller.delete_file();
    assert_eq!(controller.state().uploaded_file, None);
    assert!(!controller.state().content_ready);
}

#[test]
fn new_upload_replaces_the_previous_file_wholesale() {
    let mut controller = WizardController::with_method(ImportMethod::Document);
    controller.upload_file(FileKind::Audio);
    controller.replace_file(FileKind::Document);

    let file = controller
        .state()
        .uploaded_file
        .clone()
        .expect("file uploaded");
    assert_eq!(file.kind, FileKind::Document);
    assert_eq!(file.name, "document-example.pdf");
    assert!(controller.state().content_ready);
}

#[test]
fn proceed_to_edit_requires_ready_content_and_an_edit_flow() {
    // Not ready yet
    let mut controller = WizardController::with_method(ImportMethod::WebLink);
    assert!(!controller.proceed_to_edit());

    // Ready, but the method generates straight from Add Content
    let mut controller = WizardController::with_method(ImportMethod::Spotify);
    controller.report_content_ready(true);
    assert!(!controller.proceed_to_edit());
    assert_eq!(controller.state().step, Step::AddContent);

    // Ready on an edit-flow method
    let mut controller = WizardController::with_method(ImportMethod::Document);
    controller.upload_file(FileKind::Document);
    assert!(controller.proceed_to_edit());
    assert_eq!(controller.state().step, Step::ReviewEdit);
}

#[test]
fn step_metadata_matches_the_indicator() {
    assert_eq!(Step::SelectSource.number(), 1);
    assert_eq!(Step::AddContent.number(), 2);
    assert_eq!(Step::ReviewEdit.number(), 3);
    assert_eq!(Step::SelectSource.title(), "Select Source");
    assert_eq!(Step::AddContent.title(), "Add Content");
    assert_eq!(Step::ReviewEdit.title(), "Review & Edit");
}
