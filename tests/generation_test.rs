use std::time::Duration;

use lesson_import::wizard::controller::WizardController;
use lesson_import::wizard::state::{FileKind, GenerationPhase, ImportMethod, Step, WizardState};
use lesson_import::wizard::timer::{GenerationTimer, GENERATION_DELAY};
use pretty_assertions::assert_eq;
use tokio::sync::mpsc;
use tokio::task::yield_now;
use tokio::time::advance;

fn ready_controller() -> WizardController {
    let mut controller = WizardController::with_method(ImportMethod::TypeOrPaste);
    controller.report_content_ready(true);
    controller
}

#[test]
fn generation_requires_ready_content() {
    let mut controller = WizardController::with_method(ImportMethod::TypeOrPaste);
    assert!(controller.request_generation().is_none());
    assert_eq!(controller.state().generation_phase, GenerationPhase::Idle);

    let mut controller = WizardController::new();
    assert!(controller.request_generation().is_none());
}

#[test]
fn reentrant_generation_requests_are_rejected() {
    let mut controller = ready_controller();
    let token = controller.request_generation().expect("first request");
    assert!(controller.state().is_generating());
    assert!(controller.request_generation().is_none());

    assert!(controller.finish_generation(token));
    assert_eq!(*controller.state(), WizardState::default());
}

#[test]
fn navigation_and_uploads_freeze_while_generating() {
    let mut controller = WizardController::with_method(ImportMethod::AudioFile);
    controller.upload_file(FileKind::Audio);
    assert!(controller.proceed_to_edit());
    let token = controller.request_generation().expect("request accepted");

    use lesson_import::wizard::controller::BackOutcome;
    assert_eq!(controller.go_back(), BackOutcome::Stayed);
    controller.delete_file();
    assert!(controller.state().uploaded_file.is_some());
    assert_eq!(controller.state().step, Step::ReviewEdit);

    assert!(controller.finish_generation(token));
}

#[test]
fn completed_generation_resets_the_whole_wizard() {
    let mut controller = WizardController::with_method(ImportMethod::Document);
    controller.upload_file(FileKind::Document);
    assert!(controller.proceed_to_edit());
    let token = controller.request_generation().expect("request accepted");

    assert!(controller.finish_generation(token));
    let state = controller.state();
    assert_eq!(state.step, Step::SelectSource);
    assert_eq!(state.selected_method, None);
    assert!(!state.content_ready);
    assert_eq!(state.uploaded_file, None);
    assert_eq!(state.generation_phase, GenerationPhase::Idle);
}

#[test]
fn stale_tokens_never_mutate_a_later_session() {
    let mut controller = ready_controller();
    let old = controller.request_generation().expect("first session");
    assert!(controller.finish_generation(old));

    // A new session starts; the old token must be inert now.
    controller.select_method(ImportMethod::TypeOrPaste);
    controller.report_content_ready(true);
    assert!(!controller.finish_generation(old));
    assert_eq!(controller.state().step, Step::AddContent);

    // Even while a fresh generation is in flight
    let fresh = controller.request_generation().expect("second session");
    assert!(!controller.finish_generation(old));
    assert!(controller.state().is_generating());
    assert!(controller.finish_generation(fresh));
    assert_eq!(*controller.state(), WizardState::default());
}

#[tokio::test(start_paused = true)]
async fn timer_fires_once_after_the_fixed_delay() {
    let mut controller = ready_controller();
    let token = controller.request_generation().expect("request accepted");

    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut timer = GenerationTimer::new();
    timer.start(token, tx);
    yield_now().await;
    assert!(timer.is_running());

    advance(GENERATION_DELAY - Duration::from_millis(1)).await;
    yield_now().await;
    assert!(rx.try_recv().is_err());

    advance(Duration::from_millis(1)).await;
    let fired = rx.recv().await.expect("timer completion");
    assert_eq!(fired, token);
    assert!(controller.finish_generation(fired));
    assert_eq!(*controller.state(), WizardState::default());

    // The task is done; nothing else arrives.
    assert_eq!(rx.recv().await, None);
}

#[tokio::test(start_paused = true)]
async fn rapid_double_request_runs_exactly_one_cycle() {
    let mut controller = ready_controller();
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut timer = GenerationTimer::new();

    let token = controller.request_generation().expect("first request");
    timer.start(token, tx.clone());
    // Second press while the first cycle is in flight
    assert!(controller.request_generation().is_none());
    drop(tx);

    advance(GENERATION_DELAY).await;
    let fired = rx.recv().await.expect("exactly one completion");
    assert!(controller.finish_generation(fired));
    assert_eq!(*controller.state(), WizardState::default());

    // Re-applying the same completion is stale, and nothing else arrives
    assert!(!controller.finish_generation(fired));
    assert_eq!(rx.recv().await, None);
}

#[tokio::test(start_paused = true)]
async fn restarting_the_timer_supersedes_the_previous_cycle() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut timer = GenerationTimer::new();

    let mut first_session = ready_controller();
    let first = first_session.request_generation().expect("first token");
    timer.start(first, tx.clone());
    yield_now().await;

    // The session is torn down and a new one starts before the delay ends
    let mut second_session = ready_controller();
    let second = second_session.request_generation().expect("second token");
    timer.start(second, tx.clone());
    drop(tx);
    yield_now().await;

    advance(GENERATION_DELAY).await;
    let fired = rx.recv().await.expect("one completion");
    assert_eq!(fired, second);
    assert!(second_session.finish_generation(fired));

    // The aborted first cycle delivers nothing; the abandoned session just
    // never hears back
    assert_eq!(rx.recv().await, None);
    assert!(first_session.state().is_generating());
}

#[tokio::test(start_paused = true)]
async fn cancelled_timer_delivers_nothing() {
    let controller_token = ready_controller().request_generation().expect("token");
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut timer = GenerationTimer::new();
    timer.start(controller_token, tx);
    yield_now().await;

    timer.cancel();
    yield_now().await;
    assert!(!timer.is_running());

    advance(GENERATION_DELAY * 2).await;
    yield_now().await;
    assert_eq!(rx.recv().await, None);
}

#[tokio::test(start_paused = true)]
async fn dropping_the_timer_aborts_the_in_flight_cycle() {
    let token = ready_controller().request_generation().expect("token");
    let (tx, mut rx) = mpsc::unbounded_channel();
    {
        let mut timer = GenerationTimer::new();
        timer.start(token, tx);
        yield_now().await;
    }
    yield_now().await;

    advance(GENERATION_DELAY * 2).await;
    assert_eq!(rx.recv().await, None);
}
