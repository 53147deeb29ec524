use super::*;
use pretty_assertions::assert_eq;

#[test]
fn open_and_dismiss_flip_directly() {
    let mut state = state();

    assert_eq!(
        run_user(&mut state, UserAction::OpenDisclaimer),
        vec![ShellEffect::RequestFrame]
    );
    assert_eq!(state.overlays.disclaimer, DisclaimerOverlay::Open);

    assert_eq!(
        run_user(&mut state, UserAction::DismissDisclaimer),
        vec![ShellEffect::RequestFrame]
    );
    assert_eq!(state.overlays.disclaimer, DisclaimerOverlay::Closed);

    assert!(run_user(&mut state, UserAction::DismissDisclaimer).is_empty());
}

#[test]
fn disclaimer_does_not_disturb_share_panel() {
    let mut state = state();
    run_user(&mut state, UserAction::OpenShare);
    run_user(&mut state, UserAction::CopyShareUrl);
    let share_before = state.overlays.share;

    run_user(&mut state, UserAction::OpenDisclaimer);
    assert_eq!(state.overlays.share, share_before);
    run_user(&mut state, UserAction::DismissDisclaimer);
    assert_eq!(state.overlays.share, share_before);
}

#[test]
fn share_panel_does_not_disturb_disclaimer() {
    let mut state = state();
    run_user(&mut state, UserAction::OpenDisclaimer);

    for action in [
        UserAction::OpenShare,
        UserAction::CopyShareUrl,
        UserAction::DismissShare,
    ] {
        run_user(&mut state, action);
        assert_eq!(state.overlays.disclaimer, DisclaimerOverlay::Open);
    }

    run_user(&mut state, UserAction::DismissDisclaimer);
    run_user(&mut state, UserAction::OpenShare);
    assert_eq!(state.overlays.disclaimer, DisclaimerOverlay::Closed);
}

#[test]
fn disclaimer_is_offered_without_any_store_flags() {
    let mut state = ShellState::mount(LOCATION, 320, AppStateSnapshot::default());
    run_user(&mut state, UserAction::Launch);
    run_user(&mut state, UserAction::OpenDisclaimer);
    assert!(state.overlays.disclaimer.is_open());
}
