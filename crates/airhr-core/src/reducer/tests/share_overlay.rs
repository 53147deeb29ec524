use std::sync::Arc;

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn open_copy_dismiss_cycle() {
    let mut state = state();

    let effects = run_user(&mut state, UserAction::OpenShare);
    assert_eq!(effects, vec![ShellEffect::RequestFrame]);
    assert_eq!(
        state.overlays.share,
        ShareOverlay::Open {
            copy: CopyPhase::Idle
        }
    );

    let effects = run_user(&mut state, UserAction::CopyShareUrl);
    assert_eq!(
        effects,
        vec![
            ShellEffect::WriteClipboard {
                request_id: 1,
                text: Arc::from(LOCATION),
            },
            ShellEffect::RequestFrame,
        ]
    );
    assert_eq!(state.overlays.share.copy_label(), "Copied URL");

    run_user(&mut state, UserAction::DismissShare);
    assert_share_closed(&state);

    run_user(&mut state, UserAction::OpenShare);
    assert_eq!(state.overlays.share.copy_label(), "Copy URL");
}

#[test]
fn open_while_open_keeps_copy_phase() {
    let mut state = state();
    run_user(&mut state, UserAction::OpenShare);
    run_user(&mut state, UserAction::CopyShareUrl);

    assert!(run_user(&mut state, UserAction::OpenShare).is_empty());
    assert_eq!(
        state.overlays.share.copy_phase(),
        Some(CopyPhase::Copied)
    );
}

#[test]
fn copy_while_closed_is_ignored() {
    let mut state = state();
    assert!(run_user(&mut state, UserAction::CopyShareUrl).is_empty());
    assert_share_closed(&state);
    assert_eq!(state.copy_requests, 0);
}

#[test]
fn repeated_copy_writes_again_with_new_request_id() {
    let mut state = state();
    run_user(&mut state, UserAction::OpenShare);
    run_user(&mut state, UserAction::CopyShareUrl);
    let effects = run_user(&mut state, UserAction::CopyShareUrl);

    assert!(matches!(
        effects.first(),
        Some(ShellEffect::WriteClipboard { request_id: 2, .. })
    ));
    assert_eq!(state.overlays.share.copy_phase(), Some(CopyPhase::Copied));
}

#[test]
fn copy_never_changes_location() {
    let mut state = state();
    run_user(&mut state, UserAction::OpenShare);
    for _ in 0..3 {
        run_user(&mut state, UserAction::CopyShareUrl);
        assert_eq!(&*state.location, LOCATION);
    }
}

#[test]
fn dismiss_resets_after_every_action_sequence() {
    let alphabet = [
        UserAction::OpenShare,
        UserAction::CopyShareUrl,
        UserAction::DismissShare,
    ];
    let max_len = 6;

    for len in 1..=max_len {
        let combos = alphabet.len().pow(len as u32);
        for mut code in 0..combos {
            let mut state = state();
            let mut sequence = Vec::with_capacity(len);
            for _ in 0..len {
                sequence.push(alphabet[code % alphabet.len()]);
                code /= alphabet.len();
            }

            for action in &sequence {
                run_user(&mut state, *action);
                if *action == UserAction::DismissShare {
                    assert_share_closed(&state);
                }
                if state.overlays.share.copy_phase() == Some(CopyPhase::Copied) {
                    assert!(state.overlays.share.is_open());
                }
            }
            run_user(&mut state, UserAction::DismissShare);
            assert_share_closed(&state);
            run_user(&mut state, UserAction::OpenShare);
            assert_eq!(
                state.overlays.share.copy_phase(),
                Some(CopyPhase::Idle),
                "stale copy label after {sequence:?}"
            );
        }
    }
}

#[test]
fn late_clipboard_completion_does_not_touch_closed_panel() {
    let mut state = state();
    run_user(&mut state, UserAction::OpenShare);
    let effects = run_user(&mut state, UserAction::CopyShareUrl);
    let Some(ShellEffect::WriteClipboard { request_id, .. }) = effects.first().cloned() else {
        panic!("expected a clipboard write");
    };
    run_user(&mut state, UserAction::DismissShare);

    run_runtime(
        &mut state,
        RuntimeAction::ClipboardWriteFinished {
            request_id,
            outcome: ClipboardOutcome::Written,
        },
    );
    assert_share_closed(&state);

    run_runtime(
        &mut state,
        RuntimeAction::ClipboardWriteFinished {
            request_id,
            outcome: ClipboardOutcome::Failed {
                reason: "denied".into(),
            },
        },
    );
    assert_share_closed(&state);
}

#[test]
fn clipboard_failure_keeps_optimistic_label_and_raises_notice() {
    let mut state = state();
    run_user(&mut state, UserAction::OpenShare);
    run_user(&mut state, UserAction::CopyShareUrl);

    let effects = run_runtime(
        &mut state,
        RuntimeAction::ClipboardWriteFinished {
            request_id: 1,
            outcome: ClipboardOutcome::Failed {
                reason: "clipboard unavailable".into(),
            },
        },
    );
    assert_eq!(effects, vec![ShellEffect::RequestFrame]);
    assert_eq!(state.overlays.share.copy_label(), "Copied URL");
    let notice = state.notice.as_ref().expect("notice");
    assert!(notice.message.contains("clipboard unavailable"));

    // Next user action clears the notice even when it is itself a no-op.
    let effects = run_user(&mut state, UserAction::OpenShare);
    assert_eq!(effects, vec![ShellEffect::RequestFrame]);
    assert!(state.notice.is_none());
}

#[test]
fn successful_write_is_silent() {
    let mut state = state();
    run_user(&mut state, UserAction::OpenShare);
    run_user(&mut state, UserAction::CopyShareUrl);
    let effects = run_runtime(
        &mut state,
        RuntimeAction::ClipboardWriteFinished {
            request_id: 1,
            outcome: ClipboardOutcome::Written,
        },
    );
    assert!(effects.is_empty());
    assert!(state.notice.is_none());
}

#[test]
fn share_requires_the_share_control() {
    let mut state = state();
    let mut store = state.store.clone();
    store.frontend_settings.ui.show_share_button = false;
    run_runtime(&mut state, RuntimeAction::StoreUpdated(store));

    assert!(run_user(&mut state, UserAction::OpenShare).is_empty());
    assert_share_closed(&state);
}
