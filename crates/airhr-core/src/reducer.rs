use std::sync::Arc;

use tracing::{debug, info, warn};

use super::actions::ClipboardOutcome;
use super::actions::RuntimeAction;
use super::actions::ShellAction;
use super::actions::UserAction;
use super::state::BrandLogo;
use super::state::GateState;
use super::state::Notice;
use super::state::ShellState;
use super::store::AppStateSnapshot;
use super::store::StoreEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellEffect {
    RequestFrame,
    /// Fire-and-forget; completion comes back as `RuntimeAction::ClipboardWriteFinished`.
    WriteClipboard {
        request_id: u64,
        text: Arc<str>,
    },
    Dispatch(StoreEvent),
}

pub fn reduce(state: &mut ShellState, action: ShellAction) -> Vec<ShellEffect> {
    match action {
        ShellAction::User(user) => {
            let notice_cleared = state.notice.take().is_some();
            let mut effects = reduce_user(state, user);
            if notice_cleared && !effects.contains(&ShellEffect::RequestFrame) {
                effects.push(ShellEffect::RequestFrame);
            }
            effects
        }
        ShellAction::Runtime(runtime) => reduce_runtime(state, runtime),
    }
}

fn reduce_user(state: &mut ShellState, action: UserAction) -> Vec<ShellEffect> {
    if state.gate == GateState::Landing && action != UserAction::Launch {
        debug!(action = action.label(), "ignored while landing screen is shown");
        return Vec::new();
    }

    match action {
        UserAction::Launch => {
            if state.gate.is_open() {
                return Vec::new();
            }
            state.gate = state.gate.launch();
            info!(gate = state.gate.label(), "landing gate opened");
            vec![ShellEffect::RequestFrame]
        }
        UserAction::OpenShare => {
            if !state.store.offers_share_control() || state.overlays.share.is_open() {
                return Vec::new();
            }
            state.overlays.share = state.overlays.share.open();
            debug!(share = state.overlays.share.label(), "share overlay opened");
            vec![ShellEffect::RequestFrame]
        }
        UserAction::CopyShareUrl => {
            if !state.overlays.share.is_open() {
                return Vec::new();
            }
            state.copy_requests += 1;
            state.overlays.share = state.overlays.share.copied();
            debug!(request_id = state.copy_requests, "copying share url");
            vec![
                ShellEffect::WriteClipboard {
                    request_id: state.copy_requests,
                    text: Arc::clone(&state.location),
                },
                ShellEffect::RequestFrame,
            ]
        }
        UserAction::DismissShare => {
            if !state.overlays.share.is_open() {
                return Vec::new();
            }
            state.overlays.share = state.overlays.share.dismiss();
            debug!(share = state.overlays.share.label(), "share overlay dismissed");
            vec![ShellEffect::RequestFrame]
        }
        UserAction::OpenDisclaimer => {
            if state.overlays.disclaimer.is_open() {
                return Vec::new();
            }
            state.overlays.disclaimer = state.overlays.disclaimer.open();
            debug!("disclaimer opened");
            vec![ShellEffect::RequestFrame]
        }
        UserAction::DismissDisclaimer => {
            if !state.overlays.disclaimer.is_open() {
                return Vec::new();
            }
            state.overlays.disclaimer = state.overlays.disclaimer.dismiss();
            debug!("disclaimer dismissed");
            vec![ShellEffect::RequestFrame]
        }
        UserAction::ToggleChatHistory => {
            if !state.store.offers_history_control() {
                return Vec::new();
            }
            vec![ShellEffect::Dispatch(StoreEvent::ToggleChatHistory)]
        }
    }
}

fn reduce_runtime(state: &mut ShellState, action: RuntimeAction) -> Vec<ShellEffect> {
    match action {
        RuntimeAction::ViewportResized { width_px } => {
            if state.viewport.width_px == width_px {
                return Vec::new();
            }
            state.viewport.width_px = width_px;
            vec![ShellEffect::RequestFrame]
        }
        RuntimeAction::StoreUpdated(snapshot) => {
            apply_snapshot(state, snapshot);
            vec![ShellEffect::RequestFrame]
        }
        RuntimeAction::ClipboardWriteFinished {
            request_id,
            outcome,
        } => match outcome {
            ClipboardOutcome::Written => {
                debug!(request_id, "clipboard write completed");
                Vec::new()
            }
            ClipboardOutcome::Failed { reason } => {
                warn!(request_id, %reason, "clipboard write failed");
                state.notice = Some(Notice::new(format!("Could not copy URL: {reason}")));
                vec![ShellEffect::RequestFrame]
            }
        },
    }
}

fn apply_snapshot(state: &mut ShellState, snapshot: AppStateSnapshot) {
    let finished_loading = !snapshot.is_loading
        && (state.store.is_loading || state.logo == BrandLogo::Pending);
    state.store = snapshot;
    if finished_loading {
        state.logo = BrandLogo::resolve(&state.store.frontend_settings.ui);
        info!(logo = state.logo.source().unwrap_or_default(), "brand logo resolved");
    }
}

#[cfg(test)]
mod tests;
