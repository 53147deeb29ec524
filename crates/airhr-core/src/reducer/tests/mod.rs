use pretty_assertions::assert_eq;

pub(super) use super::reduce;
pub(super) use crate::actions::ClipboardOutcome;
pub(super) use crate::actions::RuntimeAction;
pub(super) use crate::actions::ShellAction;
pub(super) use crate::actions::UserAction;
pub(super) use crate::config::FrontendSettings;
pub(super) use crate::config::UiSettings;
pub(super) use crate::reducer::ShellEffect;
pub(super) use crate::state::BrandLogo;
pub(super) use crate::state::CopyPhase;
pub(super) use crate::state::DisclaimerOverlay;
pub(super) use crate::state::GateState;
pub(super) use crate::state::ShareOverlay;
pub(super) use crate::state::ShellState;
pub(super) use crate::store::AppStateSnapshot;
pub(super) use crate::store::CosmosDbHealth;
pub(super) use crate::store::CosmosDbStatus;
pub(super) use crate::store::StoreEvent;

mod disclaimer;
mod share_overlay;

const LOCATION: &str = "https://air-hr.example/chat?session=42";

fn ready_store() -> AppStateSnapshot {
    AppStateSnapshot {
        is_loading: false,
        cosmos_db: CosmosDbHealth {
            cosmos_db: true,
            status: CosmosDbStatus::Working,
        },
        is_chat_history_open: false,
        frontend_settings: FrontendSettings {
            ui: UiSettings {
                show_share_button: true,
                ..UiSettings::default()
            },
        },
    }
}

/// Mounted and launched, with every control offered.
fn state() -> ShellState {
    let mut state = ShellState::mount(LOCATION, 1024, ready_store());
    run_user(&mut state, UserAction::Launch);
    state
}

fn landing_state() -> ShellState {
    ShellState::mount(LOCATION, 1024, ready_store())
}

fn run_user(state: &mut ShellState, action: UserAction) -> Vec<ShellEffect> {
    reduce(state, ShellAction::User(action))
}

fn run_runtime(state: &mut ShellState, action: RuntimeAction) -> Vec<ShellEffect> {
    reduce(state, ShellAction::Runtime(action))
}

/// Stand-in for the external store: applies dispatched events and feeds the result back.
fn settle_dispatches(state: &mut ShellState, effects: &[ShellEffect]) {
    for effect in effects {
        if let ShellEffect::Dispatch(StoreEvent::ToggleChatHistory) = effect {
            let mut next = state.store.clone();
            next.is_chat_history_open = !next.is_chat_history_open;
            run_runtime(state, RuntimeAction::StoreUpdated(next));
        }
    }
}

fn assert_share_closed(state: &ShellState) {
    assert_eq!(state.overlays.share, ShareOverlay::Closed);
    assert_eq!(state.overlays.share.copy_label(), "Copy URL");
}
