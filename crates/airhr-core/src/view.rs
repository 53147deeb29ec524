//! Projection of [`ShellState`] into what a frontend should draw.
//!
//! Frontends never read overlay or gate state directly; they render a [`Screen`]. Controls that
//! are not offered are `None` here rather than disabled, so a renderer cannot show them by
//! accident.

use std::sync::Arc;

use super::content;
use super::content::DisclaimerSection;
use super::content::Partner;
use super::state::GateState;
use super::state::ShellState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Landing(LandingView),
    Shell(ShellView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandingView {
    pub product_name: &'static str,
    pub description: &'static str,
    pub launch_label: &'static str,
    pub collaboration_title: &'static str,
    pub partners: &'static [Partner],
    pub contact: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellView {
    pub header: HeaderView,
    pub content: ContentSlot,
    pub footer: FooterView,
    pub share_dialog: Option<ShareDialogView>,
    pub disclaimer_dialog: Option<DisclaimerDialogView>,
    pub notice: Option<Arc<str>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    /// `None` until the store has finished loading.
    pub logo: Option<Arc<str>>,
    pub title: Arc<str>,
    pub history: Option<ControlView>,
    pub share: Option<ControlView>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlView {
    /// `None` renders the control without text.
    pub label: Option<&'static str>,
}

/// Slot for the routed conversation view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentSlot {
    pub chat_history_open: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterView {
    pub disclaimer_label: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareDialogView {
    pub title: &'static str,
    pub url: Arc<str>,
    pub copy_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisclaimerDialogView {
    pub title: &'static str,
    pub sections: &'static [DisclaimerSection],
    pub confirm_label: &'static str,
}

pub fn project(state: &ShellState) -> Screen {
    match state.gate {
        GateState::Landing => Screen::Landing(landing_view()),
        GateState::Shell => Screen::Shell(shell_view(state)),
    }
}

fn landing_view() -> LandingView {
    LandingView {
        product_name: content::LANDING_PRODUCT_NAME,
        description: content::LANDING_DESCRIPTION,
        launch_label: content::LAUNCH_LABEL,
        collaboration_title: content::COLLABORATION_TITLE,
        partners: content::PARTNERS,
        contact: content::MEDIA_CONTACT,
    }
}

fn shell_view(state: &ShellState) -> ShellView {
    let labels = state.labels();
    let history = state
        .store
        .offers_history_control()
        .then(|| ControlView {
            label: Some(state.history_label()),
        });
    let share = state.store.offers_share_control().then(|| ControlView {
        label: labels.share,
    });

    ShellView {
        header: HeaderView {
            logo: state.logo.source().map(Arc::from),
            title: state.ui().title().into(),
            history,
            share,
        },
        content: ContentSlot {
            chat_history_open: state.store.is_chat_history_open,
        },
        footer: FooterView {
            disclaimer_label: content::DISCLAIMER_LINK_LABEL,
            version: content::APP_VERSION,
        },
        share_dialog: state
            .overlays
            .share
            .is_open()
            .then(|| ShareDialogView {
                title: content::SHARE_DIALOG_TITLE,
                url: Arc::clone(&state.location),
                copy_label: state.overlays.share.copy_label(),
            }),
        disclaimer_dialog: state
            .overlays
            .disclaimer
            .is_open()
            .then(|| DisclaimerDialogView {
                title: content::DISCLAIMER_TITLE,
                sections: content::DISCLAIMER_SECTIONS,
                confirm_label: content::DISCLAIMER_CONFIRM_LABEL,
            }),
        notice: state.notice.as_ref().map(|n| Arc::clone(&n.message)),
    }
}
