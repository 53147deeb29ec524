use std::sync::Arc;

use super::store::AppStateSnapshot;

#[derive(Debug, Clone)]
pub enum ShellAction {
    User(UserAction),
    Runtime(RuntimeAction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    Launch,
    OpenShare,
    CopyShareUrl,
    DismissShare,
    OpenDisclaimer,
    DismissDisclaimer,
    ToggleChatHistory,
}

impl UserAction {
    pub fn label(self) -> &'static str {
        match self {
            Self::Launch => "launch",
            Self::OpenShare => "open-share",
            Self::CopyShareUrl => "copy-share-url",
            Self::DismissShare => "dismiss-share",
            Self::OpenDisclaimer => "open-disclaimer",
            Self::DismissDisclaimer => "dismiss-disclaimer",
            Self::ToggleChatHistory => "toggle-chat-history",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardOutcome {
    Written,
    Failed { reason: Arc<str> },
}

#[derive(Debug, Clone)]
pub enum RuntimeAction {
    ViewportResized {
        width_px: u32,
    },
    StoreUpdated(AppStateSnapshot),
    /// Completion of an earlier `WriteClipboard` effect. May arrive after the panel closed.
    ClipboardWriteFinished {
        request_id: u64,
        outcome: ClipboardOutcome,
    },
}
