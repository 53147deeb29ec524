use std::sync::Arc;

use super::config::UiSettings;
use super::labels::derive_labels;
use super::labels::LabelSet;
use super::store::AppStateSnapshot;

pub const DEFAULT_LOGO: &str = "assets/Contoso.svg";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Landing,
    Shell,
}

impl GateState {
    pub fn label(self) -> &'static str {
        match self {
            Self::Landing => "landing",
            Self::Shell => "shell",
        }
    }

    /// Opening the gate is one-way; there is no transition back to `Landing`.
    pub fn launch(self) -> Self {
        Self::Shell
    }

    pub fn is_open(self) -> bool {
        matches!(self, Self::Shell)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyPhase {
    Idle,
    Copied,
}

impl CopyPhase {
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "Copy URL",
            Self::Copied => "Copied URL",
        }
    }
}

/// The copy phase lives inside `Open`, so closing the panel discards it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOverlay {
    Closed,
    Open { copy: CopyPhase },
}

impl ShareOverlay {
    pub fn open(self) -> Self {
        match self {
            Self::Closed => Self::Open {
                copy: CopyPhase::Idle,
            },
            open @ Self::Open { .. } => open,
        }
    }

    pub fn copied(self) -> Self {
        match self {
            Self::Open { .. } => Self::Open {
                copy: CopyPhase::Copied,
            },
            Self::Closed => Self::Closed,
        }
    }

    pub fn dismiss(self) -> Self {
        Self::Closed
    }

    pub fn is_open(self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub fn copy_phase(self) -> Option<CopyPhase> {
        match self {
            Self::Open { copy } => Some(copy),
            Self::Closed => None,
        }
    }

    pub fn copy_label(self) -> &'static str {
        self.copy_phase().unwrap_or(CopyPhase::Idle).label()
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::Open {
                copy: CopyPhase::Idle,
            } => "open/idle",
            Self::Open {
                copy: CopyPhase::Copied,
            } => "open/copied",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisclaimerOverlay {
    Closed,
    Open,
}

impl DisclaimerOverlay {
    pub fn open(self) -> Self {
        Self::Open
    }

    pub fn dismiss(self) -> Self {
        Self::Closed
    }

    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::Open => "open",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrandLogo {
    /// The store has not finished loading yet.
    Pending,
    Custom(Arc<str>),
    Default,
}

impl BrandLogo {
    pub fn resolve(ui: &UiSettings) -> Self {
        match ui.custom_logo() {
            Some(logo) => Self::Custom(logo.into()),
            None => Self::Default,
        }
    }

    pub fn source(&self) -> Option<&str> {
        match self {
            Self::Pending => None,
            Self::Custom(url) => Some(url.as_ref()),
            Self::Default => Some(DEFAULT_LOGO),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: Arc<str>,
}

impl Notice {
    pub fn new(message: impl Into<Arc<str>>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellOverlays {
    pub share: ShareOverlay,
    pub disclaimer: DisclaimerOverlay,
}

impl Default for ShellOverlays {
    fn default() -> Self {
        Self {
            share: ShareOverlay::Closed,
            disclaimer: DisclaimerOverlay::Closed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width_px: u32,
}

#[derive(Debug, Clone)]
pub struct ShellState {
    pub gate: GateState,
    pub overlays: ShellOverlays,
    pub viewport: Viewport,
    pub store: AppStateSnapshot,
    pub logo: BrandLogo,
    /// Current location; the share panel shows and copies it verbatim.
    pub location: Arc<str>,
    pub notice: Option<Notice>,
    pub copy_requests: u64,
}

impl ShellState {
    pub fn mount(location: impl Into<Arc<str>>, width_px: u32, store: AppStateSnapshot) -> Self {
        let logo = if store.is_loading {
            BrandLogo::Pending
        } else {
            BrandLogo::resolve(&store.frontend_settings.ui)
        };
        Self {
            gate: GateState::Landing,
            overlays: ShellOverlays::default(),
            viewport: Viewport { width_px },
            store,
            logo,
            location: location.into(),
            notice: None,
            copy_requests: 0,
        }
    }

    /// Derived on every call; labels are never cached on the state.
    pub fn labels(&self) -> LabelSet {
        derive_labels(self.viewport.width_px)
    }

    pub fn history_label(&self) -> &'static str {
        self.labels()
            .history
            .for_panel(self.store.is_chat_history_open)
    }

    pub fn ui(&self) -> &UiSettings {
        &self.store.frontend_settings.ui
    }
}
