/// Viewports narrower than this get the compact label set.
pub const COMPACT_BREAKPOINT_PX: u32 = 480;

pub const SHARE_LABEL: &str = "Share";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryLabels {
    pub show: &'static str,
    pub hide: &'static str,
}

impl HistoryLabels {
    pub const COMPACT: Self = Self {
        show: "Show history",
        hide: "Hide history",
    };

    pub const FULL: Self = Self {
        show: "Show chat history",
        hide: "Hide chat history",
    };

    /// Label for the toggle given the store's current panel visibility.
    pub fn for_panel(self, history_open: bool) -> &'static str {
        if history_open {
            self.hide
        } else {
            self.show
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelSet {
    /// `None` means the share control renders icon-only.
    pub share: Option<&'static str>,
    pub history: HistoryLabels,
}

pub fn derive_labels(width_px: u32) -> LabelSet {
    if width_px < COMPACT_BREAKPOINT_PX {
        LabelSet {
            share: None,
            history: HistoryLabels::COMPACT,
        }
    } else {
        LabelSet {
            share: Some(SHARE_LABEL),
            history: HistoryLabels::FULL,
        }
    }
}
