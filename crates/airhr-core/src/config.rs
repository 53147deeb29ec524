use std::sync::Arc;

use serde::{Deserialize, Serialize};

pub const DEFAULT_TITLE: &str = "AIR-hr";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct FrontendSettings {
    pub ui: UiSettings,
}

/// UI configuration record published by the application store.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct UiSettings {
    pub title: Option<Arc<str>>,
    pub logo: Option<Arc<str>>,
    pub show_chat_history_button: bool,
    pub show_share_button: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            title: None,
            logo: None,
            show_chat_history_button: true,
            show_share_button: false,
        }
    }
}

impl UiSettings {
    pub fn title(&self) -> &str {
        non_blank(self.title.as_deref()).unwrap_or(DEFAULT_TITLE)
    }

    pub fn custom_logo(&self) -> Option<&str> {
        non_blank(self.logo.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn absent_fields_take_defaults() {
        let settings: FrontendSettings = serde_json::from_str(r#"{"ui":{}}"#).unwrap();
        assert_eq!(settings.ui, UiSettings::default());
        assert!(settings.ui.show_chat_history_button);
        assert!(!settings.ui.show_share_button);
        assert_eq!(settings.ui.title(), "AIR-hr");
        assert_eq!(settings.ui.custom_logo(), None);
    }

    #[test]
    fn blank_title_and_logo_fall_back() {
        let ui = UiSettings {
            title: Some("  ".into()),
            logo: Some(String::new().into()),
            ..UiSettings::default()
        };
        assert_eq!(ui.title(), DEFAULT_TITLE);
        assert_eq!(ui.custom_logo(), None);
    }

    #[test]
    fn configured_values_are_kept() {
        let settings: FrontendSettings = serde_json::from_str(
            r#"{"ui":{"title":"HR Desk","logo":"https://cdn/logo.png","show_share_button":true}}"#,
        )
        .unwrap();
        assert_eq!(settings.ui.title(), "HR Desk");
        assert_eq!(settings.ui.custom_logo(), Some("https://cdn/logo.png"));
        assert!(settings.ui.show_share_button);
    }
}
