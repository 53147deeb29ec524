//! Boundary with the externally owned application store.
//!
//! The shell only ever sees an [`AppStateSnapshot`] handed to it by the host, and it only ever
//! writes by sending a [`StoreEvent`] through a [`StoreBridge`].

use std::sync::mpsc;

use serde::{Deserialize, Serialize};

use crate::config::FrontendSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CosmosDbStatus {
    #[default]
    NotConfigured,
    NotWorking,
    InvalidCredentials,
    InvalidDatabase,
    InvalidContainer,
    Working,
}

impl CosmosDbStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::NotConfigured => "CosmosDB is not configured",
            Self::NotWorking => "CosmosDB is not working",
            Self::InvalidCredentials => "CosmosDB has invalid credentials",
            Self::InvalidDatabase => "CosmosDB has invalid database name",
            Self::InvalidContainer => "CosmosDB has invalid container name",
            Self::Working => "CosmosDB is configured and working",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CosmosDbHealth {
    pub cosmos_db: bool,
    pub status: CosmosDbStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppStateSnapshot {
    pub is_loading: bool,
    pub cosmos_db: CosmosDbHealth,
    pub is_chat_history_open: bool,
    pub frontend_settings: FrontendSettings,
}

impl Default for AppStateSnapshot {
    fn default() -> Self {
        Self {
            is_loading: true,
            cosmos_db: CosmosDbHealth::default(),
            is_chat_history_open: false,
            frontend_settings: FrontendSettings::default(),
        }
    }
}

impl AppStateSnapshot {
    /// History storage must be configured and the UI flag must not be switched off.
    pub fn offers_history_control(&self) -> bool {
        self.cosmos_db.status != CosmosDbStatus::NotConfigured
            && self.frontend_settings.ui.show_chat_history_button
    }

    pub fn offers_share_control(&self) -> bool {
        self.frontend_settings.ui.show_share_button
    }
}

/// The only message the shell may send into the application store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum StoreEvent {
    #[serde(rename = "TOGGLE_CHAT_HISTORY")]
    ToggleChatHistory,
}

#[derive(Debug, Clone)]
pub struct StoreBridge {
    outbound: mpsc::Sender<StoreEvent>,
}

impl StoreBridge {
    pub fn new(outbound: mpsc::Sender<StoreEvent>) -> Self {
        Self { outbound }
    }

    pub fn channel() -> (Self, mpsc::Receiver<StoreEvent>) {
        let (tx, rx) = mpsc::channel();
        (Self::new(tx), rx)
    }

    /// Returns `false` when the store side has gone away; the event is dropped.
    pub fn dispatch(&self, event: StoreEvent) -> bool {
        match self.outbound.send(event) {
            Ok(()) => {
                tracing::debug!(?event, "dispatched store event");
                true
            }
            Err(_) => {
                tracing::warn!(?event, "store channel closed; event dropped");
                false
            }
        }
    }
}
