use std::time::Duration;
use std::time::Instant;

use airhr_core::config::FrontendSettings;
use airhr_core::store::AppStateSnapshot;
use airhr_core::store::CosmosDbHealth;
use airhr_core::store::CosmosDbStatus;
use airhr_core::store::StoreEvent;
use tracing::info;

use crate::config::StoreSettings;

/// In-process stand-in for the application store the shell is embedded in.
///
/// It starts out loading and publishes the configured settings once `load_delay_ms` has
/// passed, so the shell sees the same asynchronous startup it would in a real host.
#[derive(Debug)]
pub struct LocalAppStore {
    snapshot: AppStateSnapshot,
    pending: Option<(Instant, AppStateSnapshot)>,
}

impl LocalAppStore {
    pub fn new(settings: &StoreSettings, now: Instant) -> Self {
        let loaded = AppStateSnapshot {
            is_loading: false,
            cosmos_db: CosmosDbHealth {
                cosmos_db: settings.cosmos_db_status == CosmosDbStatus::Working,
                status: settings.cosmos_db_status,
            },
            is_chat_history_open: settings.chat_history_open,
            frontend_settings: FrontendSettings {
                ui: settings.ui.clone(),
            },
        };
        let ready_at = now + Duration::from_millis(settings.load_delay_ms);
        Self {
            snapshot: AppStateSnapshot::default(),
            pending: Some((ready_at, loaded)),
        }
    }

    pub fn snapshot(&self) -> &AppStateSnapshot {
        &self.snapshot
    }

    /// Returns the new snapshot when loading completes on this call.
    pub fn poll(&mut self, now: Instant) -> Option<AppStateSnapshot> {
        let ready = matches!(&self.pending, Some((ready_at, _)) if now >= *ready_at);
        if !ready {
            return None;
        }
        let (_, loaded) = self.pending.take()?;
        self.snapshot = loaded;
        info!(
            cosmos_db = self.snapshot.cosmos_db.status.label(),
            "application store loaded"
        );
        Some(self.snapshot.clone())
    }

    pub fn apply(&mut self, event: StoreEvent) -> AppStateSnapshot {
        match event {
            StoreEvent::ToggleChatHistory => {
                self.snapshot.is_chat_history_open = !self.snapshot.is_chat_history_open;
                info!(open = self.snapshot.is_chat_history_open, "chat history toggled");
            }
        }
        self.snapshot.clone()
    }
}
