//! App Configuration
//!
//! Read once at startup from the `kanban_config` slot; anything missing or
//! unreadable falls back to the defaults.

use kanban_core::{SlotKey, SlotStore, StorageBackend};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// `log` level name: error, warn, info, debug, trace
    pub log_level: String,
    /// How long a toast stays visible
    pub toast_millis: u32,
    /// Pointer travel before a press turns into a drag
    pub drag_threshold_px: i32,
    /// Whether the board sidebar starts open
    pub sidebar_open: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            toast_millis: 1000,
            drag_threshold_px: leptos_dragdrop::DRAG_THRESHOLD_PX,
            sidebar_open: true,
        }
    }
}

impl AppConfig {
    pub fn load<B: StorageBackend>(backend: B) -> Self {
        SlotStore::new(backend).load(&SlotKey::Config).unwrap_or_default()
    }
}
