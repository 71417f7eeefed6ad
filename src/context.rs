//! Application Context
//!
//! Shared state provided via Leptos Context API. The engine lives in a
//! local `StoredValue`; every mutation goes through [`AppContext::run`],
//! which copies the result into the reactive store.

use gloo_timers::future::TimeoutFuture;
use kanban_core::{Kanban, StoreResult};
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::config::AppConfig;
use crate::models::ToastKind;
use crate::storage::AppStorage;
use crate::store::{store_apply_snapshot, AppState, AppStateStoreFields, AppStore, Snapshot};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Board engine over the app's storage
    engine: StoredValue<Kanban<AppStorage>, LocalStorage>,
    /// Reactive snapshot of the engine
    pub store: AppStore,
    /// Startup configuration
    pub config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(kanban: Kanban<AppStorage>, config: AppConfig) -> Self {
        let store = Store::new(AppState::new(Snapshot::of(&kanban)));
        Self {
            engine: StoredValue::new_local(kanban),
            store,
            config: StoredValue::new(config),
        }
    }

    /// Apply a mutation and refresh the store
    ///
    /// The in-memory change stays even when persisting fails; the error is
    /// logged and shown as a toast, and `None` is returned.
    pub fn run<R>(&self, action: impl FnOnce(&mut Kanban<AppStorage>) -> StoreResult<R>) -> Option<R> {
        let (result, snapshot) = self.engine.try_update_value(|kanban| {
            let result = action(kanban);
            (result, Snapshot::of(kanban))
        })?;
        store_apply_snapshot(&self.store, snapshot);
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                log::error!("{}", e);
                self.notify(ToastKind::Error, format!("Could not save: {}", e));
                None
            }
        }
    }

    /// Like [`AppContext::run`], with a success toast when `action` reports a change
    pub fn run_and_notify(&self, message: &str, action: impl FnOnce(&mut Kanban<AppStorage>) -> StoreResult<bool>) {
        if self.run(action) == Some(true) {
            self.notify(ToastKind::Success, message);
        }
    }

    /// Show a toast and dismiss it after the configured delay
    pub fn notify(&self, kind: ToastKind, message: impl Into<String>) {
        let id = self.store.toasts().write().push(kind, message.into());
        let store = self.store;
        let millis = self.config.with_value(|c| c.toast_millis);
        spawn_local(async move {
            TimeoutFuture::new(millis).await;
            store.toasts().write().dismiss(id);
        });
    }
}
