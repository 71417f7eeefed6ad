//! Kanban Frontend App
//!
//! Sidebar with the board list on the left, the selected board on the right.

use kanban_core::Kanban;
use leptos::prelude::*;

use crate::components::{BoardView, Sidebar, ToastHost};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::storage::AppStorage;

#[component]
pub fn App(config: AppConfig, storage: AppStorage) -> impl IntoView {
    let (sidebar_open, set_sidebar_open) = signal(config.sidebar_open);

    let kanban = Kanban::load(storage);
    log::info!(
        "[APP] Loaded {} boards, selected {:?}",
        kanban.boards().len(),
        kanban.selected_board_id()
    );
    provide_context(AppContext::new(kanban, config));

    view! {
        <div class="app-layout">
            <Sidebar is_open=sidebar_open set_is_open=set_sidebar_open />

            <main class=move || if sidebar_open.get() { "main-content with-sidebar" } else { "main-content" }>
                <BoardView />
            </main>

            <ToastHost />
        </div>
    }
}
