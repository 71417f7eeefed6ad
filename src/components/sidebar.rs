//! Board Sidebar
//!
//! Board list with create, select and drag-to-reorder. Clicking the
//! heading returns to the empty "no board" view.

use kanban_core::Id;
use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::components::BoardLabel;
use crate::context::AppContext;
use crate::models::ToastKind;
use crate::store::AppStateStoreFields;

#[component]
pub fn Sidebar(is_open: ReadSignal<bool>, set_is_open: WriteSignal<bool>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store;

    // Boards reorder on release only
    let dnd = create_dnd_signals::<Id>(ctx.config.with_value(|c| c.drag_threshold_px));
    bind_global_mouseup(dnd, move |dragged, target| {
        log::debug!("[SIDEBAR] Drop board {} onto {}", dragged, target);
        ctx.run(|k| k.reorder_boards(&dragged, &target));
    });

    let add_board = move |_| {
        if let Some(board) = ctx.run(|k| k.create_board()) {
            log::info!("[SIDEBAR] Created board {}", board.id);
            ctx.notify(ToastKind::Success, "Board has been created");
        }
    };

    let clear_selection = move |_| {
        ctx.run(|k| k.clear_selection());
    };

    view! {
        <Show
            when=move || is_open.get()
            fallback=move || view! {
                <button class="sidebar-open-btn" title="Open sidebar" on:click=move |_| set_is_open.set(true)>
                    "☰"
                </button>
            }
        >
            <aside class="sidebar">
                <div class="sidebar-header">
                    <h2 class="sidebar-title" on:click=clear_selection>"Kanban Boards"</h2>
                    <button class="sidebar-close-btn" title="Close sidebar" on:click=move |_| set_is_open.set(false)>
                        "«"
                    </button>
                </div>

                <ul class="board-list">
                    <For
                        each=move || store.boards().get()
                        key=|board| board.id.clone()
                        children=move |board| view! { <BoardLabel board_id=board.id dnd=dnd /> }
                    />
                </ul>

                <button class="add-board-btn" on:click=add_board>"+ Add Board"</button>
            </aside>
        </Show>
    }
}
