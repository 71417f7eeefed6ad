//! Board View Component
//!
//! Columns of the selected board side by side. Owns the drag session shared
//! by its columns and task cards: tasks move while hovering, columns move
//! on release.

use kanban_core::{DragItem, DragPhase};
use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::components::ColumnContainer;
use crate::context::AppContext;
use crate::models::ToastKind;
use crate::store::{store_board_title, AppStateStoreFields};

#[component]
pub fn BoardView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store;

    let dnd = create_dnd_signals::<DragItem>(ctx.config.with_value(|c| c.drag_threshold_px));
    bind_global_mouseup(dnd, move |dragged, target| {
        log::debug!("[BOARD] Drop {:?} onto {:?}", dragged, target);
        ctx.run(|k| k.apply_drag(&dragged, &target, DragPhase::End));
    });
    let on_over = Callback::new(move |(dragged, target): (DragItem, DragItem)| {
        ctx.run(|k| k.apply_drag(&dragged, &target, DragPhase::Over));
    });

    let board_title = move || {
        store
            .selected_board_id()
            .with(|s| s.as_ref().map(|id| store_board_title(&store, id)))
            .unwrap_or_default()
    };

    let add_column = move |_| {
        if let Some(Some(column)) = ctx.run(|k| k.create_column()) {
            log::info!("[BOARD] Created column {}", column.id);
            ctx.notify(ToastKind::Success, "Column has been created");
        }
    };

    view! {
        <Show
            when=move || store.selected_board_id().with(Option::is_some)
            fallback=|| view! {
                <div class="empty-board-message">"Select a board or create a new one to start!"</div>
            }
        >
            <section class="board">
                <h1 class="board-title">{board_title}</h1>
                <div class="column-list">
                    <For
                        each=move || store.columns().get()
                        key=|column| column.id.clone()
                        children=move |column| view! {
                            <ColumnContainer column_id=column.id dnd=dnd on_over=on_over />
                        }
                    />
                    <button class="add-column-btn" on:click=add_column>"+ Add Column"</button>
                </div>
            </section>
        </Show>
    }
}
