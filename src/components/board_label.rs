//! Board Label
//!
//! One row of the sidebar: select on click, rename on double click,
//! delete with the trailing button. Rows are drag handles for reordering.

use kanban_core::Id;
use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::components::TitleInput;
use crate::context::AppContext;
use crate::store::{store_board_title, AppStateStoreFields};

#[component]
pub fn BoardLabel(board_id: Id, dnd: DndSignals<Id>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store;

    let on_mousedown = make_on_mousedown(dnd, board_id.clone());
    let on_mouseover = make_on_mouseover(dnd, board_id.clone(), |_, _| {});
    let on_mouseleave = make_on_mouseleave(dnd);

    let id = StoredValue::new(board_id);
    let (edit_mode, set_edit_mode) = signal(false);

    let title = Signal::derive(move || id.with_value(|id| store_board_title(&store, id)));
    let is_selected = move || id.with_value(|id| store.selected_board_id().with(|s| s.as_ref() == Some(id)));

    let row_class = move || {
        id.with_value(|id| {
            let mut class = String::from("board-label");
            if is_selected() {
                class.push_str(" selected");
            }
            if dnd.is_dragging(id) {
                class.push_str(" dragging");
            }
            if dnd.is_drop_target(id) {
                class.push_str(" drop-target");
            }
            class
        })
    };

    let select = move |_| {
        if dnd.drag_just_ended_read.get_untracked() {
            return;
        }
        id.with_value(|id| ctx.run(|k| k.select_board(id)));
    };

    let rename = Callback::new(move |title: String| {
        id.with_value(|id| ctx.run(|k| k.rename_board(id, &title)));
    });

    let delete = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        id.with_value(|id| ctx.run_and_notify("Board has been deleted", |k| k.delete_board(id)));
    };

    view! {
        <li
            class=row_class
            on:mousedown=on_mousedown
            on:mouseover=on_mouseover
            on:mouseleave=on_mouseleave
            on:click=select
            on:dblclick=move |_| set_edit_mode.set(true)
        >
            <Show
                when=move || edit_mode.get()
                fallback=move || view! { <span class="board-title">{title}</span> }
            >
                <TitleInput value=title on_input=rename on_done=Callback::new(move |_| set_edit_mode.set(false)) />
            </Show>
            <button class="delete-btn" title="Delete board" on:click=delete>"×"</button>
        </li>
    }
}
