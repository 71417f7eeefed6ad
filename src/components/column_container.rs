//! Column Container
//!
//! A column header (drag handle, editable title, delete) above its task
//! cards. The whole container is a drop target so tasks can land in empty
//! columns.

use kanban_core::{DragItem, Id};
use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::components::{TaskCard, TitleInput};
use crate::context::AppContext;
use crate::models::ToastKind;
use crate::store::{store_column_tasks, store_column_title};

#[component]
pub fn ColumnContainer(
    column_id: Id,
    dnd: DndSignals<DragItem>,
    on_over: Callback<(DragItem, DragItem)>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store;

    let key = DragItem::Column(column_id.clone());
    let on_mousedown = make_on_mousedown(dnd, key.clone());
    let on_mouseover = make_on_mouseover(dnd, key.clone(), move |dragged, target| on_over.run((dragged, target)));
    let on_mouseleave = make_on_mouseleave(dnd);
    let key = StoredValue::new(key);

    let id = StoredValue::new(column_id);
    let (edit_mode, set_edit_mode) = signal(false);

    let title = Signal::derive(move || id.with_value(|id| store_column_title(&store, id)));
    let tasks = move || id.with_value(|id| store_column_tasks(&store, id));

    let container_class = move || {
        key.with_value(|key| {
            if dnd.is_dragging(key) {
                "column dragging"
            } else if dnd.is_drop_target(key) {
                "column drop-target"
            } else {
                "column"
            }
        })
    };

    let start_edit = move |_| {
        if !dnd.drag_just_ended_read.get_untracked() {
            set_edit_mode.set(true);
        }
    };

    let rename = Callback::new(move |title: String| {
        id.with_value(|id| ctx.run(|k| k.rename_column(id, &title)));
    });

    let delete = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        id.with_value(|id| ctx.run_and_notify("Column has been deleted", |k| k.delete_column(id)));
    };

    let add_task = move |_| {
        if let Some(Some(task)) = id.with_value(|id| ctx.run(|k| k.create_task(id))) {
            log::debug!("[COLUMN] Created task {}", task.id);
            ctx.notify(ToastKind::Success, "Task has been created");
        }
    };

    view! {
        <div class=container_class on:mouseover=on_mouseover on:mouseleave=on_mouseleave>
            <div class="column-header" on:mousedown=on_mousedown on:click=start_edit>
                <span class="column-count">{move || tasks().len()}</span>
                <Show
                    when=move || edit_mode.get()
                    fallback=move || view! { <span class="column-title">{title}</span> }
                >
                    <TitleInput value=title on_input=rename on_done=Callback::new(move |_| set_edit_mode.set(false)) />
                </Show>
                <button class="delete-btn" title="Delete column" on:click=delete>"×"</button>
            </div>

            <div class="column-body">
                <For
                    each=tasks
                    key=|task| task.id.clone()
                    children=move |task| view! { <TaskCard task_id=task.id dnd=dnd on_over=on_over /> }
                />
            </div>

            <button class="add-task-btn" on:click=add_task>"+ Add Task"</button>
        </div>
    }
}
