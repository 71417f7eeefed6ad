//! Task Card
//!
//! Click to edit, Shift+Enter or blur to finish. A card is both a drag
//! handle and a drop target.

use kanban_core::{DragItem, Id};
use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::context::AppContext;
use crate::store::store_task_content;

#[component]
pub fn TaskCard(
    task_id: Id,
    dnd: DndSignals<DragItem>,
    on_over: Callback<(DragItem, DragItem)>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store;

    let key = DragItem::Task(task_id.clone());
    let on_mousedown = make_on_mousedown(dnd, key.clone());
    let on_mouseover = make_on_mouseover(dnd, key.clone(), move |dragged, target| on_over.run((dragged, target)));
    let on_leave_target = make_on_mouseleave(dnd);
    let key = StoredValue::new(key);

    let id = StoredValue::new(task_id);
    let (edit_mode, set_edit_mode) = signal(false);
    let (mouse_is_over, set_mouse_is_over) = signal(false);
    let content = Signal::derive(move || id.with_value(|id| store_task_content(&store, id)));

    let editor_ref = NodeRef::<leptos::html::Textarea>::new();
    Effect::new(move |_| {
        if let Some(editor) = editor_ref.get() {
            let _ = editor.focus();
        }
    });

    let card_class = move || {
        key.with_value(|key| {
            if dnd.is_dragging(key) {
                "task-card dragging"
            } else if edit_mode.get() {
                "task-card editing"
            } else {
                "task-card"
            }
        })
    };

    let toggle_edit = move |_| {
        if dnd.drag_just_ended_read.get_untracked() {
            return;
        }
        set_edit_mode.update(|e| *e = !*e);
        set_mouse_is_over.set(false);
    };

    let delete = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        id.with_value(|id| ctx.run_and_notify("Task has been deleted", |k| k.delete_task(id)));
    };

    view! {
        <div
            class=card_class
            on:mousedown=on_mousedown
            on:mouseover=on_mouseover
            on:mouseenter=move |_| set_mouse_is_over.set(true)
            on:mouseleave=move |ev| {
                set_mouse_is_over.set(false);
                on_leave_target(ev);
            }
            on:click=toggle_edit
        >
            <Show
                when=move || edit_mode.get()
                fallback=move || view! {
                    <p class="task-content">{content}</p>
                    <Show when=move || mouse_is_over.get() && dnd.dragging_read.with(Option::is_none)>
                        <button class="delete-btn" title="Delete task" on:click=delete>"×"</button>
                    </Show>
                }
            >
                <textarea
                    class="task-editor"
                    placeholder="Task content here"
                    node_ref=editor_ref
                    prop:value=move || content.get()
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        id.with_value(|id| ctx.run(|k| k.update_task(id, &text)));
                    }
                    on:blur=move |_| set_edit_mode.set(false)
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" && ev.shift_key() {
                            set_edit_mode.set(false);
                        }
                    }
                    on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()
                ></textarea>
            </Show>
        </div>
    }
}
