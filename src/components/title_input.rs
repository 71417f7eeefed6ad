//! Inline Title Input
//!
//! Single-line editor that commits on every keystroke and closes on
//! Enter or blur.

use leptos::prelude::*;

#[component]
pub fn TitleInput(
    value: Signal<String>,
    on_input: Callback<String>,
    on_done: Callback<()>,
) -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // Focus once mounted
    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    view! {
        <input
            type="text"
            class="title-input"
            node_ref=input_ref
            prop:value=move || value.get()
            on:input=move |ev| on_input.run(event_target_value(&ev))
            on:blur=move |_| on_done.run(())
            on:keydown=move |ev: web_sys::KeyboardEvent| {
                if ev.key() == "Enter" {
                    on_done.run(());
                }
            }
            on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()
        />
    }
}
