//! Toast Host
//!
//! Renders the toast queue; `AppContext::notify` fills and drains it.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::AppStateStoreFields;

#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store;

    view! {
        <div class="toast-host">
            <For
                each=move || store.toasts().with(|t| t.items().to_vec())
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class() on:click=move |_| store.toasts().write().dismiss(id)>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
