//! Toaster Component
//!
//! Stack of transient notices in the corner of the screen.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn Toaster() -> impl IntoView {
    let notifier = use_app_context().notifier;

    view! {
        <div class="toaster">
            <For
                each=move || notifier.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=toast.notice.level.css_class()
                            on:click=move |_| notifier.dismiss(id)
                        >
                            {toast.notice.text}
                        </div>
                    }
                }
            />
        </div>
    }
}
