//! Entry Modal Component
//!
//! Name + image modal shared by the category and subcategory forms.

use leptos::prelude::*;

use super::image_input::ImageInput;
use crate::forms::EntryForm;

#[component]
pub fn EntryModal(
    title: &'static str,
    name_label: &'static str,
    image_label: &'static str,
    #[prop(optional)] placeholder: &'static str,
    /// Submit button text, and its text while a request is in flight
    submit_label: &'static str,
    busy_label: &'static str,
    form: RwSignal<EntryForm>,
    busy: ReadSignal<bool>,
    #[prop(into)] on_submit: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="modal-backdrop">
            <div class="modal">
                <h3 class="modal-title">{title}</h3>

                <label class="form-label">{name_label}</label>
                <input
                    type="text"
                    class="form-input"
                    placeholder=placeholder
                    prop:value=move || form.with(|f| f.name.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.name = value);
                    }
                />

                <ImageInput label=image_label form=form />

                <button
                    class="submit-btn"
                    disabled=move || busy.get()
                    on:click=move |_| on_submit.run(())
                >
                    {move || if busy.get() { busy_label } else { submit_label }}
                </button>

                <button class="cancel-modal-btn" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
            </div>
        </div>
    }
}
