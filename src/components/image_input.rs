//! Image Input Component
//!
//! File picker that turns the chosen image into a pending upload with a
//! local preview.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, HtmlInputElement, Url};

use crate::api::FilePart;
use crate::context::use_app_context;
use crate::error::ApiResult;
use crate::forms::{EntryForm, ImageRef};
use crate::notice::{Notice, GENERIC_ERROR};

/// Read a picked file into memory and give it an object URL for previewing
async fn read_image(file: File) -> ApiResult<ImageRef> {
    let buffer = JsFuture::from(file.array_buffer()).await?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    let preview_url = Url::create_object_url_with_blob(&file)?;

    Ok(ImageRef::Pending {
        file: FilePart {
            file_name: file.name(),
            mime: file.type_(),
            bytes,
        },
        preview_url,
    })
}

/// Free the object URL held by a pending image
pub fn release_preview(image: Option<&ImageRef>) {
    if let Some(ImageRef::Pending { preview_url, .. }) = image {
        let _ = Url::revoke_object_url(preview_url);
    }
}

#[component]
pub fn ImageInput(
    #[prop(into)] label: String,
    form: RwSignal<EntryForm>,
) -> impl IntoView {
    let notifier = use_app_context().notifier;

    let on_change = move |ev: web_sys::Event| {
        let Some(input) = ev.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        spawn_local(async move {
            match read_image(file).await {
                Ok(image) => form.update(|f| {
                    let previous = f.image.replace(image);
                    release_preview(previous.as_ref());
                }),
                Err(err) => {
                    log::error!("[IMAGE] failed to read file: {}", err);
                    notifier.push(Notice::error(GENERIC_ERROR));
                }
            }
        });
    };

    let preview = move || {
        form.with(|f| f.image.as_ref().map(|image| image.preview_url().to_string()))
            .filter(|src| !src.is_empty())
    };

    view! {
        <label class="form-label">{label}</label>
        <input type="file" accept="image/*" class="form-input" on:change=on_change />
        {move || preview().map(|src| view! {
            <img class="image-preview" src=src alt="Preview" />
        })}
    }
}
