//! SubCategory Panel Component
//!
//! Subcategories of the active category, with an add modal.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::delete_confirm_button::DeleteConfirmButton;
use super::entry_modal::EntryModal;
use super::image_input::release_preview;
use crate::actions::{self, SELECT_CATEGORY_PROMPT};
use crate::api::{self, CacheTag};
use crate::context::use_app_context;
use crate::forms::EntryForm;
use crate::models::{Category, SubCategory};
use crate::notice::{Notice, GENERIC_ERROR};
use crate::store::{
    is_listed, store_apply_subcategories, subcategory_scope, use_admin_store, ActiveCategory,
    AdminStateStoreFields,
};

#[component]
fn SubCategoryCard(sub: SubCategory) -> impl IntoView {
    let ctx = use_app_context();

    let id = sub.id.clone();
    let on_delete = move |_: ()| {
        let api = ctx.api.clone();
        let notifier = ctx.notifier;
        let id = id.clone();
        spawn_local(async move {
            notifier.push(actions::remove_subcategory(&api, &id).await);
        });
    };

    view! {
        <div class="subcategory-card">
            <DeleteConfirmButton button_class="card-delete-btn" on_confirm=on_delete />
            <img class="subcategory-thumb" src=sub.image.clone() alt=sub.name.clone() />
            <p class="subcategory-name">{sub.name.clone()}</p>
        </div>
    }
}

/// Subcategory list scoped to one parent
#[component]
fn SubCategoryList(active: ActiveCategory) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_admin_store();

    let (fetching, set_fetching) = signal(true);
    let (adding, set_adding) = signal(false);
    let (parent, set_parent) = signal::<Option<Category>>(None);
    let show_modal = RwSignal::new(false);
    let form = RwSignal::new(EntryForm::default());

    let parent_id = active.id.clone();

    // Load subcategories when the list is invalidated
    let load_ctx = ctx.clone();
    let load_id = parent_id.clone();
    Effect::new(move |_| {
        load_ctx.track(CacheTag::SubCategories);
        let id = load_id.clone();
        if !is_listed(&store, &id) {
            return;
        }
        let api = load_ctx.api.clone();
        let notifier = load_ctx.notifier;
        spawn_local(async move {
            match api::list_subcategories(&api, &id).await {
                Ok(subs) => {
                    store_apply_subcategories(&store, &id, subs);
                }
                Err(err) if subcategory_scope(&store).as_deref() == Some(id.as_str()) => {
                    log::error!("[SUBCATEGORY] list for {} failed: {}", id, err);
                    notifier.push(Notice::error(GENERIC_ERROR));
                }
                Err(err) => log::debug!("[SUBCATEGORY] ignoring failure for inactive {}: {}", id, err),
            }
            set_fetching.try_set(false);
        });
    });

    // Parent details for the header
    let details_ctx = ctx.clone();
    let details_id = parent_id.clone();
    Effect::new(move |_| {
        details_ctx.track(CacheTag::Categories);
        let id = details_id.clone();
        if !is_listed(&store, &id) {
            return;
        }
        let api = details_ctx.api.clone();
        spawn_local(async move {
            match api::get_category(&api, &id).await {
                Ok(category) => {
                    set_parent.try_set(Some(category));
                }
                Err(err) => log::warn!("[SUBCATEGORY] details for {} unavailable: {}", id, err),
            }
        });
    });

    let fallback_name = active.name.clone();
    let title = move || {
        let name = parent
            .with(|p| p.as_ref().map(|c| c.name.clone()))
            .unwrap_or_else(|| fallback_name.clone());
        format!("Sub Category {}", name)
    };
    let parent_image = move || {
        parent
            .with(|p| p.as_ref().map(|c| c.image.clone()))
            .filter(|src| !src.is_empty())
    };

    let open_modal = move |_| {
        form.update(|f| release_preview(f.image.as_ref()));
        form.set(EntryForm::default());
        show_modal.set(true);
    };

    let close = move || {
        form.update(|f| release_preview(f.image.as_ref()));
        form.set(EntryForm::default());
        show_modal.set(false);
    };

    let save_ctx = ctx.clone();
    let on_save = move |_: ()| {
        if adding.get_untracked() {
            return;
        }
        let api = save_ctx.api.clone();
        let notifier = save_ctx.notifier;
        let id = parent_id.clone();
        let current_form = form.get_untracked();
        set_adding.set(true);
        spawn_local(async move {
            let notice = actions::add_subcategory(&api, Some(&id), &current_form).await;
            set_adding.set(false);
            if notice.is_success() {
                close();
            }
            notifier.push(notice);
        });
    };

    view! {
        <div class="subcategory-header">
            <div class="subcategory-title">
                {move || parent_image().map(|src| view! { <img class="parent-thumb" src=src alt="" /> })}
                <h2>{title}</h2>
            </div>
            <button class="add-btn" on:click=open_modal>"+ Add Sub Category"</button>
        </div>

        <Show
            when=move || !fetching.get()
            fallback=|| view! { <p class="loading">"Loading..."</p> }
        >
            <div class="subcategory-grid">
                <For
                    each=move || store.subcategories().get()
                    key=|sub| (sub.id.clone(), sub.name.clone(), sub.image.clone())
                    children=|sub| view! { <SubCategoryCard sub=sub /> }
                />
            </div>
        </Show>

        <Show when=move || show_modal.get()>
            <EntryModal
                title="Add Sub Category"
                name_label="Sub Category Name"
                image_label="Sub Category Image"
                placeholder="Enter sub category name"
                submit_label="Add Sub Category"
                busy_label="Adding..."
                form=form
                busy=adding
                on_submit=on_save.clone()
                on_cancel=move |_: ()| close()
            />
        </Show>
    }
}

#[component]
pub fn SubCategoryPanel() -> impl IntoView {
    let store = use_admin_store();

    view! {
        <section class="subcategory-panel">
            {move || match store.active().get() {
                Some(active) => view! { <SubCategoryList active=active /> }.into_any(),
                None => view! { <p class="select-prompt">{SELECT_CATEGORY_PROMPT}</p> }.into_any(),
            }}
        </section>
    }
}
