//! Category Panel Component
//!
//! Searchable, paginated category grid with add/edit modal.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::delete_confirm_button::DeleteConfirmButton;
use super::entry_modal::EntryModal;
use super::image_input::release_preview;
use super::pagination_bar::PaginationBar;
use crate::actions;
use crate::api::{self, CacheTag};
use crate::context::use_app_context;
use crate::forms::{EntryForm, FormMode};
use crate::listing::filter_by_name;
use crate::models::Category;
use crate::notice::{Notice, GENERIC_ERROR};
use crate::store::{store_apply_category_page, store_select_category, use_admin_store, AdminStateStoreFields};

/// Single category tile
#[component]
fn CategoryCard(
    category: Category,
    mode: RwSignal<FormMode>,
    form: RwSignal<EntryForm>,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_admin_store();

    let id = category.id.clone();
    let is_active = move || store.active().with(|active| active.as_ref().map(|a| a.id == id).unwrap_or(false));

    let edit_target = category.clone();
    let on_edit = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        form.set(EntryForm::from_category(&edit_target));
        mode.set(FormMode::Editing(edit_target.clone()));
    };

    let delete_id = category.id.clone();
    let on_delete = move |_: ()| {
        let api = ctx.api.clone();
        let notifier = ctx.notifier;
        let id = delete_id.clone();
        spawn_local(async move {
            notifier.push(actions::remove_category(&api, &id).await);
        });
    };

    let selected = category.clone();

    view! {
        <div class=move || if is_active() { "category-card active" } else { "category-card" }>
            <button class="card-edit-btn" title="Edit" on:click=on_edit>"✎"</button>
            <DeleteConfirmButton button_class="card-delete-btn" on_confirm=on_delete />

            <div class="category-card-body" on:click=move |_| store_select_category(&store, &selected)>
                <div class="category-thumb">
                    <img src=category.image.clone() alt=category.name.clone() />
                </div>
                <h3 class="category-name">{category.name.clone()}</h3>
            </div>
        </div>
    }
}

#[component]
pub fn CategoryPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_admin_store();

    let (loading, set_loading) = signal(true);
    let (saving, set_saving) = signal(false);
    let mode = RwSignal::new(FormMode::Closed);
    let form = RwSignal::new(EntryForm::default());

    // Load categories when the page changes or the list is invalidated
    let load_ctx = ctx.clone();
    Effect::new(move |_| {
        load_ctx.track(CacheTag::Categories);
        let page = store.page().get();
        let api = load_ctx.api.clone();
        let notifier = load_ctx.notifier;
        let limit = load_ctx.config.page_limit;
        spawn_local(async move {
            match api::list_categories(&api, page, limit).await {
                Ok(data) => store_apply_category_page(&store, data),
                Err(err) => {
                    log::error!("[CATEGORY] list page {} failed: {}", page, err);
                    notifier.push(Notice::error(GENERIC_ERROR));
                }
            }
            set_loading.set(false);
        });
    });

    let open_add = move |_| {
        form.update(|f| release_preview(f.image.as_ref()));
        form.set(EntryForm::default());
        mode.set(FormMode::Creating);
    };

    let close = move || {
        form.update(|f| release_preview(f.image.as_ref()));
        form.set(EntryForm::default());
        mode.set(FormMode::Closed);
    };

    let save_ctx = ctx.clone();
    let on_save = move |_: ()| {
        if saving.get_untracked() {
            return;
        }
        let api = save_ctx.api.clone();
        let notifier = save_ctx.notifier;
        let current_mode = mode.get_untracked();
        let current_form = form.get_untracked();
        set_saving.set(true);
        spawn_local(async move {
            let notice = actions::save_category(&api, &current_mode, &current_form).await;
            set_saving.set(false);
            if notice.is_success() {
                close();
            }
            notifier.push(notice);
        });
    };

    let visible = move || {
        let query = store.search().get();
        let categories = store.categories().get();
        filter_by_name(&categories, &query)
            .into_iter()
            .cloned()
            .collect::<Vec<_>>()
    };

    view! {
        <section class="category-panel">
            <div class="panel-header">
                <h2>"Category Management"</h2>
                <div class="panel-actions">
                    <div class="search-box">
                        <span class="search-icon">"🔍"</span>
                        <input
                            type="text"
                            placeholder="Search"
                            prop:value=move || store.search().get()
                            on:input=move |ev| store.search().set(event_target_value(&ev))
                        />
                    </div>
                    <button class="add-btn" on:click=open_add>"+ Add Category"</button>
                </div>
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="loading">"Loading..."</div> }
            >
                <div class="category-grid">
                    <For
                        each=visible
                        key=|category| (category.id.clone(), category.name.clone(), category.image.clone())
                        children=move |category| view! {
                            <CategoryCard category=category mode=mode form=form />
                        }
                    />
                </div>
            </Show>

            <PaginationBar />

            {move || {
                let current = mode.get();
                current.is_open().then(|| {
                    let editing = current.editing_id().is_some();
                    view! {
                        <EntryModal
                            title=if editing { "Edit Category" } else { "Add Category" }
                            name_label="Category Title"
                            image_label="Category Image"
                            submit_label=if editing { "Save Changes" } else { "Add Category" }
                            busy_label=if editing { "Save Changes ..." } else { "Add Category ..." }
                            form=form
                            busy=saving
                            on_submit=on_save.clone()
                            on_cancel=move |_: ()| close()
                        />
                    }
                })
            }}
        </section>
    }
}
