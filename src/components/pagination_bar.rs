//! Pagination Bar Component
//!
//! Previous / page numbers / Next controls for the category list.

use leptos::prelude::*;

use crate::listing::{has_next, has_previous, page_numbers, shows_pagination};
use crate::store::{store_set_page, use_admin_store, AdminStateStoreFields};

#[component]
pub fn PaginationBar() -> impl IntoView {
    let store = use_admin_store();

    move || {
        let total = store.total_pages().get();
        shows_pagination(total).then(|| {
            view! {
                <div class="pagination-bar">
                    <button
                        class="page-nav-btn"
                        disabled=move || !has_previous(store.page().get())
                        on:click=move |_| store_set_page(&store, store.page().get_untracked().saturating_sub(1))
                    >
                        "Previous"
                    </button>

                    {page_numbers(total).map(|number| view! {
                        <button
                            class=move || if store.page().get() == number { "page-btn active" } else { "page-btn" }
                            on:click=move |_| store_set_page(&store, number)
                        >
                            {number}
                        </button>
                    }).collect_view()}

                    <button
                        class="page-nav-btn"
                        disabled=move || !has_next(store.page().get(), total)
                        on:click=move |_| store_set_page(&store, store.page().get_untracked() + 1)
                    >
                        "Next"
                    </button>
                </div>
            }
        })
    }
}
